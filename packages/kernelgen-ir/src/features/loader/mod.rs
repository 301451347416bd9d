//! Loader boundary - function template and the `DynamicLoader` port

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::compile;
pub use domain::{CompilationUnit, CompileRequest, FunctionTemplate, DEFAULT_CONTEXT};
pub use infrastructure::SourceLoader;
pub use ports::DynamicLoader;
