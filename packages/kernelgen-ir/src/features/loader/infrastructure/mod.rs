//! Loader infrastructure

pub mod source_loader;

pub use source_loader::SourceLoader;
