//! Public builder API
//!
//! `CodeBuilder` is the only entry point clients need; the feature modules
//! behind it are public for inspection and testing.

pub mod code_builder;

pub use code_builder::{CodeBuilder, PhiTest, Terminal, VectorShape};
