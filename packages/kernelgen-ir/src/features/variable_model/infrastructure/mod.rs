//! Variable Model infrastructure

pub mod graph;

pub use graph::Graph;
