//! Name Allocator - identifiers for materialized bindings and phi merges

pub mod domain;
pub mod infrastructure;

pub use domain::{grid_dimension, NamingHint};
pub use infrastructure::{hint_for, NameAllocator};
