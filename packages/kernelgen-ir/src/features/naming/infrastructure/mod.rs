//! Naming infrastructure

pub mod name_allocator;

pub use name_allocator::{hint_for, NameAllocator};
