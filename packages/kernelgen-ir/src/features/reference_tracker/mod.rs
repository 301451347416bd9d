//! Reference Tracker - use counting and materialize-on-second-use

pub mod infrastructure;

pub use infrastructure::ReferenceTracker;
