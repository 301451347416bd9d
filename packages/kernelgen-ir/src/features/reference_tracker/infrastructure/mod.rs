pub mod tracker;

pub use tracker::ReferenceTracker;
