//! Identity Cache - value numbering
//!
//! Structurally identical construction requests return the same node.
//! Reuse is still reported to the reference tracker by the caller.

pub mod domain;
pub mod infrastructure;

pub use domain::IdentityKey;
pub use infrastructure::IdentityCache;
