//! Shared models used by every feature

pub mod ids;

pub use ids::{NodeId, StatementId};
