//! Shared module - Common types and utilities
//!
//! Types shared across all features. No feature depends on another
//! feature through this module.

pub mod models;

// Re-exports for convenience
pub use models::*;
