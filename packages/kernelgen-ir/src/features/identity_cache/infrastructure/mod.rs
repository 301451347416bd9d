//! Identity Cache infrastructure

pub mod cache;

pub use cache::IdentityCache;
