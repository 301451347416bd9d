//! Arithmetic infrastructure

pub mod sign_normalizer;

pub use sign_normalizer::normalize;
