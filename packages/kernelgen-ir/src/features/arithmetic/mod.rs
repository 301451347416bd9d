//! Arithmetic Normalizer - sign canonicalization of `+`/`-` chains
//!
//! Only additive chains are touched. There is no constant folding or other
//! algebraic simplification.
//!
//! ```text
//! apply("+", a, negate(b))  ->  a - b
//! apply("-", negate(a), b)  ->  -(a + b)
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{ChainOp, NormalizedChain, Term};
pub use infrastructure::normalize;
