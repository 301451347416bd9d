//! Variable Model - the expression graph
//!
//! ## Node kinds
//!
//! ```text
//! Scalar      x                     named leaf, never aliasable
//! Vector      a = [a[0], a[1]]      named grouping, never aliasable
//! Field       a[1]                  aliasable projection
//! Apply       x + y, sqrt(x)        aliasable, rendered by Operator
//! Reduction   [a[0] + a[1], ...]    one chained apply per operand
//! Mapping     [a[0] + x, ...]       elementwise apply with broadcast
//! ```
//!
//! `Output` wraps a node as the terminal `return` statement.

pub mod domain;
pub mod infrastructure;

pub use domain::{Brackets, Materialization, Node, NodeKind, NodeTag, Operator, Output, NEGATE};
pub use infrastructure::Graph;
