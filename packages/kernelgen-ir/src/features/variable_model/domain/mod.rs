//! Variable Model Domain - node kinds, rendering state, operators

pub mod node;
pub mod operator;

pub use node::{Brackets, Materialization, Node, NodeKind, NodeTag, Output};
pub use operator::{Operator, NEGATE};
