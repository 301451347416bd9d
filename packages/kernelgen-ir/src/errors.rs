//! Error types for kernelgen-ir
//!
//! Every builder failure is a caller-misuse error surfaced immediately.
//! Sink, loader and configuration errors are wrapped unchanged.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::sequencing::ports::SinkError;
use crate::shared::models::NodeId;

/// Main error type for kernelgen-ir operations
#[derive(Debug, Error)]
pub enum BuilderError {
    /// apply/map/reduce called without operands
    #[error("Nothing to {construct}")]
    NothingToOperate { construct: &'static str },

    /// assign target is not a vector
    #[error("Cannot assign to anything but a vector (target {target})")]
    AssignToNonVector { target: NodeId },

    /// Unary operation pattern given several operands
    #[error("Operation '{operation}' takes one operand but got {operands}; use map, not apply")]
    UnaryArity { operation: String, operands: usize },

    /// phi branches disagree on vector-ness
    #[error("Phi branches must both be vectors or both be scalars")]
    PhiShapeMismatch,

    /// Source form requested from an output wrapper
    #[error("Output statements have no source form")]
    Inapplicable,

    /// Component index past the end of a vector-like node
    #[error("Index {index} out of range for {node} of length {length}")]
    IndexOutOfRange {
        node: NodeId,
        index: usize,
        length: usize,
    },

    /// Operand length neither 1 nor the expected length
    #[error("Length mismatch in {operation}: expected {expected}, found {found}")]
    LengthMismatch {
        operation: String,
        expected: usize,
        found: usize,
    },

    /// Node id not owned by this session
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),

    /// Text sink error
    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),

    /// Dynamic loader error
    #[error("Loader error: {0}")]
    Loader(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BuilderError {
    /// Wrap an error raised by a dynamic loader
    pub fn loader(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        BuilderError::Loader(Box::new(err))
    }
}

/// Result type alias for builder operations
pub type Result<T> = std::result::Result<T, BuilderError>;
