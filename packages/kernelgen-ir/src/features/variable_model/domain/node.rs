//! Expression graph nodes

use super::operator::Operator;
use crate::errors::{BuilderError, Result};
use crate::shared::models::{NodeId, StatementId};

/// Type tag of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeTag {
    Scalar,
    Vector,
    Field,
    Apply,
    Reduction,
    Mapping,
}

impl NodeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeTag::Scalar => "scalar",
            NodeTag::Vector => "vector",
            NodeTag::Field => "field",
            NodeTag::Apply => "apply",
            NodeTag::Reduction => "reduce",
            NodeTag::Mapping => "map",
        }
    }
}

/// Node payload
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Named leaf
    Scalar,

    /// Ordered grouping of components
    Vector {
        components: Vec<NodeId>,
        is_matrix: bool,
    },

    /// `parent[index]`, parent is always a vector
    Field { parent: NodeId, index: usize },

    /// Scalar-valued operation over a flat operand list
    Apply {
        operation: String,
        operator: Operator,
        operands: Vec<NodeId>,
    },

    /// One chained apply per operand vector
    Reduction {
        operation: String,
        operands: Vec<NodeId>,
        components: Vec<NodeId>,
    },

    /// Elementwise apply across operands, length-1 operands broadcast
    Mapping {
        operation: String,
        operands: Vec<NodeId>,
        components: Vec<NodeId>,
    },
}

/// Rendering state of a node
///
/// Transitions: `Inline -> PendingStore -> Materialized` or
/// `Inline -> Materialized`. Named leaves start `Materialized`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Materialization {
    /// Expanded at every use
    Inline,

    /// Target of a store; a further use binds the stored value
    PendingStore(StatementId),

    /// Renders as this name
    Materialized(String),
}

/// Bracket mode of a render request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brackets {
    /// Group nodes that need it
    Auto,
    /// Never group
    Suppress,
}

/// One entry of the expression graph
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub state: Materialization,

    /// May be replaced by a name once reused
    pub aliasable: bool,

    /// Uses counted by the reference tracker
    pub references: usize,
}

impl Node {
    pub fn tag(&self) -> NodeTag {
        match self.kind {
            NodeKind::Scalar => NodeTag::Scalar,
            NodeKind::Vector { .. } => NodeTag::Vector,
            NodeKind::Field { .. } => NodeTag::Field,
            NodeKind::Apply { .. } => NodeTag::Apply,
            NodeKind::Reduction { .. } => NodeTag::Reduction,
            NodeKind::Mapping { .. } => NodeTag::Mapping,
        }
    }

    /// Assigned name, if any
    pub fn name(&self) -> Option<&str> {
        match &self.state {
            Materialization::Materialized(name) => Some(name),
            _ => None,
        }
    }

    /// Components of vector-like nodes; scalar-like nodes have none
    pub fn components(&self) -> Option<&[NodeId]> {
        match &self.kind {
            NodeKind::Vector { components, .. }
            | NodeKind::Reduction { components, .. }
            | NodeKind::Mapping { components, .. } => Some(components),
            _ => None,
        }
    }

    pub fn is_vector(&self) -> bool {
        self.components().is_some()
    }

    pub fn len(&self) -> usize {
        self.components().map_or(1, |c| c.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Component `index`; scalar-like nodes return themselves for any index
    pub fn get(&self, index: usize) -> Result<NodeId> {
        match self.components() {
            None => Ok(self.id),
            Some(components) => {
                components
                    .get(index)
                    .copied()
                    .ok_or(BuilderError::IndexOutOfRange {
                        node: self.id,
                        index,
                        length: components.len(),
                    })
            }
        }
    }

    /// Component `index` with length-1 nodes broadcast to every position
    pub fn broadcast(&self, index: usize) -> Result<NodeId> {
        if self.len() == 1 {
            self.get(0)
        } else {
            self.get(index)
        }
    }
}

/// Terminal `return` statement wrapping one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Output {
    node: NodeId,
}

impl Output {
    pub(crate) fn new(node: NodeId) -> Self {
        Self { node }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// An output is a statement, not an expression
    pub fn source(&self) -> Result<String> {
        Err(BuilderError::Inapplicable)
    }
}
