//! Identity Cache Domain - canonical construction keys

use crate::features::variable_model::NodeTag;
use crate::shared::models::NodeId;

/// Two requests are the same node iff their keys are equal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    pub tag: NodeTag,
    pub operation: String,
    pub operands: Vec<NodeId>,
}

impl IdentityKey {
    pub fn new(tag: NodeTag, operation: &str, operands: &[NodeId]) -> Self {
        Self {
            tag,
            operation: operation.to_string(),
            operands: operands.to_vec(),
        }
    }
}
