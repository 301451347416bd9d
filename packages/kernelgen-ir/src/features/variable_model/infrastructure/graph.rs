// Expression Graph - session-owned node arena and text rendering
//
// Nodes live in one Vec indexed by NodeId; back-references (field -> parent,
// apply -> operands) are ids into the same arena, so the graph has no
// ownership cycles and lives exactly as long as the session.
//
// Rendering is lazy: a node's text is produced on request from the current
// state of its operands, so an operand materialized after its user was built
// still renders as its name.

use tracing::trace;

use crate::errors::{BuilderError, Result};
use crate::features::arithmetic::{normalize, Term};
use crate::features::variable_model::domain::{
    Brackets, Materialization, Node, NodeKind, Operator,
};
use crate::shared::models::NodeId;

/// Unbracketed text of a node plus whether it needs grouping
struct Expansion {
    text: String,
    needs_brackets: bool,
}

impl Expansion {
    fn atom(text: String) -> Self {
        Self {
            text,
            needs_brackets: false,
        }
    }

    fn grouped(text: String) -> Self {
        Self {
            text,
            needs_brackets: true,
        }
    }
}

/// Node arena of one builder session
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Identity count
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Reject ids that this arena did not hand out
    pub fn ensure_known(&self, ids: &[NodeId]) -> Result<()> {
        match ids.iter().find(|id| !self.contains(**id)) {
            Some(id) => Err(BuilderError::UnknownNode(*id)),
            None => Ok(()),
        }
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id.index())
            .ok_or(BuilderError::UnknownNode(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id.index())
            .ok_or(BuilderError::UnknownNode(id))
    }

    /// Register a node; ids are handed out in construction order
    pub(crate) fn register(
        &mut self,
        kind: NodeKind,
        state: Materialization,
        aliasable: bool,
    ) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        let node = Node {
            id,
            kind,
            state,
            aliasable,
            references: 0,
        };
        trace!("register {} {}", node.tag().as_str(), id);
        self.nodes.push(node);
        id
    }

    /// Fill in components registered after their owner
    pub(crate) fn set_components(&mut self, id: NodeId, ids: Vec<NodeId>) -> Result<()> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Vector { components, .. }
            | NodeKind::Reduction { components, .. }
            | NodeKind::Mapping { components, .. } => {
                *components = ids;
                Ok(())
            }
            _ => Err(BuilderError::UnknownNode(id)),
        }
    }

    /// Text of a node: its name if it has one, else its expansion,
    /// grouped when the node needs it and `mode` allows it
    pub fn render(&self, id: NodeId, mode: Brackets) -> Result<String> {
        let node = self.node(id)?;
        if let Some(name) = node.name() {
            return Ok(name.to_string());
        }

        let expansion = self.expand(node)?;
        if expansion.needs_brackets && mode == Brackets::Auto {
            Ok(format!("({})", expansion.text))
        } else {
            Ok(expansion.text)
        }
    }

    /// Store target text of a node
    ///
    /// A field always renders as `parent[index]`, even once it is bound to a
    /// name, so a store reaches the slot rather than the local.
    pub fn render_target(&self, id: NodeId) -> Result<String> {
        match self.node(id)?.kind {
            NodeKind::Field { parent, index } => {
                Ok(format!("{}[{}]", self.render(parent, Brackets::Auto)?, index))
            }
            _ => self.render(id, Brackets::Auto),
        }
    }

    /// Both renderings of a node from a single expansion
    fn term(&self, id: NodeId) -> Result<Term> {
        let node = self.node(id)?;
        if let Some(name) = node.name() {
            return Ok(Term::atom(name));
        }

        let expansion = self.expand(node)?;
        if expansion.needs_brackets {
            let grouped = format!("({})", expansion.text);
            Ok(Term::new(expansion.text, grouped))
        } else {
            Ok(Term::atom(expansion.text))
        }
    }

    fn join(&self, ids: &[NodeId], mode: Brackets, separator: &str) -> Result<String> {
        let parts = ids
            .iter()
            .map(|id| self.render(*id, mode))
            .collect::<Result<Vec<_>>>()?;
        Ok(parts.join(separator))
    }

    fn expand(&self, node: &Node) -> Result<Expansion> {
        match &node.kind {
            NodeKind::Scalar => Ok(Expansion::atom(node.name().unwrap_or_default().to_string())),
            NodeKind::Vector { components, .. }
            | NodeKind::Reduction { components, .. }
            | NodeKind::Mapping { components, .. } => Ok(Expansion::atom(format!(
                "[{}]",
                self.join(components, Brackets::Suppress, ", ")?
            ))),
            NodeKind::Field { parent, index } => Ok(Expansion::atom(format!(
                "{}[{}]",
                self.render(*parent, Brackets::Auto)?,
                index
            ))),
            NodeKind::Apply {
                operator, operands, ..
            } => self.expand_apply(operator, operands),
        }
    }

    fn expand_apply(&self, operator: &Operator, operands: &[NodeId]) -> Result<Expansion> {
        let (first, rest) = operands
            .split_first()
            .ok_or(BuilderError::NothingToOperate { construct: "apply" })?;

        // a lone operand of a binary operator is passed through as is
        if rest.is_empty() && matches!(operator, Operator::AddSub(_) | Operator::Infix(_)) {
            let term = self.term(*first)?;
            return Ok(Expansion {
                needs_brackets: term.plain != term.grouped,
                text: term.plain,
            });
        }

        let expansion = match operator {
            Operator::PropertyAccess(suffix) => {
                Expansion::atom(format!("{}{}", self.render(*first, Brackets::Auto)?, suffix))
            }
            Operator::Negate => {
                let inner = self.render(*first, Brackets::Auto)?;
                match inner.strip_prefix('-') {
                    Some(positive) => Expansion::atom(positive.to_string()),
                    None => Expansion::atom(format!("-{}", inner)),
                }
            }
            Operator::PrefixFunction(op) => {
                Expansion::atom(format!("{} {}", op, self.render(*first, Brackets::Auto)?))
            }
            Operator::MethodCall(method) => Expansion::atom(format!(
                "{}{}({})",
                self.render(*first, Brackets::Auto)?,
                method,
                self.join(rest, Brackets::Suppress, ", ")?
            )),
            Operator::AddSub(op) => {
                let terms = operands
                    .iter()
                    .map(|operand| self.term(*operand))
                    .collect::<Result<Vec<_>>>()?;
                let chain = normalize(*op, &terms);
                Expansion {
                    needs_brackets: chain.needs_brackets(),
                    text: chain.text,
                }
            }
            Operator::Infix(op) => {
                Expansion::grouped(self.join(operands, Brackets::Auto, &format!(" {} ", op))?)
            }
            Operator::ListLiteral => Expansion::atom(format!(
                "[{}]",
                self.join(operands, Brackets::Suppress, ", ")?
            )),
            Operator::FunctionCall(function) => Expansion::atom(format!(
                "{}({})",
                function,
                self.join(operands, Brackets::Suppress, ", ")?
            )),
        };

        Ok(expansion)
    }
}
