//! CodeBuilder - builder session for straight-line kernels
//!
//! One session owns the expression graph, the identity cache, the name
//! allocator and the assignment list. Node handles (`NodeId`) are only
//! meaningful for the session that returned them.
//!
//! ```rust
//! use kernelgen_ir::api::CodeBuilder;
//!
//! let mut builder = CodeBuilder::new();
//! let x = builder.scalar("x");
//! let y = builder.scalar("y");
//! let s = builder.apply("+", &[x, y])?;
//! let twice = builder.apply("*", &[s, s])?;
//! let out = builder.output(twice)?;
//!
//! assert_eq!(
//!     builder.to_source(&[out.into()])?,
//!     "let temp0 = x + y;\nreturn temp0 * temp0;\n"
//! );
//! # Ok::<(), kernelgen_ir::BuilderError>(())
//! ```

use tracing::debug;

use crate::config::{BuilderConfig, Validatable};
use crate::errors::{BuilderError, Result};
use crate::features::identity_cache::IdentityCache;
use crate::features::naming::NameAllocator;
use crate::features::reference_tracker::ReferenceTracker;
use crate::features::sequencing::{Assignment, AssignmentSequence, Emitter, SourceSink, SourceWriter};
use crate::features::variable_model::{
    Brackets, Graph, Materialization, Node, NodeKind, NodeTag, Operator, Output,
};
use crate::shared::models::NodeId;

// ═══════════════════════════════════════════════════════════════════════════
// Request types
// ═══════════════════════════════════════════════════════════════════════════

/// Shape of a new vector or matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorShape {
    /// Fresh field projections; for `matrix` this is the dimension
    Length(usize),

    /// Existing nodes as components
    Components(Vec<NodeId>),
}

impl From<usize> for VectorShape {
    fn from(length: usize) -> Self {
        VectorShape::Length(length)
    }
}

impl From<Vec<NodeId>> for VectorShape {
    fn from(components: Vec<NodeId>) -> Self {
        VectorShape::Components(components)
    }
}

impl From<&[NodeId]> for VectorShape {
    fn from(components: &[NodeId]) -> Self {
        VectorShape::Components(components.to_vec())
    }
}

/// Condition of a phi merge: `left comparison right`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhiTest {
    pub left: NodeId,
    pub comparison: String,
    pub right: NodeId,
}

impl PhiTest {
    pub fn new(left: NodeId, comparison: impl Into<String>, right: NodeId) -> Self {
        Self {
            left,
            comparison: comparison.into(),
            right,
        }
    }
}

/// Statement written after the assignments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Terminal {
    /// `return <node>`
    Output(Output),

    /// Verbatim line
    Line(String),
}

impl From<Output> for Terminal {
    fn from(output: Output) -> Self {
        Terminal::Output(output)
    }
}

impl From<String> for Terminal {
    fn from(line: String) -> Self {
        Terminal::Line(line)
    }
}

impl From<&str> for Terminal {
    fn from(line: &str) -> Self {
        Terminal::Line(line.to_string())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CodeBuilder
// ═══════════════════════════════════════════════════════════════════════════

/// Builder session
#[derive(Debug)]
pub struct CodeBuilder {
    config: BuilderConfig,
    graph: Graph,
    cache: IdentityCache,
    names: NameAllocator,
    sequence: AssignmentSequence,
    tracker: ReferenceTracker,
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeBuilder {
    /// Session with the default (optimized) configuration
    pub fn new() -> Self {
        Self::from_valid_config(BuilderConfig::default())
    }

    /// Session with a custom configuration, validated first
    pub fn with_config(config: BuilderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: BuilderConfig) -> Self {
        Self {
            graph: Graph::new(),
            cache: IdentityCache::new(),
            names: NameAllocator::new(&config.naming),
            sequence: AssignmentSequence::new(),
            tracker: ReferenceTracker::new(config.alias_expressions),
            config,
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    // ───────────────────────────────────────────────────────────────────────
    // Variables
    // ───────────────────────────────────────────────────────────────────────

    /// Named scalar leaf
    pub fn scalar(&mut self, name: &str) -> NodeId {
        self.names.reserve(name);
        self.graph.register(
            NodeKind::Scalar,
            Materialization::Materialized(name.to_string()),
            false,
        )
    }

    /// Named vector of fresh fields (`Length`) or of existing nodes
    pub fn vector(&mut self, shape: impl Into<VectorShape>, name: &str) -> Result<NodeId> {
        self.build_vector(shape.into(), name, false)
    }

    /// Square matrix, stored row-major as a vector of `dimension²` fields
    pub fn matrix(&mut self, shape: impl Into<VectorShape>, name: &str) -> Result<NodeId> {
        let shape = match shape.into() {
            VectorShape::Length(dimension) => VectorShape::Length(dimension * dimension),
            components => components,
        };
        self.build_vector(shape, name, true)
    }

    fn build_vector(&mut self, shape: VectorShape, name: &str, is_matrix: bool) -> Result<NodeId> {
        if let VectorShape::Components(components) = &shape {
            self.graph.ensure_known(components)?;
        }
        self.names.reserve(name);

        match shape {
            VectorShape::Components(components) => Ok(self.graph.register(
                NodeKind::Vector {
                    components,
                    is_matrix,
                },
                Materialization::Materialized(name.to_string()),
                false,
            )),
            VectorShape::Length(length) => {
                let id = self.graph.register(
                    NodeKind::Vector {
                        components: Vec::new(),
                        is_matrix,
                    },
                    Materialization::Materialized(name.to_string()),
                    false,
                );

                let alias_fields = self.config.alias_fields;
                let fields = (0..length)
                    .map(|index| {
                        self.graph.register(
                            NodeKind::Field { parent: id, index },
                            Materialization::Inline,
                            alias_fields,
                        )
                    })
                    .collect();
                self.graph.set_components(id, fields)?;
                Ok(id)
            }
        }
    }

    // ───────────────────────────────────────────────────────────────────────
    // Transformations
    // ───────────────────────────────────────────────────────────────────────

    /// Scalar operation over a flat operand list
    ///
    /// `apply("+", &[a, b])` -> `a + b`
    pub fn apply(&mut self, operation: &str, operands: &[NodeId]) -> Result<NodeId> {
        if operands.is_empty() {
            return Err(BuilderError::NothingToOperate { construct: "apply" });
        }
        self.graph.ensure_known(operands)?;

        let operator = Operator::parse(operation);
        check_arity(operation, &operator, operands.len())?;
        self.apply_checked(operation, operator, operands)
    }

    fn apply_checked(
        &mut self,
        operation: &str,
        operator: Operator,
        operands: &[NodeId],
    ) -> Result<NodeId> {
        if let Some(existing) = self.cache.lookup(NodeTag::Apply, operation, operands) {
            self.reference(operands)?;
            return Ok(existing);
        }

        let id = self.graph.register(
            NodeKind::Apply {
                operation: operation.to_string(),
                operator,
                operands: operands.to_vec(),
            },
            Materialization::Inline,
            true,
        );
        self.cache.insert(NodeTag::Apply, operation, operands, id);
        self.reference(operands)?;
        Ok(id)
    }

    /// One chained apply per operand, across that operand's components
    ///
    /// `reduce("+", &[a, b])` -> `[a[0] + a[1], b[0] + b[1]]`
    pub fn reduce(&mut self, operation: &str, operands: &[NodeId]) -> Result<NodeId> {
        if operands.is_empty() {
            return Err(BuilderError::NothingToOperate { construct: "reduce" });
        }
        self.graph.ensure_known(operands)?;

        let operator = Operator::parse(operation);
        let columns = operands
            .iter()
            .map(|&operand| {
                let node = self.graph.node(operand)?;
                Ok(node
                    .components()
                    .map_or_else(|| vec![operand], |components| components.to_vec()))
            })
            .collect::<Result<Vec<_>>>()?;

        for column in &columns {
            if column.is_empty() {
                return Err(BuilderError::NothingToOperate { construct: "reduce" });
            }
            check_arity(operation, &operator, column.len())?;
        }

        if let Some(existing) = self.cache.lookup(NodeTag::Reduction, operation, operands) {
            self.rereference_components(existing)?;
            return Ok(existing);
        }

        let id = self.graph.register(
            NodeKind::Reduction {
                operation: operation.to_string(),
                operands: operands.to_vec(),
                components: Vec::new(),
            },
            Materialization::Inline,
            true,
        );
        self.cache.insert(NodeTag::Reduction, operation, operands, id);

        let components = columns
            .iter()
            .map(|column| self.apply_checked(operation, operator.clone(), column))
            .collect::<Result<Vec<_>>>()?;
        self.graph.set_components(id, components)?;
        Ok(id)
    }

    /// Elementwise apply; length-1 operands are broadcast
    ///
    /// `map("+", &[v, x])` -> `[v[0] + x, v[1] + x, ...]`
    pub fn map(&mut self, operation: &str, operands: &[NodeId]) -> Result<NodeId> {
        if operands.is_empty() {
            return Err(BuilderError::NothingToOperate { construct: "map" });
        }
        self.graph.ensure_known(operands)?;

        let operator = Operator::parse(operation);
        check_arity(operation, &operator, operands.len())?;

        let lengths = operands
            .iter()
            .map(|&operand| Ok(self.graph.node(operand)?.len()))
            .collect::<Result<Vec<_>>>()?;
        let length = lengths.iter().copied().max().unwrap_or(0);
        if let Some(&found) = lengths.iter().find(|&&l| l != 1 && l != length) {
            return Err(BuilderError::LengthMismatch {
                operation: operation.to_string(),
                expected: length,
                found,
            });
        }

        if let Some(existing) = self.cache.lookup(NodeTag::Mapping, operation, operands) {
            self.rereference_components(existing)?;
            return Ok(existing);
        }

        let id = self.graph.register(
            NodeKind::Mapping {
                operation: operation.to_string(),
                operands: operands.to_vec(),
                components: Vec::new(),
            },
            Materialization::Inline,
            true,
        );
        self.cache.insert(NodeTag::Mapping, operation, operands, id);

        let mut components = Vec::with_capacity(length);
        for i in 0..length {
            let column = operands
                .iter()
                .map(|&operand| self.graph.node(operand)?.broadcast(i))
                .collect::<Result<Vec<_>>>()?;
            components.push(self.apply_checked(operation, operator.clone(), &column)?);
        }
        self.graph.set_components(id, components)?;
        Ok(id)
    }

    // ───────────────────────────────────────────────────────────────────────
    // Statements
    // ───────────────────────────────────────────────────────────────────────

    /// Store `source` into the components of vector `target`
    ///
    /// Field nodes keep the value they had when the graph was built: a field
    /// that is used again after its store is bound, right before the store,
    /// to a name holding its prior value. Stores always address the slot
    /// (`out[0]`), also for fields already bound to a name.
    pub fn assign(&mut self, target: NodeId, source: NodeId) -> Result<()> {
        self.graph.ensure_known(&[target, source])?;

        let target_node = self.graph.node(target)?;
        if !matches!(target_node.kind, NodeKind::Vector { .. }) {
            return Err(BuilderError::AssignToNonVector { target });
        }
        let outputs = target_node.components().unwrap_or_default().to_vec();

        let source_len = self.graph.node(source)?.len();
        if source_len != 1 && source_len < outputs.len() {
            return Err(BuilderError::LengthMismatch {
                operation: "assign".to_string(),
                expected: outputs.len(),
                found: source_len,
            });
        }

        for (i, &out) in outputs.iter().enumerate() {
            let input = self.graph.node(source)?.broadcast(i)?;
            if out == input {
                continue;
            }

            self.reference(&[input])?;

            let name = self.graph.render_target(out)?;
            let expression = self.graph.render(input, Brackets::Suppress)?;
            let store = self.sequence.push(name, expression, false);

            // one use is on record so the next read binds the prior value
            let node = self.graph.node_mut(out)?;
            if node.aliasable {
                node.references = 1;
                node.state = Materialization::PendingStore(store);
            }
        }
        Ok(())
    }

    /// Two-way conditional merge bound to a new name
    ///
    /// Emits `name = left cmp right ? success : failure` and returns a scalar
    /// (or a vector of the longer branch length) with that name.
    pub fn phi(
        &mut self,
        test: PhiTest,
        success: NodeId,
        failure: NodeId,
        name: Option<&str>,
    ) -> Result<NodeId> {
        self.graph
            .ensure_known(&[test.left, test.right, success, failure])?;

        let success_node = self.graph.node(success)?;
        let failure_node = self.graph.node(failure)?;
        if success_node.is_vector() != failure_node.is_vector() {
            return Err(BuilderError::PhiShapeMismatch);
        }
        let is_vector = success_node.is_vector();
        let length = success_node.len().max(failure_node.len());

        self.reference(&[test.left, test.right])?;
        self.reference(&[success, failure])?;

        let name = self.names.phi_name(name);
        let expression = format!(
            "{} {} {} ? {} : {}",
            self.graph.render(test.left, Brackets::Auto)?,
            test.comparison,
            self.graph.render(test.right, Brackets::Auto)?,
            self.graph.render(success, Brackets::Suppress)?,
            self.graph.render(failure, Brackets::Suppress)?,
        );
        debug!("phi {} = {}", name, expression);
        self.sequence.push(name.as_str(), expression, true);

        if is_vector {
            self.vector(length, &name)
        } else {
            Ok(self.scalar(&name))
        }
    }

    /// Terminal `return` of a node
    pub fn output(&mut self, node: NodeId) -> Result<Output> {
        self.graph.ensure_known(&[node])?;
        self.reference(&[node])?;
        Ok(Output::new(node))
    }

    // ───────────────────────────────────────────────────────────────────────
    // Emission
    // ───────────────────────────────────────────────────────────────────────

    /// Write the assignments, then each terminal, to `sink`
    pub fn write<S: SourceSink + ?Sized>(&self, sink: &mut S, terminals: &[Terminal]) -> Result<()> {
        let lines = terminals
            .iter()
            .map(|terminal| match terminal {
                Terminal::Output(output) => self.render_output(output),
                Terminal::Line(line) => Ok(line.clone()),
            })
            .collect::<Result<Vec<_>>>()?;

        Emitter::new(&self.config.emit).write(sink, self.sequence.as_slice(), &lines)?;
        Ok(())
    }

    /// Generated text written into a fresh `SourceWriter`
    pub fn to_source(&self, terminals: &[Terminal]) -> Result<String> {
        let mut writer = SourceWriter::new(&self.config.emit);
        self.write(&mut writer, terminals)?;
        Ok(writer.finish()?)
    }

    /// `return <node>` without the terminator
    pub fn render_output(&self, output: &Output) -> Result<String> {
        Ok(format!(
            "{} {}",
            self.config.emit.return_keyword,
            self.graph.render(output.node(), Brackets::Suppress)?
        ))
    }

    // ───────────────────────────────────────────────────────────────────────
    // Inspection
    // ───────────────────────────────────────────────────────────────────────

    /// Component `index` of a node; scalar-like nodes return themselves
    pub fn get(&self, node: NodeId, index: usize) -> Result<NodeId> {
        self.graph.node(node)?.get(index)
    }

    pub fn len(&self, node: NodeId) -> Result<usize> {
        Ok(self.graph.node(node)?.len())
    }

    pub fn is_vector(&self, node: NodeId) -> Result<bool> {
        Ok(self.graph.node(node)?.is_vector())
    }

    pub fn node(&self, node: NodeId) -> Result<&Node> {
        self.graph.node(node)
    }

    /// Current text of a node
    pub fn render(&self, node: NodeId, brackets: Brackets) -> Result<String> {
        self.graph.render(node, brackets)
    }

    pub fn assignments(&self) -> &[Assignment] {
        self.sequence.as_slice()
    }

    /// Number of nodes registered in this session
    pub fn identity_count(&self) -> usize {
        self.graph.len()
    }

    /// Requests answered by the identity cache
    pub fn cache_hits(&self) -> usize {
        self.cache.hits()
    }

    /// Offer a name to be reused for anonymous bindings
    pub fn recycle_temporary(&mut self, name: impl Into<String>) {
        self.names.recycle(name);
    }

    // ───────────────────────────────────────────────────────────────────────
    // Internals
    // ───────────────────────────────────────────────────────────────────────

    fn reference(&mut self, ids: &[NodeId]) -> Result<()> {
        self.tracker
            .reference(&mut self.graph, &mut self.names, &mut self.sequence, ids)
    }

    /// Count a cached reduction or mapping as if each component were rebuilt
    fn rereference_components(&mut self, id: NodeId) -> Result<()> {
        let components = self
            .graph
            .node(id)?
            .components()
            .unwrap_or_default()
            .to_vec();

        for component in components {
            let operands = match &self.graph.node(component)?.kind {
                NodeKind::Apply { operands, .. } => operands.clone(),
                _ => continue,
            };
            self.reference(&operands)?;
        }
        Ok(())
    }
}

fn check_arity(operation: &str, operator: &Operator, operands: usize) -> Result<()> {
    if operator.is_unary() && operands > 1 {
        return Err(BuilderError::UnaryArity {
            operation: operation.to_string(),
            operands,
        });
    }
    Ok(())
}
