// Reference Tracker - materialize on second use
//
// Each use of an aliasable node bumps its counter. The second use binds the
// node to a name:
//   - pending store: the target's prior value is bound right before the store
//   - otherwise:     `let name = <expansion>` is appended (if enabled)
// After that the node is Materialized and no longer aliasable, so later
// uses are plain name lookups.

use tracing::trace;

use crate::errors::Result;
use crate::features::naming::{hint_for, NameAllocator};
use crate::features::sequencing::AssignmentSequence;
use crate::features::variable_model::{Brackets, Graph, Materialization};
use crate::shared::models::NodeId;

#[derive(Debug, Clone, Copy)]
pub struct ReferenceTracker {
    alias_expressions: bool,
}

impl ReferenceTracker {
    pub fn new(alias_expressions: bool) -> Self {
        Self { alias_expressions }
    }

    /// Count one use of each node
    pub fn reference(
        &self,
        graph: &mut Graph,
        names: &mut NameAllocator,
        sequence: &mut AssignmentSequence,
        ids: &[NodeId],
    ) -> Result<()> {
        for &id in ids {
            let node = graph.node_mut(id)?;
            if !node.aliasable {
                continue;
            }

            node.references += 1;
            if node.references == 2 {
                self.materialize(graph, names, sequence, id)?;
            }
        }
        Ok(())
    }

    fn materialize(
        &self,
        graph: &mut Graph,
        names: &mut NameAllocator,
        sequence: &mut AssignmentSequence,
        id: NodeId,
    ) -> Result<()> {
        let pending = match graph.node(id)?.state {
            Materialization::PendingStore(store) => Some(store),
            _ => None,
        };

        if pending.is_none() && !self.alias_expressions {
            return Ok(());
        }

        let hint = hint_for(graph, id)?;
        let name = names.allocate(&hint);

        match pending.and_then(|store| sequence.capture_store(store, &name)) {
            Some(statement) => {
                trace!("materialize {} as {} (captures store, {})", id, name, statement);
            }
            None => {
                let expression = graph.render(id, Brackets::Suppress)?;
                sequence.push(name.as_str(), expression, true);
                trace!("materialize {} as {}", id, name);
            }
        }

        let node = graph.node_mut(id)?;
        node.state = Materialization::Materialized(name);
        node.aliasable = false;
        Ok(())
    }
}
