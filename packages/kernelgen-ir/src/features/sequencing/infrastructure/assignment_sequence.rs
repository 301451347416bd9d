//! Ordered statement list with stable statement ids
//!
//! Positions shift when a declaration is inserted; ids do not, so a node
//! can hold on to its pending store across later insertions.

use crate::features::sequencing::domain::Assignment;
use crate::shared::models::StatementId;

#[derive(Debug, Default)]
pub struct AssignmentSequence {
    statements: Vec<Assignment>,
    next_id: usize,
}

impl AssignmentSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.statements.iter()
    }

    pub fn as_slice(&self) -> &[Assignment] {
        &self.statements
    }

    /// Current position of a statement
    pub fn position(&self, id: StatementId) -> Option<usize> {
        self.statements.iter().position(|s| s.id == id)
    }

    pub fn get(&self, id: StatementId) -> Option<&Assignment> {
        self.statements.iter().find(|s| s.id == id)
    }

    fn allocate_id(&mut self) -> StatementId {
        let id = StatementId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a statement
    pub fn push(
        &mut self,
        name: impl Into<String>,
        expression: impl Into<String>,
        declare: bool,
    ) -> StatementId {
        let id = self.allocate_id();
        self.statements.push(Assignment {
            id,
            name: name.into(),
            expression: expression.into(),
            declare,
            renames: None,
        });
        id
    }

    /// Bind the value a store target held before the store
    ///
    /// Inserts `name = <store target>` as a declaration right before the
    /// store; the store itself is left as is. None if the store is not in
    /// this sequence.
    pub fn capture_store(&mut self, store: StatementId, name: &str) -> Option<StatementId> {
        let position = self.position(store)?;
        let expression = self.statements[position].name.clone();

        let id = self.allocate_id();
        self.statements.insert(
            position,
            Assignment {
                id,
                name: name.to_string(),
                expression,
                declare: true,
                renames: Some(store),
            },
        );
        Some(id)
    }
}
