//! Sequencing Domain - assignment statements

use crate::shared::models::StatementId;

/// One `name = expression` statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub id: StatementId,
    pub name: String,
    pub expression: String,

    /// Declaration (`let name = ...`) rather than a store (`name = ...`)
    pub declare: bool,

    /// Store whose target this declaration read just before the store ran
    pub renames: Option<StatementId>,
}

impl Assignment {
    pub fn is_store(&self) -> bool {
        !self.declare
    }
}
