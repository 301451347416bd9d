//! Session-local identifiers
//!
//! Both id types are plain indices handed out by one `CodeBuilder` session.
//! They carry no lifetime, so ids from another session are only caught by
//! range checks at the API boundary.

use std::fmt;

/// Identity index of a node in the session arena
///
/// Strictly increasing in construction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position in the arena
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.0)
    }
}

/// Stable handle on an assignment record
///
/// Survives insertions before the record, unlike its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatementId(usize);

impl StatementId {
    pub(crate) fn new(raw: usize) -> Self {
        Self(raw)
    }
}

impl fmt::Display for StatementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}
