// Identity Cache - hash-consing of apply / reduce / map requests
//
// Keyed on (tag, operation, operand ids), so lookups cost one hash of the
// operand list instead of a scan over every node of the session.

use rustc_hash::FxHashMap;

use crate::features::identity_cache::domain::IdentityKey;
use crate::features::variable_model::NodeTag;
use crate::shared::models::NodeId;

#[derive(Debug, Default)]
pub struct IdentityCache {
    entries: FxHashMap<IdentityKey, NodeId>,
    hits: usize,
}

impl IdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node previously built for the same request, if any
    pub fn lookup(&mut self, tag: NodeTag, operation: &str, operands: &[NodeId]) -> Option<NodeId> {
        let found = self
            .entries
            .get(&IdentityKey::new(tag, operation, operands))
            .copied();
        if found.is_some() {
            self.hits += 1;
        }
        found
    }

    /// Record a freshly built node; the first registration of a key wins
    pub fn insert(&mut self, tag: NodeTag, operation: &str, operands: &[NodeId], id: NodeId) {
        self.entries
            .entry(IdentityKey::new(tag, operation, operands))
            .or_insert(id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from the cache
    pub fn hits(&self) -> usize {
        self.hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_after_insert() {
        let mut cache = IdentityCache::new();
        let (a, b, sum) = (NodeId::new(0), NodeId::new(1), NodeId::new(2));

        assert_eq!(cache.lookup(NodeTag::Apply, "+", &[a, b]), None);
        cache.insert(NodeTag::Apply, "+", &[a, b], sum);

        assert_eq!(cache.lookup(NodeTag::Apply, "+", &[a, b]), Some(sum));
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn test_key_components_all_matter() {
        let mut cache = IdentityCache::new();
        let (a, b) = (NodeId::new(0), NodeId::new(1));
        cache.insert(NodeTag::Apply, "+", &[a, b], NodeId::new(2));

        // operand order
        assert_eq!(cache.lookup(NodeTag::Apply, "+", &[b, a]), None);
        // operation
        assert_eq!(cache.lookup(NodeTag::Apply, "*", &[a, b]), None);
        // tag
        assert_eq!(cache.lookup(NodeTag::Mapping, "+", &[a, b]), None);
        // arity
        assert_eq!(cache.lookup(NodeTag::Apply, "+", &[a]), None);
    }

    #[test]
    fn test_first_registration_wins() {
        let mut cache = IdentityCache::new();
        let a = NodeId::new(0);
        cache.insert(NodeTag::Apply, "sqrt", &[a], NodeId::new(1));
        cache.insert(NodeTag::Apply, "sqrt", &[a], NodeId::new(5));

        assert_eq!(cache.lookup(NodeTag::Apply, "sqrt", &[a]), Some(NodeId::new(1)));
        assert_eq!(cache.len(), 1);
    }
}
