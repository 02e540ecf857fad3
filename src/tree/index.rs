//! Derived indexes for efficient lookups.

use crate::types::{NodeId, TreeNode};
use std::collections::{HashMap, HashSet};

/// Derived lookup state, rebuilt from the authoritative flat list.
///
/// Never authoritative itself: the flat list owns the nodes, the index only
/// maps ids to positions and parents to child ids.
#[derive(Debug, Default)]
pub(crate) struct TreeIndex {
    /// Node id to position in the flat list.
    by_id: HashMap<NodeId, usize>,

    /// Parent key to child ids, insertion order preserved.
    ///
    /// `None` is the sentinel key for root-level nodes, so a real id can
    /// never collide with it.
    children: HashMap<Option<NodeId>, Vec<NodeId>>,
}

impl TreeIndex {
    /// Build both maps from the flat list in a single pass.
    pub(crate) fn build(items: &[TreeNode]) -> Self {
        let mut index = Self::default();
        for (position, node) in items.iter().enumerate() {
            index.register(node, position);
        }
        index
    }

    /// Register a node in both maps.
    pub(crate) fn register(&mut self, node: &TreeNode, position: usize) {
        self.by_id.insert(node.id.clone(), position);
        self.children
            .entry(node.parent.clone())
            .or_default()
            .push(node.id.clone());
    }

    /// Position of a node in the flat list.
    pub(crate) fn position(&self, id: &NodeId) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Whether an id is registered.
    pub(crate) fn contains(&self, id: &NodeId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Child ids for a parent key, in insertion order.
    pub(crate) fn child_ids(&self, parent: &Option<NodeId>) -> &[NodeId] {
        self.children.get(parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Drop a set of ids after the flat list has been filtered.
    ///
    /// Rebuilds the id map from the filtered list (positions shift) and
    /// filters every child list.
    pub(crate) fn remove(&mut self, items: &[TreeNode], removed: &HashSet<NodeId>) {
        self.by_id.clear();
        for (position, node) in items.iter().enumerate() {
            self.by_id.insert(node.id.clone(), position);
        }

        for ids in self.children.values_mut() {
            ids.retain(|id| !removed.contains(id));
        }
    }

    /// Number of registered ids.
    pub(crate) fn len(&self) -> usize {
        self.by_id.len()
    }
}
