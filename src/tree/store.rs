//! The hierarchical store over a flat node list.

use crate::error::{Result, StoreError};
use crate::tree::index::TreeIndex;
use crate::types::{NodeId, TreeNode};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// A flat collection of nodes linked by parent ids, with derived indexes for
/// O(1) lookup and child access.
///
/// The flat list is authoritative; both indexes are rebuilt from it and kept
/// consistent after every mutation. No cycle detection is performed: a
/// caller that inserts a parent cycle makes [`descendants`](Self::descendants)
/// and [`ancestors`](Self::ancestors) loop indefinitely.
///
/// There is no internal synchronization; multi-threaded callers must
/// serialize access externally.
#[derive(Debug, Default)]
pub struct TreeStore {
    /// Authoritative flat list, in supplied/appended order.
    items: Vec<TreeNode>,

    /// Derived lookup state.
    index: TreeIndex,
}

impl TreeStore {
    /// Build a store from a flat node list.
    pub fn new(items: Vec<TreeNode>) -> Self {
        let index = TreeIndex::build(&items);
        Self { items, index }
    }

    /// Replace the entire collection, discarding and rebuilding the indexes.
    pub fn set_items(&mut self, items: Vec<TreeNode>) {
        debug!(count = items.len(), "replacing collection");
        self.index = TreeIndex::build(&items);
        self.items = items;
    }

    /// The current flat list, in supplied/appended order.
    pub fn items(&self) -> &[TreeNode] {
        &self.items
    }

    /// Number of nodes in the collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a node by id.
    pub fn get(&self, id: &NodeId) -> Option<&TreeNode> {
        self.index.position(id).and_then(|pos| self.items.get(pos))
    }

    /// Direct children of `id`, in insertion order. Empty for unknown ids.
    pub fn children(&self, id: &NodeId) -> Vec<&TreeNode> {
        self.resolve(self.index.child_ids(&Some(id.clone())))
    }

    /// Root-level nodes (those with no parent), in insertion order.
    pub fn roots(&self) -> Vec<&TreeNode> {
        self.resolve(self.index.child_ids(&None))
    }

    /// Every descendant of `id`, flattened.
    ///
    /// Works a double-ended queue from the front: take the front node, emit
    /// it, then prepend its own children. A branch is therefore exhausted
    /// level by level before deeper siblings queue behind it are reached —
    /// for children [2, 3] of 1 where 2 has child 4, the order is
    /// [2, 4, 3], not the [2, 3, 4] of back-insertion BFS.
    pub fn descendants(&self, id: &NodeId) -> Vec<&TreeNode> {
        let mut result = Vec::new();
        let mut queue: VecDeque<NodeId> =
            self.index.child_ids(&Some(id.clone())).iter().cloned().collect();

        while let Some(next) = queue.pop_front() {
            if let Some(node) = self.get(&next) {
                result.push(node);
            }
            for child in self.index.child_ids(&Some(next)).iter().rev() {
                queue.push_front(child.clone());
            }
        }
        result
    }

    /// Ancestor chain of `id`, root first, immediate parent last.
    ///
    /// Fails with [`StoreError::NotFound`] if `id` itself is absent. A
    /// dangling parent link ends the walk silently, yielding the partial
    /// chain collected so far.
    pub fn ancestors(&self, id: &NodeId) -> Result<Vec<&TreeNode>> {
        if !self.index.contains(id) {
            return Err(StoreError::NotFound(id.clone()));
        }

        let mut chain = Vec::new();
        let mut current = self.get(id);
        while let Some(node) = current {
            let Some(parent_id) = &node.parent else {
                break;
            };
            current = self.get(parent_id);
            if let Some(parent) = current {
                chain.push(parent);
            }
        }
        chain.reverse();
        Ok(chain)
    }

    /// Add a node to the collection.
    ///
    /// Fails with [`StoreError::DuplicateId`] if the id is already present.
    /// The parent is not required to exist.
    pub fn insert(&mut self, node: TreeNode) -> Result<()> {
        if self.index.contains(&node.id) {
            return Err(StoreError::DuplicateId(node.id));
        }

        debug!(id = %node.id, "inserting node");
        self.index.register(&node, self.items.len());
        self.items.push(node);
        Ok(())
    }

    /// Remove `id` and its entire descendant subtree.
    ///
    /// Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: &NodeId) {
        let mut removed: HashSet<NodeId> = self
            .descendants(id)
            .into_iter()
            .map(|node| node.id.clone())
            .collect();
        removed.insert(id.clone());

        debug!(id = %id, count = removed.len(), "removing subtree");
        self.items.retain(|node| !removed.contains(&node.id));
        self.index.remove(&self.items, &removed);
    }

    /// Replace the node with the same id in place.
    ///
    /// Fails with [`StoreError::NotFound`] if the id is absent.
    ///
    /// Does not re-parent: if `node.parent` differs from the stored value,
    /// the node stays in its old parent's child list and does not move to
    /// the new parent's list. Callers that need to move a node should
    /// remove and re-insert it.
    pub fn update(&mut self, node: TreeNode) -> Result<()> {
        let Some(position) = self.index.position(&node.id) else {
            return Err(StoreError::NotFound(node.id));
        };

        debug!(id = %node.id, "updating node");
        self.items[position] = node;
        Ok(())
    }

    fn resolve(&self, ids: &[NodeId]) -> Vec<&TreeNode> {
        ids.iter().filter_map(|id| self.get(id)).collect()
    }
}
