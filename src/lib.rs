//! # Treeline
//!
//! Two small in-memory utilities for front-end state: a hierarchical node
//! store built over a flat list, and a bounded linear undo/redo history.
//!
//! ## Core Concepts
//!
//! - **Nodes**: flat records with a unique id and an optional parent id
//! - **Derived indexes**: id and child-list maps, rebuilt from the flat list
//! - **Snapshots**: independently owned copies of a state sequence
//! - **Cursor**: the active position in a bounded history
//!
//! ## Example
//!
//! ```
//! use treeline::{History, NodeId, TreeNode, TreeStore};
//!
//! let mut store = TreeStore::new(vec![
//!     TreeNode::new(1, None, "Root"),
//!     TreeNode::new(2, Some(NodeId::Num(1)), "Child"),
//! ]);
//!
//! let mut history: History<TreeNode> = History::new();
//! history.save(store.items());
//!
//! store.insert(TreeNode::new(3, Some(NodeId::Num(2)), "Grandchild"))?;
//! history.save(store.items());
//!
//! // Roll the collection back to the previous snapshot.
//! if let Some(previous) = history.undo() {
//!     store.set_items(previous.to_vec());
//! }
//! assert_eq!(store.len(), 2);
//! # Ok::<(), treeline::StoreError>(())
//! ```
//!
//! The two utilities are independent; neither requires the other. All
//! operations are synchronous and in-memory, with no internal locking.

pub mod error;
pub mod history;
pub mod tree;
pub mod types;

// Re-exports
pub use error::{Result, StoreError};
pub use history::{History, DEFAULT_CAPACITY};
pub use tree::TreeStore;
pub use types::{NodeId, TreeNode};
