//! Core types for the tree store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a node, numeric or string.
///
/// Serialized untagged, so JSON node lists can use plain numbers and strings
/// (`{"id": 1, ...}` or `{"id": "inbox", ...}`) interchangeably.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Num(i64),
    Text(String),
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Num(n) => write!(f, "NodeId({n})"),
            NodeId::Text(s) => write!(f, "NodeId({s:?})"),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Num(n) => write!(f, "{n}"),
            NodeId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        NodeId::Num(n)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::Text(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId::Text(s)
    }
}

/// A node in the flat collection.
///
/// `parent: None` marks a root-level node. Everything beyond `id` and
/// `parent` is opaque payload the store never interprets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Unique identifier within the collection.
    pub id: NodeId,

    /// Identifier of the owning node, `None` for root-level nodes.
    ///
    /// A non-`None` parent is not required to exist in the collection;
    /// traversal simply stops at a dangling link.
    #[serde(default)]
    pub parent: Option<NodeId>,

    /// Display label.
    pub label: String,

    /// Caller-defined payload, carried through untouched.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub payload: serde_json::Value,
}

impl TreeNode {
    /// Create a node with an empty payload.
    pub fn new(
        id: impl Into<NodeId>,
        parent: Option<NodeId>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent,
            label: label.into(),
            payload: serde_json::Value::Null,
        }
    }

    /// Attach a payload value.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}
