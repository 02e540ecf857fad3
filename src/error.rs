//! Error types for the store.

use crate::types::NodeId;
use thiserror::Error;

/// Main error type for store operations.
///
/// Only mutation-type operations (and the ancestor walk) can fail; lookups
/// return an empty or absent result instead, and history navigation returns
/// `None` at the boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Node already exists: {0}")]
    DuplicateId(NodeId),

    #[error("Node not found: {0}")]
    NotFound(NodeId),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
