//! Hierarchical node store.
//!
//! A flat, authoritative node list plus derived id and child-list indexes,
//! rebuilt on construction and kept consistent through every mutation.

mod index;
mod store;

pub use store::TreeStore;
