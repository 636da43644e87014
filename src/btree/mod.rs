#![forbid(unsafe_code)]

//! Arena-backed B-tree over byte-string keys.
//!
//! # Structure
//!
//! - Every node holds a sorted run of keys; internal nodes hold one more
//!   child than keys.
//! - Nodes live in a single slot arena owned by the tree handle and refer
//!   to their children and parent by index.
//! - Insertion splits overfull nodes and promotes the median upward,
//!   growing a new root when the old one splits.
//! - Deletion replaces internal keys with their predecessor or successor
//!   and repairs underfull children by borrowing from a sibling or merging
//!   with one.

mod delete;
mod insert;
mod iter;
mod key;
mod node;
mod stats;
mod tree;
mod verify;
mod visualize;

pub use iter::Keys;
pub use stats::{BTreeStats, BTreeStatsSnapshot};
pub use tree::BTree;
