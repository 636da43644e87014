//! Error taxonomy shared by every tree operation.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, BTreeError>;

/// Errors reported by [`BTree`](crate::BTree) operations.
///
/// Every variant is recoverable. A mutation that fails leaves the tree
/// exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BTreeError {
    /// The requested order is below the minimum of 2.
    #[error("invalid order {0}: order must be at least 2")]
    InvalidOrder(usize),
    /// A zero-length key was passed to a mutation.
    #[error("empty key")]
    EmptyKey,
    /// A deletion was attempted on a tree that has no root.
    #[error("empty tree")]
    EmptyTree,
    /// The key is already stored in the tree.
    #[error("key already exists")]
    DuplicateKey,
    /// The key is not stored in the tree.
    #[error("key not found")]
    KeyNotFound,
    /// Configuration text could not be parsed.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    /// A structural invariant does not hold.
    #[error("corruption detected: {0}")]
    Corruption(String),
}
