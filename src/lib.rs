//! In-memory B-tree over byte-string keys.
//!
//! The tree stores keys only. Nodes live in an arena and reference each
//! other (children and parent) by index, so splits and merges can walk
//! upward without shared ownership.
//!
//! ```
//! use byte_btree::BTree;
//!
//! let mut tree = BTree::new(4)?;
//! tree.insert(b"20")?;
//! tree.insert(b"10")?;
//!
//! assert_eq!(tree.search(b"10"), Some(&b"10"[..]));
//! assert!(tree.search(b"30").is_none());
//!
//! tree.delete(b"10")?;
//! assert_eq!(tree.len(), 1);
//! # Ok::<(), byte_btree::BTreeError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod btree;
pub mod error;
pub mod options;

pub use btree::{BTree, BTreeStats, BTreeStatsSnapshot, Keys};
pub use error::{BTreeError, Result};
pub use options::{BTreeOptions, DEFAULT_ORDER};
