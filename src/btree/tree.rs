use crate::error::Result;
use crate::options::BTreeOptions;

use super::key::{self, Slot};
use super::node::{Node, NodeArena, NodeId};
use super::stats::BTreeStats;

/// Ordered, balanced multiway search tree over byte-string keys.
///
/// The handle owns every node through its arena; the root is `None` until
/// the first insertion and again after [`clear`](Self::clear).
#[derive(Debug, Clone)]
pub struct BTree {
    pub(super) arena: NodeArena,
    pub(super) root: Option<NodeId>,
    pub(super) options: BTreeOptions,
    pub(super) len: usize,
    pub(super) stats: BTreeStats,
}

impl BTree {
    /// Creates an empty tree whose nodes have at most `order` children.
    ///
    /// Fails with [`InvalidOrder`](crate::BTreeError::InvalidOrder) when
    /// `order < 2`.
    pub fn new(order: usize) -> Result<Self> {
        Self::with_options(BTreeOptions::with_order(order))
    }

    /// Creates an empty tree from validated options.
    pub fn with_options(options: BTreeOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            arena: NodeArena::default(),
            root: None,
            options,
            len: 0,
            stats: BTreeStats::default(),
        })
    }

    /// Looks `key` up and returns the stored key when present.
    ///
    /// Empty keys are never stored, so they always report not-found.
    pub fn search(&self, key: &[u8]) -> Option<&[u8]> {
        if key.is_empty() {
            return None;
        }
        let mut current = self.root?;
        loop {
            let node = &self.arena[current];
            if node.is_leaf() {
                self.record(BTreeStats::inc_leaf_searches);
            } else {
                self.record(BTreeStats::inc_internal_searches);
            }
            match key::locate(&node.keys, key) {
                Slot::Found(idx) => return Some(node.keys[idx].as_slice()),
                Slot::Missing(_) if node.is_leaf() => return None,
                Slot::Missing(idx) => current = node.children[idx],
            }
        }
    }

    /// Returns `true` if `key` is stored in the tree.
    pub fn contains(&self, key: &[u8]) -> bool {
        self.search(key).is_some()
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of children per node.
    pub fn order(&self) -> usize {
        self.options.order
    }

    /// Options the tree was built with.
    pub fn options(&self) -> &BTreeOptions {
        &self.options
    }

    /// Number of levels, counting the root; zero for a tree without root.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut current = self.root;
        while let Some(id) = current {
            height += 1;
            current = self.arena[id].children.first().copied();
        }
        height
    }

    /// Number of nodes currently allocated.
    pub fn node_count(&self) -> usize {
        self.arena.live()
    }

    /// Operation counters for this tree.
    pub fn stats(&self) -> &BTreeStats {
        &self.stats
    }

    /// Drops every node; the tree returns to its freshly constructed state.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    pub(super) fn max_keys(&self) -> usize {
        self.options.max_keys()
    }

    pub(super) fn min_keys(&self) -> usize {
        self.options.min_keys()
    }

    /// Returns the root, creating an empty root leaf first if needed.
    pub(super) fn root_or_init(&mut self) -> NodeId {
        match self.root {
            Some(root) => root,
            None => {
                let root = self.arena.alloc(Node::leaf(None, self.max_keys()));
                self.root = Some(root);
                root
            }
        }
    }

    #[inline]
    pub(super) fn record(&self, bump: impl FnOnce(&BTreeStats)) {
        if self.options.track_stats {
            bump(&self.stats);
        }
    }
}
