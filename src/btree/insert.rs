//! Insertion with bottom-up node splitting.

use crate::error::{BTreeError, Result};

use super::key::{self, Slot};
use super::node::{Node, NodeId};
use super::tree::BTree;

impl BTree {
    /// Inserts `key`.
    ///
    /// Fails with [`EmptyKey`](BTreeError::EmptyKey) for a zero-length key
    /// and with [`DuplicateKey`](BTreeError::DuplicateKey) when the key is
    /// already present; in both cases the tree is unchanged.
    pub fn insert(&mut self, key: &[u8]) -> Result<()> {
        if key.is_empty() {
            return Err(BTreeError::EmptyKey);
        }
        let root = self.root_or_init();
        if let Err(err) = self.put(root, key) {
            tracing::debug!(target: "byte_btree::insert", key_len = key.len(), %err, "insert rejected");
            return Err(err);
        }
        self.len += 1;
        Ok(())
    }

    /// Places `key` in the subtree rooted at `id`, splitting `id` on the way
    /// back up if a child split pushed it over capacity.
    fn put(&mut self, id: NodeId, key: &[u8]) -> Result<()> {
        let idx = match key::locate(&self.arena[id].keys, key) {
            Slot::Found(_) => return Err(BTreeError::DuplicateKey),
            Slot::Missing(idx) => idx,
        };

        if self.arena[id].is_leaf() {
            self.arena[id].keys.insert(idx, key.to_vec());
        } else {
            let child = self.arena[id].children[idx];
            self.put(child, key)?;
        }

        if self.arena[id].keys.len() > self.max_keys() {
            self.split(id);
        }
        Ok(())
    }

    /// Splits an overfull node around its floor-midpoint key.
    ///
    /// Keys before the midpoint stay in `id`, keys after it move to a new
    /// right sibling, and the midpoint key is promoted into the parent. A
    /// root split grows the tree by one level.
    fn split(&mut self, id: NodeId) {
        let node = &mut self.arena[id];
        let mid = node.keys.len() / 2;
        let right_keys = node.keys.split_off(mid + 1);
        let median = node.keys.remove(mid);
        let right_children = if node.is_leaf() {
            Vec::new()
        } else {
            node.children.split_off(mid + 1)
        };
        let parent = node.parent;
        let is_leaf = right_children.is_empty();

        let right = self.arena.alloc(Node {
            parent,
            keys: right_keys,
            children: Vec::new(),
        });
        for &child in &right_children {
            self.arena[child].parent = Some(right);
        }
        self.arena[right].children = right_children;

        if is_leaf {
            self.record(|s| s.inc_leaf_splits());
        } else {
            self.record(|s| s.inc_internal_splits());
        }
        tracing::trace!(
            target: "byte_btree::split",
            left = id.0,
            right = right.0,
            leaf = is_leaf,
            "split node"
        );

        match parent {
            Some(parent) => {
                let parent_node = &mut self.arena[parent];
                let pos = key::lower_bound(&parent_node.keys, &median);
                parent_node.keys.insert(pos, median);
                parent_node.children.insert(pos + 1, right);
            }
            None => {
                let root = self.arena.alloc(Node {
                    parent: None,
                    keys: vec![median],
                    children: vec![id, right],
                });
                self.arena[id].parent = Some(root);
                self.arena[right].parent = Some(root);
                self.root = Some(root);
                self.record(|s| s.inc_root_splits());
                tracing::trace!(target: "byte_btree::split", root = root.0, "grew new root");
            }
        }
    }
}
