//! Deletion with predecessor/successor promotion, sibling borrowing and
//! node merging.
//!
//! Underflow is repaired on the way back up: after a recursive call returns,
//! the parent checks the child it descended into and restores the minimum
//! occupancy by rotating a key through itself or by merging the child with a
//! sibling. A merge may in turn leave the parent underfull, which its own
//! parent repairs one frame later.

use crate::error::{BTreeError, Result};

use super::key::{self, Key, Slot};
use super::node::NodeId;
use super::tree::BTree;

/// How a key deleted from an internal node is replaced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Replacement {
    /// Promote the largest key held by this node of the left subtree.
    Predecessor(NodeId),
    /// Promote the smallest key held by this node of the right subtree.
    Successor(NodeId),
    /// Fold both children and the key into one node and delete from it.
    Merge,
}

impl BTree {
    /// Removes `key`.
    ///
    /// Fails with [`EmptyKey`](BTreeError::EmptyKey) for a zero-length key,
    /// [`EmptyTree`](BTreeError::EmptyTree) when the tree has no root and
    /// [`KeyNotFound`](BTreeError::KeyNotFound) when the key is absent. A
    /// failed call leaves the tree unchanged.
    pub fn delete(&mut self, key: &[u8]) -> Result<()> {
        if key.is_empty() {
            return Err(BTreeError::EmptyKey);
        }
        let root = self.root.ok_or(BTreeError::EmptyTree)?;
        if let Err(err) = self.remove_from(root, key) {
            tracing::debug!(target: "byte_btree::delete", key_len = key.len(), %err, "delete rejected");
            return Err(err);
        }
        self.len -= 1;
        self.collapse_root();
        Ok(())
    }

    fn remove_from(&mut self, id: NodeId, key: &[u8]) -> Result<()> {
        match key::locate(&self.arena[id].keys, key) {
            Slot::Found(idx) if self.arena[id].is_leaf() => {
                self.arena[id].keys.remove(idx);
                Ok(())
            }
            Slot::Found(idx) => self.remove_internal(id, idx),
            Slot::Missing(_) if self.arena[id].is_leaf() => Err(BTreeError::KeyNotFound),
            Slot::Missing(idx) => {
                let child = self.arena[id].children[idx];
                self.remove_from(child, key)?;
                self.restore_child(id, idx);
                Ok(())
            }
        }
    }

    /// Removes `keys[idx]` from the internal node `id`.
    fn remove_internal(&mut self, id: NodeId, idx: usize) -> Result<()> {
        let left = self.arena[id].children[idx];
        let right = self.arena[id].children[idx + 1];
        let predecessor = self.predecessor(left);
        let successor = self.successor(right);

        let merge_fits =
            self.arena[left].keys.len() + self.arena[right].keys.len() < self.max_keys();

        let choice = match (predecessor, successor) {
            (Some(holder), _) if self.can_donate(holder) => Replacement::Predecessor(holder),
            (_, Some(holder)) if self.can_donate(holder) => Replacement::Successor(holder),
            _ if merge_fits => Replacement::Merge,
            (Some(holder), _) => Replacement::Predecessor(holder),
            (None, Some(holder)) => Replacement::Successor(holder),
            (None, None) => Replacement::Merge,
        };
        tracing::trace!(target: "byte_btree::delete", node = id.0, ?choice, "deleting internal key");

        match choice {
            Replacement::Predecessor(holder) => {
                let promoted = self.promoted_key(holder, |keys| keys.last())?;
                self.remove_from(left, &promoted)?;
                self.arena[id].keys[idx] = promoted;
                self.restore_child(id, idx);
            }
            Replacement::Successor(holder) => {
                let promoted = self.promoted_key(holder, |keys| keys.first())?;
                self.remove_from(right, &promoted)?;
                self.arena[id].keys[idx] = promoted;
                self.restore_child(id, idx + 1);
            }
            Replacement::Merge => {
                let key = self.arena[id].keys[idx].clone();
                self.merge_children(id, idx);
                self.remove_from(left, &key)?;
                self.restore_child(id, idx);
            }
        }
        Ok(())
    }

    fn promoted_key(
        &self,
        holder: NodeId,
        pick: impl FnOnce(&[Key]) -> Option<&Key>,
    ) -> Result<Key> {
        pick(&self.arena[holder].keys)
            .cloned()
            .ok_or_else(|| BTreeError::Corruption(format!("replacement node {} has no keys", holder.0)))
    }

    /// Node holding the largest key of the subtree rooted at `id`.
    ///
    /// Walks the rightmost spine and keeps the deepest node that holds any
    /// key; `None` when the whole subtree is empty.
    fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        let mut found = None;
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &self.arena[node_id];
            if !node.keys.is_empty() {
                found = Some(node_id);
            }
            current = node.children.last().copied();
        }
        found
    }

    /// Node holding the smallest key of the subtree rooted at `id`.
    fn successor(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        loop {
            let node = &self.arena[current];
            match node.children.first() {
                Some(&child) if !node.keys.is_empty() && self.is_empty_subtree(child) => {
                    return Some(current);
                }
                Some(&child) => current = child,
                None if node.keys.is_empty() => return None,
                None => return Some(current),
            }
        }
    }

    fn is_empty_subtree(&self, id: NodeId) -> bool {
        let node = &self.arena[id];
        node.keys.is_empty() && node.children.iter().all(|&child| self.is_empty_subtree(child))
    }

    /// A node can give up a key to an ancestor if it is a leaf above the
    /// minimum occupancy.
    fn can_donate(&self, id: NodeId) -> bool {
        let node = &self.arena[id];
        node.is_leaf() && node.keys.len() > self.min_keys()
    }

    /// Brings `children[idx]` of `id` back to the minimum occupancy.
    fn restore_child(&mut self, id: NodeId, idx: usize) {
        let min = self.min_keys();
        let children = &self.arena[id].children;
        let child = children[idx];
        if self.arena[child].keys.len() >= min {
            return;
        }
        let left = idx.checked_sub(1).map(|i| children[i]);
        let right = children.get(idx + 1).copied();

        if left.is_some_and(|l| self.arena[l].keys.len() > min) {
            self.borrow_from_left(id, idx);
        } else if right.is_some_and(|r| self.arena[r].keys.len() > min) {
            self.borrow_from_right(id, idx);
        } else if left.is_some() {
            self.merge_children(id, idx - 1);
        } else if right.is_some() {
            self.merge_children(id, idx);
        }
    }

    /// Rotates the left sibling's largest key up into `id` and the
    /// separating key down into `children[idx]`.
    fn borrow_from_left(&mut self, id: NodeId, idx: usize) {
        let left = self.arena[id].children[idx - 1];
        let child = self.arena[id].children[idx];

        let sibling = &mut self.arena[left];
        let Some(borrowed) = sibling.keys.pop() else {
            return;
        };
        let moved = sibling.children.pop();

        let separator = std::mem::replace(&mut self.arena[id].keys[idx - 1], borrowed);
        self.arena[child].keys.insert(0, separator);
        if let Some(moved) = moved {
            self.arena[child].children.insert(0, moved);
            self.arena[moved].parent = Some(child);
        }

        self.record(|s| s.inc_borrows());
        tracing::trace!(
            target: "byte_btree::rebalance",
            parent = id.0,
            from = left.0,
            to = child.0,
            "borrowed from left sibling"
        );
    }

    /// Rotates the right sibling's smallest key up into `id` and the
    /// separating key down into `children[idx]`.
    fn borrow_from_right(&mut self, id: NodeId, idx: usize) {
        let right = self.arena[id].children[idx + 1];
        let child = self.arena[id].children[idx];

        let sibling = &mut self.arena[right];
        if sibling.keys.is_empty() {
            return;
        }
        let borrowed = sibling.keys.remove(0);
        let moved = if sibling.is_leaf() {
            None
        } else {
            Some(sibling.children.remove(0))
        };

        let separator = std::mem::replace(&mut self.arena[id].keys[idx], borrowed);
        self.arena[child].keys.push(separator);
        if let Some(moved) = moved {
            self.arena[child].children.push(moved);
            self.arena[moved].parent = Some(child);
        }

        self.record(|s| s.inc_borrows());
        tracing::trace!(
            target: "byte_btree::rebalance",
            parent = id.0,
            from = right.0,
            to = child.0,
            "borrowed from right sibling"
        );
    }

    /// Folds `children[idx + 1]` and the key separating it from
    /// `children[idx]` into `children[idx]`, releasing the right node.
    fn merge_children(&mut self, id: NodeId, idx: usize) {
        let parent = &mut self.arena[id];
        let separator = parent.keys.remove(idx);
        let right = parent.children.remove(idx + 1);
        let left = parent.children[idx];

        let absorbed = self.arena.release(right);
        for &child in &absorbed.children {
            self.arena[child].parent = Some(left);
        }
        let is_leaf = absorbed.is_leaf();

        let node = &mut self.arena[left];
        node.keys.push(separator);
        node.keys.extend(absorbed.keys);
        node.children.extend(absorbed.children);

        if is_leaf {
            self.record(|s| s.inc_leaf_merges());
        } else {
            self.record(|s| s.inc_internal_merges());
        }
        tracing::trace!(
            target: "byte_btree::rebalance",
            parent = id.0,
            left = left.0,
            right = right.0,
            "merged siblings"
        );
    }

    /// Replaces an internal root left without keys by its only child.
    fn collapse_root(&mut self) {
        while let Some(root) = self.root {
            let node = &self.arena[root];
            if !node.keys.is_empty() || node.children.len() != 1 {
                return;
            }
            let child = node.children[0];
            self.arena.release(root);
            self.arena[child].parent = None;
            self.root = Some(child);
            self.record(|s| s.inc_root_collapses());
            tracing::trace!(target: "byte_btree::root", old = root.0, new = child.0, "collapsed root");
        }
    }
}
