use super::node::{NodeArena, NodeId};
use super::tree::BTree;

/// In-order iterator over the keys of a [`BTree`].
///
/// Created by [`BTree::keys`].
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    arena: &'a NodeArena,
    /// Path from the root to the current node with the next key position at
    /// each level.
    stack: Vec<(NodeId, usize)>,
    remaining: usize,
}

impl<'a> Keys<'a> {
    fn new(tree: &'a BTree) -> Self {
        let mut keys = Self {
            arena: &tree.arena,
            stack: Vec::new(),
            remaining: tree.len,
        };
        if let Some(root) = tree.root {
            keys.descend_leftmost(root);
        }
        keys
    }

    fn descend_leftmost(&mut self, mut id: NodeId) {
        loop {
            self.stack.push((id, 0));
            match self.arena[id].children.first() {
                Some(&child) => id = child,
                None => return,
            }
        }
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        loop {
            let (id, pos) = self.stack.last_mut()?;
            let node = &arena[*id];
            if *pos < node.keys.len() {
                let key = node.keys[*pos].as_slice();
                *pos += 1;
                if let Some(&child) = node.children.get(*pos) {
                    self.descend_leftmost(child);
                }
                self.remaining = self.remaining.saturating_sub(1);
                return Some(key);
            }
            self.stack.pop();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Keys<'_> {}

impl BTree {
    /// Iterates over all keys in ascending byte order.
    pub fn keys(&self) -> Keys<'_> {
        Keys::new(self)
    }
}

impl<'a> IntoIterator for &'a BTree {
    type Item = &'a [u8];
    type IntoIter = Keys<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys()
    }
}
