//! Structural invariant checks.

use crate::error::{BTreeError, Result};

use super::key;
use super::node::NodeId;
use super::tree::BTree;

#[derive(Default)]
struct Walk {
    keys: usize,
    nodes: usize,
    leaf_depth: Option<usize>,
}

fn corruption(message: String) -> BTreeError {
    BTreeError::Corruption(message)
}

impl BTree {
    /// Walks the whole tree and reports the first broken invariant.
    ///
    /// Checked: key counts within `[ceil(order/2) - 1, order - 1]` (the root
    /// is exempt from the lower bound), `keys + 1` children per internal
    /// node, strictly ascending keys bounded by the parent separators, equal
    /// leaf depth, parent back-references, and the tracked length.
    pub fn verify(&self) -> Result<()> {
        let Some(root) = self.root else {
            if self.len != 0 || self.arena.live() != 0 {
                return Err(corruption(format!(
                    "tree without root tracks {} keys and {} nodes",
                    self.len,
                    self.arena.live()
                )));
            }
            return Ok(());
        };
        if let Some(parent) = self.arena[root].parent {
            return Err(corruption(format!(
                "root {} points at parent {}",
                root.0, parent.0
            )));
        }

        let mut walk = Walk::default();
        self.verify_node(root, 0, None, None, &mut walk)?;

        if walk.keys != self.len {
            return Err(corruption(format!(
                "tree tracks {} keys but holds {}",
                self.len, walk.keys
            )));
        }
        if walk.nodes != self.arena.live() {
            return Err(corruption(format!(
                "{} nodes reachable but {} allocated",
                walk.nodes,
                self.arena.live()
            )));
        }
        Ok(())
    }

    fn verify_node(
        &self,
        id: NodeId,
        depth: usize,
        low: Option<&[u8]>,
        high: Option<&[u8]>,
        walk: &mut Walk,
    ) -> Result<()> {
        let node = &self.arena[id];
        walk.nodes += 1;
        walk.keys += node.keys.len();

        if node.keys.len() > self.max_keys() {
            return Err(corruption(format!(
                "node {} holds {} keys, above the maximum {}",
                id.0,
                node.keys.len(),
                self.max_keys()
            )));
        }
        if Some(id) != self.root && node.keys.len() < self.min_keys() {
            return Err(corruption(format!(
                "node {} holds {} keys, below the minimum {}",
                id.0,
                node.keys.len(),
                self.min_keys()
            )));
        }
        if node.keys.iter().any(|k| k.is_empty()) {
            return Err(corruption(format!("node {} stores an empty key", id.0)));
        }
        if node.keys.windows(2).any(|pair| key::compare(&pair[0], &pair[1]).is_ge()) {
            return Err(corruption(format!("node {} keys are not strictly ascending", id.0)));
        }
        if let (Some(low), Some(first)) = (low, node.keys.first()) {
            if key::compare(first, low).is_le() {
                return Err(corruption(format!("node {} key below its separator", id.0)));
            }
        }
        if let (Some(high), Some(last)) = (high, node.keys.last()) {
            if key::compare(last, high).is_ge() {
                return Err(corruption(format!("node {} key above its separator", id.0)));
            }
        }

        if node.is_leaf() {
            return match walk.leaf_depth {
                None => {
                    walk.leaf_depth = Some(depth);
                    Ok(())
                }
                Some(expected) if expected == depth => Ok(()),
                Some(expected) => Err(corruption(format!(
                    "leaf {} at depth {depth}, expected {expected}",
                    id.0
                ))),
            };
        }

        if node.children.len() != node.keys.len() + 1 {
            return Err(corruption(format!(
                "node {} has {} keys but {} children",
                id.0,
                node.keys.len(),
                node.children.len()
            )));
        }
        for (i, &child) in node.children.iter().enumerate() {
            if self.arena[child].parent != Some(id) {
                return Err(corruption(format!(
                    "child {} of node {} has a stale parent link",
                    child.0, id.0
                )));
            }
            let child_low = if i == 0 {
                low
            } else {
                Some(node.keys[i - 1].as_slice())
            };
            let child_high = node.keys.get(i).map(Vec::as_slice).or(high);
            self.verify_node(child, depth + 1, child_low, child_high, walk)?;
        }
        Ok(())
    }
}
