//! Level-order text rendering for debugging.

use std::fmt;

use super::node::NodeId;
use super::tree::BTree;

impl BTree {
    /// Renders the tree breadth-first, one line per depth.
    ///
    /// Each node prints as its comma-joined keys in parentheses; nodes on the
    /// same depth are separated by a space. Non-UTF-8 bytes are rendered
    /// lossily. A tree without root renders as an empty string.
    pub fn visualize(&self) -> String {
        let mut out = String::new();
        let mut level: Vec<NodeId> = self.root.into_iter().collect();
        while !level.is_empty() {
            let mut next = Vec::new();
            for (i, &id) in level.iter().enumerate() {
                let node = &self.arena[id];
                if i > 0 {
                    out.push(' ');
                }
                out.push('(');
                for (k, key) in node.keys.iter().enumerate() {
                    if k > 0 {
                        out.push(',');
                    }
                    out.push_str(&String::from_utf8_lossy(key));
                }
                out.push(')');
                next.extend_from_slice(&node.children);
            }
            out.push('\n');
            level = next;
        }
        out
    }
}

impl fmt::Display for BTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.visualize())
    }
}
