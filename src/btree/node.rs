//! Tree nodes and the arena that owns them.

use std::ops::{Index, IndexMut};

use super::key::Key;

/// Index of a node inside a [`NodeArena`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub(crate) struct NodeId(pub(crate) usize);

#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    /// Back-reference to the owning node; `None` for the root.
    pub(crate) parent: Option<NodeId>,
    pub(crate) keys: Vec<Key>,
    /// Empty for leaves, otherwise `keys.len() + 1` entries.
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn leaf(parent: Option<NodeId>, capacity: usize) -> Self {
        Self {
            parent,
            keys: Vec::with_capacity(capacity),
            children: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Slot table owning every node of one tree.
///
/// Freed slots are recycled by later allocations, so a `NodeId` must not be
/// used after the node it names has been released.
#[derive(Debug, Clone, Default)]
pub(crate) struct NodeArena {
    slots: Vec<Option<Node>>,
    free: Vec<NodeId>,
    live: usize,
}

impl NodeArena {
    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        self.live += 1;
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Removes a node from the arena and hands it back to the caller.
    pub(crate) fn release(&mut self, id: NodeId) -> Node {
        match self.slots.get_mut(id.0).and_then(Option::take) {
            Some(node) => {
                self.live -= 1;
                self.free.push(id);
                node
            }
            None => panic!("release of dangling node {id:?}"),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.live = 0;
    }

    /// Number of nodes currently allocated.
    pub(crate) fn live(&self) -> usize {
        self.live
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        match self.slots.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling node {id:?}"),
        }
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling node {id:?}"),
        }
    }
}
