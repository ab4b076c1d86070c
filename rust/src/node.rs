//! Node implementation for AvlTreeMap.
//!
//! Constructors and entry accessors for [`Node`]. Structural bookkeeping
//! (heights, sizes, rotations) lives in `balance`, thread links in `thread`.

use crate::types::{Node, NodeId, NULL_NODE};

impl<K, V> Node<K, V> {
    /// A fresh leaf holding `key` and `value`, not yet linked anywhere.
    pub(crate) fn leaf(key: K, value: V) -> Self {
        Self {
            entry: Some((key, value)),
            height: 1,
            size: 1,
            left: NULL_NODE,
            right: NULL_NODE,
            prev: NULL_NODE,
            next: NULL_NODE,
        }
    }

    /// The end marker. Its thread links are set once it has an id.
    pub(crate) fn sentinel() -> Self {
        Self::default()
    }

    /// Copy of this node's entry and structural counters, without links.
    pub(crate) fn detached_copy(&self) -> Self
    where
        K: Clone,
        V: Clone,
    {
        Self {
            entry: self.entry.clone(),
            height: self.height,
            size: self.size,
            ..Self::default()
        }
    }

    /// Returns true for the sentinel (and for freed arena slots).
    pub fn is_sentinel(&self) -> bool {
        self.entry.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.left == NULL_NODE && self.right == NULL_NODE
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn subtree_size(&self) -> usize {
        self.size
    }

    pub fn left(&self) -> NodeId {
        self.left
    }

    pub fn right(&self) -> NodeId {
        self.right
    }

    pub fn prev(&self) -> NodeId {
        self.prev
    }

    pub fn next(&self) -> NodeId {
        self.next
    }

    /// Key of a tree node.
    ///
    /// Only nodes reachable from the root may be asked; the sentinel is never
    /// part of the tree.
    pub(crate) fn key(&self) -> &K {
        match &self.entry {
            Some((key, _)) => key,
            None => unreachable!("sentinel reached through a tree edge"),
        }
    }

    pub(crate) fn value(&self) -> &V {
        match &self.entry {
            Some((_, value)) => value,
            None => unreachable!("sentinel reached through a tree edge"),
        }
    }

    pub(crate) fn value_mut(&mut self) -> &mut V {
        match &mut self.entry {
            Some((_, value)) => value,
            None => unreachable!("sentinel reached through a tree edge"),
        }
    }

    /// Borrow the entry as a `(key, value)` pair, `None` for the sentinel.
    pub fn entry(&self) -> Option<(&K, &V)> {
        self.entry.as_ref().map(|(key, value)| (key, value))
    }
}

impl<K, V> Default for Node<K, V> {
    /// An entry-less, unlinked node: the shape of the sentinel and of a
    /// freed arena slot.
    fn default() -> Self {
        Self {
            entry: None,
            height: 0,
            size: 0,
            left: NULL_NODE,
            right: NULL_NODE,
            prev: NULL_NODE,
            next: NULL_NODE,
        }
    }
}
