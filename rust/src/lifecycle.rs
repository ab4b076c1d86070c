//! Copying, clearing and comparing whole maps.
//!
//! A clone is a structural copy: every node is copied with its height and
//! subtree size, so no rebalancing happens, and the thread is rebuilt from
//! an in-order walk of the copy. The clone gets its own [`MapId`], so
//! handles of the source are rejected by the copy and vice versa.
//!
//! [`MapId`]: crate::MapId

use std::fmt;

use crate::compact_arena::CompactArena;
use crate::types::{AvlTreeMap, MapId, Node, NodeId, NULL_NODE};

/// Copy the subtree rooted at `id` from `source` into `target`, returning
/// the id of the copied root. Thread links are left unset.
fn copy_subtree<K: Clone, V: Clone>(
    source: &CompactArena<Node<K, V>>,
    id: NodeId,
    target: &mut CompactArena<Node<K, V>>,
) -> NodeId {
    if id == NULL_NODE {
        return NULL_NODE;
    }
    let node = &source[id];
    let left = copy_subtree(source, node.left, target);
    let right = copy_subtree(source, node.right, target);
    let mut copy = node.detached_copy();
    copy.left = left;
    copy.right = right;
    target.allocate(copy)
}

impl<K, V, C> AvlTreeMap<K, V, C> {
    /// Remove every entry.
    ///
    /// All handles into the map become invalid, including `end()`: the
    /// sentinel is reallocated along with everything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltreemap::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// map.insert(1, "a");
    /// let old_end = map.end();
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert!(map.prev_handle(old_end).is_err());
    /// ```
    pub fn clear(&mut self) {
        let freed = self.len();
        self.free_subtree(self.root);
        self.arena.deallocate(self.sentinel);
        self.sentinel = self.arena.allocate(Node::sentinel());
        self.root = NULL_NODE;
        self.reset_thread();
        tracing::debug!(map = self.id.get(), freed, "map cleared");
    }

    /// Free every node of a subtree, children before parents.
    fn free_subtree(&mut self, id: NodeId) {
        if id == NULL_NODE {
            return;
        }
        let (left, right) = (self.arena[id].left, self.arena[id].right);
        self.free_subtree(left);
        self.free_subtree(right);
        self.arena.deallocate(id);
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for AvlTreeMap<K, V, C> {
    fn clone(&self) -> Self {
        let mut arena = CompactArena::with_capacity(self.len() + 1);
        let sentinel = arena.allocate(Node::sentinel());
        let root = copy_subtree(&self.arena, self.root, &mut arena);
        let mut map = Self {
            id: MapId::fresh(),
            root,
            head: sentinel,
            sentinel,
            arena,
            compare: self.compare.clone(),
        };
        map.rebuild_thread();
        tracing::debug!(
            source = self.id.get(),
            copy = map.id.get(),
            len = map.len(),
            "map cloned"
        );
        map
    }

    /// Replace the contents with a copy of `source`.
    ///
    /// The map keeps its own identity, but every handle into its previous
    /// contents becomes invalid.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.arena.reserve(source.len());
        self.root = copy_subtree(&source.arena, source.root, &mut self.arena);
        self.compare = source.compare.clone();
        self.rebuild_thread();
        tracing::debug!(
            source = source.id.get(),
            copy = self.id.get(),
            len = self.len(),
            "map cloned in place"
        );
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for AvlTreeMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for AvlTreeMap<K, V, C> {
    /// Maps are equal when they hold equal entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for AvlTreeMap<K, V, C> {}

#[cfg(test)]
mod tests {
    use crate::AvlTreeMap;

    fn sample() -> AvlTreeMap<i32, String> {
        [3, 1, 4, 5, 9, 2, 6].iter().map(|&k| (k, k.to_string())).collect()
    }

    #[test]
    fn test_clone_is_deep_and_independent() {
        let source = sample();
        let mut copy = source.clone();
        assert_eq!(copy, source);
        assert!(copy.check_invariants());

        copy.get_mut(&4).unwrap().push('!');
        copy.remove(&1);
        assert_eq!(source.get(&4).map(String::as_str), Some("4"));
        assert!(source.contains_key(&1));
        assert_ne!(copy, source);
    }

    #[test]
    fn test_clone_rejects_source_handles() {
        let source = sample();
        let copy = source.clone();
        assert_ne!(copy.map_id(), source.map_id());
        let pos = source.find(&5);
        assert_eq!(copy.entry_at(pos), None);
        assert!(copy.next_handle(source.end()).is_err());
    }

    #[test]
    fn test_clone_of_empty_map() {
        let empty: AvlTreeMap<i32, i32> = AvlTreeMap::new();
        let copy = empty.clone();
        assert!(copy.is_empty());
        assert_eq!(copy.begin(), copy.end());
        assert!(copy.check_invariants());
    }

    #[test]
    fn test_clone_from_replaces_contents() {
        let source = sample();
        let mut target: AvlTreeMap<i32, String> = (100..110).map(|k| (k, String::new())).collect();
        let stale = target.find(&105);
        target.clone_from(&source);
        assert_eq!(target, source);
        assert!(target.check_invariants());
        assert_eq!(target.entry_at(stale), None);
    }

    #[test]
    fn test_clear_then_reuse() {
        let mut map = sample();
        let begin = map.begin();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.arena.len(), 1);
        assert!(map.erase(begin).is_err());
        assert!(map.check_invariants());

        map.insert(7, "seven".to_string());
        assert_eq!(map.len(), 1);
        assert_eq!(map.first_key_value().map(|(k, _)| *k), Some(7));
    }

    #[test]
    fn test_debug_format() {
        let map: AvlTreeMap<i32, char> = [(2, 'b'), (1, 'a')].into_iter().collect();
        assert_eq!(format!("{:?}", map), "{1: 'a', 2: 'b'}");
    }
}
