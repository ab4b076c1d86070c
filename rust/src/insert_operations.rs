//! INSERT operations for AvlTreeMap.
//!
//! Insertion descends from the root, places a new leaf, splices it into the
//! thread next to the parent it hangs from, then refreshes heights and
//! sizes and rebalances on the way back up.

use crate::balance;
use crate::compare::Compare;
use crate::iteration::Handle;
use crate::types::{AvlTreeMap, Node, NodeId, NULL_NODE};

impl<K, V, C: Compare<K>> AvlTreeMap<K, V, C> {
    /// Insert a key-value pair unless an equivalent key is already present.
    ///
    /// Returns a handle to the entry holding the key and `true` if a new
    /// entry was created. An existing entry is never overwritten; the
    /// rejected `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltreemap::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// let (first, inserted) = map.insert(1, "one");
    /// assert!(inserted);
    ///
    /// let (again, inserted) = map.insert(1, "uno");
    /// assert!(!inserted);
    /// assert_eq!(first, again);
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (Handle, bool) {
        let existing = self.locate(&key);
        if existing != NULL_NODE {
            return (self.handle(existing), false);
        }
        let inserted = self.insert_new(key, value);
        (self.handle(inserted), true)
    }

    /// Mutable value for `key`, inserting `V::default()` first if the key is
    /// absent. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltreemap::AvlTreeMap;
    ///
    /// let mut counts = AvlTreeMap::new();
    /// for word in ["a", "b", "a"] {
    ///     *counts.index_or_default(word) += 1;
    /// }
    /// assert_eq!(counts.get(&"a"), Some(&2));
    /// assert_eq!(counts.get(&"b"), Some(&1));
    /// ```
    pub fn index_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let mut id = self.locate(&key);
        if id == NULL_NODE {
            id = self.insert_new(key, V::default());
        }
        self.arena[id].value_mut()
    }

    /// Insert a key known to be absent. Returns the new node.
    pub(crate) fn insert_new(&mut self, key: K, value: V) -> NodeId {
        let (root, inserted) = self.insert_below(self.root, key, value);
        self.root = root;
        if self.arena[inserted].prev == NULL_NODE {
            // First node of an empty map: no parent to splice next to.
            let sentinel = self.sentinel;
            self.splice_before(inserted, sentinel);
        }

        #[cfg(feature = "testing")]
        debug_assert!(self.check_invariants(), "invariants broken by insert");

        inserted
    }

    // ============================================================================
    // HELPERS FOR INSERT OPERATIONS
    // ============================================================================

    /// Insert below `t`. Returns the new root of this subtree and the id of
    /// the inserted node.
    fn insert_below(&mut self, t: NodeId, key: K, value: V) -> (NodeId, NodeId) {
        if t == NULL_NODE {
            let id = self.arena.allocate(Node::leaf(key, value));
            return (id, id);
        }

        let goes_left = self.compare.less(&key, self.arena[t].key());
        let inserted = if goes_left {
            let left = self.arena[t].left;
            let (child, inserted) = self.insert_below(left, key, value);
            self.arena[t].left = child;
            if left == NULL_NODE {
                self.splice_before(inserted, t);
            }
            inserted
        } else {
            let right = self.arena[t].right;
            let (child, inserted) = self.insert_below(right, key, value);
            self.arena[t].right = child;
            if right == NULL_NODE {
                self.splice_after(inserted, t);
            }
            inserted
        };

        balance::refresh(&mut self.arena, t);
        let root = balance::rebalance_after_insert(&mut self.arena, &self.compare, t, inserted);
        (root, inserted)
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for AvlTreeMap<K, V, C> {
    /// Insert every pair; for equivalent keys the first one seen wins.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C: Compare<K> + Default> FromIterator<(K, V)> for AvlTreeMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}
