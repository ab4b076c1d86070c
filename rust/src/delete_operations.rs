//! DELETE operations for AvlTreeMap.
//!
//! Removal of a node with two children moves its in-order successor into
//! its tree position. The successor keeps its own entry, id and thread
//! links, so every handle except the one to the erased node stays valid.

use crate::balance;
use crate::compare::Compare;
use crate::error::{AvlMapError, ModifyResult};
use crate::iteration::Handle;
use crate::types::{AvlTreeMap, NodeId, NULL_NODE};

impl<K, V, C: Compare<K>> AvlTreeMap<K, V, C> {
    /// Remove the entry `pos` refers to and return it.
    ///
    /// Fails with `InvalidIterator`, leaving the map untouched, if `pos`
    /// was produced by another map, is the end handle, or refers to an
    /// entry that has already been erased.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltreemap::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// let (pos, _) = map.insert(1, "one");
    /// assert_eq!(map.erase(pos), Ok((1, "one")));
    /// assert!(map.erase(pos).is_err()); // already erased
    /// assert!(map.erase(map.end()).is_err());
    /// ```
    pub fn erase(&mut self, pos: Handle) -> ModifyResult<(K, V)> {
        let target = match self.resolve(pos, "erase") {
            Ok(id) => id,
            Err(e) => {
                tracing::debug!(map = self.id.get(), error = %e, "erase rejected");
                return Err(e);
            }
        };
        if target == self.sentinel {
            tracing::debug!(map = self.id.get(), "erase rejected: end handle");
            return Err(AvlMapError::invalid_iterator("erase", "the end handle has no entry"));
        }
        self.erase_node(target)
            .ok_or_else(|| AvlMapError::data_integrity("erase", "node vanished from the arena"))
    }

    /// Remove a key from the map, returning the value if it existed.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltreemap::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// map.insert(1, "one");
    /// assert_eq!(map.remove(&1), Some("one"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Remove a key from the map, returning the stored key and value.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        match self.locate(key) {
            NULL_NODE => None,
            id => self.erase_node(id),
        }
    }

    /// Detach `target` from the tree and the thread and free it.
    pub(crate) fn erase_node(&mut self, target: NodeId) -> Option<(K, V)> {
        self.root = self.remove_below(self.root, target);
        let entry = self.arena.deallocate(target).and_then(|node| node.entry);

        #[cfg(feature = "testing")]
        debug_assert!(self.check_invariants(), "invariants broken by erase");

        entry
    }

    // ============================================================================
    // HELPERS FOR DELETE OPERATIONS
    // ============================================================================

    /// Remove `target` from the subtree rooted at `t`. Returns the new root
    /// of the subtree.
    fn remove_below(&mut self, t: NodeId, target: NodeId) -> NodeId {
        if t == NULL_NODE {
            return NULL_NODE;
        }

        if t != target {
            if self.compare.less(self.arena[target].key(), self.arena[t].key()) {
                let left = self.arena[t].left;
                self.arena[t].left = self.remove_below(left, target);
            } else {
                let right = self.arena[t].right;
                self.arena[t].right = self.remove_below(right, target);
            }
            balance::refresh(&mut self.arena, t);
            return balance::rebalance_after_erase(&mut self.arena, t);
        }

        let (left, right) = (self.arena[t].left, self.arena[t].right);
        let successor = self.arena[t].next;
        self.unlink(t);
        match (left, right) {
            (NULL_NODE, NULL_NODE) => NULL_NODE,
            (child, NULL_NODE) | (NULL_NODE, child) => child,
            _ => {
                // The successor is the minimum of the right subtree. Pull it
                // out of there and hang both subtrees from it.
                let right = self.detach_min(right);
                {
                    let node = &mut self.arena[successor];
                    node.left = left;
                    node.right = right;
                }
                balance::refresh(&mut self.arena, successor);
                balance::rebalance_after_erase(&mut self.arena, successor)
            }
        }
    }

    /// Cut the minimum node out of the subtree rooted at `t` without
    /// freeing or unthreading it. Returns the new root of the subtree.
    fn detach_min(&mut self, t: NodeId) -> NodeId {
        let left = self.arena[t].left;
        if left == NULL_NODE {
            let right = self.arena[t].right;
            let node = &mut self.arena[t];
            node.right = NULL_NODE;
            return right;
        }
        self.arena[t].left = self.detach_min(left);
        balance::refresh(&mut self.arena, t);
        balance::rebalance_after_erase(&mut self.arena, t)
    }
}
