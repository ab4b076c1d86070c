//! GET operations for AvlTreeMap.
//!
//! This module contains all the read operations for the map: key location,
//! checked and unchecked value access, and the `count`/`find` pair.

use std::ops::Index;

use crate::compare::Compare;
use crate::error::{AvlMapError, KeyResult};
use crate::iteration::Handle;
use crate::types::{AvlTreeMap, NodeId, NULL_NODE};

impl<K, V, C: Compare<K>> AvlTreeMap<K, V, C> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Get a reference to the value associated with a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltreemap::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// map.insert(1, "one");
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        match self.locate(key) {
            NULL_NODE => None,
            id => Some(self.arena[id].value()),
        }
    }

    /// Get a mutable reference to the value for a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltreemap::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// map.insert(1, "one");
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value = "ONE";
    /// }
    /// assert_eq!(map.get(&1), Some(&"ONE"));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.locate(key) {
            NULL_NODE => None,
            id => Some(self.arena[id].value_mut()),
        }
    }

    /// Value for `key`, or `OutOfBound` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltreemap::{AvlMapError, AvlTreeMap};
    ///
    /// let mut map = AvlTreeMap::new();
    /// map.insert(1, "one");
    /// assert_eq!(map.at(&1), Ok(&"one"));
    /// assert_eq!(map.at(&2), Err(AvlMapError::OutOfBound));
    /// ```
    pub fn at(&self, key: &K) -> KeyResult<&V> {
        self.get(key).ok_or(AvlMapError::OutOfBound)
    }

    /// Mutable value for `key`, or `OutOfBound` if the key is absent.
    pub fn at_mut(&mut self, key: &K) -> KeyResult<&mut V> {
        self.get_mut(key).ok_or(AvlMapError::OutOfBound)
    }

    /// Check if key exists in the map.
    pub fn contains_key(&self, key: &K) -> bool {
        self.locate(key) != NULL_NODE
    }

    /// Number of entries with a key equivalent to `key`: 0 or 1.
    pub fn count(&self, key: &K) -> usize {
        usize::from(self.contains_key(key))
    }

    /// Handle to the entry for `key`, or `end()` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltreemap::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// map.insert(7, "seven");
    /// let found = map.find(&7);
    /// assert_eq!(map.entry_at(found), Some((&7, &"seven")));
    /// assert_eq!(map.find(&8), map.end());
    /// ```
    pub fn find(&self, key: &K) -> Handle {
        match self.locate(key) {
            NULL_NODE => self.end(),
            id => self.handle(id),
        }
    }

    // ============================================================================
    // PRIVATE HELPER METHODS FOR GET OPERATIONS
    // ============================================================================

    /// Descend from the root to the node whose key is equivalent to `key`.
    /// Returns `NULL_NODE` when a leaf boundary is reached first.
    pub(crate) fn locate(&self, key: &K) -> NodeId {
        let mut current = self.root;
        while current != NULL_NODE {
            let node = &self.arena[current];
            current = if self.compare.less(key, node.key()) {
                node.left
            } else if self.compare.less(node.key(), key) {
                node.right
            } else {
                return current;
            };
        }
        NULL_NODE
    }
}

impl<K, V, C> AvlTreeMap<K, V, C> {
    /// The entry with the smallest key.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.arena[self.head].entry()
    }

    /// The entry with the largest key.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let last = self.arena[self.sentinel].prev;
        self.arena[last].entry()
    }
}

impl<K, V, C: Compare<K>> Index<&K> for AvlTreeMap<K, V, C> {
    type Output = V;

    /// Read-only indexing behaves like [`AvlTreeMap::at`].
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &K) -> &V {
        match self.at(key) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}
