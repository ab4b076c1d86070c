//! Construction and initialization logic for AvlTreeMap.
//!
//! Every constructor allocates the sentinel up front and links it to
//! itself, so `begin() == end()` holds for a fresh map.

use crate::compact_arena::CompactArena;
use crate::compare::NaturalOrder;
use crate::types::{AvlTreeMap, MapId, Node, NULL_NODE};

impl<K, V> AvlTreeMap<K, V, NaturalOrder> {
    /// Create an empty map ordered by `K: Ord`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltreemap::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::<i32, String>::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.begin(), map.end());
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Create an empty map with room for `capacity` entries before the node
    /// arena has to grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltreemap::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::<u64, u64>::with_capacity(1024);
    /// assert!(map.arena_stats().total_capacity > 1024);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<K, V, C> AvlTreeMap<K, V, C> {
    /// Create an empty map ordered by `compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltreemap::{AvlTreeMap, ReverseOrder};
    ///
    /// let mut map = AvlTreeMap::with_comparator(ReverseOrder);
    /// map.insert(1, 'a');
    /// map.insert(2, 'b');
    /// assert_eq!(map.first_key_value(), Some((&2, &'b')));
    /// ```
    pub fn with_comparator(compare: C) -> Self {
        Self::from_arena(CompactArena::new(), compare)
    }

    /// Create an empty map ordered by `compare` with room for `capacity`
    /// entries.
    pub fn with_capacity_and_comparator(capacity: usize, compare: C) -> Self {
        // One extra slot for the sentinel.
        Self::from_arena(CompactArena::with_capacity(capacity + 1), compare)
    }

    fn from_arena(mut arena: CompactArena<Node<K, V>>, compare: C) -> Self {
        let sentinel = arena.allocate(Node::sentinel());
        let mut map = Self {
            id: MapId::fresh(),
            root: NULL_NODE,
            head: sentinel,
            sentinel,
            arena,
            compare,
        };
        map.reset_thread();
        map
    }

    /// The identity tag carried by handles produced by this map.
    pub fn map_id(&self) -> MapId {
        self.id
    }

    /// The ordering relation of this map.
    pub fn comparator(&self) -> &C {
        &self.compare
    }
}

// Default implementations
impl<K, V, C: Default> Default for AvlTreeMap<K, V, C> {
    /// Create an empty map with the comparator's default value.
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}
