//! Iterator implementations for AvlTreeMap.
//!
//! Three ways to walk the map, all following the sorted thread:
//!
//! - [`Handle`]: a detached, `Copy` position that does not borrow the map.
//!   It remembers which map produced it and the generation of its node, so
//!   a foreign or stale handle is reported as `InvalidIterator` instead of
//!   resolving to some other entry.
//! - [`Cursor`] / [`CursorMut`]: borrowing positions with bidirectional
//!   steps that fail at the boundaries instead of wrapping. A `CursorMut`
//!   can be turned into a `Cursor`, never the reverse.
//! - [`Iter`], [`IterMut`], [`Keys`], [`Values`], [`ValuesMut`],
//!   [`IntoIter`]: ordinary double-ended Rust iterators.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::compact_arena::CompactArena;
use crate::compare::Compare;
use crate::error::{AvlMapError, MapResult};
use crate::types::{AvlTreeMap, MapId, Node, NodeId};

// ============================================================================
// HANDLES
// ============================================================================

/// A position in one map: an entry, or the end.
///
/// Handles compare equal when they name the same node id, whichever map
/// produced them; only compare handles of the same map.
#[derive(Debug, Clone, Copy)]
pub struct Handle {
    owner: MapId,
    node: NodeId,
    generation: u32,
}

impl Handle {
    /// The map this handle belongs to.
    pub fn owner(&self) -> MapId {
        self.owner
    }

    /// The node this handle points at.
    pub fn node_id(&self) -> NodeId {
        self.node
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl Eq for Handle {}

impl<K, V, C> AvlTreeMap<K, V, C> {
    pub(crate) fn handle(&self, id: NodeId) -> Handle {
        Handle {
            owner: self.id,
            node: id,
            generation: self.arena.generation(id).unwrap_or_default(),
        }
    }

    /// Map a handle back to its node, rejecting foreign and stale handles.
    pub(crate) fn resolve(&self, pos: Handle, operation: &str) -> MapResult<NodeId> {
        if pos.owner != self.id {
            return Err(AvlMapError::invalid_iterator(
                operation,
                "handle belongs to another map",
            ));
        }
        if !self.arena.is_current(pos.node, pos.generation) {
            return Err(AvlMapError::invalid_iterator(
                operation,
                "handle refers to an erased entry",
            ));
        }
        Ok(pos.node)
    }

    /// Handle to the smallest entry, or `end()` when empty.
    pub fn begin(&self) -> Handle {
        self.handle(self.head)
    }

    /// Handle to the position one past the largest entry.
    pub fn end(&self) -> Handle {
        self.handle(self.sentinel)
    }

    /// Step a handle to the next entry (or to `end()`).
    ///
    /// # Examples
    ///
    /// ```
    /// use avltreemap::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// map.insert(1, 'a');
    /// let pos = map.next_handle(map.begin()).unwrap();
    /// assert_eq!(pos, map.end());
    /// assert!(map.next_handle(pos).is_err());
    /// ```
    pub fn next_handle(&self, pos: Handle) -> MapResult<Handle> {
        let id = self.resolve(pos, "increment")?;
        if id == self.sentinel {
            return Err(AvlMapError::invalid_iterator("increment", "already at end"));
        }
        Ok(self.handle(self.arena[id].next))
    }

    /// Step a handle to the previous entry.
    ///
    /// Fails at `begin()`; stepping back from `end()` reaches the largest
    /// entry.
    pub fn prev_handle(&self, pos: Handle) -> MapResult<Handle> {
        let id = self.resolve(pos, "decrement")?;
        if id == self.head {
            return Err(AvlMapError::invalid_iterator("decrement", "already at begin"));
        }
        Ok(self.handle(self.arena[id].prev))
    }

    /// The entry a handle refers to. `None` for `end()` and for foreign or
    /// stale handles.
    pub fn entry_at(&self, pos: Handle) -> Option<(&K, &V)> {
        let id = self.resolve(pos, "dereference").ok()?;
        self.arena[id].entry()
    }

    /// Mutable access to the value a handle refers to. Keys never change.
    pub fn value_at_mut(&mut self, pos: Handle) -> Option<&mut V> {
        let id = self.resolve(pos, "dereference").ok()?;
        self.arena
            .get_mut(id)?
            .entry
            .as_mut()
            .map(|(_, value)| value)
    }

    // ============================================================================
    // CURSORS
    // ============================================================================

    /// Read-only cursor at the smallest entry.
    pub fn cursor_front(&self) -> Cursor<'_, K, V, C> {
        Cursor { map: self, node: self.head }
    }

    /// Read-only cursor at the end position.
    pub fn cursor_end(&self) -> Cursor<'_, K, V, C> {
        Cursor { map: self, node: self.sentinel }
    }

    /// Same as [`cursor_front`](Self::cursor_front).
    pub fn cbegin(&self) -> Cursor<'_, K, V, C> {
        self.cursor_front()
    }

    /// Same as [`cursor_end`](Self::cursor_end).
    pub fn cend(&self) -> Cursor<'_, K, V, C> {
        self.cursor_end()
    }

    /// Read-only cursor at a handle's position.
    pub fn cursor_at(&self, pos: Handle) -> MapResult<Cursor<'_, K, V, C>> {
        let node = self.resolve(pos, "cursor_at")?;
        Ok(Cursor { map: self, node })
    }

    /// Mutable cursor at the smallest entry.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, K, V, C> {
        let node = self.head;
        CursorMut { map: self, node }
    }

    /// Mutable cursor at the end position.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, K, V, C> {
        let node = self.sentinel;
        CursorMut { map: self, node }
    }

    /// Mutable cursor at a handle's position.
    pub fn cursor_at_mut(&mut self, pos: Handle) -> MapResult<CursorMut<'_, K, V, C>> {
        let node = self.resolve(pos, "cursor_at_mut")?;
        Ok(CursorMut { map: self, node })
    }

    // ============================================================================
    // ITERATORS
    // ============================================================================

    /// Returns an iterator over all key-value pairs in key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            arena: &self.arena,
            front: self.head,
            back: self.arena[self.sentinel].prev,
            remaining: self.len(),
        }
    }

    /// Returns an iterator over all entries with mutable values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let front = self.head;
        let back = self.arena[self.sentinel].prev;
        let remaining = self.len();
        IterMut {
            base: self.arena.slots_mut_ptr(),
            front,
            back,
            remaining,
            _marker: PhantomData,
        }
    }

    /// Returns an iterator over all keys in order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { items: self.iter() }
    }

    /// Returns an iterator over all values in key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { items: self.iter() }
    }

    /// Returns an iterator over all values in key order, mutably.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut { items: self.iter_mut() }
    }
}

// ============================================================================
// CURSOR
// ============================================================================

/// Read-only bidirectional position in a map.
pub struct Cursor<'a, K, V, C> {
    map: &'a AvlTreeMap<K, V, C>,
    node: NodeId,
}

impl<'a, K, V, C> Cursor<'a, K, V, C> {
    /// Step to the next entry or to the end; fails at the end.
    pub fn move_next(&mut self) -> MapResult<()> {
        if self.node == self.map.sentinel {
            return Err(AvlMapError::invalid_iterator("increment", "already at end"));
        }
        self.node = self.map.arena[self.node].next;
        Ok(())
    }

    /// Step to the previous entry; fails at the first entry.
    pub fn move_prev(&mut self) -> MapResult<()> {
        if self.node == self.map.head {
            return Err(AvlMapError::invalid_iterator("decrement", "already at begin"));
        }
        self.node = self.map.arena[self.node].prev;
        Ok(())
    }

    pub fn is_end(&self) -> bool {
        self.node == self.map.sentinel
    }

    /// Current entry, `None` at the end.
    pub fn entry(&self) -> Option<(&'a K, &'a V)> {
        self.map.arena[self.node].entry()
    }

    pub fn key(&self) -> Option<&'a K> {
        self.entry().map(|(key, _)| key)
    }

    pub fn value(&self) -> Option<&'a V> {
        self.entry().map(|(_, value)| value)
    }

    /// Detached handle to the current position.
    pub fn handle(&self) -> Handle {
        self.map.handle(self.node)
    }
}

impl<K, V, C> Clone for Cursor<'_, K, V, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, C> Copy for Cursor<'_, K, V, C> {}

impl<K, V, C> PartialEq for Cursor<'_, K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for Cursor<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.entry()).finish()
    }
}

// ============================================================================
// CURSORMUT
// ============================================================================

/// Bidirectional position in a map that can modify values and remove
/// entries.
pub struct CursorMut<'a, K, V, C> {
    map: &'a mut AvlTreeMap<K, V, C>,
    node: NodeId,
}

impl<'a, K, V, C> CursorMut<'a, K, V, C> {
    /// Step to the next entry or to the end; fails at the end.
    pub fn move_next(&mut self) -> MapResult<()> {
        if self.node == self.map.sentinel {
            return Err(AvlMapError::invalid_iterator("increment", "already at end"));
        }
        self.node = self.map.arena[self.node].next;
        Ok(())
    }

    /// Step to the previous entry; fails at the first entry.
    pub fn move_prev(&mut self) -> MapResult<()> {
        if self.node == self.map.head {
            return Err(AvlMapError::invalid_iterator("decrement", "already at begin"));
        }
        self.node = self.map.arena[self.node].prev;
        Ok(())
    }

    pub fn is_end(&self) -> bool {
        self.node == self.map.sentinel
    }

    pub fn entry(&self) -> Option<(&K, &V)> {
        self.map.arena[self.node].entry()
    }

    pub fn key(&self) -> Option<&K> {
        self.entry().map(|(key, _)| key)
    }

    pub fn value(&self) -> Option<&V> {
        self.entry().map(|(_, value)| value)
    }

    /// Current value, mutably; `None` at the end.
    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.map.arena[self.node]
            .entry
            .as_mut()
            .map(|(_, value)| value)
    }

    /// Detached handle to the current position.
    pub fn handle(&self) -> Handle {
        self.map.handle(self.node)
    }

    /// A read-only view of the current position.
    pub fn as_cursor(&self) -> Cursor<'_, K, V, C> {
        Cursor { map: &*self.map, node: self.node }
    }

    /// Give up write access and keep the position.
    pub fn into_cursor(self) -> Cursor<'a, K, V, C> {
        Cursor { map: self.map, node: self.node }
    }
}

impl<K, V, C: Compare<K>> CursorMut<'_, K, V, C> {
    /// Remove the current entry and move to the one after it.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltreemap::AvlTreeMap;
    ///
    /// let mut map: AvlTreeMap<i32, i32> = (0..6).map(|i| (i, i)).collect();
    /// let mut cursor = map.cursor_front_mut();
    /// while !cursor.is_end() {
    ///     if cursor.key().is_some_and(|k| k % 2 == 1) {
    ///         cursor.remove_current().unwrap();
    ///     } else {
    ///         cursor.move_next().unwrap();
    ///     }
    /// }
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [0, 2, 4]);
    /// ```
    pub fn remove_current(&mut self) -> MapResult<(K, V)> {
        if self.is_end() {
            return Err(AvlMapError::invalid_iterator(
                "remove_current",
                "the end position has no entry",
            ));
        }
        let next = self.map.arena[self.node].next;
        let entry = self
            .map
            .erase_node(self.node)
            .ok_or_else(|| AvlMapError::data_integrity("remove_current", "node vanished"))?;
        self.node = next;
        Ok(entry)
    }
}

impl<'a, K, V, C> From<CursorMut<'a, K, V, C>> for Cursor<'a, K, V, C> {
    fn from(cursor: CursorMut<'a, K, V, C>) -> Self {
        cursor.into_cursor()
    }
}

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Iterator over key-value pairs in key order.
pub struct Iter<'a, K, V> {
    arena: &'a CompactArena<Node<K, V>>,
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

/// Iterator over key-value pairs with mutable values.
pub struct IterMut<'a, K, V> {
    base: *mut Node<K, V>,
    front: NodeId,
    back: NodeId,
    remaining: usize,
    _marker: PhantomData<&'a mut Node<K, V>>,
}

/// Iterator over keys in order.
pub struct Keys<'a, K, V> {
    items: Iter<'a, K, V>,
}

/// Iterator over values in key order.
pub struct Values<'a, K, V> {
    items: Iter<'a, K, V>,
}

/// Iterator over mutable values in key order.
pub struct ValuesMut<'a, K, V> {
    items: IterMut<'a, K, V>,
}

/// Owning iterator over key-value pairs in key order.
pub struct IntoIter<K, V> {
    arena: CompactArena<Node<K, V>>,
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

// ============================================================================
// ITER IMPLEMENTATION
// ============================================================================

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.get(self.front)?;
        self.front = node.next;
        self.remaining -= 1;
        node.entry()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.get(self.back)?;
        self.back = node.prev;
        self.remaining -= 1;
        node.entry()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

// ============================================================================
// ITERMUT IMPLEMENTATION
// ============================================================================

impl<'a, K, V> IterMut<'a, K, V> {
    /// # Safety
    /// `id` must be a live node of the arena `base` came from that this
    /// iterator has not yielded before. The `remaining` count guarantees
    /// the front and back walks never meet on the same node.
    unsafe fn node(&self, id: NodeId) -> &'a mut Node<K, V> {
        &mut *self.base.add(id as usize)
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: thread ids are live while the map is mutably borrowed,
        // and each node is visited at most once.
        let node = unsafe { self.node(self.front) };
        self.front = node.next;
        self.remaining -= 1;
        node.entry.as_mut().map(|(key, value)| (&*key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: as in `next`.
        let node = unsafe { self.node(self.back) };
        self.back = node.prev;
        self.remaining -= 1;
        node.entry.as_mut().map(|(key, value)| (&*key, value))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

// ============================================================================
// KEYS / VALUES IMPLEMENTATION
// ============================================================================

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ValuesMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}

// ============================================================================
// INTOITER IMPLEMENTATION
// ============================================================================

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.deallocate(self.front)?;
        self.front = node.next;
        self.remaining -= 1;
        node.entry
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.deallocate(self.back)?;
        self.back = node.prev;
        self.remaining -= 1;
        node.entry
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V, C> IntoIterator for AvlTreeMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        let remaining = self.len();
        let back = self.arena[self.sentinel].prev;
        IntoIter {
            front: self.head,
            back,
            remaining,
            arena: self.arena,
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a AvlTreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a mut AvlTreeMap<K, V, C> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use crate::AvlTreeMap;

    fn sample() -> AvlTreeMap<i32, String> {
        (1..=5).map(|i| (i, format!("v{}", i))).collect()
    }

    #[test]
    fn test_handle_walk_forward_and_back() {
        let map = sample();
        let mut pos = map.begin();
        let mut seen = Vec::new();
        while pos != map.end() {
            seen.push(*map.entry_at(pos).unwrap().0);
            pos = map.next_handle(pos).unwrap();
        }
        assert_eq!(seen, [1, 2, 3, 4, 5]);

        let mut back = Vec::new();
        let mut pos = map.end();
        while pos != map.begin() {
            pos = map.prev_handle(pos).unwrap();
            back.push(*map.entry_at(pos).unwrap().0);
        }
        assert_eq!(back, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_handle_boundaries() {
        let map = sample();
        assert!(map.next_handle(map.end()).unwrap_err().is_invalid_iterator());
        assert!(map.prev_handle(map.begin()).unwrap_err().is_invalid_iterator());
        assert_eq!(map.entry_at(map.end()), None);
    }

    #[test]
    fn test_empty_map_boundaries() {
        let map: AvlTreeMap<i32, i32> = AvlTreeMap::new();
        assert_eq!(map.begin(), map.end());
        assert!(map.next_handle(map.end()).is_err());
        assert!(map.prev_handle(map.end()).is_err());
        assert!(map.cursor_front().is_end());
    }

    #[test]
    fn test_foreign_handle_is_rejected() {
        let a = sample();
        let b = sample();
        let pos = a.find(&3);
        assert!(b.next_handle(pos).unwrap_err().is_invalid_iterator());
        assert_eq!(b.entry_at(pos), None);
        assert!(b.cursor_at(pos).is_err());
    }

    #[test]
    fn test_stale_handle_is_rejected_after_slot_reuse() {
        let mut map = sample();
        let pos = map.find(&3);
        map.remove(&3);
        map.insert(30, "thirty".to_string()); // recycles the freed slot
        assert_eq!(map.entry_at(pos), None);
        assert!(map.erase(pos).unwrap_err().is_invalid_iterator());
        assert_eq!(map.len(), 5);
    }

    #[test]
    fn test_cursor_steps() {
        let map = sample();
        let mut cursor = map.cursor_front();
        assert_eq!(cursor.key(), Some(&1));
        assert!(cursor.move_prev().is_err());
        for _ in 0..5 {
            cursor.move_next().unwrap();
        }
        assert!(cursor.is_end());
        assert_eq!(cursor.entry(), None);
        assert!(cursor.move_next().is_err());
        cursor.move_prev().unwrap();
        assert_eq!(cursor.value().map(String::as_str), Some("v5"));
        assert_eq!(cursor, map.cursor_at(map.find(&5)).unwrap());
        assert_eq!(map.cbegin(), map.cursor_front());
        assert_eq!(map.cend(), map.cursor_end());
    }

    #[test]
    fn test_cursor_mut_edits_and_narrows() {
        let mut map = sample();
        let pos = map.find(&2);
        let mut cursor = map.cursor_at_mut(pos).unwrap();
        cursor.value_mut().unwrap().push('!');
        cursor.move_next().unwrap();
        assert_eq!(cursor.key(), Some(&3));
        assert_eq!(cursor.as_cursor().key(), Some(&3));
        let read_only: crate::Cursor<'_, _, _, _> = cursor.into();
        assert_eq!(read_only.key(), Some(&3));
        assert_eq!(map.get(&2).map(String::as_str), Some("v2!"));
    }

    #[test]
    fn test_cursor_mut_remove_current_at_end_fails() {
        let mut map = sample();
        let mut cursor = map.cursor_end_mut();
        assert!(cursor.remove_current().is_err());
        cursor.move_prev().unwrap();
        assert_eq!(cursor.remove_current().unwrap().0, 5);
        assert!(cursor.is_end());
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_iter_both_ends() {
        let map = sample();
        let mut iter = map.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next().map(|(k, _)| *k), Some(1));
        assert_eq!(iter.next_back().map(|(k, _)| *k), Some(5));
        let middle: Vec<_> = iter.map(|(k, _)| *k).collect();
        assert_eq!(middle, [2, 3, 4]);
        let rev: Vec<_> = map.keys().rev().copied().collect();
        assert_eq!(rev, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_iter_mut_and_values_mut() {
        let mut map: AvlTreeMap<i32, i32> = (0..10).map(|i| (i, i)).collect();
        for (k, v) in map.iter_mut() {
            *v += *k;
        }
        for v in map.values_mut().rev().take(2) {
            *v = -1;
        }
        let values: Vec<_> = map.values().copied().collect();
        assert_eq!(values, [0, 2, 4, 6, 8, 10, 12, 14, -1, -1]);
    }

    #[test]
    fn test_into_iter_from_both_ends() {
        let map = sample();
        let mut iter = map.into_iter();
        assert_eq!(iter.next().map(|(k, _)| k), Some(1));
        assert_eq!(iter.next_back().map(|(k, _)| k), Some(5));
        assert_eq!(iter.len(), 3);
        let rest: Vec<_> = iter.map(|(k, _)| k).collect();
        assert_eq!(rest, [2, 3, 4]);
    }

    #[test]
    fn test_for_loops_over_references() {
        let mut map = sample();
        for (_, value) in &mut map {
            value.make_ascii_uppercase();
        }
        let mut joined = String::new();
        for (_, value) in &map {
            joined.push_str(value);
        }
        assert_eq!(joined, "V1V2V3V4V5");
    }
}
