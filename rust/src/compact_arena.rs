//! Compact arena implementation using Vec<T> instead of Vec<Option<T>>
//! Freed slots hold `T::default()` and are recycled through a free list.
//! Every slot carries a generation that is bumped when the slot is freed,
//! so a stale (id, generation) pair never resolves to a recycled slot.

use std::convert::TryFrom;
use std::ops::{Index, IndexMut};

use crate::types::{NodeId, NULL_NODE};

/// Statistics for a compact arena
#[derive(Debug, Clone, Copy)]
pub struct CompactArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
    pub fragmentation: f64,
}

/// Compact arena allocator that eliminates Option wrapper overhead
/// Uses Vec<T> with a separate free list and per-slot generation tracking
#[derive(Debug)]
pub struct CompactArena<T> {
    /// Direct storage without Option wrapper
    storage: Vec<T>,
    /// Free slot indices for reuse
    free_list: Vec<usize>,
    /// Generation of each slot, bumped on every deallocation
    generations: Vec<u32>,
    /// Track which slots are actually allocated
    allocated_mask: Vec<bool>,
    /// Number of allocated slots
    live: usize,
}

impl<T> CompactArena<T> {
    /// Create a new empty compact arena
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            free_list: Vec::new(),
            generations: Vec::new(),
            allocated_mask: Vec::new(),
            live: 0,
        }
    }

    /// Create a new compact arena with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            generations: Vec::with_capacity(capacity),
            allocated_mask: Vec::with_capacity(capacity),
            live: 0,
        }
    }

    /// Allocate a new item in the arena and return its ID
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = if let Some(free_index) = self.free_list.pop() {
            // Reuse a free slot
            self.storage[free_index] = item;
            self.allocated_mask[free_index] = true;
            free_index
        } else {
            // Allocate new slot
            let index = self.storage.len();
            self.storage.push(item);
            self.generations.push(0);
            self.allocated_mask.push(true);
            index
        };
        self.live += 1;

        let id = NodeId::try_from(index).expect("Index should fit in NodeId");
        debug_assert_ne!(id, NULL_NODE, "arena exhausted the NodeId space");
        id
    }

    /// Deallocate an item from the arena and return it
    #[inline]
    pub fn deallocate(&mut self, id: NodeId) -> Option<T>
    where
        T: Default,
    {
        let index = self.live_index(id)?;

        // Mark as free
        self.allocated_mask[index] = false;
        self.generations[index] = self.generations[index].wrapping_add(1);
        self.free_list.push(index);
        self.live -= 1;

        // Replace with default and return the old value
        Some(std::mem::take(&mut self.storage[index]))
    }

    /// Get a reference to an item in the arena
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.live_index(id).map(|index| &self.storage[index])
    }

    /// Get a mutable reference to an item in the arena
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.live_index(id).map(|index| &mut self.storage[index])
    }

    /// Check if an ID is valid and allocated
    pub fn contains(&self, id: NodeId) -> bool {
        self.live_index(id).is_some()
    }

    /// Current generation of an allocated slot.
    pub fn generation(&self, id: NodeId) -> Option<u32> {
        self.live_index(id).map(|index| self.generations[index])
    }

    /// Check that `id` is allocated and was not freed since `generation`
    /// was read from it.
    pub fn is_current(&self, id: NodeId, generation: u32) -> bool {
        self.generation(id) == Some(generation)
    }

    /// Base pointer of the slot storage, for iterators that hand out
    /// disjoint `&mut` borrows of distinct slots.
    pub(crate) fn slots_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr()
    }

    fn live_index(&self, id: NodeId) -> Option<usize> {
        if id == NULL_NODE {
            return None;
        }

        let index = usize::try_from(id).ok()?;

        // Check bounds and allocation status
        if self.allocated_mask.get(index).copied().unwrap_or(false) {
            Some(index)
        } else {
            None
        }
    }

    /// Get arena statistics
    pub fn stats(&self) -> CompactArenaStats {
        let total_capacity = self.storage.capacity();
        let allocated_count = self.live;
        let free_count = self.free_list.len();
        let utilization = if total_capacity > 0 {
            allocated_count as f64 / total_capacity as f64
        } else {
            0.0
        };
        let fragmentation = if allocated_count > 0 {
            free_count as f64 / (allocated_count + free_count) as f64
        } else {
            0.0
        };

        CompactArenaStats {
            total_capacity,
            allocated_count,
            free_count,
            utilization,
            fragmentation,
        }
    }

    /// Get the number of allocated items
    pub fn len(&self) -> usize {
        self.live
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Get the total capacity
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Reserve room for `additional` more slots
    pub fn reserve(&mut self, additional: usize) {
        let needed = additional.saturating_sub(self.free_list.len());
        self.storage.reserve(needed);
        self.generations.reserve(needed);
        self.allocated_mask.reserve(needed);
    }

    /// Get the number of free slots
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }
}

impl<T> Default for CompactArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for CompactArena<T> {
    type Output = T;

    /// Panics if `id` is not allocated. Ids held by the tree and the thread
    /// are always allocated, so a panic here means a corrupted structure.
    #[inline]
    fn index(&self, id: NodeId) -> &T {
        match self.get(id) {
            Some(item) => item,
            None => panic!("dangling node id {}", id),
        }
    }
}

impl<T> IndexMut<NodeId> for CompactArena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.get_mut(id) {
            Some(item) => item,
            None => panic!("dangling node id {}", id),
        }
    }
}
