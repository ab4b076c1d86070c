//! Tree structure queries for AvlTreeMap.
//!
//! Size, height and storage statistics. All of them are O(1): the root
//! carries the subtree size and height of the whole tree.

use crate::compact_arena::CompactArenaStats;
use crate::types::{AvlTreeMap, NULL_NODE};

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<K, V, C> AvlTreeMap<K, V, C> {
    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        match self.root {
            NULL_NODE => 0,
            root => self.arena[root].size,
        }
    }

    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root == NULL_NODE
    }

    /// Height of the tree: 0 when empty, 1 for a single entry.
    pub fn height(&self) -> usize {
        match self.root {
            NULL_NODE => 0,
            root => self.arena[root].height as usize,
        }
    }

    /// Statistics of the node arena. The sentinel occupies one slot.
    pub fn arena_stats(&self) -> CompactArenaStats {
        self.arena.stats()
    }
}
