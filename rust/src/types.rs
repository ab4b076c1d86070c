//! Core types and data structures for AvlTreeMap.
//!
//! This module contains the map itself, the node layout shared by the tree
//! and the sorted thread, and the identifiers used to address nodes.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::compact_arena::CompactArena;
use crate::compare::NaturalOrder;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node ID type for arena-based allocation
pub type NodeId = u32;

/// Marks a missing child or an unset thread link.
pub const NULL_NODE: NodeId = u32::MAX;

static NEXT_MAP_ID: AtomicU64 = AtomicU64::new(1);

/// Identity tag of one map instance.
///
/// Every map (including every clone) receives a fresh tag at construction.
/// Handles carry the tag of the map that produced them, so a handle from
/// one map is rejected by every other map even when the node ids coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapId(u64);

impl MapId {
    pub(crate) fn fresh() -> Self {
        MapId(NEXT_MAP_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw tag value, mostly useful in log output.
    pub fn get(self) -> u64 {
        self.0
    }
}

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Ordered map on a height-balanced (AVL) binary search tree.
///
/// Keys are unique and kept sorted under the comparator `C`. Besides the
/// tree links, every node sits on a doubly-linked *thread* in key order that
/// ends in a permanently allocated sentinel, so stepping a cursor or handle
/// forwards or backwards costs O(1).
///
/// # Type Parameters
///
/// * `K` - Key type
/// * `V` - Value type
/// * `C` - Strict weak order over `K`, see [`Compare`](crate::Compare)
///
/// # Examples
///
/// ```
/// use avltreemap::AvlTreeMap;
///
/// let mut map = AvlTreeMap::new();
/// map.insert(2, "two");
/// map.insert(1, "one");
/// map.insert(3, "three");
///
/// assert_eq!(map.get(&2), Some(&"two"));
/// assert_eq!(map.len(), 3);
///
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, [1, 2, 3]);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n)
/// - **Lookup**: O(log n)
/// - **Deletion**: O(log n)
/// - **Cursor step**: O(1)
/// - **Length**: O(1), read from the root's subtree size
pub struct AvlTreeMap<K, V, C = NaturalOrder> {
    /// Identity tag checked by every handle-taking operation.
    pub(crate) id: MapId,
    /// Root of the tree, `NULL_NODE` when empty.
    pub(crate) root: NodeId,
    /// Smallest node, or the sentinel when empty.
    pub(crate) head: NodeId,
    /// Entry-less end marker; `sentinel.prev` is the largest node.
    pub(crate) sentinel: NodeId,
    /// Storage for every node, the sentinel included.
    pub(crate) arena: CompactArena<Node<K, V>>,
    /// The ordering relation.
    pub(crate) compare: C,
}

/// A node of the tree and of the sorted thread.
///
/// `left` and `right` are the owning tree edges; `prev` and `next` only
/// describe the order and never own anything.
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    /// Key and value, `None` only for the sentinel and for freed slots.
    pub(crate) entry: Option<(K, V)>,
    /// 1 + max(child heights); a missing child counts 0.
    pub(crate) height: u32,
    /// Number of nodes in the subtree rooted here.
    pub(crate) size: usize,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) prev: NodeId,
    pub(crate) next: NodeId,
}

// ============================================================================
// ENUMS
// ============================================================================

/// Which rotation the rebalancer applied at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rotation {
    /// Single right rotation, left-left heavy.
    LL,
    /// Single left rotation, right-right heavy.
    RR,
    /// Left rotation of the left child, then LL.
    LR,
    /// Right rotation of the right child, then RR.
    RL,
}
