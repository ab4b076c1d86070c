//! Ordered map on an AVL tree with a sorted thread.
//!
//! [`AvlTreeMap`] keeps unique keys sorted under a pluggable comparator.
//! Nodes live in an arena and carry two sets of links: the tree edges used
//! for O(log n) search and rebalancing, and `prev`/`next` links forming a
//! doubly-linked list in key order that ends in a sentinel. Cursors and
//! handles step along that list in O(1).
//!
//! # Positions
//!
//! - [`Handle`] is a `Copy` position that does not borrow the map. Insert,
//!   find and erase trade in handles. A handle stays valid until its own
//!   entry is erased or the map is cleared; using it on another map, or
//!   after its entry is gone, yields [`AvlMapError::InvalidIterator`].
//! - [`Cursor`] and [`CursorMut`] borrow the map and move both ways.
//! - [`Iter`] and friends are ordinary double-ended iterators.
//!
//! # Examples
//!
//! ```
//! use avltreemap::AvlTreeMap;
//!
//! let mut map = AvlTreeMap::new();
//! for (i, word) in ["delta", "alpha", "charlie", "bravo"].into_iter().enumerate() {
//!     map.insert(word, i);
//! }
//!
//! let pos = map.find(&"charlie");
//! let next = map.next_handle(pos).unwrap();
//! assert_eq!(map.entry_at(next), Some((&"delta", &0)));
//!
//! map.erase(pos).unwrap();
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["alpha", "bravo", "delta"]);
//! ```
//!
//! # Logging
//!
//! The map emits [`tracing`] events: rotations and thread splices at
//! `TRACE`, clears, clones and rejected erases at `DEBUG`. Nothing is
//! printed unless the embedding program installs a subscriber.

mod balance;
mod compact_arena;
mod compare;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod lifecycle;
mod node;
mod thread;
mod tree_structure;
mod types;
mod validation;

pub use compact_arena::{CompactArena, CompactArenaStats};
pub use compare::{Compare, NaturalOrder, ReverseOrder};
pub use error::{AvlMapError, KeyResult, MapResult, MapResultExt, ModifyResult};
pub use iteration::{
    Cursor, CursorMut, Handle, IntoIter, Iter, IterMut, Keys, Values, ValuesMut,
};
pub use types::{AvlTreeMap, MapId, Node, NodeId, NULL_NODE};
