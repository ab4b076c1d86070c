//! Validation and debugging utilities for AvlTreeMap.
//!
//! This module contains invariant checking and debugging helpers. The
//! `testing` cargo feature runs `check_invariants` after every insert and
//! erase in debug builds.

use std::fmt::Debug;

use crate::compare::Compare;
use crate::error::{AvlMapError, MapResult, TreeResult};
use crate::types::{AvlTreeMap, NodeId, NULL_NODE};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K, V, C: Compare<K>> AvlTreeMap<K, V, C> {
    /// Check if the map maintains all of its structural invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verified, in order:
    /// - the sentinel is allocated and entry-less;
    /// - keys are strictly increasing along an in-order walk;
    /// - every stored height and subtree size is exact and every balance
    ///   factor is within -1..=1;
    /// - the thread visits the in-order sequence forwards and backwards and
    ///   is closed at the sentinel on both ends;
    /// - the arena holds exactly the tree nodes plus the sentinel.
    pub fn check_invariants_detailed(&self) -> MapResult<()> {
        self.check_sentinel()?;

        let mut order = Vec::with_capacity(self.len());
        self.check_subtree(self.root, None, None, &mut order)?;

        self.check_thread(&order)?;
        self.check_arena_tree_consistency(order.len())?;
        Ok(())
    }

    /// Alias for check_invariants_detailed.
    pub fn validate(&self) -> MapResult<()> {
        self.check_invariants_detailed()
    }

    /// Check if the map is in a valid state before running `operation`.
    pub fn validate_for_operation(&self, operation: &str) -> MapResult<()> {
        self.check_invariants_detailed().map_err(|e| {
            AvlMapError::data_integrity(operation, &format!("Validation for {}: {}", operation, e))
        })
    }

    fn check_sentinel(&self) -> TreeResult<()> {
        match self.arena.get(self.sentinel) {
            Some(node) if node.is_sentinel() => Ok(()),
            Some(_) => Err(AvlMapError::corrupted_tree("Sentinel", "holds an entry")),
            None => Err(AvlMapError::corrupted_tree("Sentinel", "not allocated")),
        }
    }

    /// Recursively check the subtree at `id` against the open key range
    /// `(low, high)`, appending its nodes in order. Returns its height.
    fn check_subtree<'a>(
        &'a self,
        id: NodeId,
        low: Option<&'a K>,
        high: Option<&'a K>,
        order: &mut Vec<NodeId>,
    ) -> TreeResult<u32> {
        if id == NULL_NODE {
            return Ok(0);
        }
        let node = self.arena.get(id).ok_or_else(|| {
            AvlMapError::corrupted_tree("Tree edge", &format!("node {} is not allocated", id))
        })?;
        let (key, _) = node.entry().ok_or_else(|| {
            AvlMapError::corrupted_tree("Tree edge", &format!("node {} has no entry", id))
        })?;

        if low.is_some_and(|low| !self.compare.less(low, key))
            || high.is_some_and(|high| !self.compare.less(key, high))
        {
            return Err(AvlMapError::corrupted_tree(
                "Ordering",
                &format!("node {} is outside its key range", id),
            ));
        }

        let first = order.len();
        let left_height = self.check_subtree(node.left, low, Some(key), order)?;
        order.push(id);
        let right_height = self.check_subtree(node.right, Some(key), high, order)?;
        let size = order.len() - first;

        let height = 1 + left_height.max(right_height);
        if node.height != height {
            return Err(AvlMapError::corrupted_tree(
                "Height",
                &format!("node {} stores {}, actual {}", id, node.height, height),
            ));
        }
        if node.size != size {
            return Err(AvlMapError::corrupted_tree(
                "Size",
                &format!("node {} stores {}, actual {}", id, node.size, size),
            ));
        }
        if left_height.abs_diff(right_height) > 1 {
            return Err(AvlMapError::corrupted_tree(
                "Balance",
                &format!(
                    "node {} has child heights {} and {}",
                    id, left_height, right_height
                ),
            ));
        }
        Ok(height)
    }

    /// Check that the thread is exactly `order`, closed at the sentinel.
    fn check_thread(&self, order: &[NodeId]) -> TreeResult<()> {
        let sentinel = &self.arena[self.sentinel];
        let expected_head = order.first().copied().unwrap_or(self.sentinel);
        if self.head != expected_head || sentinel.next != expected_head {
            return Err(AvlMapError::corrupted_tree(
                "Thread",
                &format!(
                    "head {} and sentinel.next {} should both be {}",
                    self.head, sentinel.next, expected_head
                ),
            ));
        }

        let mut forward = Vec::with_capacity(order.len());
        let mut id = self.head;
        while id != self.sentinel && forward.len() <= order.len() {
            forward.push(id);
            id = self.thread_link(id, true)?;
        }
        if forward != order {
            return Err(AvlMapError::corrupted_tree(
                "Thread",
                &format!("forward walk {:?}, in-order walk {:?}", forward, order),
            ));
        }

        let mut backward = Vec::with_capacity(order.len());
        let mut id = sentinel.prev;
        while id != self.sentinel && backward.len() <= order.len() {
            backward.push(id);
            id = self.thread_link(id, false)?;
        }
        backward.reverse();
        if backward != order {
            return Err(AvlMapError::corrupted_tree(
                "Thread",
                &format!("backward walk {:?}, in-order walk {:?}", backward, order),
            ));
        }
        Ok(())
    }

    fn thread_link(&self, id: NodeId, forward: bool) -> TreeResult<NodeId> {
        let node = self.arena.get(id).ok_or_else(|| {
            AvlMapError::corrupted_tree("Thread", &format!("link to freed node {}", id))
        })?;
        Ok(if forward { node.next } else { node.prev })
    }

    /// Check that arena allocation matches the tree.
    fn check_arena_tree_consistency(&self, tree_nodes: usize) -> TreeResult<()> {
        if tree_nodes != self.len() {
            return Err(AvlMapError::data_integrity(
                "Length check",
                &format!("{} nodes in tree vs len {}", tree_nodes, self.len()),
            ));
        }
        let allocated = self.arena.len();
        if allocated != tree_nodes + 1 {
            return Err(AvlMapError::data_integrity(
                "Arena consistency check",
                &format!(
                    "{} in tree plus sentinel vs {} in arena",
                    tree_nodes, allocated
                ),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// DEBUGGING UTILITIES
// ============================================================================

impl<K: Debug, V, C> AvlTreeMap<K, V, C> {
    /// Prints the tree sideways, right subtree first, for debugging.
    pub fn print_tree(&self) {
        println!("AvlTreeMap[id={}, len={}]:", self.id.get(), self.len());
        self.print_node(self.root, 0);
    }

    fn print_node(&self, id: NodeId, depth: usize) {
        if id == NULL_NODE {
            return;
        }
        let node = &self.arena[id];
        self.print_node(node.right, depth + 1);
        let indent = "    ".repeat(depth);
        match node.entry() {
            Some((key, _)) => println!(
                "{}{:?} [id={}, h={}, n={}]",
                indent, key, id, node.height, node.size
            ),
            None => println!("{}<sentinel id={}>", indent, id),
        }
        self.print_node(node.left, depth + 1);
    }
}
