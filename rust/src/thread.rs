//! The sorted thread: a doubly-linked list over the tree nodes in key order.
//!
//! The list is anchored at the sentinel in both directions: `head.prev` and
//! `sentinel.next` close the front, `max.next` and `sentinel.prev` close the
//! back. With an empty map the sentinel links to itself and `head` is the
//! sentinel. Nothing in here looks at tree edges except `rebuild_thread`,
//! which reads them to recover the order after a structural copy.

use crate::types::{AvlTreeMap, NodeId, NULL_NODE};

impl<K, V, C> AvlTreeMap<K, V, C> {
    /// Point the sentinel at itself: the thread of an empty map.
    pub(crate) fn reset_thread(&mut self) {
        let sentinel = self.sentinel;
        let node = &mut self.arena[sentinel];
        node.prev = sentinel;
        node.next = sentinel;
        self.head = sentinel;
    }

    /// Link `new` directly in front of `succ`, its in-order successor.
    pub(crate) fn splice_before(&mut self, new: NodeId, succ: NodeId) {
        let pred = self.arena[succ].prev;
        self.link_between(pred, new, succ);
    }

    /// Link `new` directly behind `pred`, its in-order predecessor.
    pub(crate) fn splice_after(&mut self, new: NodeId, pred: NodeId) {
        let succ = self.arena[pred].next;
        self.link_between(pred, new, succ);
    }

    fn link_between(&mut self, pred: NodeId, new: NodeId, succ: NodeId) {
        tracing::trace!(node = new, pred, succ, "thread splice");
        {
            let node = &mut self.arena[new];
            node.prev = pred;
            node.next = succ;
        }
        self.arena[pred].next = new;
        self.arena[succ].prev = new;
        if pred == self.sentinel {
            self.head = new;
        }
    }

    /// Take `id` out of the thread. Its own links are cleared.
    pub(crate) fn unlink(&mut self, id: NodeId) {
        let (pred, succ) = {
            let node = &self.arena[id];
            (node.prev, node.next)
        };
        self.arena[pred].next = succ;
        self.arena[succ].prev = pred;
        if self.head == id {
            self.head = succ;
        }
        let node = &mut self.arena[id];
        node.prev = NULL_NODE;
        node.next = NULL_NODE;
    }

    /// Rebuild the whole thread from an in-order walk of the tree.
    pub(crate) fn rebuild_thread(&mut self) {
        self.reset_thread();
        let mut last = self.sentinel;
        self.thread_subtree(self.root, &mut last);

        let sentinel = self.sentinel;
        self.arena[last].next = sentinel;
        self.arena[sentinel].prev = last;
        self.head = self.arena[sentinel].next;
    }

    fn thread_subtree(&mut self, id: NodeId, last: &mut NodeId) {
        if id == NULL_NODE {
            return;
        }
        let (left, right) = (self.arena[id].left, self.arena[id].right);
        self.thread_subtree(left, last);
        self.arena[*last].next = id;
        self.arena[id].prev = *last;
        *last = id;
        self.thread_subtree(right, last);
    }
}
