//! Height bookkeeping and AVL rotations.
//!
//! Everything here works on the node arena alone and only ever touches
//! `left`, `right`, `height` and `size`. Rotations move subtree attachment
//! points without changing the in-order sequence, so the sorted thread is
//! untouched by construction.

use crate::compact_arena::CompactArena;
use crate::compare::Compare;
use crate::types::{Node, NodeId, Rotation, NULL_NODE};

type Nodes<K, V> = CompactArena<Node<K, V>>;

/// Height of a subtree, 0 for a missing child.
#[inline]
pub(crate) fn height<K, V>(nodes: &Nodes<K, V>, id: NodeId) -> u32 {
    if id == NULL_NODE {
        0
    } else {
        nodes[id].height
    }
}

/// Node count of a subtree, 0 for a missing child.
#[inline]
pub(crate) fn size<K, V>(nodes: &Nodes<K, V>, id: NodeId) -> usize {
    if id == NULL_NODE {
        0
    } else {
        nodes[id].size
    }
}

/// Recompute `height` and `size` of `id` from its children.
#[inline]
pub(crate) fn refresh<K, V>(nodes: &mut Nodes<K, V>, id: NodeId) {
    let (left, right) = (nodes[id].left, nodes[id].right);
    let h = 1 + height(nodes, left).max(height(nodes, right));
    let s = 1 + size(nodes, left) + size(nodes, right);
    let node = &mut nodes[id];
    node.height = h;
    node.size = s;
}

/// Left height minus right height.
#[inline]
pub(crate) fn balance_factor<K, V>(nodes: &Nodes<K, V>, id: NodeId) -> i64 {
    let node = &nodes[id];
    i64::from(height(nodes, node.left)) - i64::from(height(nodes, node.right))
}

// ============================================================================
// ROTATIONS
// ============================================================================

/// Single right rotation around `t`. Returns the new subtree root.
pub(crate) fn rotate_ll<K, V>(nodes: &mut Nodes<K, V>, t: NodeId) -> NodeId {
    let pivot = nodes[t].left;
    nodes[t].left = nodes[pivot].right;
    nodes[pivot].right = t;
    refresh(nodes, t);
    refresh(nodes, pivot);
    pivot
}

/// Single left rotation around `t`. Returns the new subtree root.
pub(crate) fn rotate_rr<K, V>(nodes: &mut Nodes<K, V>, t: NodeId) -> NodeId {
    let pivot = nodes[t].right;
    nodes[t].right = nodes[pivot].left;
    nodes[pivot].left = t;
    refresh(nodes, t);
    refresh(nodes, pivot);
    pivot
}

pub(crate) fn rotate_lr<K, V>(nodes: &mut Nodes<K, V>, t: NodeId) -> NodeId {
    let left = nodes[t].left;
    nodes[t].left = rotate_rr(nodes, left);
    rotate_ll(nodes, t)
}

pub(crate) fn rotate_rl<K, V>(nodes: &mut Nodes<K, V>, t: NodeId) -> NodeId {
    let right = nodes[t].right;
    nodes[t].right = rotate_ll(nodes, right);
    rotate_rr(nodes, t)
}

fn apply<K, V>(nodes: &mut Nodes<K, V>, t: NodeId, rotation: Rotation) -> NodeId {
    tracing::trace!(?rotation, pivot = t, "rotate");
    match rotation {
        Rotation::LL => rotate_ll(nodes, t),
        Rotation::RR => rotate_rr(nodes, t),
        Rotation::LR => rotate_lr(nodes, t),
        Rotation::RL => rotate_rl(nodes, t),
    }
}

// ============================================================================
// REBALANCING
// ============================================================================

/// Restore balance at `t` after `inserted` landed somewhere below it.
///
/// Heights of `t` must be fresh. Single vs. double rotation is chosen by
/// comparing the inserted key with the key of the heavy child.
pub(crate) fn rebalance_after_insert<K, V, C: Compare<K>>(
    nodes: &mut Nodes<K, V>,
    compare: &C,
    t: NodeId,
    inserted: NodeId,
) -> NodeId {
    let factor = balance_factor(nodes, t);
    let rotation = if factor == 2 {
        let left = nodes[t].left;
        if compare.less(nodes[inserted].key(), nodes[left].key()) {
            Rotation::LL
        } else {
            Rotation::LR
        }
    } else if factor == -2 {
        let right = nodes[t].right;
        if compare.less(nodes[inserted].key(), nodes[right].key()) {
            Rotation::RL
        } else {
            Rotation::RR
        }
    } else {
        return t;
    };
    apply(nodes, t, rotation)
}

/// Restore balance at `t` after a node was removed below it.
///
/// The removed key takes no part in the decision; the heavy child's
/// grandchildren heights pick single vs. double rotation.
pub(crate) fn rebalance_after_erase<K, V>(nodes: &mut Nodes<K, V>, t: NodeId) -> NodeId {
    let factor = balance_factor(nodes, t);
    let rotation = if factor == 2 {
        let left = nodes[t].left;
        if height(nodes, nodes[left].right) > height(nodes, nodes[left].left) {
            Rotation::LR
        } else {
            Rotation::LL
        }
    } else if factor == -2 {
        let right = nodes[t].right;
        if height(nodes, nodes[right].left) > height(nodes, nodes[right].right) {
            Rotation::RL
        } else {
            Rotation::RR
        }
    } else {
        return t;
    };
    apply(nodes, t, rotation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::NaturalOrder;

    fn leaf(nodes: &mut Nodes<i32, ()>, key: i32) -> NodeId {
        nodes.allocate(Node::leaf(key, ()))
    }

    fn attach(nodes: &mut Nodes<i32, ()>, parent: NodeId, left: NodeId, right: NodeId) {
        nodes[parent].left = left;
        nodes[parent].right = right;
        refresh(nodes, parent);
    }

    fn in_order(nodes: &Nodes<i32, ()>, id: NodeId, out: &mut Vec<i32>) {
        if id == NULL_NODE {
            return;
        }
        in_order(nodes, nodes[id].left, out);
        out.push(*nodes[id].key());
        in_order(nodes, nodes[id].right, out);
    }

    #[test]
    fn test_refresh_counts_missing_children_as_zero() {
        let mut nodes = CompactArena::new();
        let a = leaf(&mut nodes, 1);
        let b = leaf(&mut nodes, 2);
        attach(&mut nodes, b, a, NULL_NODE);
        assert_eq!(nodes[b].height, 2);
        assert_eq!(nodes[b].size, 2);
        assert_eq!(balance_factor(&nodes, b), 1);
    }

    #[test]
    fn test_rotate_ll_preserves_order() {
        // 3 -> 2 -> 1 down the left spine
        let mut nodes = CompactArena::new();
        let one = leaf(&mut nodes, 1);
        let two = leaf(&mut nodes, 2);
        let three = leaf(&mut nodes, 3);
        attach(&mut nodes, two, one, NULL_NODE);
        attach(&mut nodes, three, two, NULL_NODE);

        let root = rotate_ll(&mut nodes, three);
        assert_eq!(root, two);
        assert_eq!(nodes[root].height, 2);
        assert_eq!(nodes[root].size, 3);
        let mut keys = Vec::new();
        in_order(&nodes, root, &mut keys);
        assert_eq!(keys, [1, 2, 3]);
    }

    #[test]
    fn test_rotate_rl_double_rotation() {
        // 1 -> right 3 -> left 2
        let mut nodes = CompactArena::new();
        let one = leaf(&mut nodes, 1);
        let two = leaf(&mut nodes, 2);
        let three = leaf(&mut nodes, 3);
        attach(&mut nodes, three, two, NULL_NODE);
        attach(&mut nodes, one, NULL_NODE, three);

        let root = rebalance_after_insert(&mut nodes, &NaturalOrder, one, two);
        assert_eq!(root, two);
        assert_eq!(nodes[two].left, one);
        assert_eq!(nodes[two].right, three);
        assert_eq!(nodes[two].height, 2);
    }

    #[test]
    fn test_rebalance_after_erase_uses_heights() {
        // 4 with left 2 (children 1, 3) and no right: left-heavy by two,
        // grandchildren equal, so a single rotation is chosen.
        let mut nodes = CompactArena::new();
        let one = leaf(&mut nodes, 1);
        let two = leaf(&mut nodes, 2);
        let three = leaf(&mut nodes, 3);
        let four = leaf(&mut nodes, 4);
        attach(&mut nodes, two, one, three);
        attach(&mut nodes, four, two, NULL_NODE);

        let root = rebalance_after_erase(&mut nodes, four);
        assert_eq!(root, two);
        assert_eq!(nodes[two].right, four);
        assert_eq!(nodes[four].left, three);
        assert_eq!(nodes[two].height, 3);
        assert!(balance_factor(&nodes, root).abs() <= 1);
    }

    #[test]
    fn test_balanced_node_is_left_alone() {
        let mut nodes = CompactArena::new();
        let one = leaf(&mut nodes, 1);
        let two = leaf(&mut nodes, 2);
        let three = leaf(&mut nodes, 3);
        attach(&mut nodes, two, one, three);
        assert_eq!(rebalance_after_erase(&mut nodes, two), two);
        assert_eq!(rebalance_after_insert(&mut nodes, &NaturalOrder, two, one), two);
    }
}
