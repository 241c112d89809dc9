//! Rotations and the splay loop.
//!
//! All functions take the arena and node indices (u32). Rotations rewire
//! the parent's child slot themselves; the caller only has to track the
//! new root when the rotated node had no parent.

use crate::types::Node;
use crate::util::{get_l, get_p, get_r, replace_child, set_l, set_p, set_r};

// ── single rotations ──────────────────────────────────────────────────────

/// Promotes the left child of `node` above it.
///
/// ```text
///      node          l
///     /    \   →    / \
///    l      c      a  node
///   / \               /  \
///  a   b             b    c
/// ```
///
/// Returns the index now occupying `node`'s former slot. Without a left
/// child there is nothing to rotate and `node` is returned unchanged.
pub fn rotate_right<N: Node>(arena: &mut [N], node: u32) -> u32 {
    let Some(l) = get_l(arena, node) else {
        return node;
    };
    let b = get_r(arena, l);
    let p = get_p(arena, node);
    replace_child(arena, p, node, Some(l));
    if let Some(b) = b {
        set_p(arena, b, Some(node));
    }
    set_p(arena, l, p);
    set_r(arena, l, Some(node));
    set_p(arena, node, Some(l));
    set_l(arena, node, b);
    l
}

/// Promotes the right child of `node` above it. Mirror of [`rotate_right`].
pub fn rotate_left<N: Node>(arena: &mut [N], node: u32) -> u32 {
    let Some(r) = get_r(arena, node) else {
        return node;
    };
    let b = get_l(arena, r);
    let p = get_p(arena, node);
    replace_child(arena, p, node, Some(r));
    if let Some(b) = b {
        set_p(arena, b, Some(node));
    }
    set_p(arena, r, p);
    set_l(arena, r, Some(node));
    set_p(arena, node, Some(r));
    set_r(arena, node, b);
    r
}

// ── splay ─────────────────────────────────────────────────────────────────

/// Which of the three splay steps applies to a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Parent is the root.
    Zig,
    /// Node and parent hang on the same side of their parents.
    ZigZig,
    /// Node and parent hang on opposite sides.
    ZigZag,
}

/// Classifies the next splay step for `node`, or `None` if it is the root.
pub fn step<N: Node>(arena: &[N], node: u32) -> Option<Step> {
    let p = get_p(arena, node)?;
    let Some(g) = get_p(arena, p) else {
        return Some(Step::Zig);
    };
    let node_is_left = get_l(arena, p) == Some(node);
    let parent_is_left = get_l(arena, g) == Some(p);
    Some(if node_is_left == parent_is_left {
        Step::ZigZig
    } else {
        Step::ZigZag
    })
}

/// Rotates `node` up until it becomes the root and returns it.
///
/// Zig-zig rotates the grandparent before the parent; that ordering is what
/// gives splaying its amortized bound, as opposed to rotating `node` up one
/// level at a time.
pub fn splay<N: Node>(arena: &mut [N], node: u32) -> u32 {
    while let Some(kind) = step(arena, node) {
        let Some(p) = get_p(arena, node) else {
            break;
        };
        let node_is_left = get_l(arena, p) == Some(node);
        if kind == Step::Zig {
            if node_is_left {
                rotate_right(arena, p);
            } else {
                rotate_left(arena, p);
            }
            break;
        }
        let Some(g) = get_p(arena, p) else {
            break;
        };
        match (kind, node_is_left) {
            (Step::ZigZig, true) => {
                rotate_right(arena, g);
                rotate_right(arena, p);
            }
            (Step::ZigZig, false) => {
                rotate_left(arena, g);
                rotate_left(arena, p);
            }
            (_, true) => {
                rotate_right(arena, p);
                rotate_left(arena, g);
            }
            (_, false) => {
                rotate_left(arena, p);
                rotate_right(arena, g);
            }
        }
    }
    node
}
