//! Arena tree navigation helpers (p / l / r links).
//!
//! All functions take the arena slice and node indices. Key-based helpers
//! accept a `key_of` accessor closure and a three-way comparator so they do
//! not depend on the concrete node layout.
//!
//! Every walk here is a loop; none of them recurse, so stack usage does not
//! depend on tree depth.

use std::cmp::Ordering;

use crate::types::Node;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
///
/// Descends into the right subtree when there is one, otherwise climbs
/// until the walk arrives at a parent from its left side.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            return Some(pi);
        }
        curr = pi;
        p = get_p(arena, pi);
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, node) {
        return last(arena, Some(l));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            return Some(pi);
        }
        curr = pi;
        p = get_p(arena, pi);
    }
    None
}

/// Points `p`'s link that used to hold `old` at `new` instead. With no
/// parent there is nothing to rewire.
pub(crate) fn replace_child<N: Node>(arena: &mut [N], p: Option<u32>, old: u32, new: Option<u32>) {
    let Some(p) = p else {
        return;
    };
    if get_l(arena, p) == Some(old) {
        set_l(arena, p, new);
    } else {
        set_r(arena, p, new);
    }
}

/// Walks from `root` toward `key`.
///
/// Returns the node holding an equal key, or the last node visited before a
/// missing child stopped the walk, together with the final comparison of
/// `key` against that node. `None` only for an empty tree.
pub fn descend<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<(u32, Ordering)>
where
    N: Node,
    K: ?Sized,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root?;
    loop {
        let cmp = comparator(key, key_of(&arena[curr as usize]));
        let child = match cmp {
            Ordering::Equal => return Some((curr, cmp)),
            Ordering::Less => get_l(arena, curr),
            Ordering::Greater => get_r(arena, curr),
        };
        match child {
            Some(c) => curr = c,
            None => return Some((curr, cmp)),
        }
    }
}

/// Finds a node by key without restructuring anything.
pub fn find<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    K: ?Sized,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    match descend(arena, root, key, key_of, comparator)? {
        (idx, Ordering::Equal) => Some(idx),
        _ => None,
    }
}

/// Smallest node whose key is not less than `key`.
///
/// Keys that are too small send the walk right. A node that qualifies is
/// remembered before the walk looks for a smaller candidate on its left.
pub fn lower_bound<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    K: ?Sized,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root;
    let mut result = None;
    while let Some(i) = curr {
        match comparator(key_of(&arena[i as usize]), key) {
            Ordering::Equal => return Some(i),
            Ordering::Less => curr = get_r(arena, i),
            Ordering::Greater => {
                result = Some(i);
                curr = get_l(arena, i);
            }
        }
    }
    result
}
