use std::cmp::Ordering;
use std::fmt;

use log::trace;

use crate::cursor::Cursor;
use crate::error::{CursorError, InvariantViolation};
use crate::iter::{IntoIter, Iter};
use crate::node::SplayNode;
use crate::print::print_binary_tree;
use crate::splay::splay;
use crate::types::{from_less, OrdComparator};
use crate::util::{self, get_l, get_p, get_r, set_l, set_p, set_r};

/// Ordered set of unique values backed by a splay tree.
///
/// Nodes live in an arena and address each other by `u32` index, parent
/// links included. Every lookup that touches the tree (`insert`, `find`,
/// `lower_bound`, `erase`) splays the last node it visited to the root, so
/// recently used values stay cheap to reach. Because of that, those
/// operations take `&mut self` even when they only read.
///
/// The minimum and maximum nodes are cached, so [`begin`](Self::begin),
/// [`end`](Self::end), [`first`](Self::first) and [`last`](Self::last) are
/// O(1).
pub struct SplaySet<T, C = OrdComparator<T>> {
    root: Option<u32>,
    min: Option<u32>,
    max: Option<u32>,
    len: usize,
    comparator: C,
    arena: Vec<SplayNode<T>>,
    free: Vec<u32>,
}

impl<T: Ord> SplaySet<T> {
    pub fn new() -> Self {
        Self::with_comparator(<T as Ord>::cmp)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut set = Self::new();
        set.arena.reserve(capacity);
        set
    }
}

impl<T: Ord> Default for SplaySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SplaySet<T> {
    /// Creates a set ordered by a strict less-than predicate.
    pub fn with_less<L>(less: L) -> SplaySet<T, impl Fn(&T, &T) -> Ordering + Clone>
    where
        L: Fn(&T, &T) -> bool + Clone,
    {
        SplaySet::with_comparator(from_less(less))
    }
}

impl<T, C> SplaySet<T, C> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Value at the root, i.e. the most recently splayed one.
    pub fn root_value(&self) -> Option<&T> {
        self.root.map(|i| self.value(i))
    }

    /// Smallest value, from the extrema cache.
    pub fn first(&self) -> Option<&T> {
        self.min.map(|i| self.value(i))
    }

    /// Largest value, from the extrema cache.
    pub fn last(&self) -> Option<&T> {
        self.max.map(|i| self.value(i))
    }

    /// Cursor on the smallest value.
    pub fn begin(&self) -> Cursor {
        self.min.map_or_else(Cursor::default, Cursor::at)
    }

    /// Past-the-end cursor. It keeps the maximum node so that stepping back
    /// lands on the last value.
    pub fn end(&self) -> Cursor {
        self.max.map_or_else(Cursor::default, Cursor::past)
    }

    /// Value under `cursor`.
    pub fn get(&self, cursor: Cursor) -> Result<&T, CursorError> {
        if cursor.is_past_end() {
            return Err(CursorError::PastTheEnd);
        }
        let node = cursor.node().ok_or(CursorError::Detached)?;
        self.arena
            .get(node as usize)
            .and_then(|n| n.v.as_ref())
            .ok_or(CursorError::Vacant(node))
    }

    /// In-order iterator. Does not restructure the tree.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.min, self.max, self.len)
    }

    /// Releases every node.
    pub fn clear(&mut self) {
        trace!("splay_set: clear, dropping {} nodes", self.len);
        self.arena.clear();
        self.free.clear();
        self.root = None;
        self.min = None;
        self.max = None;
        self.len = 0;
    }

    pub(crate) fn value(&self, idx: u32) -> &T {
        self.arena[idx as usize].key()
    }

    /// Arena, provided `node` still holds a value.
    pub(crate) fn live_arena(&self, node: u32) -> Result<&[SplayNode<T>], CursorError> {
        match self.arena.get(node as usize) {
            Some(n) if !n.is_vacant() => Ok(self.arena.as_slice()),
            _ => Err(CursorError::Vacant(node)),
        }
    }

    fn alloc(&mut self, value: T) -> u32 {
        match self.free.pop() {
            Some(idx) => {
                self.arena[idx as usize] = SplayNode::new(value);
                idx
            }
            None => {
                let Ok(idx) = u32::try_from(self.arena.len()) else {
                    panic!("splay_set: arena is limited to {} slots", u32::MAX);
                };
                self.arena.push(SplayNode::new(value));
                idx
            }
        }
    }

    fn release(&mut self, idx: u32) -> Option<T> {
        self.free.push(idx);
        self.arena[idx as usize].vacate()
    }

    fn splay(&mut self, node: u32) {
        self.root = Some(splay(&mut self.arena, node));
    }

    /// Renders the tree shape, root first, left child above right child.
    pub fn to_tree_string(&self) -> String
    where
        T: fmt::Debug,
    {
        match self.root {
            Some(root) => {
                let children = |i: u32| [get_l(&self.arena, i), get_r(&self.arena, i)];
                let label = |i: u32| format!("{:?}", self.value(i));
                format!("SplaySet{}", print_binary_tree("", root, children, label))
            }
            None => "SplaySet ∅".to_string(),
        }
    }
}

impl<T, C> SplaySet<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            min: None,
            max: None,
            len: 0,
            comparator,
            arena: Vec::new(),
            free: Vec::new(),
        }
    }

    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.comparator)(a, b)
    }

    fn descend(&self, value: &T) -> Option<(u32, Ordering)> {
        let cmp = |a: &T, b: &T| self.compare(a, b);
        util::descend(&self.arena, self.root, value, SplayNode::key, cmp)
    }

    /// Adds `value`. Returns `false` if an equal value was already present;
    /// the stored one is kept and splayed to the root.
    pub fn insert(&mut self, value: T) -> bool {
        let Some((at, cmp)) = self.descend(&value) else {
            let idx = self.alloc(value);
            self.root = Some(idx);
            self.min = Some(idx);
            self.max = Some(idx);
            self.len = 1;
            trace!("splay_set: inserted root node {idx}");
            return true;
        };

        if cmp == Ordering::Equal {
            self.splay(at);
            return false;
        }

        let idx = self.alloc(value);
        set_p(&mut self.arena, idx, Some(at));
        if cmp == Ordering::Less {
            set_l(&mut self.arena, at, Some(idx));
        } else {
            set_r(&mut self.arena, at, Some(idx));
        }
        self.len += 1;
        self.track_extrema(idx);
        self.splay(idx);
        trace!("splay_set: inserted node {idx}, len {}", self.len);
        true
    }

    fn track_extrema(&mut self, idx: u32) {
        let value = self.value(idx);
        let beats = |cached: Option<u32>, wanted: Ordering| {
            cached.map_or(true, |m| self.compare(value, self.value(m)) == wanted)
        };
        let new_min = beats(self.min, Ordering::Less);
        let new_max = beats(self.max, Ordering::Greater);
        if new_min {
            self.min = Some(idx);
        }
        if new_max {
            self.max = Some(idx);
        }
    }

    /// Looks `value` up. The node where the search stopped is splayed even
    /// on a miss, so a follow-up access nearby is cheap.
    pub fn find(&mut self, value: &T) -> Cursor {
        let Some((at, cmp)) = self.descend(value) else {
            return self.end();
        };
        self.splay(at);
        if cmp == Ordering::Equal {
            Cursor::at(at)
        } else {
            self.end()
        }
    }

    /// Cursor on the smallest value not less than `value`, splayed to the
    /// root, or [`end`](Self::end) if every value is smaller.
    pub fn lower_bound(&mut self, value: &T) -> Cursor {
        let Some(max) = self.max else {
            return self.end();
        };
        if self.compare(self.value(max), value) == Ordering::Less {
            return self.end();
        }
        let cmp = |a: &T, b: &T| self.compare(a, b);
        match util::lower_bound(&self.arena, self.root, value, SplayNode::key, cmp) {
            Some(idx) => {
                self.splay(idx);
                Cursor::at(idx)
            }
            None => self.end(),
        }
    }

    /// Membership test that leaves the tree shape alone.
    pub fn contains(&self, value: &T) -> bool {
        let cmp = |a: &T, b: &T| self.compare(a, b);
        util::find(&self.arena, self.root, value, SplayNode::key, cmp).is_some()
    }

    /// Removes `value`. Returns whether it was present.
    pub fn erase(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes `value` and hands back the stored instance.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let cursor = self.find(value);
        if !cursor.is_accessible() {
            return None;
        }
        // `find` has splayed the hit to the root.
        let node = cursor.node()?;
        self.len -= 1;

        if self.len == 0 {
            let removed = self.arena[node as usize].vacate();
            self.clear();
            return removed;
        }

        if self.min == Some(node) {
            self.min = util::next(&self.arena, node);
            trace!("splay_set: min cache moved to {:?}", self.min);
        }
        if self.max == Some(node) {
            self.max = util::prev(&self.arena, node);
            trace!("splay_set: max cache moved to {:?}", self.max);
        }

        let r = get_r(&self.arena, node);
        let new_root = match get_l(&self.arena, node) {
            None => r,
            Some(l) => {
                let pred = util::last(&self.arena, Some(l)).unwrap_or(l);
                if let Some(r) = r {
                    set_r(&mut self.arena, pred, Some(r));
                    set_p(&mut self.arena, r, Some(pred));
                }
                Some(l)
            }
        };
        if let Some(root) = new_root {
            set_p(&mut self.arena, root, None);
        }
        self.root = new_root;
        trace!("splay_set: erased node {node}, len {}", self.len);
        self.release(node)
    }

    /// Walks the whole tree and reports the first broken invariant.
    pub fn assert_valid(&self) -> Result<(), InvariantViolation> {
        if let Some(root) = self.root {
            if get_p(&self.arena, root).is_some() {
                return Err(InvariantViolation::RootHasParent(root));
            }
        }

        let mut reachable = 0;
        let mut stack: Vec<u32> = self.root.into_iter().collect();
        while let Some(i) = stack.pop() {
            if self.arena[i as usize].is_vacant() {
                return Err(InvariantViolation::VacantNode(i));
            }
            reachable += 1;
            for child in [get_l(&self.arena, i), get_r(&self.arena, i)].into_iter().flatten() {
                if get_p(&self.arena, child) != Some(i) {
                    return Err(InvariantViolation::BrokenParentLink { parent: i, child });
                }
                stack.push(child);
            }
        }
        if reachable != self.len {
            return Err(InvariantViolation::SizeMismatch {
                recorded: self.len,
                reachable,
            });
        }

        let mut curr = util::first(&self.arena, self.root);
        while let Some(i) = curr {
            let succ = util::next(&self.arena, i);
            if let Some(s) = succ {
                if self.compare(self.value(i), self.value(s)) != Ordering::Less {
                    return Err(InvariantViolation::OutOfOrder(s));
                }
            }
            curr = succ;
        }

        let expected = util::first(&self.arena, self.root);
        if self.min != expected {
            return Err(InvariantViolation::StaleExtremum {
                which: "min",
                cached: self.min,
                expected,
            });
        }
        let expected = util::last(&self.arena, self.root);
        if self.max != expected {
            return Err(InvariantViolation::StaleExtremum {
                which: "max",
                cached: self.max,
                expected,
            });
        }
        Ok(())
    }
}

impl<T, C> SplaySet<T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    /// Pre-order deep copy into `self`, which must be empty. The extrema are
    /// rebuilt by comparing every copied value.
    fn copy_nodes_from(&mut self, source: &Self) {
        self.arena.reserve(source.len);
        let mut stack: Vec<(u32, Option<(u32, bool)>)> = Vec::new();
        if let Some(root) = source.root {
            stack.push((root, None));
        }
        while let Some((src, parent)) = stack.pop() {
            let idx = self.alloc(source.value(src).clone());
            match parent {
                Some((p, true)) => {
                    set_l(&mut self.arena, p, Some(idx));
                    set_p(&mut self.arena, idx, Some(p));
                }
                Some((p, false)) => {
                    set_r(&mut self.arena, p, Some(idx));
                    set_p(&mut self.arena, idx, Some(p));
                }
                None => self.root = Some(idx),
            }
            self.track_extrema(idx);
            if let Some(r) = get_r(&source.arena, src) {
                stack.push((r, Some((idx, false))));
            }
            if let Some(l) = get_l(&source.arena, src) {
                stack.push((l, Some((idx, true))));
            }
        }
        self.len = source.len;
        trace!("splay_set: deep-copied {} nodes", self.len);
    }
}

impl<T, C> Clone for SplaySet<T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering + Clone,
{
    fn clone(&self) -> Self {
        let mut out = Self::with_comparator(self.comparator.clone());
        out.copy_nodes_from(self);
        out
    }

    fn clone_from(&mut self, source: &Self) {
        // `&mut self` and `&Self` cannot alias, so there is no
        // self-assignment case to guard against.
        self.clear();
        self.comparator = source.comparator.clone();
        self.copy_nodes_from(source);
    }
}

impl<T: PartialEq, C> PartialEq for SplaySet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for SplaySet<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for SplaySet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> Extend<T> for SplaySet<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SplaySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SplaySet<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T, C> IntoIterator for &'a SplaySet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, C> IntoIterator for SplaySet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let mut order = Vec::with_capacity(self.len);
        let mut curr = self.min;
        while let Some(i) = curr {
            order.push(i);
            curr = util::next(&self.arena, i);
        }
        let values = order
            .into_iter()
            .filter_map(|i| self.arena[i as usize].v.take())
            .collect();
        IntoIter::new(values)
    }
}
