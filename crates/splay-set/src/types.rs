//! Node link trait and comparator aliases.
//!
//! Every "pointer" in the tree is an `Option<u32>` index into a
//! [`Vec`]-backed arena. The owning links (`l`, `r`) and the back-link (`p`)
//! share the same representation; ownership lives in the arena itself, so
//! the parent link never forms a reference cycle.

use std::cmp::Ordering;

/// Parent / left / right links of an arena node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Comparator used by [`SplaySet`](crate::SplaySet) when `T: Ord`.
pub type OrdComparator<T> = fn(&T, &T) -> Ordering;

/// Builds a three-way comparator out of a strict less-than predicate.
///
/// Equality is derived as "neither is less than the other".
pub fn from_less<T, L>(less: L) -> impl Fn(&T, &T) -> Ordering + Clone
where
    L: Fn(&T, &T) -> bool + Clone,
{
    move |a, b| {
        if less(a, b) {
            Ordering::Less
        } else if less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
