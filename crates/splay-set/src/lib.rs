//! Ordered set backed by a splay tree.
//!
//! [`SplaySet`] keeps unique values in a binary search tree that is
//! rebalanced only by splaying: every insert, lookup, lower-bound query and
//! erase rotates the node it touched last up to the root. No balance
//! information is stored; the cost of each operation is O(log n) amortized.
//!
//! Nodes live in a `Vec` arena and refer to each other by `Option<u32>`
//! index. Parent links are plain indices, so there is no ownership cycle and
//! no `unsafe`.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] link trait, comparator helpers |
//! | [`node`] | [`SplayNode`] arena slot |
//! | [`splay`] | `rotate_left`, `rotate_right`, `splay` |
//! | [`util`] | `first`, `last`, `next`, `prev`, `descend`, `lower_bound` |
//! | [`set`] | [`SplaySet`] |
//! | [`cursor`] | [`Cursor`], bidirectional with a past-the-end flag |
//! | [`iter`] | [`Iter`], [`IntoIter`] |
//! | [`print`] | tree dumps |
//! | [`error`] | [`CursorError`], [`InvariantViolation`] |
//!
//! # Example
//!
//! ```
//! use splay_set::splay_set;
//!
//! let mut set = splay_set![5, 3, 8, 1, 4];
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 8]);
//!
//! let hit = set.find(&4);
//! assert_eq!(set.get(hit), Ok(&4));
//!
//! set.erase(&5);
//! let lb = set.lower_bound(&6);
//! assert_eq!(set.get(lb), Ok(&8));
//! assert_eq!(set.lower_bound(&9), set.end());
//! ```

pub mod cursor;
pub mod error;
pub mod iter;
pub mod node;
pub mod print;
pub mod set;
pub mod splay;
pub mod types;
pub mod util;

pub use cursor::Cursor;
pub use error::{CursorError, InvariantViolation};
pub use iter::{IntoIter, Iter};
pub use node::SplayNode;
pub use set::SplaySet;
pub use splay::{rotate_left, rotate_right, splay};
pub use types::{from_less, Node, OrdComparator};

/// Builds a [`SplaySet`] from a list of values.
///
/// ```
/// let set = splay_set::splay_set![3, 1, 2, 1];
/// assert_eq!(set.len(), 3);
/// ```
#[macro_export]
macro_rules! splay_set {
    () => {
        $crate::SplaySet::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut set = $crate::SplaySet::new();
        $(set.insert($value);)+
        set
    }};
}
