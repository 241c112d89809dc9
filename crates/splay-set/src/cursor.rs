//! Bidirectional position within a [`SplaySet`].
//!
//! The tree has no sentinel node, so "one past the last element" is encoded
//! as a flag next to the node index. The past-the-end cursor keeps pointing
//! at the maximum; stepping back from it only clears the flag.

use crate::error::CursorError;
use crate::set::SplaySet;
use crate::util::{next, prev};

/// In-order cursor over a [`SplaySet`].
///
/// A cursor is a plain `(node, past_end)` pair; it does not borrow the set,
/// so it survives calls such as [`SplaySet::find`] that restructure the tree.
/// Every navigation method takes the set it was obtained from. A cursor is an
/// index into that set's arena only; handed to another set it addresses an
/// unrelated slot. Two cursors are equal when both the node and the
/// past-the-end flag match.
///
/// The default cursor points at nothing; it is both `begin()` and `end()` of
/// an empty set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    node: Option<u32>,
    past_end: bool,
}

impl Cursor {
    pub(crate) fn at(node: u32) -> Self {
        Self {
            node: Some(node),
            past_end: false,
        }
    }

    pub(crate) fn past(node: u32) -> Self {
        Self {
            node: Some(node),
            past_end: true,
        }
    }

    /// Arena index of the node under the cursor.
    pub fn node(&self) -> Option<u32> {
        self.node
    }

    pub fn is_past_end(&self) -> bool {
        self.past_end
    }

    /// Whether the cursor can be dereferenced.
    pub fn is_accessible(&self) -> bool {
        self.node.is_some() && !self.past_end
    }

    /// Dereferences the cursor.
    pub fn value<'a, T, C>(&self, set: &'a SplaySet<T, C>) -> Result<&'a T, CursorError> {
        set.get(*self)
    }

    /// Pre-increment: moves to the in-order successor, or past the end when
    /// the cursor was on the maximum.
    pub fn move_next<T, C>(&mut self, set: &SplaySet<T, C>) -> Result<&mut Self, CursorError> {
        if self.past_end {
            return Err(CursorError::PastTheEnd);
        }
        let node = self.node.ok_or(CursorError::Detached)?;
        let arena = set.live_arena(node)?;
        match next(arena, node) {
            Some(succ) => self.node = Some(succ),
            None => self.past_end = true,
        }
        Ok(self)
    }

    /// Pre-decrement: steps back onto the last element when past the end,
    /// otherwise moves to the in-order predecessor.
    pub fn move_prev<T, C>(&mut self, set: &SplaySet<T, C>) -> Result<&mut Self, CursorError> {
        let node = self.node.ok_or(CursorError::Detached)?;
        let arena = set.live_arena(node)?;
        if self.past_end {
            self.past_end = false;
            return Ok(self);
        }
        let pred = prev(arena, node).ok_or(CursorError::BeforeBegin)?;
        self.node = Some(pred);
        Ok(self)
    }

    /// Post-increment: advances and returns the position held before.
    pub fn post_next<T, C>(&mut self, set: &SplaySet<T, C>) -> Result<Self, CursorError> {
        let before = *self;
        self.move_next(set)?;
        Ok(before)
    }

    /// Post-decrement: retreats and returns the position held before.
    pub fn post_prev<T, C>(&mut self, set: &SplaySet<T, C>) -> Result<Self, CursorError> {
        let before = *self;
        self.move_prev(set)?;
        Ok(before)
    }
}
