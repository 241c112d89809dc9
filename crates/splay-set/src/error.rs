use thiserror::Error;

/// Misuse of a [`Cursor`](crate::Cursor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("cursor is past the end of the set")]
    PastTheEnd,
    #[error("cursor is already at the first element")]
    BeforeBegin,
    #[error("cursor does not point into the set")]
    Detached,
    #[error("cursor points at erased slot {0}")]
    Vacant(u32),
}

/// Structural defect found by [`SplaySet::assert_valid`](crate::SplaySet::assert_valid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("root {0} has a parent")]
    RootHasParent(u32),
    #[error("node {child} does not point back at its parent {parent}")]
    BrokenParentLink { parent: u32, child: u32 },
    #[error("node {0} is reachable but vacant")]
    VacantNode(u32),
    #[error("in-order walk is not strictly increasing at node {0}")]
    OutOfOrder(u32),
    #[error("size is {recorded} but {reachable} nodes are reachable")]
    SizeMismatch { recorded: usize, reachable: usize },
    #[error("{which} cache is {cached:?}, expected {expected:?}")]
    StaleExtremum {
        which: &'static str,
        cached: Option<u32>,
        expected: Option<u32>,
    },
}
