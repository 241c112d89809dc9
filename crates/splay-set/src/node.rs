use crate::types::Node;

/// Arena slot holding one set element and its tree links.
#[derive(Clone, Debug)]
pub struct SplayNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    // `None` marks a vacant slot waiting on the free list; erased values are
    // dropped in place without shifting the rest of the arena.
    pub v: Option<T>,
}

impl<T> SplayNode<T> {
    pub fn new(v: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            v: Some(v),
        }
    }

    pub fn is_vacant(&self) -> bool {
        self.v.is_none()
    }

    /// Value of a node that is linked into the tree.
    pub(crate) fn key(&self) -> &T {
        match &self.v {
            Some(v) => v,
            None => unreachable!("vacant arena slot linked into the tree"),
        }
    }

    /// Drops the value and clears every link.
    pub(crate) fn vacate(&mut self) -> Option<T> {
        self.p = None;
        self.l = None;
        self.r = None;
        self.v.take()
    }
}

impl<T> Node for SplayNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}
