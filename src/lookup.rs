//! Predicate-driven navigation over any [`Linkage`].
//!
//! The plural lookups return lazy iterators that borrow the linkage, so
//! the tree cannot be restructured while one of them is alive.  Each call
//! starts a fresh walk.

use crate::linkage::Linkage;
use crate::NodeIdx;

/// The predicate that accepts every node.
#[inline(always)]
pub fn always(_: NodeIdx) -> bool {
    true
}

pub type All = fn(NodeIdx) -> bool;

pub trait Lookup: Linkage + Sized {
    /// The first child of `idx` accepted by `pred`.
    fn child<F>(&self, idx: NodeIdx, pred: F) -> Option<NodeIdx>
    where
        F: FnMut(NodeIdx) -> bool,
    {
        self.children(idx, pred).next()
    }

    /// The first sibling of `idx` (never `idx` itself) accepted by `pred`.
    fn sibling<F>(&self, idx: NodeIdx, pred: F) -> Option<NodeIdx>
    where
        F: FnMut(NodeIdx) -> bool,
    {
        self.siblings(idx, pred).next()
    }

    /// The nearest ancestor of `idx` accepted by `pred`.
    fn ancestor<F>(&self, idx: NodeIdx, pred: F) -> Option<NodeIdx>
    where
        F: FnMut(NodeIdx) -> bool,
    {
        self.ancestors(idx, pred).next()
    }

    /// The first descendant of `idx`, in pre-order, accepted by `pred`.
    fn descendant<F>(&self, idx: NodeIdx, pred: F) -> Option<NodeIdx>
    where
        F: FnMut(NodeIdx) -> bool,
    {
        self.descendants(idx, pred).next()
    }

    fn children<F>(&self, idx: NodeIdx, pred: F) -> Children<'_, Self, F>
    where
        F: FnMut(NodeIdx) -> bool,
    {
        Children { linkage: self, parent: idx, pos: 0, pred }
    }

    fn ancestors<F>(&self, idx: NodeIdx, pred: F) -> Ancestors<'_, Self, F>
    where
        F: FnMut(NodeIdx) -> bool,
    {
        Ancestors { linkage: self, next: self.parent_of(idx), pred }
    }

    fn descendants<F>(&self, idx: NodeIdx, pred: F) -> Descendants<'_, Self, F>
    where
        F: FnMut(NodeIdx) -> bool,
    {
        let stack = self.child_idxs(idx).iter().rev().copied().collect();
        Descendants { linkage: self, stack, pred }
    }

    fn siblings<F>(&self, idx: NodeIdx, pred: F) -> Siblings<'_, Self, F>
    where
        F: FnMut(NodeIdx) -> bool,
    {
        Siblings {
            linkage: self,
            this: idx,
            parent: self.parent_of(idx),
            pos: 0,
            pred,
        }
    }

    #[inline]
    fn all_ancestors(&self, idx: NodeIdx) -> Ancestors<'_, Self, All> {
        self.ancestors(idx, always as All)
    }

    #[inline]
    fn all_descendants(&self, idx: NodeIdx) -> Descendants<'_, Self, All> {
        self.descendants(idx, always as All)
    }

    #[inline]
    fn all_siblings(&self, idx: NodeIdx) -> Siblings<'_, Self, All> {
        self.siblings(idx, always as All)
    }

    /// Follow parents up from `idx` until there are none left.
    fn find_root(&self, idx: NodeIdx) -> NodeIdx {
        let mut root = idx;
        while let Some(parent) = self.parent_of(root) {
            root = parent;
        }
        root
    }
}

impl<L: Linkage> Lookup for L {}

pub struct Children<'l, L, F> {
    linkage: &'l L,
    parent: NodeIdx,
    pos: usize,
    pred: F,
}

impl<L, F> Iterator for Children<'_, L, F>
where
    L: Linkage,
    F: FnMut(NodeIdx) -> bool,
{
    type Item = NodeIdx;

    fn next(&mut self) -> Option<Self::Item> {
        let children = self.linkage.child_idxs(self.parent);
        while let Some(&cidx) = children.get(self.pos) {
            self.pos += 1;
            if (self.pred)(cidx) {
                return Some(cidx);
            }
        }
        None
    }
}

pub struct Siblings<'l, L, F> {
    linkage: &'l L,
    this: NodeIdx,
    parent: Option<NodeIdx>,
    pos: usize,
    pred: F,
}

impl<L, F> Iterator for Siblings<'_, L, F>
where
    L: Linkage,
    F: FnMut(NodeIdx) -> bool,
{
    type Item = NodeIdx;

    fn next(&mut self) -> Option<Self::Item> {
        let children = self.linkage.child_idxs(self.parent?);
        while let Some(&cidx) = children.get(self.pos) {
            self.pos += 1;
            if cidx != self.this && (self.pred)(cidx) {
                return Some(cidx);
            }
        }
        None
    }
}

pub struct Ancestors<'l, L, F> {
    linkage: &'l L,
    next: Option<NodeIdx>,
    pred: F,
}

impl<L, F> Iterator for Ancestors<'_, L, F>
where
    L: Linkage,
    F: FnMut(NodeIdx) -> bool,
{
    type Item = NodeIdx;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(aidx) = self.next {
            self.next = self.linkage.parent_of(aidx);
            if (self.pred)(aidx) {
                return Some(aidx);
            }
        }
        None
    }
}

/// Pre-order walk below a node.  Rejected nodes are skipped, but their
/// subtrees are still visited.
pub struct Descendants<'l, L, F> {
    linkage: &'l L,
    stack: Vec<NodeIdx>,
    pred: F,
}

impl<L, F> Iterator for Descendants<'_, L, F>
where
    L: Linkage,
    F: FnMut(NodeIdx) -> bool,
{
    type Item = NodeIdx;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(didx) = self.stack.pop() {
            self.stack.extend(self.linkage.child_idxs(didx).iter().rev());
            if (self.pred)(didx) {
                return Some(didx);
            }
        }
        None
    }
}

impl<L, F> std::iter::FusedIterator for Children<'_, L, F>
where
    L: Linkage,
    F: FnMut(NodeIdx) -> bool,
{}

impl<L, F> std::iter::FusedIterator for Siblings<'_, L, F>
where
    L: Linkage,
    F: FnMut(NodeIdx) -> bool,
{}

impl<L, F> std::iter::FusedIterator for Ancestors<'_, L, F>
where
    L: Linkage,
    F: FnMut(NodeIdx) -> bool,
{}

impl<L, F> std::iter::FusedIterator for Descendants<'_, L, F>
where
    L: Linkage,
    F: FnMut(NodeIdx) -> bool,
{}
