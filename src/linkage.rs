//! The parent/children bookkeeping capabilities.
//!
//! [`Linkage`] is the read-only half: anything implementing it can be
//! navigated with [`Lookup`](crate::Lookup).  [`MutableLinkage`] layers
//! structural edits on top of it.  Both address nodes by [`NodeIdx`]; an
//! implementation may panic when handed a handle it didn't produce.

use crate::error::{Error, Result};
use crate::NodeIdx;

pub trait Linkage {
    /// The parent of `idx`, or `None` for a root.
    fn parent_of(&self, idx: NodeIdx) -> Option<NodeIdx>;

    /// Borrow the ordered children of `idx`.
    fn child_idxs(&self, idx: NodeIdx) -> &[NodeIdx];

    /// The position of `idx` within its parent's children.
    /// Fails with [`Error::NotLinked`] for a root.
    fn child_index_of(&self, idx: NodeIdx) -> Result<usize>;

    /// Whether the children of `idx` may be changed.
    fn is_mutable(&self, _idx: NodeIdx) -> bool {
        false
    }

    /// Snapshot the ordered children of `idx`.  The returned `Vec` is
    /// detached from `self`.
    fn children_of(&self, idx: NodeIdx) -> Vec<NodeIdx> {
        self.child_idxs(idx).to_vec()
    }

    #[inline]
    fn count_children(&self, idx: NodeIdx) -> usize {
        self.child_idxs(idx).len()
    }

    fn child_at(&self, idx: NodeIdx, pos: usize) -> Result<NodeIdx> {
        let children = self.child_idxs(idx);
        children.get(pos).copied().ok_or(Error::IndexOutOfRange {
            index: pos,
            len: children.len(),
        })
    }
}

/// Structural edits.  Each edit either completes entirely or, on error,
/// leaves `self` untouched.
///
/// NOTE: Linking a node below one of its own descendants is the one way
///       to corrupt a tree through this interface; implementations should
///       reject it with [`Error::WouldCreateCycle`].
pub trait MutableLinkage: Linkage {
    /// Make `child` the `pos`-th child of `parent`, shifting the children
    /// at `pos..` one place back.  `pos == count_children(parent)` appends.
    ///
    /// `child` must not have a parent, not even `parent`: moving a node
    /// means removing it first.
    fn insert_child_at(
        &mut self,
        parent: NodeIdx,
        pos: usize,
        child: NodeIdx,
    ) -> Result<&mut Self>;

    /// Detach the `pos`-th child of `parent` and return it.  It keeps its
    /// own subtree and becomes a root.
    fn remove_child_at(&mut self, parent: NodeIdx, pos: usize) -> Result<NodeIdx>;

    fn add_child(&mut self, parent: NodeIdx, child: NodeIdx) -> Result<&mut Self> {
        let pos = self.count_children(parent);
        self.insert_child_at(parent, pos, child)
    }

    fn remove_child(&mut self, parent: NodeIdx, child: NodeIdx) -> Result<&mut Self> {
        if self.parent_of(child) != Some(parent) {
            return Err(Error::NotAChild { node: child, parent });
        }
        let pos = self.child_index_of(child)?;
        self.remove_child_at(parent, pos)?;
        Ok(self)
    }

    /// Detach `idx` from its parent.
    fn remove(&mut self, idx: NodeIdx) -> Result<NodeIdx> {
        let parent = self.parent_of(idx).ok_or(Error::NotLinked(idx))?;
        if !self.is_mutable(parent) {
            return Err(Error::ReadOnlyParent { node: idx, parent });
        }
        let pos = self.child_index_of(idx)?;
        self.remove_child_at(parent, pos)
    }
}
