//! The arena-backed tree container.
//!
//! A `Tree<D>` owns every node it allocates.  Nodes start out as parentless
//! roots; linking one below another node hands its subtree over to that
//! node, and removing it hands the subtree back as a root again.

use crate::arena::Arena;
use crate::attributes::AttributeStore;
use crate::linkage::{Linkage, MutableLinkage};
use crate::lookup::Lookup;
pub use crate::{
    error::{Error, Result},
    node::Node,
    NodeIdx,
};
use std::fmt;
use tracing::{debug, instrument};

#[derive(Clone, Debug, PartialEq)]
pub struct Tree<D> {
    arena: Arena<D>,
}

impl<D> Default for Tree<D> {
    fn default() -> Self {
        Self::with_capacity(64)
    }
}

impl<D> Tree<D> {
    pub fn with_capacity(cap: usize) -> Self {
        Self { arena: Arena::with_capacity(cap) }
    }

    /// The number of live nodes in `self`, linked or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.logical_size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(&self, idx: NodeIdx) -> bool {
        self.arena.contains(idx)
    }

    #[inline]
    pub fn get(&self, idx: NodeIdx) -> Option<&Node<D>> {
        self.arena.get(idx)
    }

    #[inline]
    pub fn get_mut(&mut self, idx: NodeIdx) -> Option<&mut Node<D>> {
        self.arena.get_mut(idx)
    }

    /// Allocate a standalone node: no parent, no children, no attributes.
    #[instrument(level = "trace", skip(self, data))]
    pub fn add_node(&mut self, data: D) -> NodeIdx {
        self.arena.add_node(data)
    }

    /// Destroy the detached subtree rooted in `self[idx]`, recycling its
    /// slots.  Handles into it must not be used afterwards.
    #[instrument(level = "trace", skip(self))]
    pub fn rm_node(&mut self, idx: NodeIdx) -> Result<()> {
        self.ensure_live(idx)?;
        if let Some(parent) = self.arena[idx].parent() {
            let err = Error::AlreadyLinked { node: idx, parent };
            debug!(%err, "refusing to destroy a linked node");
            return Err(err);
        }
        self.arena.rm_subtree(idx);
        Ok(())
    }

    /// Every live parentless node, in slot order.
    pub fn roots(&self) -> impl DoubleEndedIterator<Item = NodeIdx> + '_ {
        self.arena.live_idxs()
            .filter(move |&idx| self.arena[idx].is_root_node())
    }

    #[inline]
    pub fn attrs(&self, idx: NodeIdx) -> &AttributeStore {
        &self[idx].attributes
    }

    #[inline]
    pub fn attrs_mut(&mut self, idx: NodeIdx) -> &mut AttributeStore {
        &mut self[idx].attributes
    }

    /// Make `self[idx]` read-only: it keeps answering queries, but its
    /// children can no longer be inserted or removed.
    pub fn seal(&mut self, idx: NodeIdx) -> Result<&mut Self> {
        self.ensure_live(idx)?;
        self.arena[idx].sealed = true;
        Ok(self)
    }

    pub fn unseal(&mut self, idx: NodeIdx) -> Result<&mut Self> {
        self.ensure_live(idx)?;
        self.arena[idx].sealed = false;
        Ok(self)
    }

    /// A read-only view of `self`.
    #[inline]
    pub fn view(&self) -> TreeView<'_, D> {
        TreeView { tree: self }
    }

    fn ensure_live(&self, idx: NodeIdx) -> Result<()> {
        if self.contains(idx) {
            Ok(())
        } else {
            Err(Error::NodeNotFound(idx))
        }
    }

    fn ensure_mutable(&self, idx: NodeIdx) -> Result<()> {
        self.ensure_live(idx)?;
        if self.arena[idx].is_sealed() {
            return Err(Error::ReadOnlyNode(idx));
        }
        Ok(())
    }

    /// Re-sync the stored child index of the children of
    /// `self[parent]` at positions `positions`.
    fn renumber(&mut self, parent: NodeIdx, positions: std::ops::Range<usize>) {
        for pos in positions {
            let cidx = self.arena[parent].children()[pos];
            self.arena[cidx].child_index = Some(pos);
        }
    }

    fn check_insertion(&self, parent: NodeIdx, pos: usize, child: NodeIdx) -> Result<()> {
        self.ensure_mutable(parent)?;
        self.ensure_live(child)?;
        if let Some(old_parent) = self.arena[child].parent() {
            return Err(Error::AlreadyLinked { node: child, parent: old_parent });
        }
        let len = self.arena[parent].count_children();
        if pos > len {
            return Err(Error::InsertionOutOfRange { parent, index: pos, len });
        }
        // `child` is a root, so it is an ancestor-or-self of `parent`
        // exactly when it is the root of `parent`.
        if self.find_root(parent) == child {
            return Err(Error::WouldCreateCycle { node: child, parent });
        }
        Ok(())
    }
}

impl<D> Linkage for Tree<D> {
    #[inline]
    fn parent_of(&self, idx: NodeIdx) -> Option<NodeIdx> {
        self[idx].parent()
    }

    #[inline]
    fn child_idxs(&self, idx: NodeIdx) -> &[NodeIdx] {
        self[idx].children()
    }

    fn child_index_of(&self, idx: NodeIdx) -> Result<usize> {
        self[idx].child_index().ok_or(Error::NotLinked(idx))
    }

    #[inline]
    fn is_mutable(&self, idx: NodeIdx) -> bool {
        self.contains(idx) && !self[idx].is_sealed()
    }
}

impl<D> MutableLinkage for Tree<D> {
    #[instrument(level = "trace", skip(self))]
    fn insert_child_at(
        &mut self,
        parent: NodeIdx,
        pos: usize,
        child: NodeIdx,
    ) -> Result<&mut Self> {
        if let Err(err) = self.check_insertion(parent, pos, child) {
            debug!(%err, "rejected insertion");
            return Err(err);
        }
        let shifted = self.arena[parent].splice_in(pos, child);
        self.arena[child].link(parent, pos);
        self.renumber(parent, shifted);
        Ok(self)
    }

    #[instrument(level = "trace", skip(self))]
    fn remove_child_at(&mut self, parent: NodeIdx, pos: usize) -> Result<NodeIdx> {
        let checked = self.ensure_mutable(parent)
            .and_then(|()| self.child_at(parent, pos));
        let child = match checked {
            Ok(child) => child,
            Err(err) => {
                debug!(%err, "rejected removal");
                return Err(err);
            }
        };
        let (removed, shifted) = self.arena[parent].splice_out(pos);
        debug_assert_eq!(removed, child);
        self.arena[child].unlink();
        self.renumber(parent, shifted);
        Ok(child)
    }

    fn add_child(&mut self, parent: NodeIdx, child: NodeIdx) -> Result<&mut Self> {
        self.ensure_live(parent)?;
        let pos = self.arena[parent].count_children();
        self.insert_child_at(parent, pos, child)
    }

    fn remove_child(&mut self, parent: NodeIdx, child: NodeIdx) -> Result<&mut Self> {
        self.ensure_live(parent)?;
        self.ensure_live(child)?;
        let pos = match self.arena[child].parent() {
            Some(pidx) if pidx == parent => self.child_index_of(child)?,
            _ => return Err(Error::NotAChild { node: child, parent }),
        };
        self.remove_child_at(parent, pos)?;
        Ok(self)
    }

    fn remove(&mut self, idx: NodeIdx) -> Result<NodeIdx> {
        self.ensure_live(idx)?;
        let parent = self.arena[idx].parent().ok_or(Error::NotLinked(idx))?;
        if !self.is_mutable(parent) {
            return Err(Error::ReadOnlyParent { node: idx, parent });
        }
        let pos = self.child_index_of(idx)?;
        self.remove_child_at(parent, pos)
    }
}

impl<D> std::ops::Index<NodeIdx> for Tree<D> {
    type Output = Node<D>;

    fn index(&self, idx: NodeIdx) -> &Self::Output {
        &self.arena[idx]
    }
}

impl<D> std::ops::IndexMut<NodeIdx> for Tree<D> {
    fn index_mut(&mut self, idx: NodeIdx) -> &mut Self::Output {
        &mut self.arena[idx]
    }
}

impl<D> fmt::Display for Tree<D>
where
    D: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // NOTE: This loop is `O(D * N)`, where:
        //       - D is the maximum depth of `self`
        //       - N is the number of nodes in `self`
        for root_idx in self.roots() {
            let subtree = std::iter::once(root_idx)
                .chain(self.all_descendants(root_idx));
            for node_idx in subtree {
                for _ in self.all_ancestors(node_idx) {
                    write!(f, "| ")?; // no newline
                }
                let node = &self[node_idx];
                writeln!(f, "{} {}", node.idx(), node.data)?;
            }
        }
        Ok(())
    }
}

/// A read-only window onto a [`Tree`].  It can be navigated with
/// [`Lookup`] like the tree itself, but offers no way to restructure it.
#[derive(Debug)]
pub struct TreeView<'t, D> {
    tree: &'t Tree<D>,
}

impl<D> Clone for TreeView<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for TreeView<'_, D> {}

impl<'t, D> TreeView<'t, D> {
    #[inline]
    pub fn get(&self, idx: NodeIdx) -> Option<&'t Node<D>> {
        self.tree.get(idx)
    }

    #[inline]
    pub fn attrs(&self, idx: NodeIdx) -> &'t AttributeStore {
        self.tree.attrs(idx)
    }

    #[inline]
    pub fn roots(&self) -> impl DoubleEndedIterator<Item = NodeIdx> + 't {
        self.tree.roots()
    }
}

impl<D> Linkage for TreeView<'_, D> {
    #[inline]
    fn parent_of(&self, idx: NodeIdx) -> Option<NodeIdx> {
        self.tree.parent_of(idx)
    }

    #[inline]
    fn child_idxs(&self, idx: NodeIdx) -> &[NodeIdx] {
        self.tree.child_idxs(idx)
    }

    #[inline]
    fn child_index_of(&self, idx: NodeIdx) -> Result<usize> {
        self.tree.child_index_of(idx)
    }
}

impl<D> std::ops::Index<NodeIdx> for TreeView<'_, D> {
    type Output = Node<D>;

    fn index(&self, idx: NodeIdx) -> &Self::Output {
        &self.tree[idx]
    }
}
