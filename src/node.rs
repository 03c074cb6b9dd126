//!

use crate::attributes::AttributeStore;
use crate::NodeIdx;

#[rustfmt::skip]
#[derive(
    Clone,
    PartialEq,
    derive_more::Deref,
    derive_more::DerefMut,
)]
pub struct Node<D> {
    pub(crate) idx: NodeIdx,
    pub(crate) parent: Option<NodeIdx>,
    pub(crate) child_index: Option<usize>,
    pub(crate) children: Vec<NodeIdx>,
    pub(crate) sealed: bool,
    pub attributes: AttributeStore,
    #[deref]
    #[deref_mut]
    pub data: D,
}

impl<D> Node<D> {
    pub(crate) fn new(idx: NodeIdx, data: D) -> Self {
        Node {
            idx,
            parent: None,
            child_index: None,
            children: Vec::with_capacity(4),
            sealed: false,
            attributes: AttributeStore::new(),
            data,
        }
    }

    #[inline(always)]
    pub fn idx(&self) -> NodeIdx {
        self.idx
    }

    #[inline(always)]
    pub fn parent(&self) -> Option<NodeIdx> {
        self.parent
    }

    /// The position of `self` among its parent's children, if it has one.
    #[inline(always)]
    pub fn child_index(&self) -> Option<usize> {
        self.child_index
    }

    #[inline(always)]
    pub fn children(&self) -> &[NodeIdx] {
        &self.children
    }

    #[inline(always)]
    pub fn count_children(&self) -> usize {
        self.children.len()
    }

    /// Whether `self` refuses changes to its list of children.
    #[inline(always)]
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    #[inline]
    pub fn is_root_node(&self) -> bool {
        self.parent.is_none()
    }

    #[inline]
    pub fn is_branch_node(&self) -> bool {
        !self.is_leaf_node()
    }

    #[inline]
    pub fn is_leaf_node(&self) -> bool {
        self.children.is_empty()
    }

    /// Splice `child_idx` in at `pos` and return the range of
    /// positions whose occupants moved.
    pub(crate) fn splice_in(&mut self, pos: usize, child_idx: NodeIdx) -> std::ops::Range<usize> {
        self.children.insert(pos, child_idx);
        pos + 1..self.children.len()
    }

    /// Splice out the child at `pos` and return it along with the range
    /// of positions whose occupants moved.
    pub(crate) fn splice_out(&mut self, pos: usize) -> (NodeIdx, std::ops::Range<usize>) {
        let child_idx = self.children.remove(pos);
        (child_idx, pos..self.children.len())
    }

    pub(crate) fn link(&mut self, parent_idx: NodeIdx, pos: usize) {
        self.parent = Some(parent_idx);
        self.child_index = Some(pos);
    }

    pub(crate) fn unlink(&mut self) {
        self.parent = None;
        self.child_index = None;
    }

    /// Reset everything but `idx` and `data` so the slot can be recycled.
    pub(crate) fn clear(&mut self) {
        self.unlink();
        self.children.clear();
        self.sealed = false;
        self.attributes.clear();
    }
}

impl<D: std::fmt::Debug> std::fmt::Debug for Node<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ds = f.debug_struct("Node");
        let ds = ds.field("idx", &self.idx);
        let ds = ds.field("parent", &self.parent);
        let ds = ds.field("child_index", &self.child_index);
        let ds = ds.field("children", &self.children);
        let ds = ds.field("sealed", &self.sealed);
        let ds = ds.field("attributes", &self.attributes);
        let ds = ds.field("data", &self.data);
        ds.finish()
    }
}
