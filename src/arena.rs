//! This module deals with arena allocation.

use crate::node::Node;
use crate::NodeIdx;
use std::collections::VecDeque;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Arena<D> {
    nodes: Vec<Node<D>>,
    garbage: VecDeque<NodeIdx>,
}

impl<D> Default for Arena<D> {
    fn default() -> Self {
        Self::with_capacity(64)
    }
}

impl<D> Arena<D> {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(cap),
            garbage: VecDeque::with_capacity(cap),
        }
    }

    /// Get the logical size, which is defined as `physical size - garbage size`
    /// i.e. the number of allocated, non-garbage nodes in `self`.
    #[inline]
    pub fn logical_size(&self) -> usize {
        self.physical_size() - self.garbage_size()
    }

    /// Get the physical size, which is defined as the number of nodes
    /// allocated in the arena, whether they are garbage or not.
    #[inline]
    pub fn physical_size(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn garbage_size(&self) -> usize {
        self.garbage.len()
    }

    /// Whether `idx` refers to an allocated, non-garbage node.
    #[inline]
    pub fn contains(&self, idx: NodeIdx) -> bool {
        idx.0 < self.nodes.len() && !self.garbage.contains(&idx)
    }

    pub fn get(&self, idx: NodeIdx) -> Option<&Node<D>> {
        self.contains(idx).then(|| &self.nodes[idx.0])
    }

    pub fn get_mut(&mut self, idx: NodeIdx) -> Option<&mut Node<D>> {
        if self.contains(idx) {
            Some(&mut self.nodes[idx.0])
        } else {
            None
        }
    }

    /// Every live node, in slot order.
    pub fn live_idxs(&self) -> impl DoubleEndedIterator<Item = NodeIdx> + '_ {
        (0..self.nodes.len())
            .map(NodeIdx)
            .filter(move |&idx| !self.garbage.contains(&idx))
    }

    /// If there is a garbage `Node<D>` in `self`, recycle it.
    /// Otherwise, allocate a new one.
    /// In either case, assign `data` to the node, and return its `NodeIdx`.
    pub fn add_node(&mut self, data: D) -> NodeIdx {
        if let Some(node_idx) = self.garbage.pop_front() {
            self[node_idx].data = data;
            node_idx
        } else {
            let node_idx = NodeIdx(self.nodes.len());
            self.nodes.push(Node::new(node_idx, data));
            node_idx
        }
    }

    /// Recycle `self[node_idx]` and every node below it.  The caller is
    /// responsible for having detached `self[node_idx]` from its parent.
    pub fn rm_subtree(&mut self, node_idx: NodeIdx) {
        debug_assert!(self[node_idx].is_root_node());
        for idx in self.dfs(node_idx) {
            // NOTE: The data field is left in place; `add_node()` always
            //       overwrites it before the slot becomes reachable again.
            self[idx].clear();
            self.garbage.push_back(idx);
        }
    }

    /// Pre-order walk of the subtree rooted in `self[start_idx]`.
    pub fn dfs(&self, start_idx: NodeIdx) -> Vec<NodeIdx> {
        let mut output = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![start_idx];
        while let Some(node_idx) = stack.pop() {
            output.push(node_idx);
            stack.extend(self[node_idx].children().iter().rev());
        }
        output
    }
}

impl<D> std::ops::Index<NodeIdx> for Arena<D> {
    type Output = Node<D>;

    fn index(&self, idx: NodeIdx) -> &Self::Output {
        &self.nodes[idx.0]
    }
}

impl<D> std::ops::IndexMut<NodeIdx> for Arena<D> {
    fn index_mut(&mut self, idx: NodeIdx) -> &mut Self::Output {
        &mut self.nodes[idx.0]
    }
}
