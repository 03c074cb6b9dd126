//! Stable handles into a `Tree<D>` arena.

/// A handle to one node of a `Tree<D>`.
///
/// `Serialize`/`Deserialize` are there so embedding applications can put
/// handles into their own serialized state; the crate itself defines no
/// tree format.
#[rustfmt::skip]
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Deserialize,
    serde::Serialize,
    derive_more::From
)]
pub struct NodeIdx(pub(crate) usize);

impl NodeIdx {
    /// The raw arena slot behind `self`.
    #[inline(always)]
    pub fn slot(self) -> usize {
        self.0
    }
}

impl std::fmt::Debug for NodeIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "NodeIdx({})", self.0)
    }
}

impl std::fmt::Display for NodeIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
