//! An arena-allocated, ordered tree container.  Nodes own an ordered list
//! of children, know their parent, and carry a bag of attributes.
#![forbid(unsafe_code)]

mod arena;
pub mod attributes;
pub mod error;
pub mod linkage;
pub mod lookup;
pub mod node;
pub mod node_idx;
pub mod tree;

#[rustfmt::skip]
pub use crate::{
    attributes::{AttributeStore, Value},
    error::{Error, ErrorKind, Result},
    linkage::{Linkage, MutableLinkage},
    lookup::{always, Lookup},
    node::Node,
    node_idx::NodeIdx,
    tree::{Tree, TreeView},
};
