use crate::NodeIdx;

pub type Result<T> = std::result::Result<T, Error>;

/// The broad class an [`Error`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An index argument lies outside the valid bound.
    OutOfRange,
    /// The node is in a state that forbids the operation.
    InvalidState,
    /// An argument does not stand in the required relation to the receiver.
    InvalidArgument,
    /// The operation would make a node its own ancestor.
    WouldCreateCycle,
    /// A handle does not refer to a live node.
    NotFound,
}

#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    displaydoc::Display,
    thiserror::Error,
)]
pub enum Error {
    /// Child index {index} is out of range for a node with {len} children.
    IndexOutOfRange { index: usize, len: usize },
    /// Cannot insert at index {index} of {parent}, which has {len} children.
    InsertionOutOfRange { parent: NodeIdx, index: usize, len: usize },
    /// Cannot link {node}: it already is a child of {parent}.
    AlreadyLinked { node: NodeIdx, parent: NodeIdx },
    /// Node {0} has no parent.
    NotLinked(NodeIdx),
    /// Node {0} is read-only and cannot change its children.
    ReadOnlyNode(NodeIdx),
    /// Cannot remove {node} from its read-only parent {parent}.
    ReadOnlyParent { node: NodeIdx, parent: NodeIdx },
    /// Node {node} is not a child of {parent}.
    NotAChild { node: NodeIdx, parent: NodeIdx },
    /// Linking {node} under {parent} would make {node} its own ancestor.
    WouldCreateCycle { node: NodeIdx, parent: NodeIdx },
    /// Couldn't find a live node for {0}.
    NodeNotFound(NodeIdx),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfRange { .. }
            | Self::InsertionOutOfRange { .. } => ErrorKind::OutOfRange,
            Self::AlreadyLinked { .. }
            | Self::NotLinked(_)
            | Self::ReadOnlyNode(_)
            | Self::ReadOnlyParent { .. } => ErrorKind::InvalidState,
            Self::NotAChild { .. } => ErrorKind::InvalidArgument,
            Self::WouldCreateCycle { .. } => ErrorKind::WouldCreateCycle,
            Self::NodeNotFound(_) => ErrorKind::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_the_taxonomy() {
        let idx = NodeIdx(3);
        let parent = NodeIdx(0);
        assert_eq!(
            Error::IndexOutOfRange { index: 2, len: 2 }.kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            Error::InsertionOutOfRange { parent, index: 5, len: 2 }.kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            Error::AlreadyLinked { node: idx, parent }.kind(),
            ErrorKind::InvalidState
        );
        assert_eq!(Error::NotLinked(idx).kind(), ErrorKind::InvalidState);
        assert_eq!(Error::ReadOnlyNode(idx).kind(), ErrorKind::InvalidState);
        assert_eq!(
            Error::ReadOnlyParent { node: idx, parent }.kind(),
            ErrorKind::InvalidState
        );
        assert_eq!(
            Error::NotAChild { node: idx, parent }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            Error::WouldCreateCycle { node: idx, parent }.kind(),
            ErrorKind::WouldCreateCycle
        );
        assert_eq!(Error::NodeNotFound(idx).kind(), ErrorKind::NotFound);
    }

    #[test]
    fn messages_name_the_nodes() {
        let err = Error::AlreadyLinked { node: NodeIdx(4), parent: NodeIdx(1) };
        assert_eq!(
            err.to_string(),
            "Cannot link #4: it already is a child of #1."
        );
        let err = Error::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "Child index 7 is out of range for a node with 3 children."
        );
    }
}
