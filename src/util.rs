use crate::node::Node;

/// An exclusively owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// The outcome of inserting into a non-empty subtree. Either way the subtree is handed back so
/// the parent can reinstall it.
pub(crate) enum InsertResult<T> {
    /// The element was added. The subtree may have been rotated so this is its new root.
    Inserted(Box<Node<T>>),
    /// An equal element was already present. The subtree is untouched.
    Duplicate(Box<Node<T>>),
}

impl<T> InsertResult<T> {
    pub(crate) fn into_node(self) -> Box<Node<T>> {
        match self {
            Self::Inserted(node) | Self::Duplicate(node) => node,
        }
    }
}
