//! A [`Tree`] whose lookups never fail. A "not found" element is chosen when the tree is built and
//! handed back by any lookup that comes up empty.
//!
//! # Examples
//!
//! ```
//! use avl::SentinelTree;
//!
//! let mut tree = SentinelTree::new(-1);
//! assert_eq!(*tree.find_min(), -1);
//!
//! // Everything else is the regular `Tree` API.
//! tree.insert(3);
//! tree.insert(7);
//!
//! assert_eq!(*tree.find(&3), 3);
//! assert_eq!(*tree.find(&4), -1);
//! assert_eq!(*tree.find_max(), 7);
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::tree::Tree;

/// A [`Tree`] paired with the element its lookups return when nothing matches. Other operations
/// are reached through `Deref` to the inner tree.
pub struct SentinelTree<T> {
    tree: Tree<T>,
    not_found: T,
}

impl<T: Clone> Clone for SentinelTree<T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
            not_found: self.not_found.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.tree.clone_from(&source.tree);
        self.not_found.clone_from(&source.not_found);
    }
}

impl<T: fmt::Debug> fmt::Debug for SentinelTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentinelTree")
            .field("not_found", &self.not_found)
            .field("tree", &self.tree)
            .finish()
    }
}

impl<T> Deref for SentinelTree<T> {
    type Target = Tree<T>;

    fn deref(&self) -> &Tree<T> {
        &self.tree
    }
}

impl<T> DerefMut for SentinelTree<T> {
    fn deref_mut(&mut self) -> &mut Tree<T> {
        &mut self.tree
    }
}

impl<T> SentinelTree<T> {
    /// Generates a new, empty tree whose failed lookups return `not_found`.
    pub fn new(not_found: T) -> Self {
        Self {
            tree: Tree::new(),
            not_found,
        }
    }

    /// Wraps an existing tree.
    pub fn with_tree(tree: Tree<T>, not_found: T) -> Self {
        Self { tree, not_found }
    }

    /// The element returned by lookups that find nothing.
    pub fn not_found(&self) -> &T {
        &self.not_found
    }

    /// The stored element equal to `element`, or the not-found element.
    pub fn find(&self, element: &T) -> &T
    where
        T: Ord,
    {
        self.tree.find(element).unwrap_or(&self.not_found)
    }

    /// The smallest element, or the not-found element if the tree is empty.
    pub fn find_min(&self) -> &T {
        self.tree.find_min().unwrap_or(&self.not_found)
    }

    /// The largest element, or the not-found element if the tree is empty.
    pub fn find_max(&self) -> &T {
        self.tree.find_max().unwrap_or(&self.not_found)
    }

    /// Unwraps the inner tree, dropping the not-found element.
    pub fn into_tree(self) -> Tree<T> {
        self.tree
    }
}
