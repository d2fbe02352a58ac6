//! An owned AVL tree holding a set of unique elements.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Elements are unique so inserting an equal one is rejected.
//! assert!(!tree.insert(1));
//!
//! // Removing an element hands it back.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::fmt;
use std::io;

use log::debug;

use crate::node;
use crate::util::{InsertResult, Link};

/// A self-balancing Binary Search Tree (specifically, an AVL tree) storing unique elements in
/// ascending order. The heights of a node's two subtrees never differ by more than one, so every
/// operation that walks from the root touches `O(lg N)` nodes.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Tree<T> {
    // TODO stack based Clone
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }

    /// Copy assignment. Everything in `self` is dropped before `source` is copied in.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = source.root.clone();
        self.len = source.len;
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

/// Two trees are equal when they hold the same elements, regardless of shape.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.in_order() == other.in_order()
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `element` unless an equal element is already stored. Returns whether it was
    /// inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert("a"));
    /// assert!(!tree.insert("a"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool
    where
        T: Ord,
    {
        let result = node::insert(self.root.take(), element);
        let inserted = matches!(result, InsertResult::Inserted(_));
        self.root = Some(result.into_node());

        if inserted {
            self.len += 1;
        } else {
            debug!("rejected duplicate element");
        }
        inserted
    }

    /// Removes the element equal to `element` and returns it. If the tree has no such element,
    /// nothing happens and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Some(5));
    /// assert_eq!(tree.remove(&5), None);
    /// assert_eq!(tree.in_order(), [&3, &8]);
    /// ```
    pub fn remove(&mut self, element: &T) -> Option<T>
    where
        T: Ord,
    {
        let (root, removed) = node::remove(self.root.take(), element);
        self.root = root;
        match removed {
            Some(_) => self.len -= 1,
            None => debug!("nothing to remove"),
        }
        removed
    }

    /// Potentially finds the stored element equal to `element`. If there is none, `None` is
    /// returned.
    pub fn find(&self, element: &T) -> Option<&T>
    where
        T: Ord,
    {
        node::find(&self.root, element)
    }

    /// Whether an element equal to `element` is stored.
    pub fn contains(&self, element: &T) -> bool
    where
        T: Ord,
    {
        self.find(element).is_some()
    }

    /// The smallest element, or `None` if the tree is empty.
    pub fn find_min(&self) -> Option<&T> {
        node::min(&self.root)
    }

    /// The largest element, or `None` if the tree is empty.
    pub fn find_max(&self) -> Option<&T> {
        node::max(&self.root)
    }

    /// Returns `true` if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Gets the height of this tree: the number of edges on the longest path from the root to a
    /// leaf. A tree with a single element has height 0 and an empty tree has height -1.
    pub fn height(&self) -> isize {
        node::height(&self.root)
    }

    /// Drops every element. Calling this on an empty tree does nothing.
    pub fn clear(&mut self) {
        if self.root.is_some() {
            debug!("clearing {} elements", self.len);
        }
        // Dropping the root drops every node beneath it.
        self.root = None;
        self.len = 0;
    }

    /// Checks that the heights of the two subtrees of every node differ by at most one. This
    /// doesn't rely on the heights cached in the nodes.
    pub fn is_balanced(&self) -> bool {
        node::is_balanced(&self.root)
    }

    /// Calls `f` on every element in ascending order.
    pub fn for_each_in_order<'a, F>(&'a self, f: F)
    where
        F: FnMut(&'a T),
    {
        node::for_each_in_order(&self.root, f);
    }

    /// Collects references to every element in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        let mut elements = Vec::with_capacity(self.len);
        self.for_each_in_order(|element| elements.push(element));
        elements
    }

    /// Writes every element to `sink` in ascending order, one per line. An empty tree writes
    /// `Empty tree` instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree: Tree<_> = [2, 3, 1].into_iter().collect();
    /// let mut out = Vec::new();
    /// tree.print_tree(&mut out).unwrap();
    ///
    /// assert_eq!(out, b"1\n2\n3\n");
    /// ```
    pub fn print_tree<W: io::Write>(&self, sink: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        if self.is_empty() {
            return writeln!(sink, "Empty tree");
        }
        node::try_for_each_in_order(&self.root, &mut |element: &T| writeln!(sink, "{element}"))
    }

    #[cfg(test)]
    pub(crate) fn root_element(&self) -> Option<&T> {
        self.root.as_ref().map(|n| &n.element)
    }
}
