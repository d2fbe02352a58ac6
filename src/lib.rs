//! A self-balancing ordered set built on an AVL tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element
//! and sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). An AVL tree keeps the heights of
//! every `Node`'s two subtrees within one of each other, rotating `Node`s after
//! inserts and deletes when they drift further apart. That limits the height to
//! roughly `1.44 lg N` for `N` elements. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right
//! subtree.
//!
//! The tree isn't synchronized. Share it across threads behind a lock if it has
//! to be mutated from more than one.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod node;
pub mod sentinel;
pub mod tree;
mod util;


pub use sentinel::SentinelTree;
pub use tree::Tree;
