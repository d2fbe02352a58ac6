//! The structural recursion behind [`Tree`][crate::Tree].
//!
//! Every mutating function here takes a subtree by value and hands back the subtree that should
//! replace it. Callers must always install the returned subtree: a rotation can promote a child
//! to be the new root, after which the old root is somewhere further down.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;

use log::trace;

use crate::util::{InsertResult, Link};

pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many levels are below this node. A leaf has a height of 0 which makes the height of an
    /// empty subtree -1.
    pub(crate) height: isize,
}

/// Manual implementation of `Clone` so the cached heights are copied rather than recomputed and
/// so the structure of the copy is exactly that of the original.
impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            element: self.element.clone(),
            height: self.height,
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    // TODO stack based Debug
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("element", &self.element)
            .field("height", &self.height)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<T> Node<T> {
    /// Builds a one element leaf. This is the only place nodes are created.
    pub(crate) fn new_boxed(element: T) -> Box<Self> {
        Box::new(Self {
            element,
            height: 0,
            left: None,
            right: None,
        })
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// The difference in height between the right and left subtrees. See [the Wikipedia
    /// page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    fn balance_factor(&self) -> isize {
        height(&self.right) - height(&self.left)
    }
}

/// The cached height of a subtree, -1 when it is empty.
pub(crate) fn height<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(-1, |n| n.height)
}

fn balance_factor<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(0, |n| n.balance_factor())
}

/// Inserts `element` into the subtree unless an equal element is already there. Only the nodes on
/// the path down to the new leaf are touched and at most one of them is rotated.
pub(crate) fn insert<T: Ord>(link: Link<T>, element: T) -> InsertResult<T> {
    let Some(mut node) = link else {
        return InsertResult::Inserted(Node::new_boxed(element));
    };

    match element.cmp(&node.element) {
        Ordering::Less => match insert(node.left.take(), element) {
            InsertResult::Inserted(left) => {
                node.left = Some(left);
                if height(&node.left) - height(&node.right) == 2 {
                    // The left child can't be level here. If it leans left the new element went
                    // left-left, otherwise it went left-right.
                    node = if balance_factor(&node.left) < 0 {
                        rotate_right(node)
                    } else {
                        rotate_left_right(node)
                    };
                }
            }
            InsertResult::Duplicate(left) => {
                node.left = Some(left);
                return InsertResult::Duplicate(node);
            }
        },
        Ordering::Greater => match insert(node.right.take(), element) {
            InsertResult::Inserted(right) => {
                node.right = Some(right);
                if height(&node.right) - height(&node.left) == 2 {
                    node = if balance_factor(&node.right) > 0 {
                        rotate_left(node)
                    } else {
                        rotate_right_left(node)
                    };
                }
            }
            InsertResult::Duplicate(right) => {
                node.right = Some(right);
                return InsertResult::Duplicate(node);
            }
        },
        Ordering::Equal => return InsertResult::Duplicate(node),
    }

    node.fix_height();
    InsertResult::Inserted(node)
}

/// Removes the element equal to `element` from the subtree, returning the new subtree and the
/// removed element. Every node on the way back up is rebalanced, so unlike insertion this can
/// rotate at each level.
pub(crate) fn remove<T: Ord>(link: Link<T>, element: &T) -> (Link<T>, Option<T>) {
    let Some(mut node) = link else {
        return (None, None);
    };

    let removed = match element.cmp(&node.element) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), element);
            node.left = left;
            removed
        }
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), element);
            node.right = right;
            removed
        }
        Ordering::Equal => {
            let Node {
                element: removed,
                left,
                right,
                ..
            } = *node;

            let replacement = match right {
                None => left,
                // Promote the in-order successor: the smallest element of the right subtree.
                Some(right) => {
                    let (mut successor, rest) = remove_min(right);
                    successor.left = left;
                    successor.right = rest;
                    Some(balance(successor))
                }
            };
            return (replacement, Some(removed));
        }
    };

    (Some(balance(node)), removed)
}

/// Detaches the smallest node of the subtree by walking down its left spine. Returns that node
/// (with no children) and what remains of the subtree, rebalanced.
fn remove_min<T>(mut node: Box<Node<T>>) -> (Box<Node<T>>, Link<T>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (node, rest)
        }
        Some(left) => {
            let (min, rest) = remove_min(left);
            node.left = rest;
            (min, Some(balance(node)))
        }
    }
}

/// Fixes the height of `node` and, if one side is two levels taller than the other, rotates to
/// restore the AVL invariant. Returns the new root of the subtree.
pub(crate) fn balance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.fix_height();

    // See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
    let node = match node.balance_factor() {
        2 if balance_factor(&node.right) < 0 => rotate_right_left(node),
        2 => rotate_left(node),
        -2 if balance_factor(&node.left) > 0 => rotate_left_right(node),
        -2 => rotate_right(node),
        _ => node,
    };

    if cfg!(debug_assertions) {
        let left_height = height(&node.left);
        let right_height = height(&node.right);
        assert_eq!(node.height, left_height.max(right_height) + 1);
        assert!(left_height.abs_diff(right_height) <= 1);
    }
    node
}

/// Rotates `node` to the right. This moves the left child up vertically and `node` down
/// vertically. Used to rebalance the tree when the left child is too tall. Without a left child
/// there is nothing to promote and `node` is returned as is.
///
/// # Diagram
///
/// ```text
///     old_root              new_root
///      /     \              /     \
///  new_root   z   rotate ->  x    old_root
///   / \                            /  \
///  x   y                          y    z
/// ```
pub(crate) fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut new_root) = node.left.take() else {
        return node;
    };
    trace!("rotating right at height {}", node.height);

    node.left = new_root.right.take();
    // The old root is now beneath the new one so it has to be fixed first.
    node.fix_height();

    new_root.right = Some(node);
    new_root.fix_height();
    new_root
}

/// The mirror image of [`rotate_right`].
pub(crate) fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut new_root) = node.right.take() else {
        return node;
    };
    trace!("rotating left at height {}", node.height);

    node.right = new_root.left.take();
    node.fix_height();

    new_root.left = Some(node);
    new_root.fix_height();
    new_root
}

/// Used when the left child is too tall because of its right subtree.
pub(crate) fn rotate_left_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.left = node.left.take().map(rotate_left);
    rotate_right(node)
}

/// Used when the right child is too tall because of its left subtree.
pub(crate) fn rotate_right_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.right = node.right.take().map(rotate_right);
    rotate_left(node)
}

pub(crate) fn find<'a, T: Ord>(mut link: &'a Link<T>, element: &T) -> Option<&'a T> {
    while let Some(node) = link {
        match element.cmp(&node.element) {
            Ordering::Less => link = &node.left,
            Ordering::Equal => return Some(&node.element),
            Ordering::Greater => link = &node.right,
        }
    }
    None
}

pub(crate) fn min<T>(link: &Link<T>) -> Option<&T> {
    let mut node = link.as_deref()?;
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    Some(&node.element)
}

pub(crate) fn max<T>(link: &Link<T>) -> Option<&T> {
    let mut node = link.as_deref()?;
    while let Some(right) = node.right.as_deref() {
        node = right;
    }
    Some(&node.element)
}

/// Checks the AVL invariant at every node. The heights are recomputed from scratch instead of
/// read from the cache so a stale cache can't hide an unbalanced subtree.
pub(crate) fn is_balanced<T>(link: &Link<T>) -> bool {
    checked_height(link).is_some()
}

/// The real height of the subtree, or `None` if any node in it is out of balance.
fn checked_height<T>(link: &Link<T>) -> Option<isize> {
    match link {
        None => Some(-1),
        Some(node) => {
            let left = checked_height(&node.left)?;
            let right = checked_height(&node.right)?;
            (left.abs_diff(right) <= 1).then_some(left.max(right) + 1)
        }
    }
}

/// Visits every element in ascending order, stopping at the first error.
pub(crate) fn try_for_each_in_order<'a, T, E, F>(link: &'a Link<T>, f: &mut F) -> Result<(), E>
where
    F: FnMut(&'a T) -> Result<(), E>,
{
    if let Some(node) = link {
        try_for_each_in_order(&node.left, f)?;
        f(&node.element)?;
        try_for_each_in_order(&node.right, f)?;
    }
    Ok(())
}

pub(crate) fn for_each_in_order<'a, T, F>(link: &'a Link<T>, mut f: F)
where
    F: FnMut(&'a T),
{
    let result: Result<(), Infallible> = try_for_each_in_order(link, &mut |element: &'a T| {
        f(element);
        Ok(())
    });
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}
