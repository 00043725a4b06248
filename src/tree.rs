//! An unbalanced BST whose ordering comes from a comparator fixed at
//! construction.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! // Largest first.
//! let mut tree = OrderedTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//!
//! tree.add(1);
//! tree.add(3);
//! tree.add(2);
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [3, 2, 1]);
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.take(&2), Some(2));
//! assert_eq!(tree.take(&2), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};
use crate::iter::{InOrder, PostOrder, PostOrderNodes, PreOrder};

/// An owned, possibly empty child slot.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// The comparator used by [`OrderedTree::new`].
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

/// A Binary Search Tree ordered by `C`. This can be used for adding,
/// finding, and removing values. It never rebalances.
///
/// Values comparing [`Less`][Ordering::Less] than a node live in its left
/// subtree and every other value (including equal ones) lives in its right
/// subtree.
pub struct OrderedTree<T, C = NaturalOrder<T>> {
    root: Link<T>,
    compare: C,
}

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree` using `T`'s natural ordering.
    pub fn new() -> Self {
        Self::with_comparator(Ord::cmp)
    }
}

impl<T: Ord> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> OrderedTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Generates a new, empty `OrderedTree` ordered by `compare`.
    ///
    /// `compare(a, b)` must behave like a total order: `Less` when `a` sorts
    /// before `b`, `Equal` when they are interchangeable and `Greater`
    /// otherwise.
    pub fn with_comparator(compare: C) -> Self {
        Self {
            root: None,
            compare,
        }
    }

    /// Like [`with_comparator`][Self::with_comparator] for callers holding an
    /// optional comparator. A missing comparator is rejected here rather than
    /// on first use.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Error, NaturalOrder, OrderedTree};
    ///
    /// let missing: Option<NaturalOrder<i32>> = None;
    /// assert!(matches!(
    ///     OrderedTree::try_with_comparator(missing),
    ///     Err(Error::InvalidArgument(_))
    /// ));
    ///
    /// let tree = OrderedTree::try_with_comparator(Some(|a: &i32, b: &i32| a.cmp(b))).unwrap();
    /// assert!(tree.is_empty());
    /// ```
    pub fn try_with_comparator(compare: Option<C>) -> Result<Self> {
        match compare {
            Some(compare) => Ok(Self::with_comparator(compare)),
            None => {
                log::debug!("rejecting tree construction without a comparator");
                Err(Error::InvalidArgument("a comparator is required"))
            }
        }
    }

    /// Adds `item` to the tree. Equal values are kept; a new value equal to
    /// an existing one is placed in that value's right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.add(1);
    /// tree.add(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn add(&mut self, item: T) {
        let mut depth = 0usize;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match (self.compare)(&item, &node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
            depth += 1;
        }

        log::trace!("attaching new leaf at depth {}", depth);
        *slot = Some(Node::new_boxed(item));
    }

    /// Whether some value in the tree compares equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.add(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        let mut current = &self.root;
        while let Some(node) = current {
            match (self.compare)(key, &node.value) {
                Ordering::Less => current = &node.left,
                Ordering::Equal => return true,
                Ordering::Greater => current = &node.right,
            }
        }
        false
    }

    /// Removes one value comparing equal to `item`. Returns `false` if the
    /// tree held no such value (including when it is empty).
    ///
    /// When several equal values are stored, the one found first while
    /// descending from the root is removed. Because equal values are added
    /// to the right, that is the earliest added of those on the search path.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert!(!tree.remove(&1));
    ///
    /// tree.add(1);
    /// assert!(tree.remove(&1));
    /// assert!(!tree.contains(&1));
    /// ```
    pub fn remove(&mut self, item: &T) -> bool {
        self.take(item).is_some()
    }

    /// Removes one value comparing equal to `item` and returns it. See
    /// [`remove`][Self::remove] for which value is picked among duplicates.
    pub fn take(&mut self, item: &T) -> Option<T> {
        // Walk down remembering the slot that owns the current node so the
        // replacement can be written straight into it.
        let mut slot = &mut self.root;
        loop {
            let node = slot.as_deref()?;
            slot = match (self.compare)(item, &node.value) {
                Ordering::Less => &mut slot.as_mut()?.left,
                Ordering::Greater => &mut slot.as_mut()?.right,
                Ordering::Equal => break,
            };
        }

        let found = slot.take()?;
        let Node { value, left, right } = *found;
        *slot = Self::splice(left, right);
        Some(value)
    }

    /// Builds the subtree that replaces a removed node from the node's former
    /// children.
    fn splice(left: Link<T>, right: Link<T>) -> Link<T> {
        match right {
            None => {
                log::trace!("remove: promoting left child");
                left
            }
            Some(mut right) if right.left.is_none() => {
                log::trace!("remove: promoting right child");
                right.left = left;
                Some(right)
            }
            Some(mut right) => {
                log::trace!("remove: promoting in-order successor");
                let mut successor = Self::detach_leftmost(&mut right.left)
                    .expect("A right child with a left child has a successor");
                successor.left = left;
                successor.right = Some(right);
                Some(successor)
            }
        }
    }

    /// Unlinks the smallest node below `slot`, leaving that node's right
    /// subtree in its place.
    fn detach_leftmost(mut slot: &mut Link<T>) -> Option<Box<Node<T>>> {
        while slot.as_ref()?.left.is_some() {
            slot = &mut slot.as_mut()?.left;
        }

        let mut leftmost = slot.take()?;
        *slot = leftmost.right.take();
        Some(leftmost)
    }

    #[cfg(test)]
    /// Checks the BST invariant over every node, bounding each subtree by
    /// the values of the ancestors it hangs from.
    fn is_ordered(&self) -> bool {
        let mut stack: Vec<(&Node<T>, Option<&T>, Option<&T>)> = Vec::new();
        stack.extend(self.root.as_deref().map(|root| (root, None, None)));

        while let Some((node, lower, upper)) = stack.pop() {
            if let Some(lower) = lower {
                if (self.compare)(&node.value, lower) == Ordering::Less {
                    return false;
                }
            }
            if let Some(upper) = upper {
                if (self.compare)(&node.value, upper) != Ordering::Less {
                    return false;
                }
            }

            stack.extend(
                node.left
                    .as_deref()
                    .map(|left| (left, lower, Some(&node.value))),
            );
            stack.extend(
                node.right
                    .as_deref()
                    .map(|right| (right, Some(&node.value), upper)),
            );
        }
        true
    }
}

impl<T, C> OrderedTree<T, C> {
    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the stored values. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.in_order().count()
    }

    /// Removes every value, keeping the comparator.
    pub fn clear(&mut self) {
        // Tear down with an explicit stack; dropping the root box directly
        // would recurse once per level.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }

    /// The smallest value under the comparator, if any.
    pub fn first(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value under the comparator, if any. With duplicates this
    /// is the most recently added of the largest values.
    pub fn last(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Visits each node, then its left subtree, then its right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root.as_deref())
    }

    /// Visits values in ascending order under the comparator.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root.as_deref())
    }

    /// Visits the left subtree, then the right subtree, then each node.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root.as_deref())
    }
}

impl<T, C> Drop for OrderedTree<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, C> Clone for OrderedTree<T, C>
where
    T: Clone,
    C: Clone,
{
    /// Copies the tree node for node, keeping its shape. Nodes are rebuilt
    /// in post-order so both children of a node are finished (and on top of
    /// `built`, right above left) by the time the node itself is reached.
    fn clone(&self) -> Self {
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for node in PostOrderNodes::new(self.root.as_deref()) {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                value: node.value.clone(),
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            compare: self.compare.clone(),
        }
    }
}

impl<T, C> fmt::Debug for OrderedTree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.in_order()).finish()
    }
}

impl<T, C> Extend<T> for OrderedTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
