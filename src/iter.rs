//! Traversals over an [`OrderedTree`].
//!
//! Every traversal keeps its own stack of node references, so walking a
//! degenerate tree (one built from sorted input, say) never grows the call
//! stack. Each iterator borrows the tree, which rules out mutating the tree
//! while a traversal is in flight. Abandoning an iterator early simply drops
//! its stack.

use std::iter::FusedIterator;
use std::ptr;

use crate::tree::{Node, OrderedTree};

/// Iterator visiting each node before its left subtree, then its right
/// subtree. Created by [`OrderedTree::pre_order`].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so the left subtree is popped first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.value)
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

/// Manual implementation of `Clone` so the iterator can be cloned even when
/// `T` isn't `Clone`.
impl<T> Clone for PreOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

/// Iterator yielding values in ascending order under the tree's comparator.
/// Created by [`OrderedTree::in_order`] and by iterating over `&OrderedTree`.
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    current: Option<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }

        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        Some(&node.value)
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

impl<T> Clone for InOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            current: self.current,
        }
    }
}

/// Iterator visiting the left subtree, then the right subtree, then the node
/// itself. Created by [`OrderedTree::post_order`].
pub struct PostOrder<'a, T> {
    nodes: PostOrderNodes<'a, T>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            nodes: PostOrderNodes::new(root),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| &node.value)
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

impl<T> Clone for PostOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }
}

/// Post-order walk over the nodes themselves. Cloning a tree consumes this
/// directly so it can rebuild every node after both of its children.
pub(crate) struct PostOrderNodes<'a, T> {
    /// Nodes waiting to be emitted. A node with a right child is always
    /// pushed directly on top of that right child.
    stack: Vec<&'a Node<T>>,
    current: Option<&'a Node<T>>,
}

impl<'a, T> PostOrderNodes<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a, T> Iterator for PostOrderNodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.current.take() {
                self.stack.extend(node.right.as_deref());
                self.stack.push(node);
                self.current = node.left.as_deref();
                continue;
            }

            let node = self.stack.pop()?;
            match (node.right.as_deref(), self.stack.last()) {
                // The right subtree hasn't been walked yet: put the node back
                // underneath it and descend right.
                (Some(right), Some(&pending)) if ptr::eq(right, pending) => {
                    self.stack.pop();
                    self.stack.push(node);
                    self.current = Some(right);
                }
                _ => return Some(node),
            }
        }
    }
}

impl<T> Clone for PostOrderNodes<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            current: self.current,
        }
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedTree<T, C> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}
