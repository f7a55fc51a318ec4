use std::iter::FusedIterator;
use std::mem;

use super::{Branch, Node, SearchTree};

impl<'a, T: Ord> IntoIterator for &'a SearchTree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.descend_left(&self.root);
        iter
    }
}

/// A borrowed, in-order iterator over the elements of a [`SearchTree`].
///
/// The stack holds the nodes whose left subtree is being visited, so it never grows past the
/// height of the tree.
pub struct Iter<'a, T: Ord> {
    pub(crate) stack: Vec<&'a Node<T>>,
    pub(crate) remaining: usize,
}

impl<'a, T: Ord> Iter<'a, T> {
    fn descend_left(&mut self, mut branch: &'a Branch<T>) {
        while let Some(node) = branch.as_deref() {
            self.stack.push(node);
            branch = &node.left;
        }
    }
}

impl<'a, T: Ord> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(&node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Ord> ExactSizeIterator for Iter<'_, T> {}

impl<T: Ord> FusedIterator for Iter<'_, T> {}

impl<T: Ord> IntoIterator for SearchTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            stack: Vec::new(),
            remaining: mem::replace(&mut self.len, 0),
        };
        iter.descend_left(mem::take(&mut self.root));
        iter
    }
}

/// An owned, in-order iterator over the elements of a [`SearchTree`].
pub struct IntoIter<T: Ord> {
    // Nodes on the stack have already had their left branch taken.
    pub(crate) stack: Vec<Box<Node<T>>>,
    pub(crate) remaining: usize,
}

impl<T: Ord> IntoIter<T> {
    fn descend_left(&mut self, mut branch: Branch<T>) {
        while let Some(mut node) = branch.0 {
            branch = mem::take(&mut node.left);
            self.stack.push(node);
        }
    }
}

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.descend_left(mem::take(&mut node.right));
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Ord> ExactSizeIterator for IntoIter<T> {}

impl<T: Ord> FusedIterator for IntoIter<T> {}

impl<T: Ord> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Stacked nodes still own their right subtrees, which would otherwise be dropped
        // recursively.
        for _ in self.by_ref() {}
    }
}
