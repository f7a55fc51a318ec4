use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::ops::{Deref, DerefMut};

use crate::util::error::DuplicateElement;

/// An owned, possibly empty, child slot of a [`Node`], or the root of a tree.
pub(crate) struct Branch<T: Ord>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T: Ord> Node<T> {
    pub const fn leaf(value: T) -> Node<T> {
        Node {
            left: Branch(None),
            right: Branch(None),
            value,
        }
    }
}

impl<T: Ord> Branch<T> {
    /// Descends from this branch to the empty slot where `value` belongs and attaches it there as
    /// a leaf. Nothing changes if an equal value is found on the way.
    pub fn insert(&mut self, value: T) -> Result<(), DuplicateElement> {
        let mut branch = self;

        while let Some(ref mut node) = branch.0 {
            branch = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Err(DuplicateElement),
            };
        }

        branch.0 = Some(Box::new(Node::leaf(value)));
        Ok(())
    }

    pub fn get<Q>(&self, target: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut branch = self;

        while let Some(node) = branch.as_deref() {
            branch = match target.cmp(node.value.borrow()) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return Some(&node.value),
            };
        }

        None
    }

    pub fn first(&self) -> Option<&T> {
        let mut node = self.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    pub fn last(&self) -> Option<&T> {
        let mut node = self.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Counts the nodes on the longest path from this branch down to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
        stack.extend(self.as_deref().map(|node| (node, 1)));

        while let Some((node, depth)) = stack.pop() {
            height = cmp::max(height, depth);
            stack.extend(node.left.as_deref().map(|child| (child, depth + 1)));
            stack.extend(node.right.as_deref().map(|child| (child, depth + 1)));
        }

        height
    }

    /// Frees every node below and including this branch, leaving it empty. Each node has its
    /// children detached and pushed onto a work stack before it is dropped, so dropping a node
    /// never recurses.
    pub fn release(&mut self) {
        let mut stack = Vec::new();
        stack.extend(self.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Ord> Default for Branch<T> {
    fn default() -> Self {
        Branch(None)
    }
}

impl<T: Ord> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Ord> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
