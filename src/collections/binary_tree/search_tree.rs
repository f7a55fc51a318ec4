use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, Iter, Node};
use crate::util::error::{DuplicateElement, ElementNotFound, EmptyCollection, RetrieveError};

/// A link-based binary search tree which holds no duplicate elements.
///
/// Every element in a node's left subtree compares strictly less than the node's own element, and
/// every element in its right subtree compares strictly greater. The tree does nothing to stay
/// balanced: elements inserted in sorted order produce a tree with a height equal to its length.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SearchTree.
/// - `h`: The height of the SearchTree, `O(log n)` for random input and `n` at worst.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `retrieve` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `first/last` | `O(h)` |
/// | `traverse_in_order` | `O(n)` |
/// | `height` | `O(n)` |
/// | `clone` | `O(n * h)` |
pub struct SearchTree<T: Ord> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T: Ord> SearchTree<T> {
    /// Creates a new, empty SearchTree.
    pub const fn new() -> SearchTree<T> {
        SearchTree {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of elements in the SearchTree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SearchTree contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `value` into the SearchTree as a new leaf. If an equal element is already stored,
    /// the tree is left unchanged and [`DuplicateElement`] is returned.
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::binary_tree::{DuplicateElement, SearchTree};
    /// let mut tree = SearchTree::new();
    /// assert_eq!(tree.insert(5), Ok(()));
    /// assert_eq!(tree.insert(3), Ok(()));
    /// assert_eq!(tree.insert(5), Err(DuplicateElement));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> Result<(), DuplicateElement> {
        self.root.insert(value)?;
        self.len += 1;
        Ok(())
    }

    /// Finds the stored element equal to `target` and returns a reference to it.
    ///
    /// # Errors
    /// Returns [`RetrieveError::EmptyCollection`] if the tree is empty, or
    /// [`RetrieveError::ElementNotFound`] if the search runs out of nodes before finding a match.
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::binary_tree::SearchTree;
    /// let tree: SearchTree<_> = ["pear", "apple", "fig"].into_iter().collect();
    /// assert_eq!(tree.retrieve("fig"), Ok(&"fig"));
    /// assert!(tree.retrieve("kiwi").is_err_and(|e| e.is_element_not_found()));
    /// ```
    pub fn retrieve<Q>(&self, target: &Q) -> Result<&T, RetrieveError>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.is_empty() {
            return Err(EmptyCollection.into());
        }

        Ok(self.root.get(target).ok_or(ElementNotFound)?)
    }

    /// Returns true if an element equal to `target` is stored in the SearchTree.
    pub fn contains<Q>(&self, target: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get(target).is_some()
    }

    /// Calls `visit` on every element of the SearchTree exactly once, in ascending order.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] without calling `visit` if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::binary_tree::SearchTree;
    /// let tree: SearchTree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    /// let mut visited = Vec::new();
    /// tree.traverse_in_order(|e| visited.push(*e)).unwrap();
    /// assert_eq!(visited, [1, 3, 4, 5, 8]);
    /// ```
    pub fn traverse_in_order<F>(&self, mut visit: F) -> Result<(), EmptyCollection>
    where
        F: FnMut(&T),
    {
        if self.is_empty() {
            return Err(EmptyCollection);
        }

        for value in self.iter() {
            visit(value);
        }
        Ok(())
    }

    /// Returns a reference to the smallest element, if the SearchTree isn't empty.
    pub fn first(&self) -> Option<&T> {
        self.root.first()
    }

    /// Returns a reference to the greatest element, if the SearchTree isn't empty.
    pub fn last(&self) -> Option<&T> {
        self.root.last()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, which is 0 for an
    /// empty tree.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Returns an iterator over the elements of the SearchTree, in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Removes and drops every element in the SearchTree.
    pub fn clear(&mut self) {
        self.root.release();
        self.len = 0;
    }
}

impl<T: Ord> Default for SearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Drop for SearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Ord + Clone> Clone for SearchTree<T> {
    /// Re-inserts every element of `self` into a new tree, visiting each node before its left
    /// subtree and its left subtree before its right. Every node is inserted after all of its
    /// ancestors, so the clone ends up with the same shape as the original.
    fn clone(&self) -> Self {
        let mut tree = SearchTree::new();
        let mut stack: Vec<&Node<T>> = Vec::new();
        stack.extend(self.root.as_deref());

        while let Some(node) = stack.pop() {
            // The source holds no duplicates, so this can't fail.
            let _ = tree.insert(node.value.clone());
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }

        tree
    }
}

impl<T: Ord> FromIterator<T> for SearchTree<T> {
    /// Collects the elements of `iter` into a SearchTree, silently skipping duplicates.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = SearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for SearchTree<T> {
    /// Inserts every element of `iter`, silently skipping those already present.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            let _ = self.insert(value);
        }
    }
}

impl<T: Ord> PartialEq for SearchTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Ord> Eq for SearchTree<T> {}

impl<T: Ord + Debug> Debug for SearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchTree")
            .field("elements", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len)
            .field("height", &self.height())
            .finish()
    }
}

impl<T: Ord + Debug> Display for SearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
