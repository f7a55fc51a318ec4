use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Deref, Index};

use crate::util::error::{DuplicateElement, ElementNotFound, IndexOutOfBounds};
use crate::util::result::ResultExtension;

const INITIAL_CAP: usize = 5;

/// A contiguous list of unique elements, kept in descending order.
///
/// An element's position is determined by its key: position 0 always holds the greatest element
/// and the last position the smallest. Lookups are binary searches, while insertion and removal
/// shift every element after the affected position.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the PositionList.
/// - `i`: The position of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get` | `O(1)` |
/// | `search` | `O(log n)` |
/// | `insert` | `O(log n + n - i)` |
/// | `remove` | `O(log n + n - i)` |
/// | `remove_all` | `O(n)` |
pub struct PositionList<T: Ord> {
    pub(crate) elements: Vec<T>,
}

impl<T: Ord> PositionList<T> {
    /// Creates a new, empty PositionList with the default starting capacity.
    pub fn new() -> PositionList<T> {
        PositionList::with_cap(INITIAL_CAP)
    }

    /// Creates a new, empty PositionList with room for at least `cap` elements.
    pub fn with_cap(cap: usize) -> PositionList<T> {
        PositionList {
            elements: Vec::with_capacity(cap),
        }
    }

    /// Returns the number of elements in the PositionList.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the PositionList contains no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Inserts `element` at the position that keeps the list in descending order, returning that
    /// position. If an equal element is already in the list, nothing changes.
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::contiguous::PositionList;
    /// # use adt_collections::collections::contiguous::position_list::DuplicateElement;
    /// let mut list = PositionList::new();
    /// assert_eq!(list.insert(20), Ok(0));
    /// assert_eq!(list.insert(30), Ok(0));
    /// assert_eq!(list.insert(10), Ok(2));
    /// assert_eq!(list.insert(20), Err(DuplicateElement));
    /// assert_eq!(&*list, &[30, 20, 10]);
    /// ```
    pub fn insert(&mut self, element: T) -> Result<usize, DuplicateElement> {
        match self.find(&element) {
            Ok(_) => Err(DuplicateElement),
            Err(index) => {
                self.elements.insert(index, element);
                Ok(index)
            },
        }
    }

    /// Removes the element equal to `target` and returns it, moving every element after it one
    /// position forward.
    pub fn remove<Q>(&mut self, target: &Q) -> Result<T, ElementNotFound>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = self.find(target).map_err(|_| ElementNotFound)?;
        Ok(self.elements.remove(index))
    }

    /// Removes every element from the PositionList.
    pub fn remove_all(&mut self) {
        self.elements.clear();
    }

    /// Returns a reference to the element equal to `target`, if there is one.
    pub fn search<Q>(&self, target: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(target).ok().map(|index| &self.elements[index])
    }

    /// Returns the position of the element equal to `target`, if there is one.
    pub fn position<Q>(&self, target: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(target).ok()
    }

    /// Returns true if an element equal to `target` is in the PositionList.
    pub fn contains<Q>(&self, target: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(target).is_ok()
    }

    /// Binary searches the list for `target`. On failure, the error holds the position where
    /// `target` would have to be inserted to keep the list descending.
    pub(crate) fn find<Q>(&self, target: &Q) -> Result<usize, usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // Reversed comparison, because greater elements come first.
        self.elements.binary_search_by(|probe| target.cmp(probe.borrow()))
    }

    /// Checks that the provided index is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.len() {
            Err(IndexOutOfBounds {
                index,
                len: self.len(),
            })
            .throw()
        }
    }
}

impl<T: Ord> Default for PositionList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Deref for PositionList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl<T: Ord> Index<usize> for PositionList<T> {
    type Output = T;

    /// # Panics
    /// Panics if the provided index is out of bounds.
    fn index(&self, index: usize) -> &Self::Output {
        self.check_index(index);
        &self.elements[index]
    }
}

impl<T: Ord> FromIterator<T> for PositionList<T> {
    /// Collects the elements of `iter` into a PositionList, silently skipping duplicates.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = PositionList::new();
        list.extend(iter);
        list
    }
}

impl<T: Ord> Extend<T> for PositionList<T> {
    /// Inserts every element of `iter`, silently skipping those already present.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            let _ = self.insert(element);
        }
    }
}

impl<T: Ord + Clone> Clone for PositionList<T> {
    fn clone(&self) -> Self {
        PositionList {
            elements: self.elements.clone(),
        }
    }
}

impl<T: Ord> PartialEq for PositionList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Ord> Eq for PositionList<T> {}

impl<T: Ord + Debug> Debug for PositionList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionList")
            .field("contents", &self.elements.as_slice())
            .field("len", &self.len())
            .field("cap", &self.elements.capacity())
            .finish()
    }
}

impl<T: Ord + Display> Display for PositionList<T> {
    /// Writes each element on its own line, greatest first.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for element in self.iter() {
            writeln!(f, "{element}")?;
        }
        Ok(())
    }
}
