use std::cmp;
use std::fmt::{self, Debug, Formatter};

use super::Iter;
use crate::util::error::{CapacityOverflow, EmptyCollection};
use crate::util::result::ResultExtension;

const INITIAL_CAP: usize = 50;
const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// An array-backed binary min-heap.
///
/// The elements are stored contiguously and read as a complete binary tree, where the element at
/// index `i` has its parent at `(i - 1) / 2` and its children at `2i + 1` and `2i + 2`. Every
/// parent compares less than or equal to both of its children, so the smallest element is always
/// at index 0.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the MinHeap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(log n)`*, `O(n)` |
/// | `remove_min` | `O(log n)` |
/// | `peek_min` | `O(1)` |
/// | `from_iter` | `O(n)` |
///
/// \* If the MinHeap doesn't have enough capacity for the new element, `insert` will take `O(n)`
/// to double its capacity first.
///
/// Equal elements never trigger a swap, but insertion order is not preserved between equal
/// elements once removals start moving things around.
pub struct MinHeap<T: Ord> {
    pub(crate) elements: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    /// Creates a new, empty MinHeap with the default starting capacity.
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::heap::MinHeap;
    /// let heap: MinHeap<u8> = MinHeap::new();
    /// assert_eq!(heap.len(), 0);
    /// assert!(heap.cap() >= 50);
    /// ```
    pub fn new() -> MinHeap<T> {
        MinHeap::with_cap(INITIAL_CAP)
    }

    /// Creates a new, empty MinHeap with room for at least `cap` elements before it needs to grow.
    pub fn with_cap(cap: usize) -> MinHeap<T> {
        MinHeap {
            elements: Vec::with_capacity(cap),
        }
    }

    /// Returns the number of elements in the MinHeap.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the MinHeap contains no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements the MinHeap can hold before it has to grow.
    pub fn cap(&self) -> usize {
        self.elements.capacity()
    }

    /// Inserts `element` into the MinHeap, moving it up towards the root until its parent is no
    /// greater than it.
    ///
    /// # Panics
    /// Panics if the MinHeap needs to grow and the new capacity can't be allocated.
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::heap::MinHeap;
    /// let mut heap = MinHeap::new();
    /// heap.insert(5);
    /// heap.insert(3);
    /// heap.insert(8);
    /// assert_eq!(heap.peek_min(), Ok(&3));
    /// ```
    pub fn insert(&mut self, element: T) {
        self.try_insert(element).throw()
    }

    /// Inserts `element` into the MinHeap, returning an error instead of panicking if the backing
    /// storage can't grow. On error, `element` is dropped and the MinHeap is left unchanged.
    pub fn try_insert(&mut self, element: T) -> Result<(), CapacityOverflow> {
        if self.len() == self.cap() {
            self.grow()?;
        }

        self.elements.push(element);
        self.sift_up(self.len() - 1);
        Ok(())
    }

    /// Removes the smallest element from the MinHeap and returns it. The last element takes the
    /// place of the root and is moved down until neither of its children is smaller.
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::heap::{EmptyCollection, MinHeap};
    /// let mut heap: MinHeap<_> = [5, 3, 8, 1, 4].into_iter().collect();
    /// assert_eq!(heap.remove_min(), Ok(1));
    /// assert_eq!(heap.remove_min(), Ok(3));
    /// assert_eq!(heap.len(), 3);
    ///
    /// heap.clear();
    /// assert_eq!(heap.remove_min(), Err(EmptyCollection));
    /// ```
    pub fn remove_min(&mut self) -> Result<T, EmptyCollection> {
        if self.is_empty() {
            return Err(EmptyCollection);
        }

        let min = self.elements.swap_remove(0);
        self.sift_down(0);
        Ok(min)
    }

    /// Returns a reference to the smallest element in the MinHeap without removing it.
    pub fn peek_min(&self) -> Result<&T, EmptyCollection> {
        self.elements.first().ok_or(EmptyCollection)
    }

    /// Removes all elements from the MinHeap, keeping its capacity.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns the elements of the MinHeap as a slice, in storage order. The slice always upholds
    /// the heap order described on [`MinHeap`].
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements of the MinHeap in storage order, which is not
    /// sorted.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Consumes the MinHeap, returning its elements in ascending order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Builds a MinHeap out of an existing Vec by sifting down every parent, starting from the
    /// last one.
    pub fn from_vec(elements: Vec<T>) -> MinHeap<T> {
        let mut heap = MinHeap { elements };

        for index in (0..heap.len() / 2).rev() {
            heap.sift_down(index);
        }

        heap
    }

    /// Doubles the capacity of the MinHeap, so that at least one more element can be added.
    pub(crate) fn grow(&mut self) -> Result<(), CapacityOverflow> {
        let new_cap = cmp::max(
            self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?,
            MIN_CAP,
        );

        self.elements
            .try_reserve_exact(new_cap - self.len())
            .map_err(|_| CapacityOverflow)
    }

    pub(crate) fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.elements[parent] <= self.elements[index] {
                break;
            }

            self.elements.swap(parent, index);
            index = parent;
        }
    }

    pub(crate) fn sift_down(&mut self, mut index: usize) {
        let len = self.len();

        loop {
            let left = left(index);
            // A node with no left child is a leaf.
            if left >= len {
                break;
            }

            let right = right(index);
            let min_child = if right < len && self.elements[right] < self.elements[left] {
                right
            } else {
                left
            };

            if self.elements[index] <= self.elements[min_child] {
                break;
            }

            self.elements.swap(index, min_child);
            index = min_child;
        }
    }
}

const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

const fn left(index: usize) -> usize {
    2 * index + 1
}

const fn right(index: usize) -> usize {
    2 * index + 2
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        MinHeap::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(value: Vec<T>) -> Self {
        MinHeap::from_vec(value)
    }
}

impl<T: Ord + Clone> Clone for MinHeap<T> {
    fn clone(&self) -> Self {
        let mut elements = Vec::with_capacity(self.cap());
        elements.extend(self.elements.iter().cloned());
        MinHeap { elements }
    }
}

impl<T: Ord + Debug> Debug for MinHeap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("elements", &self.elements.as_slice())
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}
