use std::fmt::{self, Debug, Formatter};

use crate::collections::heap::{self, MinHeap};
use crate::util::error::EmptyCollection;

/// A queue which always hands out its smallest element first.
///
/// Every operation delegates to a [`MinHeap`]: `enqueue` inserts, `dequeue` removes the minimum
/// and `peek` inspects it. The "highest priority" element is therefore the one that compares
/// least.
pub struct PriorityQueue<T: Ord> {
    pub(crate) heap: MinHeap<T>,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates a new, empty PriorityQueue.
    pub fn new() -> PriorityQueue<T> {
        PriorityQueue {
            heap: MinHeap::new(),
        }
    }

    /// Returns the number of elements in the PriorityQueue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the PriorityQueue contains no elements.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Adds `element` to the PriorityQueue.
    ///
    /// # Panics
    /// Panics if the underlying MinHeap needs to grow and the new capacity can't be allocated.
    pub fn enqueue(&mut self, element: T) {
        self.heap.insert(element);
    }

    /// Removes and returns the element with the highest priority (the smallest one).
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::priority::{EmptyCollection, PriorityQueue};
    /// let mut queue = PriorityQueue::new();
    /// queue.enqueue("walk the dog");
    /// queue.enqueue("answer email");
    /// assert_eq!(queue.dequeue(), Ok("answer email"));
    /// assert_eq!(queue.dequeue(), Ok("walk the dog"));
    /// assert_eq!(queue.dequeue(), Err(EmptyCollection));
    /// ```
    pub fn dequeue(&mut self) -> Result<T, EmptyCollection> {
        self.heap.remove_min()
    }

    /// Returns a reference to the element with the highest priority without removing it.
    pub fn peek(&self) -> Result<&T, EmptyCollection> {
        self.heap.peek_min()
    }

    /// Returns an iterator over the elements of the PriorityQueue in no particular order.
    pub fn iter(&self) -> heap::Iter<'_, T> {
        self.heap.iter()
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<MinHeap<T>> for PriorityQueue<T> {
    fn from(heap: MinHeap<T>) -> Self {
        PriorityQueue { heap }
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PriorityQueue::from(iter.into_iter().collect::<MinHeap<T>>())
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.heap.extend(iter);
    }
}

impl<T: Ord> IntoIterator for PriorityQueue<T> {
    type Item = T;

    type IntoIter = heap::IntoSortedIter<T>;

    /// Consumes the PriorityQueue, yielding its elements in the order they would be dequeued.
    fn into_iter(self) -> Self::IntoIter {
        self.heap.into_iter()
    }
}

impl<T: Ord + Clone> Clone for PriorityQueue<T> {
    fn clone(&self) -> Self {
        PriorityQueue {
            heap: self.heap.clone(),
        }
    }
}

impl<T: Ord + Debug> Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish()
    }
}
