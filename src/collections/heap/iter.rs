use std::iter::FusedIterator;
use std::slice;

use super::MinHeap;

impl<'a, T: Ord> IntoIterator for &'a MinHeap<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.elements.iter())
    }
}

/// A borrowed iterator over the elements of a [`MinHeap`], in storage order.
pub struct Iter<'a, T>(pub(crate) slice::Iter<'a, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: Ord> IntoIterator for MinHeap<T> {
    type Item = T;

    type IntoIter = IntoSortedIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoSortedIter {
            heap: self,
        }
    }
}

/// An owned iterator over the elements of a [`MinHeap`], in ascending order.
pub struct IntoSortedIter<T: Ord> {
    // Each step is a remove_min, which is O(log n), rather than sorting everything up front.
    pub(crate) heap: MinHeap<T>,
}

impl<T: Ord> Iterator for IntoSortedIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.remove_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T: Ord> ExactSizeIterator for IntoSortedIter<T> {}

impl<T: Ord> FusedIterator for IntoSortedIter<T> {}
