use std::iter::FusedIterator;

use super::CircularQueue;

impl<'a, T> IntoIterator for &'a CircularQueue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            queue: self,
            front: 0,
            back: self.len,
        }
    }
}

/// A borrowed iterator over the elements of a [`CircularQueue`], from front to back.
pub struct Iter<'a, T> {
    pub(crate) queue: &'a CircularQueue<T>,
    // Offsets from the front of the queue, not slot indices.
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.front += 1;
        self.queue.get(self.front - 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        self.queue.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> IntoIterator for CircularQueue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            queue: self,
        }
    }
}

/// An owned iterator over the elements of a [`CircularQueue`], in the order they would be
/// dequeued.
pub struct IntoIter<T> {
    pub(crate) queue: CircularQueue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
