use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter;

use super::Iter;
use crate::util::error::{CapacityOverflow, EmptyCollection};
use crate::util::result::ResultExtension;

const INITIAL_CAP: usize = 50;
const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A first-in first-out queue stored in a ring buffer.
///
/// The queue keeps the index of its front slot and its length, so the back of the queue is found at
/// `(front + len) % cap`. Both ends advance modulo the capacity, letting the live elements wrap
/// around the end of the buffer. When every slot is full, the buffer doubles in size and the
/// elements are laid out again starting from slot 0.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `enqueue` | `O(1)`*, `O(n)` |
/// | `dequeue` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `get` | `O(1)` |
///
/// \* If the CircularQueue is full, `enqueue` will take `O(n)` to grow the buffer first.
pub struct CircularQueue<T> {
    pub(crate) slots: Box<[Option<T>]>,
    pub(crate) front: usize,
    pub(crate) len: usize,
}

impl<T> CircularQueue<T> {
    /// Creates a new, empty CircularQueue with the default starting capacity.
    pub fn new() -> CircularQueue<T> {
        CircularQueue::with_cap(INITIAL_CAP)
    }

    /// Creates a new, empty CircularQueue with exactly `cap` slots.
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::circ::CircularQueue;
    /// let queue: CircularQueue<u8> = CircularQueue::with_cap(4);
    /// assert_eq!(queue.cap(), 4);
    /// ```
    pub fn with_cap(cap: usize) -> CircularQueue<T> {
        CircularQueue {
            slots: empty_slots(cap),
            front: 0,
            len: 0,
        }
    }

    /// Returns the number of elements in the CircularQueue.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the CircularQueue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the ring buffer.
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Adds `element` to the back of the CircularQueue.
    ///
    /// # Panics
    /// Panics if the CircularQueue is full and doubling its capacity would overflow.
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::circ::CircularQueue;
    /// let mut queue = CircularQueue::with_cap(2);
    /// queue.enqueue('a');
    /// queue.enqueue('b');
    /// queue.enqueue('c');
    /// assert_eq!(queue.dequeue(), Ok('a'));
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn enqueue(&mut self, element: T) {
        if self.len == self.cap() {
            self.grow();
        }

        let back = self.slot_index(self.len);
        self.slots[back] = Some(element);
        self.len += 1;
    }

    /// Removes the element at the front of the CircularQueue and returns it.
    pub fn dequeue(&mut self) -> Result<T, EmptyCollection> {
        if self.is_empty() {
            return Err(EmptyCollection);
        }

        let element = self.slots[self.front].take().ok_or(EmptyCollection)?;
        self.front = (self.front + 1) % self.cap();
        self.len -= 1;
        Ok(element)
    }

    /// Returns a reference to the element at the front of the CircularQueue.
    pub fn peek(&self) -> Result<&T, EmptyCollection> {
        self.get(0).ok_or(EmptyCollection)
    }

    /// Returns a mutable reference to the element at the front of the CircularQueue.
    pub fn peek_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        if self.is_empty() {
            return Err(EmptyCollection);
        }

        self.slots[self.front].as_mut().ok_or(EmptyCollection)
    }

    /// Returns a reference to the element `index` places behind the front of the CircularQueue.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        self.slots[self.slot_index(index)].as_ref()
    }

    /// Returns an iterator over the elements of the CircularQueue, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Removes and drops every element, keeping the current capacity.
    pub fn clear(&mut self) {
        for i in 0..self.len {
            let slot = self.slot_index(i);
            self.slots[slot] = None;
        }

        self.front = 0;
        self.len = 0;
    }

    /// Converts an offset from the front of the queue into an index into the ring buffer.
    pub(crate) fn slot_index(&self, offset: usize) -> usize {
        (self.front + offset) % self.cap()
    }

    /// Doubles the number of slots, moving the live elements to the start of the new buffer in
    /// queue order.
    ///
    /// # Panics
    /// Panics if the new capacity would overflow.
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(
            self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
            MIN_CAP,
        );

        let mut slots = empty_slots(new_cap);
        for (i, slot) in slots.iter_mut().take(self.len).enumerate() {
            let old = self.slot_index(i);
            *slot = self.slots[old].take();
        }

        self.slots = slots;
        self.front = 0;
    }
}

fn empty_slots<T>(cap: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(cap).collect()
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CircularQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = CircularQueue::with_cap(cmp::max(iter.size_hint().0, MIN_CAP));
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for CircularQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.enqueue(element);
        }
    }
}

impl<T: Clone> Clone for CircularQueue<T> {
    fn clone(&self) -> Self {
        let mut queue = CircularQueue::with_cap(self.cap());
        queue.extend(self.iter().cloned());
        queue
    }
}

impl<T: PartialEq> PartialEq for CircularQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularQueue<T> {}

impl<T: Debug> Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("front", &self.front)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for CircularQueue<T> {
    /// Writes each element on its own line, from front to back.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for element in self.iter() {
            writeln!(f, "{element}")?;
        }
        Ok(())
    }
}
