use std::fmt::{self, Debug, Formatter};

use super::{Iter, Link, Node};
use crate::util::error::EmptyCollection;

/// A last-in first-out stack, stored as a singly-linked list whose head is the top of the stack.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `clear` | `O(n)` |
pub struct Stack<T> {
    pub(crate) top: Link<T>,
    pub(crate) len: usize,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack.
    pub const fn new() -> Stack<T> {
        Stack {
            top: None,
            len: 0,
        }
    }

    /// Returns the number of elements on the Stack.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pushes `value` onto the top of the Stack.
    pub fn push(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.top.take(),
        });
        self.top = Some(node);
        self.len += 1;
    }

    /// Removes the element on top of the Stack and returns it.
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::linked::stack::{EmptyCollection, Stack};
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!(stack.pop(), Ok(2));
    /// assert_eq!(stack.pop(), Ok(1));
    /// assert_eq!(stack.pop(), Err(EmptyCollection));
    /// ```
    pub fn pop(&mut self) -> Result<T, EmptyCollection> {
        let node = self.top.take().ok_or(EmptyCollection)?;
        self.top = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    /// Returns a reference to the element on top of the Stack.
    pub fn peek(&self) -> Result<&T, EmptyCollection> {
        self.top.as_deref().map(|node| &node.value).ok_or(EmptyCollection)
    }

    /// Returns a mutable reference to the element on top of the Stack.
    pub fn peek_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        self.top.as_deref_mut().map(|node| &mut node.value).ok_or(EmptyCollection)
    }

    /// Returns an iterator over the elements of the Stack, from the top down.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Removes and drops every element on the Stack, one node at a time.
    pub fn clear(&mut self) {
        let mut link = self.top.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        // Dropping the head would otherwise drop every following node recursively.
        self.clear();
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every element of `iter` in order, so the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        let mut values: Vec<&T> = self.iter().collect();
        let mut stack = Stack::new();
        // Push from the bottom up so the clone has the same top.
        while let Some(value) = values.pop() {
            stack.push(value.clone());
        }
        stack
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len)
            .finish()
    }
}
