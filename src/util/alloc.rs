//! Test helpers for tracking when elements are dropped.

use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

/// A handle that increments a shared counter when dropped, used to check that a collection
/// releases each of its elements exactly once.
#[derive(Debug, Clone)]
#[allow(unused)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

#[allow(unused)]
impl CountedDrop {
    /// Creates a new counter starting at `value`.
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(value)))
    }

    /// Returns the number of drops recorded so far.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

/// An ordered value paired with a [`CountedDrop`], for collections that require [`Ord`]. Only the
/// key takes part in comparisons.
#[derive(Debug, Clone)]
#[allow(unused)]
pub struct KeyedDrop {
    /// The value used for ordering.
    pub key: u32,
    /// The counter incremented when this value is dropped.
    pub counter: CountedDrop,
}

#[allow(unused)]
impl KeyedDrop {
    /// Creates a new value ordered by `key` that reports its drop to `counter`.
    pub fn new(key: u32, counter: &CountedDrop) -> KeyedDrop {
        KeyedDrop {
            key,
            counter: counter.clone(),
        }
    }
}

impl PartialEq for KeyedDrop {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for KeyedDrop {}

impl PartialOrd for KeyedDrop {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KeyedDrop {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
