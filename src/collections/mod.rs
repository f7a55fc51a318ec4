//! Ordered and linear collection types.
//!
//! # Purpose
//! The ordered types here, [`MinHeap`](heap::MinHeap), [`PriorityQueue`](priority::PriorityQueue)
//! and [`SearchTree`](binary_tree::SearchTree), keep their elements arranged by [`Ord`] so the
//! smallest or a specific element can be found without scanning everything. The linear types,
//! [`CircularQueue`](circ::CircularQueue), [`PositionList`](contiguous::PositionList) and
//! [`Stack`](linked::Stack), cover the remaining container shapes.
//!
//! # Method
//! None of these types recurse over their own structure. Traversal, copying and destruction all
//! keep an explicit stack or loop instead, so a degenerate tree or a very long stack can't overflow
//! the call stack.
//!
//! Every fallible operation reports failure with one of the unit error types re-exported here,
//! rather than with a sentinel value.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "circ")]
pub mod circ;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "heap")]
pub mod heap;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "priority")]
pub mod priority;

#[doc(inline)]
pub use crate::util::error::{
    CapacityOverflow, DuplicateElement, ElementNotFound, EmptyCollection, IndexOutOfBounds,
    RetrieveError,
};
