//! A module containing [`MinHeap`] and associated types.
//!
//! The only other included types are for iteration: [`Iter`] borrows the elements in storage
//! order, while [`IntoSortedIter`] consumes the heap, yielding elements smallest first.

mod iter;
mod min_heap;

pub use iter::*;
pub use min_heap::*;

#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyCollection};
