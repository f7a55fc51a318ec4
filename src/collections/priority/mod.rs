//! A module containing [`PriorityQueue`], a thin wrapper over
//! [`MinHeap`](crate::collections::heap::MinHeap).

mod priority_queue;

pub use priority_queue::*;

#[doc(inline)]
pub use crate::util::error::EmptyCollection;
