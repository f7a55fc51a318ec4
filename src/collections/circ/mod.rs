//! A module containing [`CircularQueue`], a first-in first-out queue over a ring buffer.

mod circular_queue;
mod iter;

pub use circular_queue::*;
pub use iter::*;

#[doc(inline)]
pub use crate::util::error::EmptyCollection;
