//! A module containing [`PositionList`] and associated types.
//!
//! [`PositionList`] derefs to a slice, so borrowed iteration uses [`Iter`](std::slice::Iter) from
//! [`std::slice`]. Owned iteration is provided by [`IntoIter`].
//!
//! Elements can't be mutated in place, since changing one could break the list's ordering.

mod iter;
mod position_list;

pub use iter::*;
pub use position_list::*;

#[doc(inline)]
pub use crate::util::error::{DuplicateElement, ElementNotFound, IndexOutOfBounds};
