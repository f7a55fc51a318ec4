//! A module containing [`SearchTree`] and associated types.
//!
//! [`SearchTree`] is a plain, unbalanced binary search tree. Feeding it sorted input degrades it
//! into a linked list, which is why every operation that walks the whole tree does so with an
//! explicit stack rather than recursion.

mod iter;
mod node;
mod search_tree;
mod tests;

pub use iter::*;
pub(crate) use node::*;
pub use search_tree::*;

#[doc(inline)]
pub use crate::util::error::{DuplicateElement, ElementNotFound, EmptyCollection, RetrieveError};
