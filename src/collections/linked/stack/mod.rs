//! A module containing [`Stack`] and associated types, including owned and borrowed iteration from
//! the top of the stack down.

mod iter;
mod node;
mod stack;

pub use iter::*;
pub(crate) use node::*;
pub use stack::*;

#[doc(inline)]
pub use crate::util::error::EmptyCollection;
