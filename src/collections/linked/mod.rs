//! Linked collection types. Currently just [`Stack`], a singly-linked last-in first-out stack.

pub mod stack;

#[doc(inline)]
pub use stack::Stack;
