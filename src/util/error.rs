//! Error types shared by every collection in the crate.
//!
//! Each failure mode is a struct of its own, so that an operation which can only fail one way says
//! exactly that in its signature. [`RetrieveError`] combines the two ways a lookup can fail.

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The collection holds no elements, so there is nothing to remove, inspect or traverse.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Operation requires a non-empty collection!")]
pub struct EmptyCollection;

/// The element being inserted compares equal to one that is already stored.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Element already exists in the collection!")]
pub struct DuplicateElement;

/// No stored element compares equal to the one being looked up.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Element does not exist in the collection!")]
pub struct ElementNotFound;

/// An index was outside of the collection's initialized range.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The number of elements at the time of the request.
    pub len: usize,
}

/// The collection would need more memory than can be allocated for it.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// The ways a lookup in a non-empty-only collection can fail.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum RetrieveError {
    /// See [`EmptyCollection`].
    EmptyCollection(EmptyCollection),
    /// See [`ElementNotFound`].
    ElementNotFound(ElementNotFound),
}
