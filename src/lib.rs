//! A set of small, independent collection types: the classic textbook data structures, written
//! out properly.
//!
//! # Purpose
//! Each collection here is a self-contained exercise: a well known structure with a small, fixed
//! set of operations and one invariant it must never break. The two with real algorithmic content
//! are [`MinHeap`](collections::heap::MinHeap) (sift-up / sift-down over an implicit binary tree)
//! and [`SearchTree`](collections::binary_tree::SearchTree) (an unbalanced binary search tree).
//! The rest ([`PriorityQueue`](collections::priority::PriorityQueue),
//! [`CircularQueue`](collections::circ::CircularQueue),
//! [`PositionList`](collections::contiguous::PositionList) and
//! [`Stack`](collections::linked::Stack)) are linear bookkeeping.
//!
//! I wrote these to get each structure's invariant right without leaning on recursion or `unsafe`,
//! so a badly shaped input costs time but never the call stack.
//!
//! # Method
//! Nothing in this crate recurses. Tree descents are loops, and anything that has to visit a whole
//! tree (traversal, cloning, dropping) keeps an explicit work stack on the heap instead of using
//! the call stack, so a degenerate tree built from sorted input can't overflow the stack no matter
//! how deep it gets.
//!
//! # Error Handling
//! Operations that can fail because of the state of the collection (removing from an empty heap,
//! inserting a duplicate into a tree) return [`Result`]s with strongly typed errors. Each kind of
//! failure is its own (usually zero-sized) struct that implements
//! [`Error`](std::error::Error), and operations with more than one failure mode return an enum
//! over those structs, so matching on them is static rather than dynamic.
//!
//! Misuse that would be annoying to handle every time, such as indexing out of bounds or
//! overflowing the capacity of a collection, panics instead. Any method that does so documents it
//! under a `# Panics` heading.
//!
//! # Dependencies
//! This crate only depends on `derive_more`, for the repetitive `Display`, `Error` and `From`
//! implementations on error types.
//!
//! # Features
//! Each collection family sits behind its own feature (`heap`, `binary-tree`, `priority`,
//! `circ`, `contiguous` and `linked`), all of which are enabled by default through
//! `collections-all`.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
