//! Contiguous collection types, currently just [`PositionList`].

pub mod position_list;

#[doc(inline)]
pub use position_list::PositionList;
