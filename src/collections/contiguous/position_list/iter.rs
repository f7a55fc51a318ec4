use std::slice;
use std::vec;

use super::PositionList;

impl<'a, T: Ord> IntoIterator for &'a PositionList<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// An owned iterator over the elements of a [`PositionList`], greatest first.
pub type IntoIter<T> = vec::IntoIter<T>;

impl<T: Ord> IntoIterator for PositionList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
