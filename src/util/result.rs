//! Panicking conversions for [`Result`]s whose error type carries a useful message.

use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps an [`Ok`] value, or panics with the [`Display`](std::fmt::Display) message of the
    /// error. Used where a failure is a misuse of the collection (an out of bounds index, a
    /// capacity overflow) rather than something the caller is expected to handle.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
