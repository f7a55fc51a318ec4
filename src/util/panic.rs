//! Test helpers for methods that are documented to panic.

/// Asserts that the provided block panics. The unwind is caught, so the rest of the test still
/// runs afterwards.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "block was expected to panic")
    };
    ($run:block, $msg:literal) => {
        let outcome = std::panic::catch_unwind(|| $run);
        assert!(outcome.is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
