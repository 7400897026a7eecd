//! Fluent assertion API over the comparison engine.
//!
//! Configuration methods chain (`described_as`, `using_comparator`);
//! assertion methods evaluate immediately and panic on failure, which makes
//! them drop-in for Rust's native `#[test]` framework.
//!
//! # Example
//!
//! ```rust,ignore
//! use attest::{assert_group, assert_that};
//!
//! #[test]
//! fn jedi_roster() {
//!     assert_that(&8.0).is_greater_than(&6.0);
//!
//!     assert_group(&["Yoda", "Luke", "Leia"])
//!         .contains(&["Luke"])
//!         .does_not_contain(&["Han"]);
//! }
//! ```

mod group;
mod value;

pub use group::{assert_group, GroupAssert};
pub use value::{assert_that, ValueAssert};

use crate::failures::AssertionError;

/// Panics on a failed assertion, distinguishing misuse from test failure.
pub(crate) fn report(result: Result<(), AssertionError>) {
    match result {
        Ok(()) => {}
        Err(error @ AssertionError::Precondition(_)) => panic!("invalid assertion: {error}"),
        Err(error) => panic!("assertion failed: {error}"),
    }
}
