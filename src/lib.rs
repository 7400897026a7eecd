//! # attest
//!
//! A fluent assertion library with pluggable comparison strategies.
//!
//! Every assertion can run under the values' own equality and ordering, or
//! under a caller-supplied comparator; container algorithms, ordering checks
//! and failure messages all follow the chosen strategy. Assertions panic on
//! failure, which makes them drop-in for Rust's native `#[test]` framework.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use attest::{assert_group, assert_that};
//!
//! #[test]
//! fn ordering_and_containment() {
//!     assert_that(&8.0).is_greater_than(&6.0).is_positive();
//!
//!     assert_group(&["Yoda", "Luke", "Leia"])
//!         .contains(&["Luke"])
//!         .starts_with(&["Yoda"])
//!         .does_not_have_duplicates();
//! }
//! ```
//!
//! ## With a Custom Comparator
//!
//! ```rust,ignore
//! use attest::assert_group;
//!
//! fn case_insensitive(a: &&str, b: &&str) -> std::cmp::Ordering {
//!     a.to_lowercase().cmp(&b.to_lowercase())
//! }
//!
//! #[test]
//! fn roster_ignoring_case() {
//!     assert_group(&["Luke", "Yoda", "Leia"])
//!         .using_comparator(case_insensitive)
//!         .contains_only(&["LUKE", "yoda", "lEIA"]);
//! }
//! ```
//!
//! ## Tolerance for Real Numbers
//!
//! ```rust,ignore
//! use attest::{assert_that, offset};
//!
//! #[test]
//! fn close_enough() {
//!     assert_that(&6.0).is_close_to(&8.0, offset(2.0));
//! }
//! ```
//!
//! ## Non-panicking Engine
//!
//! The fluent layer forwards into engine types returning
//! `Result<(), AssertionError>`; use those directly to inspect failures
//! instead of panicking:
//!
//! ```rust,ignore
//! use attest::{AssertionInfo, Groups};
//!
//! let groups: Groups<&str> = Groups::new();
//! let result = groups.assert_contains(&AssertionInfo::none(), Some(&["Yoda"]), &["Han"]);
//! assert!(result.is_err());
//! ```

pub mod comparables;
pub mod equal;
pub mod failures;
pub mod fluent;
pub mod groups;
pub mod info;
mod messages;
pub mod numbers;
pub mod offset;
pub mod order;
pub mod strategy;

// Fluent entry points
pub use fluent::{assert_group, assert_that, GroupAssert, ValueAssert};

// Comparison engine
pub use comparables::Comparables;
pub use groups::Groups;
pub use numbers::Numbers;
pub use strategy::{ComparatorFn, ComparatorStrategy, ComparisonStrategy};

// Context and data types
pub use info::AssertionInfo;
pub use offset::{offset, strict_offset, Offset};
pub use order::{Number, RealNumber, TotalOrder};

// Failure reporting
pub use equal::{should_be_equal, ShouldBeEqual};
pub use failures::{comparison_failure, AssertionError, ComparisonFailureFactory};
