//! Fluent assertions on a single value.

use std::cmp::Ordering;
use std::fmt::Debug;

use super::report;
use crate::comparables::Comparables;
use crate::info::AssertionInfo;
use crate::numbers::Numbers;
use crate::offset::Offset;
use crate::order::{Number, RealNumber, TotalOrder};
use crate::strategy::ComparisonStrategy;

/// Entry point for fluent assertions on a single value.
///
/// # Example
///
/// ```rust,ignore
/// use attest::assert_that;
///
/// assert_that(&7).is_positive().is_less_than(&10);
/// ```
pub fn assert_that<T>(actual: &T) -> ValueAssert<'_, T> {
    ValueAssert::from_option(Some(actual))
}

/// Fluent assertion builder for one value.
///
/// Configuration methods chain; assertion methods evaluate immediately and
/// panic on failure.
#[derive(Debug)]
pub struct ValueAssert<'a, T> {
    actual: Option<&'a T>,
    info: AssertionInfo,
    strategy: ComparisonStrategy<T>,
}

impl<'a, T> ValueAssert<'a, T> {
    /// Builder over an optional subject; `None` fails every value
    /// assertion.
    pub fn from_option(actual: Option<&'a T>) -> Self {
        Self {
            actual,
            info: AssertionInfo::none(),
            strategy: ComparisonStrategy::natural(),
        }
    }

    // =========================================================================
    // Configuration (chainable)
    // =========================================================================

    /// Prefixes failure messages with `[description]`.
    pub fn described_as(mut self, description: impl Into<String>) -> Self {
        self.info = AssertionInfo::described_as(description);
        self
    }

    /// Compares with `cmp` instead of the value's own equality and
    /// ordering.
    pub fn using_comparator<F>(mut self, cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.strategy = ComparisonStrategy::comparator(cmp);
        self
    }

    /// Like [`using_comparator`](Self::using_comparator), with an explicit
    /// display name for failure messages.
    pub fn using_comparator_named<F>(mut self, name: impl Into<String>, cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.strategy = ComparisonStrategy::comparator_named(name, cmp);
        self
    }

    fn comparables(&self) -> Comparables<T> {
        Comparables::with_strategy(self.strategy.clone())
    }

    fn numbers(&self) -> Numbers<T> {
        Numbers::with_strategy(self.strategy.clone())
    }
}

impl<'a, T: Debug + PartialEq> ValueAssert<'a, T> {
    // =========================================================================
    // Equality (panic on failure)
    // =========================================================================

    /// Asserts equality under the active strategy.
    ///
    /// # Panics
    ///
    /// Panics if the subject is `None` or not equal to `expected`.
    pub fn is_equal_to(self, expected: &T) -> Self {
        report(self.comparables().assert_equal(&self.info, self.actual, expected));
        self
    }

    /// Asserts inequality under the active strategy.
    ///
    /// # Panics
    ///
    /// Panics if the subject is `None` or equal to `other`.
    pub fn is_not_equal_to(self, other: &T) -> Self {
        report(self.comparables().assert_not_equal(&self.info, self.actual, other));
        self
    }
}

impl<'a, T: Debug + TotalOrder> ValueAssert<'a, T> {
    // =========================================================================
    // Ordering (panic on failure)
    // =========================================================================

    /// Asserts equality in the ordering sense, bypassing any installed
    /// comparator.
    pub fn is_equal_by_comparing_to(self, expected: &T) -> Self {
        report(self.comparables().assert_equal_by_comparison(&self.info, self.actual, expected));
        self
    }

    /// Asserts inequality in the ordering sense, bypassing any installed
    /// comparator.
    pub fn is_not_equal_by_comparing_to(self, other: &T) -> Self {
        report(self.comparables().assert_not_equal_by_comparison(&self.info, self.actual, other));
        self
    }

    /// Asserts strict `actual < other`.
    pub fn is_less_than(self, other: &T) -> Self {
        report(self.comparables().assert_less_than(&self.info, self.actual, other));
        self
    }

    /// Asserts `actual <= other`.
    pub fn is_less_than_or_equal_to(self, other: &T) -> Self {
        report(self.comparables().assert_less_than_or_equal_to(&self.info, self.actual, other));
        self
    }

    /// Asserts strict `actual > other`.
    pub fn is_greater_than(self, other: &T) -> Self {
        report(self.comparables().assert_greater_than(&self.info, self.actual, other));
        self
    }

    /// Asserts `actual >= other`.
    pub fn is_greater_than_or_equal_to(self, other: &T) -> Self {
        report(self.comparables().assert_greater_than_or_equal_to(&self.info, self.actual, other));
        self
    }
}

impl<'a, T: Debug + PartialEq + Number> ValueAssert<'a, T> {
    // =========================================================================
    // Numeric boundaries (panic on failure)
    // =========================================================================

    /// Asserts that the value is zero, in the ordering sense.
    pub fn is_zero(self) -> Self {
        report(self.numbers().assert_is_zero(&self.info, self.actual));
        self
    }

    /// Asserts that the value is not zero, in the ordering sense.
    pub fn is_not_zero(self) -> Self {
        report(self.numbers().assert_is_not_zero(&self.info, self.actual));
        self
    }

    /// Asserts that the value is strictly below zero.
    pub fn is_negative(self) -> Self {
        report(self.numbers().assert_is_negative(&self.info, self.actual));
        self
    }

    /// Asserts that the value is strictly above zero.
    pub fn is_positive(self) -> Self {
        report(self.numbers().assert_is_positive(&self.info, self.actual));
        self
    }
}

impl<'a, T: Debug + PartialEq + RealNumber> ValueAssert<'a, T> {
    /// Asserts that the value is NaN, under compareTo-style total ordering.
    pub fn is_nan(self) -> Self {
        report(self.numbers().assert_is_nan(&self.info, self.actual));
        self
    }

    /// Asserts that the value is not NaN.
    pub fn is_not_nan(self) -> Self {
        report(self.numbers().assert_is_not_nan(&self.info, self.actual));
        self
    }

    /// Asserts that the value is within `offset` of `expected`.
    ///
    /// # Panics
    ///
    /// Panics with an `invalid assertion` message for a negative or NaN
    /// offset, and with an `assertion failed` message when the difference
    /// exceeds the tolerance.
    pub fn is_close_to(self, expected: &T, offset: Offset<T>) -> Self {
        report(self.numbers().assert_equal_with_offset(&self.info, self.actual, expected, &offset));
        self
    }
}
