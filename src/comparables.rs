//! Reusable assertions for totally ordered values.
//!
//! Equality goes through the active [`ComparisonStrategy`]; the
//! `by_comparison` forms deliberately bypass it and use the value's own
//! [`TotalOrder`], for types whose ordering is coarser or finer than their
//! equality. Non-strict orderings are the negation of the opposite strict
//! form, so comparator-equal values pass both `<=` and `>=`.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::equal::should_be_equal;
use crate::failures::{self, AssertionError};
use crate::info::AssertionInfo;
use crate::messages;
use crate::order::TotalOrder;
use crate::strategy::ComparisonStrategy;

/// Ordering and equality assertions for values of `T`, under one comparison
/// strategy.
#[derive(Debug)]
pub struct Comparables<T> {
    strategy: ComparisonStrategy<T>,
}

impl<T> Comparables<T> {
    /// Assertions under natural equality and ordering.
    pub fn new() -> Self {
        Self {
            strategy: ComparisonStrategy::natural(),
        }
    }

    /// Assertions under the given strategy.
    pub fn with_strategy(strategy: ComparisonStrategy<T>) -> Self {
        Self { strategy }
    }

    /// The active strategy.
    pub fn strategy(&self) -> &ComparisonStrategy<T> {
        &self.strategy
    }
}

impl<T> Default for Comparables<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug + PartialEq> Comparables<T> {
    /// Asserts that `actual` equals `expected` under the active strategy.
    pub fn assert_equal(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
        expected: &T,
    ) -> Result<(), AssertionError> {
        let actual = failures::require_actual(info, actual)?;
        if self.strategy.are_equal(actual, expected) {
            return Ok(());
        }
        Err(should_be_equal(actual, expected, &self.strategy).into_error(info))
    }

    /// Asserts that `actual` does not equal `other` under the active
    /// strategy.
    pub fn assert_not_equal(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
        other: &T,
    ) -> Result<(), AssertionError> {
        let actual = failures::require_actual(info, actual)?;
        if !self.strategy.are_equal(actual, other) {
            return Ok(());
        }
        Err(failures::failure(
            info,
            messages::should_not_be_equal(actual, other, &self.strategy),
        ))
    }
}

impl<T: Debug + TotalOrder> Comparables<T> {
    /// Asserts equality in the ordering sense: `total_cmp` answers `Equal`.
    ///
    /// The active strategy is not consulted; this assertion targets the
    /// value's own ordering even when a comparator is installed.
    pub fn assert_equal_by_comparison(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
        expected: &T,
    ) -> Result<(), AssertionError> {
        let actual = failures::require_actual(info, actual)?;
        if actual.total_cmp(expected) == Ordering::Equal {
            return Ok(());
        }
        Err(should_be_equal(actual, expected, &self.strategy).into_error(info))
    }

    /// Asserts inequality in the ordering sense: `total_cmp` answers
    /// anything but `Equal`. The active strategy is not consulted.
    pub fn assert_not_equal_by_comparison(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
        other: &T,
    ) -> Result<(), AssertionError> {
        let actual = failures::require_actual(info, actual)?;
        if actual.total_cmp(other) != Ordering::Equal {
            return Ok(());
        }
        Err(failures::failure(
            info,
            messages::should_not_be_equal(actual, other, &ComparisonStrategy::Natural),
        ))
    }

    /// Asserts strict `actual < other` under the active strategy.
    pub fn assert_less_than(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
        other: &T,
    ) -> Result<(), AssertionError> {
        let actual = failures::require_actual(info, actual)?;
        if self.strategy.is_less_than(actual, other) {
            return Ok(());
        }
        Err(failures::failure(
            info,
            messages::should_be_less(actual, other, &self.strategy),
        ))
    }

    /// Asserts `actual <= other`, defined as not strictly greater, so
    /// comparator-equal but distinct values pass.
    pub fn assert_less_than_or_equal_to(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
        other: &T,
    ) -> Result<(), AssertionError> {
        let actual = failures::require_actual(info, actual)?;
        if !self.strategy.is_greater_than(actual, other) {
            return Ok(());
        }
        Err(failures::failure(
            info,
            messages::should_be_less_or_equal(actual, other, &self.strategy),
        ))
    }

    /// Asserts strict `actual > other` under the active strategy.
    pub fn assert_greater_than(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
        other: &T,
    ) -> Result<(), AssertionError> {
        let actual = failures::require_actual(info, actual)?;
        if self.strategy.is_greater_than(actual, other) {
            return Ok(());
        }
        Err(failures::failure(
            info,
            messages::should_be_greater(actual, other, &self.strategy),
        ))
    }

    /// Asserts `actual >= other`, defined as not strictly less.
    pub fn assert_greater_than_or_equal_to(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
        other: &T,
    ) -> Result<(), AssertionError> {
        let actual = failures::require_actual(info, actual)?;
        if !self.strategy.is_less_than(actual, other) {
            return Ok(());
        }
        Err(failures::failure(
            info,
            messages::should_be_greater_or_equal(actual, other, &self.strategy),
        ))
    }
}
