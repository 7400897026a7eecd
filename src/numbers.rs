//! Reusable assertions for numeric values.
//!
//! Boundary checks run against the type's own zero and NaN constants,
//! through the ordering notion, so they hold even for types whose equality
//! is finer than their ordering. Tolerance-based equality lives here too and
//! is independent of any comparison strategy.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::comparables::Comparables;
use crate::failures::{self, AssertionError};
use crate::info::AssertionInfo;
use crate::messages;
use crate::offset::Offset;
use crate::order::{Number, RealNumber};
use crate::strategy::ComparisonStrategy;

/// Numeric assertions for values of `T`, under one comparison strategy.
#[derive(Debug)]
pub struct Numbers<T> {
    comparables: Comparables<T>,
}

impl<T> Numbers<T> {
    /// Assertions under natural equality and ordering.
    pub fn new() -> Self {
        Self {
            comparables: Comparables::new(),
        }
    }

    /// Assertions under the given strategy.
    pub fn with_strategy(strategy: ComparisonStrategy<T>) -> Self {
        Self {
            comparables: Comparables::with_strategy(strategy),
        }
    }

    /// The active strategy.
    pub fn strategy(&self) -> &ComparisonStrategy<T> {
        self.comparables.strategy()
    }
}

impl<T> Default for Numbers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug + PartialEq + Number> Numbers<T> {
    /// Asserts that the value is zero, in the ordering sense.
    pub fn assert_is_zero(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
    ) -> Result<(), AssertionError> {
        self.comparables.assert_equal_by_comparison(info, actual, &T::zero())
    }

    /// Asserts that the value is not zero, in the ordering sense.
    pub fn assert_is_not_zero(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
    ) -> Result<(), AssertionError> {
        self.comparables.assert_not_equal_by_comparison(info, actual, &T::zero())
    }

    /// Asserts that the value is strictly below zero.
    pub fn assert_is_negative(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
    ) -> Result<(), AssertionError> {
        self.comparables.assert_less_than(info, actual, &T::zero())
    }

    /// Asserts that the value is strictly above zero.
    pub fn assert_is_positive(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
    ) -> Result<(), AssertionError> {
        self.comparables.assert_greater_than(info, actual, &T::zero())
    }

    /// Asserts equality under the active strategy.
    pub fn assert_equal(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
        expected: &T,
    ) -> Result<(), AssertionError> {
        self.comparables.assert_equal(info, actual, expected)
    }

    /// Asserts inequality under the active strategy.
    pub fn assert_not_equal(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
        other: &T,
    ) -> Result<(), AssertionError> {
        self.comparables.assert_not_equal(info, actual, other)
    }

    /// Asserts strict `actual < other`.
    pub fn assert_less_than(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
        other: &T,
    ) -> Result<(), AssertionError> {
        self.comparables.assert_less_than(info, actual, other)
    }

    /// Asserts `actual <= other`.
    pub fn assert_less_than_or_equal_to(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
        other: &T,
    ) -> Result<(), AssertionError> {
        self.comparables.assert_less_than_or_equal_to(info, actual, other)
    }

    /// Asserts strict `actual > other`.
    pub fn assert_greater_than(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
        other: &T,
    ) -> Result<(), AssertionError> {
        self.comparables.assert_greater_than(info, actual, other)
    }

    /// Asserts `actual >= other`.
    pub fn assert_greater_than_or_equal_to(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
        other: &T,
    ) -> Result<(), AssertionError> {
        self.comparables.assert_greater_than_or_equal_to(info, actual, other)
    }
}

impl<T: Debug + PartialEq + RealNumber> Numbers<T> {
    /// Asserts that the value is NaN.
    ///
    /// Goes through the total order, where NaN equals NaN, rather than the
    /// IEEE `==` which never does.
    pub fn assert_is_nan(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
    ) -> Result<(), AssertionError> {
        self.comparables.assert_equal_by_comparison(info, actual, &T::nan())
    }

    /// Asserts that the value is not NaN.
    pub fn assert_is_not_nan(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
    ) -> Result<(), AssertionError> {
        self.comparables.assert_not_equal_by_comparison(info, actual, &T::nan())
    }

    /// Asserts that `actual` is within `offset` of `expected`:
    /// `|actual - expected| <= offset.value()`, or strictly below for a
    /// strict offset.
    ///
    /// # Errors
    ///
    /// A precondition violation if the offset value is negative or NaN,
    /// checked before anything else; otherwise a failure if the subject is
    /// `None` or outside the tolerance.
    pub fn assert_equal_with_offset(
        &self,
        info: &AssertionInfo,
        actual: Option<&T>,
        expected: &T,
        offset: &Offset<T>,
    ) -> Result<(), AssertionError> {
        check_offset(offset)?;
        let actual = failures::require_actual(info, actual)?;
        let difference = actual.abs_diff(expected);
        let within = if offset.is_strict() {
            difference.total_cmp(offset.value()) == Ordering::Less
        } else {
            difference.total_cmp(offset.value()) != Ordering::Greater
        };
        if within {
            return Ok(());
        }
        Err(failures::failure(
            info,
            messages::should_be_equal_within_offset(actual, expected, offset),
        ))
    }
}

fn check_offset<T: Debug + RealNumber>(offset: &Offset<T>) -> Result<(), AssertionError> {
    let value = offset.value();
    if value.is_nan() || value.total_cmp(&T::zero()) == Ordering::Less {
        return Err(failures::invalid_offset(format!("{value:?}")));
    }
    Ok(())
}
