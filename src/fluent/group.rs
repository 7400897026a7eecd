//! Fluent assertions on an ordered group of elements.

use std::cmp::Ordering;
use std::fmt::Debug;

use super::report;
use crate::groups::Groups;
use crate::info::AssertionInfo;
use crate::strategy::ComparisonStrategy;

/// Entry point for fluent assertions on a group of elements.
///
/// # Example
///
/// ```rust,ignore
/// use attest::assert_group;
///
/// assert_group(&["Yoda", "Luke", "Leia"])
///     .starts_with(&["Yoda"])
///     .contains_sequence(&["Luke", "Leia"]);
/// ```
pub fn assert_group<T>(actual: &[T]) -> GroupAssert<'_, T> {
    GroupAssert::from_option(Some(actual))
}

/// Fluent assertion builder for one group.
///
/// Configuration methods chain; assertion methods evaluate immediately and
/// panic on failure.
#[derive(Debug)]
pub struct GroupAssert<'a, T> {
    actual: Option<&'a [T]>,
    info: AssertionInfo,
    strategy: ComparisonStrategy<T>,
}

impl<'a, T> GroupAssert<'a, T> {
    /// Builder over an optional group; `None` fails every assertion except
    /// [`is_none_or_empty`](Self::is_none_or_empty).
    pub fn from_option(actual: Option<&'a [T]>) -> Self {
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

    /// Compares elements with `cmp` instead of their own equality.
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

    fn groups(&self) -> Groups<T> {
        Groups::with_strategy(self.strategy.clone())
    }
}

impl<'a, T: Debug + PartialEq> GroupAssert<'a, T> {
    // =========================================================================
    // Assertions (panic on failure)
    // =========================================================================

    /// Asserts that every value appears in the group, in any order.
    ///
    /// # Panics
    ///
    /// Panics if the group is `None` or any value is missing, and with an
    /// `invalid assertion` message when `values` is empty.
    pub fn contains(self, values: &[T]) -> Self {
        report(self.groups().assert_contains(&self.info, self.actual, values));
        self
    }

    /// Asserts that the group contains the given values and nothing else,
    /// in any order.
    pub fn contains_only(self, values: &[T]) -> Self {
        report(self.groups().assert_contains_only(&self.info, self.actual, values));
        self
    }

    /// Asserts that `sequence` appears as a contiguous run in the group.
    pub fn contains_sequence(self, sequence: &[T]) -> Self {
        report(self.groups().assert_contains_sequence(&self.info, self.actual, sequence));
        self
    }

    /// Asserts that the group starts with `sequence`.
    pub fn starts_with(self, sequence: &[T]) -> Self {
        report(self.groups().assert_starts_with(&self.info, self.actual, sequence));
        self
    }

    /// Asserts that the group ends with `sequence`.
    pub fn ends_with(self, sequence: &[T]) -> Self {
        report(self.groups().assert_ends_with(&self.info, self.actual, sequence));
        self
    }

    /// Asserts that none of the given values appears in the group.
    pub fn does_not_contain(self, values: &[T]) -> Self {
        report(self.groups().assert_does_not_contain(&self.info, self.actual, values));
        self
    }

    /// Asserts that no element occurs more than once under the active
    /// equality.
    pub fn does_not_have_duplicates(self) -> Self {
        report(self.groups().assert_does_not_have_duplicates(&self.info, self.actual));
        self
    }

    /// Asserts that the group has no elements.
    pub fn is_empty(self) -> Self {
        report(self.groups().assert_empty(&self.info, self.actual));
        self
    }

    /// Asserts that the group has at least one element.
    pub fn is_not_empty(self) -> Self {
        report(self.groups().assert_not_empty(&self.info, self.actual));
        self
    }

    /// Asserts that the group is `None` or has no elements.
    pub fn is_none_or_empty(self) -> Self {
        report(self.groups().assert_none_or_empty(&self.info, self.actual));
        self
    }

    /// Asserts that the group has exactly `expected_size` elements.
    pub fn has_size(self, expected_size: usize) -> Self {
        report(self.groups().assert_has_size(&self.info, self.actual, expected_size));
        self
    }
}

impl<'a, T: Debug> GroupAssert<'a, Option<T>> {
    /// Asserts that the group contains at least one `None` element.
    pub fn contains_none(self) -> Self {
        report(self.groups().assert_contains_none(&self.info, self.actual));
        self
    }

    /// Asserts that the group contains no `None` element.
    pub fn does_not_contain_none(self) -> Self {
        report(self.groups().assert_does_not_contain_none(&self.info, self.actual));
        self
    }
}
