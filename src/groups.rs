//! Reusable assertions over ordered groups of elements.
//!
//! All algorithms are expressed purely in terms of the active
//! [`ComparisonStrategy`], so they behave identically under natural equality
//! and under a caller-supplied comparator. The group under test is never
//! mutated: multiset bookkeeping drains a call-local working copy of
//! references.
//!
//! Check order is uniform: the values/sequence argument is validated first
//! (non-empty), then the subject (present), then the predicate runs.

use std::fmt::Debug;

use crate::failures::{self, AssertionError};
use crate::info::AssertionInfo;
use crate::messages;
use crate::strategy::ComparisonStrategy;

/// Container assertions for groups of `T`, under one comparison strategy.
#[derive(Debug)]
pub struct Groups<T> {
    strategy: ComparisonStrategy<T>,
}

impl<T> Groups<T> {
    /// Assertions under natural equality.
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

impl<T> Default for Groups<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug + PartialEq> Groups<T> {
    /// Asserts that the group is `None` or has no elements.
    pub fn assert_none_or_empty(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
    ) -> Result<(), AssertionError> {
        match actual {
            None | Some([]) => Ok(()),
            Some(group) => Err(failures::failure(info, messages::should_be_none_or_empty(group))),
        }
    }

    /// Asserts that the group has no elements.
    pub fn assert_empty(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
    ) -> Result<(), AssertionError> {
        let actual = failures::require_actual(info, actual)?;
        if actual.is_empty() {
            return Ok(());
        }
        Err(failures::failure(info, messages::should_be_empty(actual)))
    }

    /// Asserts that the group has at least one element.
    pub fn assert_not_empty(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
    ) -> Result<(), AssertionError> {
        let actual = failures::require_actual(info, actual)?;
        if !actual.is_empty() {
            return Ok(());
        }
        Err(failures::failure(info, messages::should_not_be_empty()))
    }

    /// Asserts that the group has exactly `expected_size` elements.
    pub fn assert_has_size(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
        expected_size: usize,
    ) -> Result<(), AssertionError> {
        let actual = failures::require_actual(info, actual)?;
        if actual.len() == expected_size {
            return Ok(());
        }
        Err(failures::failure(info, messages::should_have_size(actual, expected_size)))
    }

    /// Asserts that every value appears in the group, in any order.
    ///
    /// Duplicates among `values` collapse to a presence check. The failure
    /// lists the values that could not be found, in their original order.
    ///
    /// # Errors
    ///
    /// A precondition violation if `values` is empty; a failure if the group
    /// is `None` or any value is missing.
    pub fn assert_contains(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
        values: &[T],
    ) -> Result<(), AssertionError> {
        failures::check_values_not_empty(values)?;
        let actual = failures::require_actual(info, actual)?;
        let mut not_found: Vec<&T> = Vec::new();
        for value in values {
            if !self.strategy.group_contains(actual, value)
                && !self.strategy.refs_contain(&not_found, value)
            {
                not_found.push(value);
            }
        }
        if not_found.is_empty() {
            return Ok(());
        }
        Err(failures::failure(
            info,
            messages::should_contain(actual, values, &not_found, &self.strategy),
        ))
    }

    /// Asserts that the group contains the given values and nothing else, in
    /// any order.
    ///
    /// Containment is multiset-aware on the values side: each entry of
    /// `values` accounts for at most one occurrence in the group, so asking
    /// twice for a value the group holds once leaves one ask unmet. Extra
    /// occurrences in the group of a value that was asked for at all are not
    /// unexpected.
    ///
    /// # Errors
    ///
    /// A precondition violation if `values` is empty; a failure if the group
    /// is `None`, a value is missing, or the group holds an element no value
    /// accounts for.
    pub fn assert_contains_only(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
        values: &[T],
    ) -> Result<(), AssertionError> {
        failures::check_values_not_empty(values)?;
        let actual = failures::require_actual(info, actual)?;
        // Working multiset copy of the group; the group itself is never
        // touched.
        let mut remaining: Vec<&T> = actual.iter().collect();
        let mut not_found: Vec<&T> = Vec::new();
        for value in values {
            if self.strategy.refs_contain(&remaining, value) {
                self.strategy.remove_one_occurrence(&mut remaining, value);
            } else if !self.strategy.refs_contain(&not_found, value) {
                not_found.push(value);
            }
        }
        // Leftovers equal to some asked-for value are extra duplicates, not
        // unexpected elements.
        let mut unexpected: Vec<&T> = Vec::new();
        for element in remaining {
            if !self.strategy.group_contains(values, element)
                && !self.strategy.refs_contain(&unexpected, element)
            {
                unexpected.push(element);
            }
        }
        if not_found.is_empty() && unexpected.is_empty() {
            return Ok(());
        }
        Err(failures::failure(
            info,
            messages::should_contain_only(actual, values, &not_found, &unexpected, &self.strategy),
        ))
    }

    /// Asserts that `sequence` appears as a contiguous, order-preserving run
    /// inside the group, anchored nowhere.
    ///
    /// The scan is a single greedy forward pass: once the first element of
    /// `sequence` has matched, any mismatch fails the whole assertion
    /// without restarting at a later candidate start. This mirrors comparing
    /// ordered streams, not substring search.
    ///
    /// # Errors
    ///
    /// A precondition violation if `sequence` is empty; a failure if the
    /// group is `None` or the run is not found, whether the scan broke
    /// mid-sequence or the group ended early.
    pub fn assert_contains_sequence(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
        sequence: &[T],
    ) -> Result<(), AssertionError> {
        failures::check_values_not_empty(sequence)?;
        let actual = failures::require_actual(info, actual)?;
        let mut first_found = false;
        let mut index = 0;
        for element in actual {
            if index >= sequence.len() {
                break;
            }
            if !first_found {
                if !self.strategy.are_equal(element, &sequence[index]) {
                    continue;
                }
                first_found = true;
                index += 1;
                continue;
            }
            if self.strategy.are_equal(element, &sequence[index]) {
                index += 1;
                continue;
            }
            return Err(self.sequence_not_found(info, actual, sequence));
        }
        if !first_found || index < sequence.len() {
            return Err(self.sequence_not_found(info, actual, sequence));
        }
        Ok(())
    }

    fn sequence_not_found(
        &self,
        info: &AssertionInfo,
        actual: &[T],
        sequence: &[T],
    ) -> AssertionError {
        failures::failure(
            info,
            messages::should_contain_sequence(actual, sequence, &self.strategy),
        )
    }

    /// Asserts that the group's first elements are `sequence`, in order.
    ///
    /// # Errors
    ///
    /// A precondition violation if `sequence` is empty; a failure if the
    /// group is `None`, shorter than `sequence`, or starts differently.
    pub fn assert_starts_with(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
        sequence: &[T],
    ) -> Result<(), AssertionError> {
        failures::check_values_not_empty(sequence)?;
        let actual = failures::require_actual(info, actual)?;
        if actual.len() < sequence.len() {
            return Err(self.does_not_start_with(info, actual, sequence));
        }
        for (element, expected) in actual.iter().zip(sequence) {
            if !self.strategy.are_equal(element, expected) {
                return Err(self.does_not_start_with(info, actual, sequence));
            }
        }
        Ok(())
    }

    fn does_not_start_with(
        &self,
        info: &AssertionInfo,
        actual: &[T],
        sequence: &[T],
    ) -> AssertionError {
        failures::failure(info, messages::should_start_with(actual, sequence, &self.strategy))
    }

    /// Asserts that the group's last elements are `sequence`, in order.
    ///
    /// # Errors
    ///
    /// A precondition violation if `sequence` is empty; a failure if the
    /// group is `None`, shorter than `sequence`, or ends differently.
    pub fn assert_ends_with(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
        sequence: &[T],
    ) -> Result<(), AssertionError> {
        failures::check_values_not_empty(sequence)?;
        let actual = failures::require_actual(info, actual)?;
        if actual.len() < sequence.len() {
            return Err(self.does_not_end_with(info, actual, sequence));
        }
        let start = actual.len() - sequence.len();
        for (element, expected) in actual[start..].iter().zip(sequence) {
            if !self.strategy.are_equal(element, expected) {
                return Err(self.does_not_end_with(info, actual, sequence));
            }
        }
        Ok(())
    }

    fn does_not_end_with(
        &self,
        info: &AssertionInfo,
        actual: &[T],
        sequence: &[T],
    ) -> AssertionError {
        failures::failure(info, messages::should_end_with(actual, sequence, &self.strategy))
    }

    /// Asserts that none of the given values appears in the group.
    ///
    /// The failure lists the values that were found, in their original
    /// order.
    pub fn assert_does_not_contain(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
        values: &[T],
    ) -> Result<(), AssertionError> {
        failures::check_values_not_empty(values)?;
        let actual = failures::require_actual(info, actual)?;
        let mut found: Vec<&T> = Vec::new();
        for value in values {
            if self.strategy.group_contains(actual, value)
                && !self.strategy.refs_contain(&found, value)
            {
                found.push(value);
            }
        }
        if found.is_empty() {
            return Ok(());
        }
        Err(failures::failure(
            info,
            messages::should_not_contain(actual, values, &found, &self.strategy),
        ))
    }

    /// Asserts that no element occurs more than once under the active
    /// equality. The failure lists every duplicate, once each.
    pub fn assert_does_not_have_duplicates(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
    ) -> Result<(), AssertionError> {
        let actual = failures::require_actual(info, actual)?;
        let duplicates = self.strategy.duplicates_from(actual);
        if duplicates.is_empty() {
            return Ok(());
        }
        Err(failures::failure(
            info,
            messages::should_not_have_duplicates(actual, &duplicates, &self.strategy),
        ))
    }
}

impl<T: Debug> Groups<Option<T>> {
    /// Asserts that the group contains at least one `None` element.
    ///
    /// `None` membership is structural and identical under every strategy.
    pub fn assert_contains_none(
        &self,
        info: &AssertionInfo,
        actual: Option<&[Option<T>]>,
    ) -> Result<(), AssertionError> {
        let actual = failures::require_actual(info, actual)?;
        if actual.iter().any(Option::is_none) {
            return Ok(());
        }
        Err(failures::failure(info, messages::should_contain_none(actual)))
    }

    /// Asserts that the group contains no `None` element.
    pub fn assert_does_not_contain_none(
        &self,
        info: &AssertionInfo,
        actual: Option<&[Option<T>]>,
    ) -> Result<(), AssertionError> {
        let actual = failures::require_actual(info, actual)?;
        if actual.iter().all(Option::is_some) {
            return Ok(());
        }
        Err(failures::failure(info, messages::should_not_contain_none(actual)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cmp::Ordering;

    use crate::failures::AssertionError;

    fn case_insensitive(a: &&str, b: &&str) -> Ordering {
        a.to_lowercase().cmp(&b.to_lowercase())
    }

    fn info() -> AssertionInfo {
        AssertionInfo::none()
    }

    fn groups() -> Groups<&'static str> {
        Groups::new()
    }

    fn case_insensitive_groups() -> Groups<&'static str> {
        Groups::with_strategy(ComparisonStrategy::comparator(case_insensitive))
    }

    const JEDIS: [&str; 4] = ["Yoda", "Luke", "Leia", "Obi-Wan"];

    #[test]
    fn contains_passes_in_any_order() {
        groups()
            .assert_contains(&info(), Some(&JEDIS), &["Leia", "Yoda"])
            .unwrap();
    }

    #[test]
    fn contains_lists_missing_values_in_their_original_order() {
        let error = groups()
            .assert_contains(&info(), Some(&JEDIS), &["Han", "Luke", "Anakin"])
            .unwrap_err();
        assert!(error.to_string().contains("could not find:<[\"Han\", \"Anakin\"]>"));
    }

    #[test]
    fn contains_rejects_empty_values_before_anything_else() {
        let error = groups().assert_contains(&info(), None, &[]).unwrap_err();
        assert!(matches!(error, AssertionError::Precondition(_)));
    }

    #[test]
    fn contains_fails_when_actual_is_none() {
        let error = groups()
            .assert_contains(&info(), None, &["Yoda"])
            .unwrap_err();
        assert!(matches!(error, AssertionError::ActualIsNone(_)));
    }

    #[test]
    fn contains_uses_the_comparator() {
        case_insensitive_groups()
            .assert_contains(&info(), Some(&JEDIS), &["YODA", "luke"])
            .unwrap();
    }

    #[test]
    fn contains_only_passes_regardless_of_order_and_extra_duplicates() {
        let groups: Groups<&str> = Groups::new();
        groups
            .assert_contains_only(&info(), Some(&["A", "A", "B"]), &["B", "A"])
            .unwrap();
    }

    #[test]
    fn contains_only_counts_asked_for_occurrences() {
        let groups: Groups<&str> = Groups::new();
        let error = groups
            .assert_contains_only(&info(), Some(&["A", "B"]), &["A", "A", "B"])
            .unwrap_err();
        assert!(error.to_string().contains("elements not found:<[\"A\"]>"), "was: {error}");
    }

    #[test]
    fn contains_only_reports_unexpected_elements() {
        let groups: Groups<&str> = Groups::new();
        let error = groups
            .assert_contains_only(&info(), Some(&["A", "B", "C"]), &["A", "B"])
            .unwrap_err();
        assert!(error.to_string().contains("elements not expected:<[\"C\"]>"), "was: {error}");
    }

    #[test]
    fn contains_only_accepts_matching_duplicate_counts() {
        let groups: Groups<&str> = Groups::new();
        groups
            .assert_contains_only(&info(), Some(&["A", "A"]), &["A", "A"])
            .unwrap();
    }

    #[test]
    fn contains_only_is_idempotent() {
        let groups: Groups<&str> = Groups::new();
        let actual = ["Luke", "Yoda", "Leia"];
        for _ in 0..2 {
            groups
                .assert_contains_only(&info(), Some(&actual), &["Yoda", "Leia", "Luke"])
                .unwrap();
        }
    }

    #[test]
    fn contains_only_under_comparator_ignores_case() {
        case_insensitive_groups()
            .assert_contains_only(&info(), Some(&["Luke", "Yoda", "Leia"]), &["LUKE", "yoda", "lEIA"])
            .unwrap();
    }

    #[test]
    fn contains_sequence_passes_mid_group() {
        groups()
            .assert_contains_sequence(&info(), Some(&JEDIS), &["Luke", "Leia"])
            .unwrap();
    }

    #[test]
    fn contains_sequence_passes_on_the_whole_group() {
        groups()
            .assert_contains_sequence(&info(), Some(&JEDIS), &JEDIS)
            .unwrap();
    }

    #[test]
    fn contains_sequence_fails_on_a_broken_run() {
        let error = groups()
            .assert_contains_sequence(&info(), Some(&JEDIS), &["Luke", "Han"])
            .unwrap_err();
        assert!(error.to_string().contains("to contain sequence:<[\"Luke\", \"Han\"]>"));
    }

    #[test]
    fn contains_sequence_fails_when_the_group_ends_early() {
        let error = groups()
            .assert_contains_sequence(&info(), Some(&JEDIS), &["Leia", "Obi-Wan", "Han"])
            .unwrap_err();
        assert!(matches!(error, AssertionError::Failed(_)));
    }

    #[test]
    fn contains_sequence_does_not_restart_after_a_partial_match() {
        // The run [A, A, B] is present, but the scan latches onto the first
        // A and fails on the second; it does not try the next start.
        let error = groups()
            .assert_contains_sequence(&info(), Some(&["A", "A", "B"]), &["A", "B"])
            .unwrap_err();
        assert!(matches!(error, AssertionError::Failed(_)));
    }

    #[test]
    fn starts_with_is_anchored_at_the_front() {
        groups()
            .assert_starts_with(&info(), Some(&JEDIS), &["Yoda", "Luke"])
            .unwrap();
        let error = groups()
            .assert_ends_with(&info(), Some(&JEDIS), &["Yoda", "Luke"])
            .unwrap_err();
        assert!(error.to_string().contains("to end with"));
    }

    #[test]
    fn starts_with_fails_when_the_sequence_is_longer_than_the_group() {
        let error = groups()
            .assert_starts_with(&info(), Some(&["Yoda"]), &["Yoda", "Luke"])
            .unwrap_err();
        assert!(error.to_string().contains("to start with"));
    }

    #[test]
    fn ends_with_is_anchored_at_the_back() {
        groups()
            .assert_ends_with(&info(), Some(&JEDIS), &["Leia", "Obi-Wan"])
            .unwrap();
    }

    #[test]
    fn does_not_contain_reports_the_intersection() {
        let error = groups()
            .assert_does_not_contain(&info(), Some(&JEDIS), &["Han", "Luke", "Leia"])
            .unwrap_err();
        assert!(error.to_string().contains("but found:<[\"Luke\", \"Leia\"]>"));
    }

    #[test]
    fn does_not_contain_passes_on_disjoint_values() {
        groups()
            .assert_does_not_contain(&info(), Some(&JEDIS), &["Han", "Anakin"])
            .unwrap();
    }

    #[test]
    fn duplicates_fail_with_the_full_duplicate_set() {
        let error = groups()
            .assert_does_not_have_duplicates(&info(), Some(&["Luke", "Yoda", "Luke", "Yoda"]))
            .unwrap_err();
        assert!(error.to_string().contains("found duplicate(s):<[\"Luke\", \"Yoda\"]>"));
    }

    #[test]
    fn duplicates_respect_the_comparator() {
        let error = case_insensitive_groups()
            .assert_does_not_have_duplicates(&info(), Some(&["Luke", "LUKE"]))
            .unwrap_err();
        assert!(error.to_string().contains("according to 'case_insensitive' comparator"));
    }

    #[test]
    fn cardinality_checks() {
        groups().assert_empty(&info(), Some(&[])).unwrap();
        groups().assert_not_empty(&info(), Some(&JEDIS)).unwrap();
        groups().assert_has_size(&info(), Some(&JEDIS), 4).unwrap();
        let error = groups().assert_has_size(&info(), Some(&JEDIS), 2).unwrap_err();
        assert!(error.to_string().contains("expected size:<2> but was:<4>"));
    }

    #[test]
    fn none_or_empty_tolerates_a_missing_group() {
        groups().assert_none_or_empty(&info(), None).unwrap();
        groups().assert_none_or_empty(&info(), Some(&[])).unwrap();
        let error = groups().assert_none_or_empty(&info(), Some(&JEDIS)).unwrap_err();
        assert!(error.to_string().contains("expecting None or empty"));
    }

    #[test]
    fn empty_still_requires_a_present_group() {
        let error = groups().assert_empty(&info(), None).unwrap_err();
        assert!(matches!(error, AssertionError::ActualIsNone(_)));
    }

    #[test]
    fn contains_none_is_structural() {
        let groups: Groups<Option<&str>> = Groups::new();
        let actual = [Some("Yoda"), None];
        groups.assert_contains_none(&info(), Some(&actual)).unwrap();
        let error = groups
            .assert_does_not_contain_none(&info(), Some(&actual))
            .unwrap_err();
        assert!(error.to_string().contains("not to contain a None element"));
    }

    #[test]
    fn does_not_contain_none_passes_on_all_present() {
        let groups: Groups<Option<&str>> = Groups::new();
        let actual = [Some("Yoda"), Some("Luke")];
        groups.assert_does_not_contain_none(&info(), Some(&actual)).unwrap();
        let error = groups.assert_contains_none(&info(), Some(&actual)).unwrap_err();
        assert!(error.to_string().contains("to contain a None element"));
    }

    #[test]
    fn failure_messages_carry_the_custom_description() {
        let error = groups()
            .assert_contains(&AssertionInfo::described_as("jedi roster"), Some(&JEDIS), &["Han"])
            .unwrap_err();
        assert!(error.to_string().starts_with("[jedi roster] "));
    }
}
