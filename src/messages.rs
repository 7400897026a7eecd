//! Failure message factories shared by the assertion engines.
//!
//! One function per failure shape. Factories append the comparator clause
//! when the active strategy is comparator-based, so a failure reads the same
//! whether equality is natural or customized. Listings preserve the input's
//! order, keeping messages deterministic for identical inputs.

use std::fmt::Debug;

use crate::offset::Offset;
use crate::order::RealNumber;
use crate::strategy::ComparisonStrategy;

pub(crate) fn comparator_clause<T>(strategy: &ComparisonStrategy<T>) -> String {
    match strategy.comparator_name() {
        Some(name) => format!(" according to '{name}' comparator"),
        None => String::new(),
    }
}

pub(crate) fn should_contain<T: Debug>(
    actual: &[T],
    values: &[T],
    not_found: &[&T],
    strategy: &ComparisonStrategy<T>,
) -> String {
    format!(
        "expecting:<{actual:?}> to contain:<{values:?}> but could not find:<{not_found:?}>{}",
        comparator_clause(strategy)
    )
}

pub(crate) fn should_contain_only<T: Debug>(
    actual: &[T],
    values: &[T],
    not_found: &[&T],
    unexpected: &[&T],
    strategy: &ComparisonStrategy<T>,
) -> String {
    format!(
        "expecting:<{actual:?}> to contain only:<{values:?}>; elements not found:<{not_found:?}> and elements not expected:<{unexpected:?}>{}",
        comparator_clause(strategy)
    )
}

pub(crate) fn should_contain_sequence<T: Debug>(
    actual: &[T],
    sequence: &[T],
    strategy: &ComparisonStrategy<T>,
) -> String {
    format!(
        "expecting:<{actual:?}> to contain sequence:<{sequence:?}>{}",
        comparator_clause(strategy)
    )
}

pub(crate) fn should_start_with<T: Debug>(
    actual: &[T],
    sequence: &[T],
    strategy: &ComparisonStrategy<T>,
) -> String {
    format!(
        "expecting:<{actual:?}> to start with:<{sequence:?}>{}",
        comparator_clause(strategy)
    )
}

pub(crate) fn should_end_with<T: Debug>(
    actual: &[T],
    sequence: &[T],
    strategy: &ComparisonStrategy<T>,
) -> String {
    format!(
        "expecting:<{actual:?}> to end with:<{sequence:?}>{}",
        comparator_clause(strategy)
    )
}

pub(crate) fn should_not_contain<T: Debug>(
    actual: &[T],
    values: &[T],
    found: &[&T],
    strategy: &ComparisonStrategy<T>,
) -> String {
    format!(
        "expecting:<{actual:?}> not to contain:<{values:?}> but found:<{found:?}>{}",
        comparator_clause(strategy)
    )
}

pub(crate) fn should_not_have_duplicates<T: Debug>(
    actual: &[T],
    duplicates: &[&T],
    strategy: &ComparisonStrategy<T>,
) -> String {
    format!(
        "found duplicate(s):<{duplicates:?}> in:<{actual:?}>{}",
        comparator_clause(strategy)
    )
}

pub(crate) fn should_be_empty<T: Debug>(actual: &[T]) -> String {
    format!("expecting empty but was:<{actual:?}>")
}

pub(crate) fn should_not_be_empty() -> String {
    "expecting actual not to be empty".to_string()
}

pub(crate) fn should_be_none_or_empty<T: Debug>(actual: &[T]) -> String {
    format!("expecting None or empty but was:<{actual:?}>")
}

pub(crate) fn should_have_size<T: Debug>(actual: &[T], expected_size: usize) -> String {
    format!(
        "expected size:<{expected_size}> but was:<{}> in:<{actual:?}>",
        actual.len()
    )
}

pub(crate) fn should_contain_none<T: Debug>(actual: &[Option<T>]) -> String {
    format!("expecting:<{actual:?}> to contain a None element")
}

pub(crate) fn should_not_contain_none<T: Debug>(actual: &[Option<T>]) -> String {
    format!("expecting:<{actual:?}> not to contain a None element")
}

pub(crate) fn should_not_be_equal<T: Debug>(
    actual: &T,
    other: &T,
    strategy: &ComparisonStrategy<T>,
) -> String {
    format!(
        "expecting:<{actual:?}> not to be equal to:<{other:?}>{}",
        comparator_clause(strategy)
    )
}

pub(crate) fn should_be_less<T: Debug>(
    actual: &T,
    other: &T,
    strategy: &ComparisonStrategy<T>,
) -> String {
    format!(
        "expecting:<{actual:?}> to be less than:<{other:?}>{}",
        comparator_clause(strategy)
    )
}

pub(crate) fn should_be_less_or_equal<T: Debug>(
    actual: &T,
    other: &T,
    strategy: &ComparisonStrategy<T>,
) -> String {
    format!(
        "expecting:<{actual:?}> to be less than or equal to:<{other:?}>{}",
        comparator_clause(strategy)
    )
}

pub(crate) fn should_be_greater<T: Debug>(
    actual: &T,
    other: &T,
    strategy: &ComparisonStrategy<T>,
) -> String {
    format!(
        "expecting:<{actual:?}> to be greater than:<{other:?}>{}",
        comparator_clause(strategy)
    )
}

pub(crate) fn should_be_greater_or_equal<T: Debug>(
    actual: &T,
    other: &T,
    strategy: &ComparisonStrategy<T>,
) -> String {
    format!(
        "expecting:<{actual:?}> to be greater than or equal to:<{other:?}>{}",
        comparator_clause(strategy)
    )
}

pub(crate) fn should_be_equal_within_offset<T: Debug + RealNumber>(
    actual: &T,
    expected: &T,
    offset: &Offset<T>,
) -> String {
    let qualifier = if offset.is_strict() { "strictly " } else { "" };
    format!(
        "expecting:<{actual:?}> to be equal to:<{expected:?}> {qualifier}within offset:<{:?}>",
        offset.value()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cmp::Ordering;

    fn case_insensitive(a: &&str, b: &&str) -> Ordering {
        a.to_lowercase().cmp(&b.to_lowercase())
    }

    #[test]
    fn contain_message_lists_the_missing_values() {
        let message = should_contain(
            &["Yoda", "Luke"],
            &["Han", "Leia"],
            &[&"Han", &"Leia"],
            &ComparisonStrategy::natural(),
        );
        assert_eq!(
            message,
            "expecting:<[\"Yoda\", \"Luke\"]> to contain:<[\"Han\", \"Leia\"]> but could not find:<[\"Han\", \"Leia\"]>"
        );
    }

    #[test]
    fn comparator_strategies_append_the_comparator_clause() {
        let message = should_start_with(
            &["Yoda", "Luke"],
            &["Han", "Leia"],
            &ComparisonStrategy::comparator(case_insensitive),
        );
        assert_eq!(
            message,
            "expecting:<[\"Yoda\", \"Luke\"]> to start with:<[\"Han\", \"Leia\"]> according to 'case_insensitive' comparator"
        );
    }

    #[test]
    fn size_message_reports_both_sizes() {
        let message = should_have_size(&[1, 2, 3], 2);
        assert_eq!(message, "expected size:<2> but was:<3> in:<[1, 2, 3]>");
    }

    #[test]
    fn offset_message_marks_strict_tolerances() {
        let strict = should_be_equal_within_offset(&6.0, &8.0, &crate::offset::strict_offset(2.0));
        assert!(strict.contains("strictly within offset:<2.0>"));
        let plain = should_be_equal_within_offset(&6.0, &8.0, &crate::offset::offset(2.0));
        assert!(plain.contains("> within offset:<2.0>"));
    }
}
