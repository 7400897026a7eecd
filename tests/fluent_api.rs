//! End-to-end scenarios through the public API: the fluent layer for the
//! passing paths, the engine types where the failure itself is under test.

use std::cmp::Ordering;
use std::fmt;

use attest::{
    assert_group, assert_that, offset, strict_offset, AssertionError, AssertionInfo, Comparables,
    ComparisonStrategy, Groups, Numbers,
};

fn case_insensitive(a: &&str, b: &&str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn info() -> AssertionInfo {
    AssertionInfo::none()
}

// ---------------------------------------------------------------------------
// Containment and sequences
// ---------------------------------------------------------------------------

#[test]
fn contains_sequence_in_the_middle_of_the_group() {
    assert_group(&["Yoda", "Luke", "Leia", "Obi-Wan"]).contains_sequence(&["Luke", "Leia"]);
}

#[test]
fn contains_sequence_rejects_a_broken_run() {
    let groups: Groups<&str> = Groups::new();
    let error = groups
        .assert_contains_sequence(
            &info(),
            Some(&["Yoda", "Luke", "Leia", "Obi-Wan"]),
            &["Luke", "Han"],
        )
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "expecting:<[\"Yoda\", \"Luke\", \"Leia\", \"Obi-Wan\"]> to contain sequence:<[\"Luke\", \"Han\"]>"
    );
}

#[test]
fn a_prefix_is_not_a_suffix() {
    assert_group(&["Yoda", "Luke", "Leia"]).starts_with(&["Yoda", "Luke"]);
    let groups: Groups<&str> = Groups::new();
    let error = groups
        .assert_ends_with(&info(), Some(&["Yoda", "Luke", "Leia"]), &["Yoda", "Luke"])
        .unwrap_err();
    assert!(error.to_string().contains("to end with"));
}

#[test]
fn contains_only_tolerates_extra_duplicates_of_expected_values() {
    assert_group(&["A", "A", "B"]).contains_only(&["A", "B"]);
}

#[test]
fn contains_only_reports_an_unmet_duplicate_ask() {
    let groups: Groups<&str> = Groups::new();
    let error = groups
        .assert_contains_only(&info(), Some(&["A", "B"]), &["A", "A", "B"])
        .unwrap_err();
    assert!(error.to_string().contains("elements not found:<[\"A\"]>"));
}

#[test]
fn contains_only_under_a_case_insensitive_comparator() {
    assert_group(&["Luke", "Yoda", "Leia"])
        .using_comparator(case_insensitive)
        .contains_only(&["LUKE", "yoda", "lEIA"]);
}

#[test]
fn group_assertions_leave_the_group_untouched() {
    let actual = vec!["Luke".to_string(), "Luke".to_string(), "Yoda".to_string()];
    let groups: Groups<String> = Groups::new();
    groups
        .assert_contains_only(&info(), Some(&actual), &["Yoda".to_string(), "Luke".to_string()])
        .unwrap();
    assert_eq!(actual.len(), 3);
    groups
        .assert_contains_only(&info(), Some(&actual), &["Yoda".to_string(), "Luke".to_string()])
        .unwrap();
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn comparator_equal_values_pass_both_non_strict_forms() {
    assert_that(&"luke")
        .using_comparator(case_insensitive)
        .is_less_than_or_equal_to(&"LUKE")
        .is_greater_than_or_equal_to(&"LUKE");
}

#[test]
fn ordering_failures_name_the_comparator() {
    let comparables: Comparables<&str> =
        Comparables::with_strategy(ComparisonStrategy::comparator(case_insensitive));
    let error = comparables
        .assert_greater_than(&info(), Some(&"luke"), &"YODA")
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "expecting:<\"luke\"> to be greater than:<\"YODA\"> according to 'case_insensitive' comparator"
    );
}

// ---------------------------------------------------------------------------
// Equality diagnostics
// ---------------------------------------------------------------------------

#[derive(PartialEq)]
struct Build {
    number: u32,
    variant: u32,
}

// Prints the build number only, so distinct builds can collide.
impl fmt::Debug for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}

#[test]
fn colliding_representations_show_type_and_identity() {
    let actual = Build {
        number: 42,
        variant: 1,
    };
    let expected = Build {
        number: 42,
        variant: 2,
    };
    let comparables: Comparables<Build> = Comparables::new();
    let error = comparables
        .assert_equal(&info(), Some(&actual), &expected)
        .unwrap_err();
    let message = error.to_string();
    assert_eq!(message.matches("(Build@0x").count(), 2, "message was: {message}");
}

#[test]
fn distinct_representations_stay_plain() {
    let comparables: Comparables<i32> = Comparables::new();
    let error = comparables.assert_equal(&info(), Some(&1), &2).unwrap_err();
    assert!(error.to_string().starts_with("expected:<2> but was:<1>"));
    assert!(!error.to_string().contains("@0x"));
}

#[cfg(feature = "diff")]
#[test]
fn plain_mismatches_carry_printable_forms_for_diffing() {
    let comparables: Comparables<&str> = Comparables::new();
    let error = comparables
        .assert_equal(&info(), Some(&"Luke"), &"Yoda")
        .unwrap_err();
    match error {
        AssertionError::ComparisonFailed {
            expected, actual, ..
        } => {
            assert_eq!(expected, "\"Yoda\"");
            assert_eq!(actual, "\"Luke\"");
        }
        other => panic!("expected a comparison failure, got: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

#[test]
fn offset_equality_from_the_fluent_layer() {
    assert_that(&6.0).is_close_to(&8.0, offset(2.0));
    assert_that(&6.0).is_close_to(&8.0, strict_offset(2.1));
}

#[test]
fn offset_equality_boundaries() {
    let numbers: Numbers<f64> = Numbers::new();
    assert!(numbers
        .assert_equal_with_offset(&info(), Some(&6.0), &8.0, &offset(1.9))
        .is_err());
    assert!(numbers
        .assert_equal_with_offset(&info(), Some(&6.0), &8.0, &strict_offset(2.0))
        .is_err());
}

#[test]
fn invalid_offset_outranks_the_values_under_test() {
    let numbers: Numbers<f64> = Numbers::new();
    let error = numbers
        .assert_equal_with_offset(&info(), None, &8.0, &offset(-0.1))
        .unwrap_err();
    assert!(matches!(error, AssertionError::Precondition(_)));
}

#[test]
fn nan_is_asserted_through_the_total_order() {
    assert_that(&f32::NAN).is_nan();
    assert_that(&f64::NAN).is_nan();
    assert_that(&0.0f64).is_not_nan();
}

// ---------------------------------------------------------------------------
// Preconditions and missing subjects
// ---------------------------------------------------------------------------

#[test]
fn empty_values_fail_before_the_missing_subject_is_noticed() {
    let groups: Groups<&str> = Groups::new();
    let error = groups.assert_contains(&info(), None, &[]).unwrap_err();
    assert!(matches!(error, AssertionError::Precondition(_)));
    let error = groups.assert_contains(&info(), None, &["Yoda"]).unwrap_err();
    assert!(matches!(error, AssertionError::ActualIsNone(_)));
}

#[test]
fn descriptions_flow_through_to_failures() {
    let comparables: Comparables<i32> = Comparables::new();
    let error = comparables
        .assert_less_than(&AssertionInfo::described_as("Test"), Some(&2), &1)
        .unwrap_err();
    assert_eq!(error.to_string(), "[Test] expecting:<2> to be less than:<1>");
}
