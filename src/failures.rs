//! Failure construction: the error taxonomy and the optional rich-diff
//! probe.
//!
//! Every assertion either passes silently or produces exactly one
//! [`AssertionError`]. Precondition violations are a distinct kind from
//! assertion failures so callers can tell a misused assertion from a
//! failing test.

use crate::info::AssertionInfo;

/// Outcome of a failed or misused assertion.
#[derive(Debug, thiserror::Error)]
pub enum AssertionError {
    /// The assertion predicate evaluated false.
    #[error("{0}")]
    Failed(String),

    /// An equality mismatch carrying the printable forms, for consumers
    /// that render diffs.
    #[error("{message}")]
    ComparisonFailed {
        /// The rendered failure message, diff included.
        message: String,
        /// Printable form of the expected value.
        expected: String,
        /// Printable form of the actual value.
        actual: String,
    },

    /// The subject under test was `None` where a value is required.
    #[error("{0}")]
    ActualIsNone(String),

    /// Invalid arguments to the assertion call itself, detected before any
    /// comparison work.
    #[error("{0}")]
    Precondition(String),
}

impl AssertionError {
    /// Whether this is a test failure, as opposed to a misuse of the
    /// assertion API.
    pub fn is_assertion_failure(&self) -> bool {
        !matches!(self, Self::Precondition(_))
    }
}

/// Tries to build a rich comparison failure from printable forms.
///
/// Returning `None` means the integration is unavailable; the caller falls
/// back to the plain message. A factory must not panic.
pub type ComparisonFailureFactory =
    fn(description: Option<&str>, expected: &str, actual: &str) -> Option<AssertionError>;

/// The standard assertion failure for `message` under `info`.
pub(crate) fn failure(info: &AssertionInfo, message: String) -> AssertionError {
    AssertionError::Failed(info.decorate(&message))
}

/// The failure raised when the subject under test is `None`.
pub(crate) fn actual_is_none(info: &AssertionInfo) -> AssertionError {
    AssertionError::ActualIsNone(info.decorate("expecting actual not to be None"))
}

/// Unwraps the subject under test, failing fast when it is absent.
pub(crate) fn require_actual<'a, A: ?Sized>(
    info: &AssertionInfo,
    actual: Option<&'a A>,
) -> Result<&'a A, AssertionError> {
    actual.ok_or_else(|| actual_is_none(info))
}

/// Precondition: a values/sequence argument must have at least one element.
pub(crate) fn check_values_not_empty<T>(values: &[T]) -> Result<(), AssertionError> {
    if values.is_empty() {
        return Err(AssertionError::Precondition(
            "the values to look for should not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Precondition: a tolerance must be a non-negative, non-NaN number.
pub(crate) fn invalid_offset(value: String) -> AssertionError {
    AssertionError::Precondition(format!(
        "the offset value should be a non-negative number but was:<{value}>"
    ))
}

/// Default [`ComparisonFailureFactory`]: renders a line diff of the two
/// printable forms when the `diff` feature is enabled, and reports the
/// integration as unavailable otherwise.
pub fn comparison_failure(
    description: Option<&str>,
    expected: &str,
    actual: &str,
) -> Option<AssertionError> {
    let message = render_comparison(description, expected, actual)?;
    Some(AssertionError::ComparisonFailed {
        message,
        expected: expected.to_string(),
        actual: actual.to_string(),
    })
}

#[cfg(feature = "diff")]
fn render_comparison(description: Option<&str>, expected: &str, actual: &str) -> Option<String> {
    use similar::{ChangeTag, TextDiff};

    let mut message = match description {
        Some(description) => format!("[{description}] expected:<{expected}> but was:<{actual}>"),
        None => format!("expected:<{expected}> but was:<{actual}>"),
    };
    let diff = TextDiff::from_lines(expected, actual);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => '-',
            ChangeTag::Insert => '+',
            ChangeTag::Equal => ' ',
        };
        message.push_str(&format!("\n{sign} {}", change.value().trim_end_matches('\n')));
    }
    Some(message)
}

#[cfg(not(feature = "diff"))]
fn render_comparison(_description: Option<&str>, _expected: &str, _actual: &str) -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precondition_is_not_an_assertion_failure() {
        let error = check_values_not_empty::<i32>(&[]).unwrap_err();
        assert!(!error.is_assertion_failure());
        assert!(error.to_string().contains("should not be empty"));
    }

    #[test]
    fn actual_is_none_is_an_assertion_failure() {
        let error = actual_is_none(&AssertionInfo::none());
        assert!(error.is_assertion_failure());
        assert_eq!(error.to_string(), "expecting actual not to be None");
    }

    #[test]
    fn require_actual_passes_the_subject_through() {
        let subject = 42;
        let actual = require_actual(&AssertionInfo::none(), Some(&subject)).unwrap();
        assert_eq!(*actual, 42);
    }

    #[cfg(feature = "diff")]
    #[test]
    fn default_factory_builds_a_comparison_failure() {
        let error = comparison_failure(Some("Test"), "\"Yoda\"", "\"Luke\"").unwrap();
        match error {
            AssertionError::ComparisonFailed {
                message,
                expected,
                actual,
            } => {
                assert!(message.starts_with("[Test] expected:<\"Yoda\"> but was:<\"Luke\">"));
                assert!(message.contains("- \"Yoda\""));
                assert!(message.contains("+ \"Luke\""));
                assert_eq!(expected, "\"Yoda\"");
                assert_eq!(actual, "\"Luke\"");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}
