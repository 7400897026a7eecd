//! Failure construction for equality mismatches.
//!
//! The built message distinguishes two values whose printable forms collide
//! (each side is shown with its type and identity), states the comparator
//! when one was used, and otherwise probes an optional rich
//! comparison-failure factory before falling back to the plain template.

use std::fmt::Debug;

use crate::failures::{self, AssertionError, ComparisonFailureFactory};
use crate::info::AssertionInfo;
use crate::strategy::{simple_type_name, ComparisonStrategy};

/// Pending diagnostic for a detected equality mismatch.
///
/// Printable forms are captured at construction;
/// [`into_error`](Self::into_error) picks the template.
#[derive(Debug)]
pub struct ShouldBeEqual {
    actual: String,
    expected: String,
    actual_detailed: String,
    expected_detailed: String,
    comparator: Option<String>,
}

/// Builds the diagnostic for `actual` that was expected to equal `expected`.
pub fn should_be_equal<T: Debug>(
    actual: &T,
    expected: &T,
    strategy: &ComparisonStrategy<T>,
) -> ShouldBeEqual {
    ShouldBeEqual {
        actual: format!("{actual:?}"),
        expected: format!("{expected:?}"),
        actual_detailed: detailed_repr(actual),
        expected_detailed: detailed_repr(expected),
        comparator: strategy.comparator_name().map(str::to_string),
    }
}

/// `repr (Type@address)`: still tells two values apart when their plain
/// representations collide.
fn detailed_repr<T: Debug>(value: &T) -> String {
    format!(
        "{value:?} ({}@{:p})",
        simple_type_name(std::any::type_name::<T>()),
        value as *const T
    )
}

impl ShouldBeEqual {
    /// Builds the failure using the default comparison-failure factory.
    pub fn into_error(self, info: &AssertionInfo) -> AssertionError {
        self.into_error_with(info, failures::comparison_failure)
    }

    /// Builds the failure, probing `factory` for a rich comparison failure.
    ///
    /// The factory is only consulted for plain mismatches: colliding
    /// representations and comparator-based comparisons always use this
    /// builder's own templates, since the rich object cannot convey either.
    /// A factory answering `None` falls back to the plain template.
    pub fn into_error_with(
        self,
        info: &AssertionInfo,
        factory: ComparisonFailureFactory,
    ) -> AssertionError {
        if self.actual == self.expected {
            // The plain forms are indistinguishable (e.g. values of different
            // width printing the same); show type and identity on both sides.
            let message = match &self.comparator {
                Some(name) => {
                    comparator_message(&self.actual_detailed, &self.expected_detailed, name)
                }
                None => plain_message(&self.expected_detailed, &self.actual_detailed),
            };
            return failures::failure(info, message);
        }
        if let Some(name) = &self.comparator {
            return failures::failure(info, comparator_message(&self.actual, &self.expected, name));
        }
        if let Some(error) = factory(info.description(), &self.expected, &self.actual) {
            return error;
        }
        failures::failure(info, plain_message(&self.expected, &self.actual))
    }
}

fn plain_message(expected: &str, actual: &str) -> String {
    format!("expected:<{expected}> but was:<{actual}>")
}

fn comparator_message(actual: &str, expected: &str, comparator: &str) -> String {
    format!(
        "expecting actual:<{actual}> to be equal to:<{expected}> according to '{comparator}' comparator but was not"
    )
}
