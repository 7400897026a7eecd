//! Numeric tolerance for approximate real-number equality.

use crate::order::RealNumber;

/// A tolerance around an expected real number: a value plus a strictness
/// flag. Independent of any comparison strategy.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, offset};
///
/// assert_that(&6.0).is_close_to(&8.0, offset(2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset<T> {
    value: T,
    strict: bool,
}

impl<T: RealNumber> Offset<T> {
    /// A non-strict tolerance: a difference of exactly `value` still passes.
    pub fn new(value: T) -> Self {
        Self {
            value,
            strict: false,
        }
    }

    /// A strict tolerance: the difference must be strictly below `value`.
    pub fn strict(value: T) -> Self {
        Self {
            value,
            strict: true,
        }
    }

    /// The tolerance value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Whether the tolerance is strict.
    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

/// Shorthand for [`Offset::new`].
pub fn offset<T: RealNumber>(value: T) -> Offset<T> {
    Offset::new(value)
}

/// Shorthand for [`Offset::strict`].
pub fn strict_offset<T: RealNumber>(value: T) -> Offset<T> {
    Offset::strict(value)
}
