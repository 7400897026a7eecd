//! Comparison strategies: how two values are decided equal or ordered.
//!
//! Every assertion runs against one [`ComparisonStrategy`], selected when the
//! assertion object is built: either the values' own equality and ordering,
//! or a caller-supplied comparator function. A comparator induces equality
//! through `compare(a, b) == Ordering::Equal`, so equality, containment and
//! duplicate detection all agree with the supplied ordering.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::order::TotalOrder;

/// A caller-supplied ordering function, shareable across assertions.
pub type ComparatorFn<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Decides equality, ordering and containment for values of type `T`.
///
/// Strategies are immutable and cheap to clone; one instance is safely
/// shared by any number of concurrent assertions.
pub enum ComparisonStrategy<T> {
    /// The values' own `PartialEq` / [`TotalOrder`].
    Natural,
    /// Every comparison delegates to a named comparator function.
    Comparator(ComparatorStrategy<T>),
}

/// The comparator-based variant of [`ComparisonStrategy`].
pub struct ComparatorStrategy<T> {
    name: String,
    cmp: ComparatorFn<T>,
}

impl<T> ComparisonStrategy<T> {
    /// The strategy using the values' own equality and ordering.
    pub fn natural() -> Self {
        Self::Natural
    }

    /// A strategy delegating to `cmp`, displayed under the function's name.
    ///
    /// The display name is the last path segment of the function's type
    /// name. Closures have none and are displayed as `anonymous function`;
    /// use [`comparator_named`](Self::comparator_named) to attach one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::ComparisonStrategy;
    ///
    /// fn case_insensitive(a: &&str, b: &&str) -> std::cmp::Ordering {
    ///     a.to_lowercase().cmp(&b.to_lowercase())
    /// }
    ///
    /// let strategy = ComparisonStrategy::comparator(case_insensitive);
    /// assert_eq!(strategy.comparator_name(), Some("case_insensitive"));
    /// assert!(strategy.are_equal(&"Yoda", &"YODA"));
    /// ```
    pub fn comparator<F>(cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        let name = display_name_of::<F>();
        Self::Comparator(ComparatorStrategy {
            name,
            cmp: Arc::new(cmp),
        })
    }

    /// A strategy delegating to `cmp`, displayed under the given name.
    pub fn comparator_named<F>(name: impl Into<String>, cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::Comparator(ComparatorStrategy {
            name: normalize_name(name.into()),
            cmp: Arc::new(cmp),
        })
    }

    /// The comparator's display name, or `None` for the natural strategy.
    pub fn comparator_name(&self) -> Option<&str> {
        match self {
            Self::Natural => None,
            Self::Comparator(comparator) => Some(&comparator.name),
        }
    }

    /// Whether this strategy delegates to a comparator.
    pub fn is_comparator_based(&self) -> bool {
        matches!(self, Self::Comparator(_))
    }
}

impl<T: PartialEq> ComparisonStrategy<T> {
    /// Whether `a` and `b` are equal under this strategy.
    pub fn are_equal(&self, a: &T, b: &T) -> bool {
        match self {
            Self::Natural => a == b,
            Self::Comparator(comparator) => (comparator.cmp)(a, b) == Ordering::Equal,
        }
    }

    /// Equality over optional values.
    ///
    /// `None` is equal only to `None`; the comparator is never invoked when
    /// either side is absent.
    pub fn are_equal_opt(&self, a: Option<&T>, b: Option<&T>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.are_equal(a, b),
            _ => false,
        }
    }

    /// Whether `group` has an element equal to `value` under this strategy.
    ///
    /// Always an element-wise scan: a container's own membership test may
    /// use a different equality than an active comparator.
    pub fn group_contains(&self, group: &[T], value: &T) -> bool {
        group.iter().any(|element| self.are_equal(element, value))
    }

    /// Elements occurring more than once under this strategy's equality, in
    /// first-seen order, each reported once.
    pub fn duplicates_from<'a>(&self, group: &'a [T]) -> Vec<&'a T> {
        let mut seen: Vec<&T> = Vec::new();
        let mut duplicates: Vec<&T> = Vec::new();
        for element in group {
            if self.refs_contain(&seen, element) {
                if !self.refs_contain(&duplicates, element) {
                    duplicates.push(element);
                }
            } else {
                seen.push(element);
            }
        }
        duplicates
    }

    /// Membership scan over a working copy of references.
    pub(crate) fn refs_contain(&self, items: &[&T], value: &T) -> bool {
        items.iter().any(|element| self.are_equal(element, value))
    }

    /// Removes one element equal to `value` from the working copy, if any.
    pub(crate) fn remove_one_occurrence(&self, items: &mut Vec<&T>, value: &T) {
        if let Some(position) = items.iter().position(|element| self.are_equal(element, value)) {
            items.remove(position);
        }
    }
}

impl<T: TotalOrder> ComparisonStrategy<T> {
    /// Orders `a` against `b` under this strategy.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        match self {
            Self::Natural => a.total_cmp(b),
            Self::Comparator(comparator) => (comparator.cmp)(a, b),
        }
    }

    /// Strict `a < b` under this strategy.
    pub fn is_less_than(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Strict `a > b` under this strategy.
    pub fn is_greater_than(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

impl<T> Default for ComparisonStrategy<T> {
    fn default() -> Self {
        Self::Natural
    }
}

impl<T> Clone for ComparisonStrategy<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Natural => Self::Natural,
            Self::Comparator(comparator) => Self::Comparator(comparator.clone()),
        }
    }
}

impl<T> Clone for ComparatorStrategy<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            cmp: Arc::clone(&self.cmp),
        }
    }
}

impl<T> fmt::Debug for ComparisonStrategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Natural => f.write_str("Natural"),
            Self::Comparator(comparator) => f
                .debug_struct("Comparator")
                .field("name", &comparator.name)
                .finish_non_exhaustive(),
        }
    }
}

/// Last path segment of a type name, with generic arguments stripped.
pub(crate) fn simple_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

fn display_name_of<F>() -> String {
    normalize_name(simple_type_name(std::any::type_name::<F>()).to_string())
}

fn normalize_name(name: String) -> String {
    if name.is_empty() || name.contains("{{closure}}") {
        "anonymous function".to_string()
    } else {
        name
    }
}
