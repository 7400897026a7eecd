//! Assertion context passed through to failure messages.

/// Opaque context for one assertion: an optional description shown as a
/// `[description]` prefix on failure messages.
///
/// The comparison logic never inspects this; it flows untouched from the
/// assertion entry point to the message builder.
#[derive(Debug, Clone, Default)]
pub struct AssertionInfo {
    description: Option<String>,
}

impl AssertionInfo {
    /// Context with no description.
    pub fn none() -> Self {
        Self::default()
    }

    /// Context carrying a custom failure description.
    pub fn described_as(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
        }
    }

    /// The custom description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Prefixes `message` with `[description] ` when one is set.
    pub(crate) fn decorate(&self, message: &str) -> String {
        match &self.description {
            Some(description) => format!("[{description}] {message}"),
            None => message.to_string(),
        }
    }
}
