//! Canonical conversion of field values to display strings.
//!
//! Conversion is total: every [`Value`] produces a string and nothing in
//! here returns an error or panics. The first matching rule wins:
//!
//! 1. missing sentinel → the configured missing label (`"N/A"`)
//! 2. display-string capability
//! 3. symbolic-name capability
//! 4. custom-render capability
//! 5. primitives → their literal form
//! 6. the value's `Debug` rendering, or its type name if that fails
//!
//! A capability that returns an error is skipped and the next rule is
//! tried.

use std::fmt::Write;

use quill_core::traits::{CapabilityResult, ReportValue};

use crate::value::Value;

/// Default text of the missing-value sentinel.
pub const MISSING_VALUE: &str = "N/A";

/// Converts values to display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueStringifier {
    missing_value: String,
}

impl Default for ValueStringifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueStringifier {
    /// Creates a stringifier rendering missing values as `"N/A"`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            missing_value: MISSING_VALUE.to_string(),
        }
    }

    /// Sets the text rendered for missing values.
    #[must_use]
    pub fn with_missing_value(mut self, missing_value: impl Into<String>) -> Self {
        self.missing_value = missing_value.into();
        self
    }

    /// Returns the text rendered for missing values.
    #[must_use]
    pub fn missing_value(&self) -> &str {
        &self.missing_value
    }

    /// Converts a value to its display string.
    #[must_use]
    pub fn stringify(&self, value: &Value<'_>) -> String {
        match value {
            Value::Missing => self.missing_value.clone(),
            Value::Object(object) => stringify_object(*object),
            Value::Text(text) => text.to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Float(x) => x.to_string(),
            Value::Bool(b) => b.to_string(),
        }
    }
}

/// Converts a value to its display string with the default missing label.
#[must_use]
pub fn stringify(value: &Value<'_>) -> String {
    ValueStringifier::new().stringify(value)
}

fn stringify_object(object: &dyn ReportValue) -> String {
    let type_name = object.type_name();

    let display = object.as_display_string().map(|c| c.display_string());
    if let Some(text) = accept("display string", type_name, display) {
        return text;
    }

    let name = object.as_symbolic_name().map(|c| c.symbolic_name());
    if let Some(text) = accept("symbolic name", type_name, name) {
        return text;
    }

    let rendered = object.as_custom_render().map(|c| c.render());
    if let Some(text) = accept("custom render", type_name, rendered) {
        return text;
    }

    generic_render(object)
}

/// Unwraps a capability attempt, logging and discarding failures.
pub(crate) fn accept(
    capability: &'static str,
    type_name: &'static str,
    attempt: Option<CapabilityResult<String>>,
) -> Option<String> {
    match attempt? {
        Ok(text) => Some(text),
        Err(error) => {
            tracing::trace!(
                capability,
                type_name,
                error = %error,
                "Capability failed, falling through"
            );
            None
        }
    }
}

/// Best-effort rendering of a value with no usable capability.
///
/// Uses the `Debug` form; a `Debug` implementation that reports an error
/// yields the value's type name instead.
#[must_use]
pub fn generic_render(object: &dyn ReportValue) -> String {
    let mut rendered = String::new();
    match write!(rendered, "{object:?}") {
        Ok(()) => rendered,
        Err(_) => object.type_name().to_string(),
    }
}
