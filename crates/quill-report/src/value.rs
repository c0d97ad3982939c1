//! Values fed to the stringifier.

use std::borrow::Cow;

use quill_core::traits::ReportValue;

/// A field value on its way into a report row.
///
/// Primitives are held directly; domain value objects are borrowed as
/// [`ReportValue`] trait objects so the stringifier can probe their
/// rendering capabilities.
#[derive(Debug, Clone)]
pub enum Value<'a> {
    /// The missing-value sentinel: the field was not provided.
    Missing,
    /// Text.
    Text(Cow<'a, str>),
    /// Integer.
    Integer(i64),
    /// Floating-point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// A domain value object.
    Object(&'a dyn ReportValue),
}

impl<'a> Value<'a> {
    /// Wraps text.
    pub fn text(text: impl Into<Cow<'a, str>>) -> Self {
        Value::Text(text.into())
    }

    /// Wraps a domain value object.
    pub fn object<T: ReportValue>(object: &'a T) -> Self {
        Value::Object(object)
    }

    /// Wraps an optional domain value object, mapping `None` to [`Value::Missing`].
    pub fn optional<T: ReportValue>(object: Option<&'a T>) -> Self {
        object.map_or(Value::Missing, |object| Value::Object(object))
    }

    /// Wraps optional text, mapping `None` to [`Value::Missing`].
    pub fn optional_text(text: Option<&'a str>) -> Self {
        text.map_or(Value::Missing, |text| Value::Text(Cow::Borrowed(text)))
    }

    /// Returns true for the missing-value sentinel.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(text: &'a str) -> Self {
        Value::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Value<'_> {
    fn from(text: String) -> Self {
        Value::Text(Cow::Owned(text))
    }
}

impl From<i64> for Value<'_> {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<u32> for Value<'_> {
    fn from(value: u32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<'a> From<&'a dyn ReportValue> for Value<'a> {
    fn from(object: &'a dyn ReportValue) -> Self {
        Value::Object(object)
    }
}
