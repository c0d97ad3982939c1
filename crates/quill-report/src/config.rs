//! Report configuration.

use serde::{Deserialize, Serialize};

use quill_core::error::{QuillError, QuillResult};

use crate::report::{NAME_COLUMN, VALUE_COLUMN};
use crate::stringify::MISSING_VALUE;

/// Settings for a [`ProductReportBuilder`](crate::ProductReportBuilder).
///
/// Every field has a default, so a partial JSON or TOML document is valid:
///
/// ```rust
/// use quill_report::ReportConfig;
///
/// let config = ReportConfig::from_toml(r#"missing_value = "-""#).unwrap();
/// assert_eq!(config.missing_value, "-");
/// assert_eq!(config.name_column, "Name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Text rendered for absent fields.
    pub missing_value: String,
    /// Header of the label column.
    pub name_column: String,
    /// Header of the value column.
    pub value_column: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            missing_value: MISSING_VALUE.to_string(),
            name_column: NAME_COLUMN.to_string(),
            value_column: VALUE_COLUMN.to_string(),
        }
    }
}

impl ReportConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text rendered for absent fields.
    #[must_use]
    pub fn with_missing_value(mut self, missing_value: impl Into<String>) -> Self {
        self.missing_value = missing_value.into();
        self
    }

    /// Sets both column headers.
    #[must_use]
    pub fn with_columns(
        mut self,
        name_column: impl Into<String>,
        value_column: impl Into<String>,
    ) -> Self {
        self.name_column = name_column.into();
        self.value_column = value_column.into();
        self
    }

    /// Checks that no setting is blank and the headers differ.
    pub fn validate(&self) -> QuillResult<()> {
        let mut problems = Vec::new();

        if self.missing_value.trim().is_empty() {
            problems.push("missing_value cannot be blank");
        }
        if self.name_column.trim().is_empty() {
            problems.push("name_column cannot be blank");
        }
        if self.value_column.trim().is_empty() {
            problems.push("value_column cannot be blank");
        }
        if self.name_column == self.value_column {
            problems.push("name_column and value_column must differ");
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(QuillError::config_error(problems.join("; ")))
        }
    }

    /// Parses and validates a JSON document.
    pub fn from_json(json: &str) -> QuillResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| QuillError::config_error(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(toml: &str) -> QuillResult<Self> {
        let config: Self =
            toml::from_str(toml).map_err(|e| QuillError::config_error(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
