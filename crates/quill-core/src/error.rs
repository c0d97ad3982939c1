//! Error types for the Quill library.
//!
//! [`QuillError`] covers everything that can go wrong while building value
//! objects or decoding product records. Capability failures raised while
//! rendering a value are a separate concern, see
//! [`CapabilityError`](crate::traits::CapabilityError).

use thiserror::Error;

/// A specialized Result type for Quill operations.
pub type QuillResult<T> = Result<T, QuillError>;

/// The main error type for Quill operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuillError {
    /// Invalid or unparseable date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Invalid or unparseable tenor string.
    #[error("Invalid period: {value}")]
    InvalidPeriod {
        /// The rejected input.
        value: String,
    },

    /// A convention code that does not name any known convention.
    #[error("Unknown {kind}: {value}")]
    UnknownConvention {
        /// Which convention family was being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A product record whose kind is not one of the supported variants.
    #[error("No display handler for product type '{product_type}'")]
    UnsupportedProduct {
        /// The product type tag carried by the record.
        product_type: String,
    },

    /// A product record that could not be decoded.
    #[error("Malformed product record: {reason}")]
    MalformedProduct {
        /// Description of what is wrong with the record.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    ConfigError {
        /// Description of the configuration error.
        reason: String,
    },
}

impl QuillError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid period error.
    #[must_use]
    pub fn invalid_period(value: impl Into<String>) -> Self {
        Self::InvalidPeriod {
            value: value.into(),
        }
    }

    /// Creates an unknown convention error.
    #[must_use]
    pub fn unknown_convention(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownConvention {
            kind,
            value: value.into(),
        }
    }

    /// Creates an unsupported product error.
    #[must_use]
    pub fn unsupported_product(product_type: impl Into<String>) -> Self {
        Self::UnsupportedProduct {
            product_type: product_type.into(),
        }
    }

    /// Creates a malformed product error.
    #[must_use]
    pub fn malformed_product(reason: impl Into<String>) -> Self {
        Self::MalformedProduct {
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config_error(reason: impl Into<String>) -> Self {
        Self::ConfigError {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuillError::invalid_date("2024-02-30");
        assert_eq!(err.to_string(), "Invalid date: 2024-02-30");
    }

    #[test]
    fn test_unsupported_product_names_tag() {
        let err = QuillError::unsupported_product("ProductFuture");
        assert!(err.to_string().contains("'ProductFuture'"));
    }

    #[test]
    fn test_unknown_convention() {
        let err = QuillError::unknown_convention("business day convention", "XX");
        assert_eq!(err.to_string(), "Unknown business day convention: XX");
    }
}
