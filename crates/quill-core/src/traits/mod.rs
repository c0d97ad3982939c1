//! Capability traits for rendering domain values.
//!
//! Domain value objects are heterogeneous: some carry a curated display
//! string, some only a symbolic name, some only a type-specific renderer.
//! Each of these is modelled as its own capability trait:
//!
//! - [`DisplayString`]: curated human-readable representation
//! - [`SymbolicName`]: symbolic identifier, typically the variant name
//! - [`CustomRender`]: type-specific textual rendering (dates, decimals, tenors)
//!
//! [`ReportValue`] ties them together. A value advertises which capabilities
//! it has through the `as_*` accessors, and every capability call returns a
//! [`CapabilityResult`] so a renderer can fall through to the next capability
//! instead of failing.

use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

/// Result of invoking a rendering capability.
pub type CapabilityResult<T> = Result<T, CapabilityError>;

/// Failure of a single rendering capability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// The value has the capability in general but not for this instance.
    #[error("{capability} is not available for {type_name}")]
    Unavailable {
        /// Name of the capability.
        capability: &'static str,
        /// Short type name of the value.
        type_name: &'static str,
    },

    /// The capability was invoked and failed.
    #[error("{capability} failed: {reason}")]
    Failed {
        /// Name of the capability.
        capability: &'static str,
        /// Description of the failure.
        reason: String,
    },
}

impl CapabilityError {
    /// Creates an unavailable-capability error.
    #[must_use]
    pub fn unavailable(capability: &'static str, type_name: &'static str) -> Self {
        Self::Unavailable {
            capability,
            type_name,
        }
    }

    /// Creates a failed-capability error.
    #[must_use]
    pub fn failed(capability: &'static str, reason: impl Into<String>) -> Self {
        Self::Failed {
            capability,
            reason: reason.into(),
        }
    }
}

/// A value with a curated human-readable representation.
pub trait DisplayString {
    /// Returns the display string.
    fn display_string(&self) -> CapabilityResult<String>;
}

/// A value with a symbolic identifier.
pub trait SymbolicName {
    /// Returns the symbolic name (e.g. the enum variant name).
    fn symbolic_name(&self) -> CapabilityResult<String>;
}

/// A value with a type-specific textual rendering.
pub trait CustomRender {
    /// Renders the value.
    fn render(&self) -> CapabilityResult<String>;
}

/// A value that can appear in a product report.
///
/// All capability accessors default to `None`; implementors override the
/// ones they support. `Debug` is the generic rendering used when no
/// capability produces a string.
pub trait ReportValue: fmt::Debug {
    /// Returns the display-string capability, if the type has one.
    fn as_display_string(&self) -> Option<&dyn DisplayString> {
        None
    }

    /// Returns the symbolic-name capability, if the type has one.
    fn as_symbolic_name(&self) -> Option<&dyn SymbolicName> {
        None
    }

    /// Returns the custom-render capability, if the type has one.
    fn as_custom_render(&self) -> Option<&dyn CustomRender> {
        None
    }

    /// Returns the short declared type name of the value.
    fn type_name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// Strips module paths and generic arguments from a full type name.
///
/// `rust_decimal::decimal::Decimal` becomes `Decimal`.
#[must_use]
pub fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl CustomRender for Decimal {
    fn render(&self) -> CapabilityResult<String> {
        Ok(self.to_string())
    }
}

impl ReportValue for Decimal {
    fn as_custom_render(&self) -> Option<&dyn CustomRender> {
        Some(self)
    }
}
