//! Currency value objects.
//!
//! [`Currency`] is the registry of ISO 4217 codes. [`CurrencyRef`] is what a
//! product record actually carries: either a registered currency, a bare
//! code that is not in the registry, or an opaque description with no code
//! at all.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::traits::{
    CapabilityError, CapabilityResult, CustomRender, DisplayString, ReportValue, SymbolicName,
};

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// United States Dollar
    #[default]
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
    /// Swiss Franc
    CHF,
    /// Canadian Dollar
    CAD,
    /// Australian Dollar
    AUD,
    /// Swedish Krona
    SEK,
    /// Norwegian Krone
    NOK,
}

impl Currency {
    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::SEK => "SEK",
            Currency::NOK => "NOK",
        }
    }

    /// Parses a currency from a string code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CHF" => Some(Currency::CHF),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            "SEK" => Some(Currency::SEK),
            "NOK" => Some(Currency::NOK),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl DisplayString for Currency {
    fn display_string(&self) -> CapabilityResult<String> {
        Ok(self.code().to_string())
    }
}

impl SymbolicName for Currency {
    fn symbolic_name(&self) -> CapabilityResult<String> {
        Ok(format!("{self:?}"))
    }
}

impl ReportValue for Currency {
    fn as_display_string(&self) -> Option<&dyn DisplayString> {
        Some(self)
    }

    fn as_symbolic_name(&self) -> Option<&dyn SymbolicName> {
        Some(self)
    }
}

/// Currency reference as carried on a product record.
///
/// Serializes as a plain string. Deserializing a registered ISO code yields
/// [`CurrencyRef::Iso`]; anything else yields [`CurrencyRef::Unlisted`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CurrencyRef {
    /// A registered ISO currency.
    Iso(Currency),
    /// A code missing from the registry. Has a code but no display string.
    Unlisted(String),
    /// A description with neither display string nor code.
    Opaque(String),
}

impl CurrencyRef {
    /// Returns the currency code, if the reference has one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            CurrencyRef::Iso(currency) => Some(currency.code()),
            CurrencyRef::Unlisted(code) => Some(code),
            CurrencyRef::Opaque(_) => None,
        }
    }

    /// Returns the registered currency, if any.
    #[must_use]
    pub fn currency(&self) -> Option<Currency> {
        match self {
            CurrencyRef::Iso(currency) => Some(*currency),
            _ => None,
        }
    }
}

impl From<Currency> for CurrencyRef {
    fn from(currency: Currency) -> Self {
        CurrencyRef::Iso(currency)
    }
}

impl From<String> for CurrencyRef {
    fn from(code: String) -> Self {
        match Currency::from_code(&code) {
            Some(currency) => CurrencyRef::Iso(currency),
            None => CurrencyRef::Unlisted(code),
        }
    }
}

impl From<CurrencyRef> for String {
    fn from(currency: CurrencyRef) -> Self {
        match currency {
            CurrencyRef::Iso(currency) => currency.code().to_string(),
            CurrencyRef::Unlisted(code) => code,
            CurrencyRef::Opaque(description) => description,
        }
    }
}

impl DisplayString for CurrencyRef {
    fn display_string(&self) -> CapabilityResult<String> {
        match self {
            CurrencyRef::Iso(currency) => currency.display_string(),
            _ => Err(CapabilityError::unavailable("display string", "CurrencyRef")),
        }
    }
}

impl CustomRender for CurrencyRef {
    fn render(&self) -> CapabilityResult<String> {
        match self {
            CurrencyRef::Iso(currency) => Ok(currency.code().to_string()),
            CurrencyRef::Unlisted(code) => Ok(code.clone()),
            CurrencyRef::Opaque(description) => Ok(description.clone()),
        }
    }
}

impl ReportValue for CurrencyRef {
    fn as_display_string(&self) -> Option<&dyn DisplayString> {
        Some(self)
    }

    fn as_custom_render(&self) -> Option<&dyn CustomRender> {
        Some(self)
    }
}
