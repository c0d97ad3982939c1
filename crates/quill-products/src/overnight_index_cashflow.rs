//! Overnight-index compounded cashflow.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use quill_core::types::{CompoundingMethod, CurrencyRef, Date};

/// A floating cashflow on an overnight index (SOFR, €STR, SONIA).
///
/// The index is carried as a precomputed description, for example
/// `"SOFR-1B"`, rather than as an index object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvernightIndexCashflow {
    effective_date: Date,
    termination_date: Date,
    payment_date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    currency: Option<CurrencyRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notional: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    on_index: Option<String>,
    #[serde(default)]
    compounding_method: CompoundingMethod,
    #[serde(default)]
    spread: Decimal,
}

impl OvernightIndexCashflow {
    /// Creates a compounded cashflow with zero spread.
    #[must_use]
    pub fn new(effective_date: Date, termination_date: Date, payment_date: Date) -> Self {
        Self {
            effective_date,
            termination_date,
            payment_date,
            currency: None,
            notional: None,
            on_index: None,
            compounding_method: CompoundingMethod::default(),
            spread: Decimal::ZERO,
        }
    }

    /// Sets the currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<CurrencyRef>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Sets the notional.
    #[must_use]
    pub fn with_notional(mut self, notional: Decimal) -> Self {
        self.notional = Some(notional);
        self
    }

    /// Sets the overnight index description.
    #[must_use]
    pub fn with_on_index(mut self, on_index: impl Into<String>) -> Self {
        self.on_index = Some(on_index.into());
        self
    }

    /// Sets the compounding method.
    #[must_use]
    pub fn with_compounding_method(mut self, method: CompoundingMethod) -> Self {
        self.compounding_method = method;
        self
    }

    /// Sets the spread over the index.
    #[must_use]
    pub fn with_spread(mut self, spread: Decimal) -> Self {
        self.spread = spread;
        self
    }

    /// Returns the effective date.
    #[must_use]
    pub fn effective_date(&self) -> Date {
        self.effective_date
    }

    /// Returns the termination date.
    #[must_use]
    pub fn termination_date(&self) -> Date {
        self.termination_date
    }

    /// Returns the payment date.
    #[must_use]
    pub fn payment_date(&self) -> Date {
        self.payment_date
    }

    /// Returns the currency, if set.
    #[must_use]
    pub fn currency(&self) -> Option<&CurrencyRef> {
        self.currency.as_ref()
    }

    /// Returns the notional, if set.
    #[must_use]
    pub fn notional(&self) -> Option<Decimal> {
        self.notional
    }

    /// Returns the overnight index description, if set.
    #[must_use]
    pub fn on_index(&self) -> Option<&str> {
        self.on_index.as_deref()
    }

    /// Returns the compounding method.
    #[must_use]
    pub fn compounding_method(&self) -> CompoundingMethod {
        self.compounding_method
    }

    /// Returns the spread.
    #[must_use]
    pub fn spread(&self) -> Decimal {
        self.spread
    }
}
