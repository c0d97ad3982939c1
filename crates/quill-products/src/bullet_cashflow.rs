//! Single dated cashflow.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use quill_core::types::{CurrencyRef, Date, LongOrShort};

/// A single notional exchanged on a payment date.
///
/// # Example
///
/// ```rust
/// use quill_core::types::{Currency, Date, LongOrShort};
/// use quill_products::BulletCashflow;
/// use rust_decimal_macros::dec;
///
/// let cf = BulletCashflow::new(
///     Date::from_ymd(2025, 3, 15).unwrap(),
///     Date::from_ymd(2025, 3, 17).unwrap(),
/// )
/// .with_currency(Currency::USD)
/// .with_long_or_short(LongOrShort::Long)
/// .with_notional(dec!(1_000_000));
/// assert_eq!(cf.notional(), Some(dec!(1_000_000)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletCashflow {
    termination_date: Date,
    payment_date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    currency: Option<CurrencyRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    long_or_short: Option<LongOrShort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notional: Option<Decimal>,
}

impl BulletCashflow {
    /// Creates a cashflow with only its dates set.
    #[must_use]
    pub fn new(termination_date: Date, payment_date: Date) -> Self {
        Self {
            termination_date,
            payment_date,
            currency: None,
            long_or_short: None,
            notional: None,
        }
    }

    /// Sets the currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<CurrencyRef>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Sets the position direction.
    #[must_use]
    pub fn with_long_or_short(mut self, long_or_short: LongOrShort) -> Self {
        self.long_or_short = Some(long_or_short);
        self
    }

    /// Sets the notional.
    #[must_use]
    pub fn with_notional(mut self, notional: Decimal) -> Self {
        self.notional = Some(notional);
        self
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

    /// Returns the position direction, if set.
    #[must_use]
    pub fn long_or_short(&self) -> Option<LongOrShort> {
        self.long_or_short
    }

    /// Returns the notional, if set.
    #[must_use]
    pub fn notional(&self) -> Option<Decimal> {
        self.notional
    }
}
