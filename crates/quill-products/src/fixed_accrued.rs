//! Fixed accrual period with a precomputed accrued amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use quill_core::types::{AccrualBasis, BusinessDayConvention, CurrencyRef, Date, HolidayConvention};

/// A fixed accrual over `[effective_date, termination_date]` paid on
/// `payment_date`.
///
/// The accrued amount is an input; nothing here computes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedAccrued {
    effective_date: Date,
    termination_date: Date,
    payment_date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    currency: Option<CurrencyRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notional: Option<Decimal>,
    #[serde(default)]
    accrual_basis: AccrualBasis,
    #[serde(default)]
    business_day_convention: BusinessDayConvention,
    #[serde(default)]
    holiday_convention: HolidayConvention,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accrued: Option<Decimal>,
}

impl FixedAccrued {
    /// Creates an accrual with default conventions
    /// (ACT/360, Modified Following, weekends only).
    #[must_use]
    pub fn new(effective_date: Date, termination_date: Date, payment_date: Date) -> Self {
        Self {
            effective_date,
            termination_date,
            payment_date,
            currency: None,
            notional: None,
            accrual_basis: AccrualBasis::default(),
            business_day_convention: BusinessDayConvention::default(),
            holiday_convention: HolidayConvention::default(),
            accrued: None,
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

    /// Sets the accrual basis.
    #[must_use]
    pub fn with_accrual_basis(mut self, accrual_basis: AccrualBasis) -> Self {
        self.accrual_basis = accrual_basis;
        self
    }

    /// Sets the business day convention.
    #[must_use]
    pub fn with_business_day_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.business_day_convention = convention;
        self
    }

    /// Sets the holiday convention.
    #[must_use]
    pub fn with_holiday_convention(mut self, convention: HolidayConvention) -> Self {
        self.holiday_convention = convention;
        self
    }

    /// Sets the precomputed accrued amount.
    #[must_use]
    pub fn with_accrued(mut self, accrued: Decimal) -> Self {
        self.accrued = Some(accrued);
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

    /// Returns the accrual basis.
    #[must_use]
    pub fn accrual_basis(&self) -> AccrualBasis {
        self.accrual_basis
    }

    /// Returns the business day convention.
    #[must_use]
    pub fn business_day_convention(&self) -> BusinessDayConvention {
        self.business_day_convention
    }

    /// Returns the holiday convention.
    #[must_use]
    pub fn holiday_convention(&self) -> &HolidayConvention {
        &self.holiday_convention
    }

    /// Returns the accrued amount, if supplied.
    #[must_use]
    pub fn accrued(&self) -> Option<Decimal> {
        self.accrued
    }
}
