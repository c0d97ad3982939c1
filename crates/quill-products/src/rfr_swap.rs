//! Fixed-vs-overnight (RFR) interest rate swap.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use quill_core::types::{
    AccrualBasis, BusinessDayConvention, CompoundingMethod, CurrencyRef, Date, HolidayConvention,
    PayOrReceive, Period,
};

fn default_accrual_period() -> Period {
    Period::years(1)
}

fn default_pay_offset() -> Period {
    Period::days(0)
}

/// A swap exchanging a fixed leg against a compounded overnight leg.
///
/// Unlike the cashflow records there is no payment date: payments fall
/// `pay_offset` after each accrual end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfrSwap {
    effective_date: Date,
    termination_date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    currency: Option<CurrencyRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notional: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    on_index: Option<String>,
    #[serde(default = "default_pay_offset")]
    pay_offset: Period,
    #[serde(default)]
    fixed_rate: Decimal,
    #[serde(default)]
    spread: Decimal,
    #[serde(default)]
    pay_or_receive: PayOrReceive,
    #[serde(default = "default_accrual_period")]
    accrual_period: Period,
    #[serde(default = "default_accrual_period")]
    floating_accrual_period: Period,
    #[serde(default)]
    accrual_basis: AccrualBasis,
    #[serde(default)]
    compounding_method: CompoundingMethod,
    #[serde(default)]
    pay_business_day_convention: BusinessDayConvention,
    #[serde(default)]
    pay_holiday_convention: HolidayConvention,
}

impl RfrSwap {
    /// Creates a pay-fixed swap with annual accruals on both legs, zero
    /// rates and no payment lag.
    #[must_use]
    pub fn new(effective_date: Date, termination_date: Date) -> Self {
        Self {
            effective_date,
            termination_date,
            currency: None,
            notional: None,
            on_index: None,
            pay_offset: default_pay_offset(),
            fixed_rate: Decimal::ZERO,
            spread: Decimal::ZERO,
            pay_or_receive: PayOrReceive::default(),
            accrual_period: default_accrual_period(),
            floating_accrual_period: default_accrual_period(),
            accrual_basis: AccrualBasis::default(),
            compounding_method: CompoundingMethod::default(),
            pay_business_day_convention: BusinessDayConvention::default(),
            pay_holiday_convention: HolidayConvention::default(),
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

    /// Sets the payment lag after each accrual end.
    #[must_use]
    pub fn with_pay_offset(mut self, pay_offset: Period) -> Self {
        self.pay_offset = pay_offset;
        self
    }

    /// Sets the fixed rate.
    #[must_use]
    pub fn with_fixed_rate(mut self, fixed_rate: Decimal) -> Self {
        self.fixed_rate = fixed_rate;
        self
    }

    /// Sets the floating spread.
    #[must_use]
    pub fn with_spread(mut self, spread: Decimal) -> Self {
        self.spread = spread;
        self
    }

    /// Sets whether the fixed leg is paid or received.
    #[must_use]
    pub fn with_pay_or_receive(mut self, pay_or_receive: PayOrReceive) -> Self {
        self.pay_or_receive = pay_or_receive;
        self
    }

    /// Sets the fixed-leg accrual period.
    #[must_use]
    pub fn with_accrual_period(mut self, period: Period) -> Self {
        self.accrual_period = period;
        self
    }

    /// Sets the floating-leg accrual period.
    #[must_use]
    pub fn with_floating_accrual_period(mut self, period: Period) -> Self {
        self.floating_accrual_period = period;
        self
    }

    /// Sets the accrual basis.
    #[must_use]
    pub fn with_accrual_basis(mut self, accrual_basis: AccrualBasis) -> Self {
        self.accrual_basis = accrual_basis;
        self
    }

    /// Sets the compounding method of the floating leg.
    #[must_use]
    pub fn with_compounding_method(mut self, method: CompoundingMethod) -> Self {
        self.compounding_method = method;
        self
    }

    /// Sets the payment business day convention.
    #[must_use]
    pub fn with_pay_business_day_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.pay_business_day_convention = convention;
        self
    }

    /// Sets the payment holiday convention.
    #[must_use]
    pub fn with_pay_holiday_convention(mut self, convention: HolidayConvention) -> Self {
        self.pay_holiday_convention = convention;
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

    /// Returns the payment lag.
    #[must_use]
    pub fn pay_offset(&self) -> Period {
        self.pay_offset
    }

    /// Returns the fixed rate.
    #[must_use]
    pub fn fixed_rate(&self) -> Decimal {
        self.fixed_rate
    }

    /// Returns the floating spread.
    #[must_use]
    pub fn spread(&self) -> Decimal {
        self.spread
    }

    /// Returns whether the fixed leg is paid or received.
    #[must_use]
    pub fn pay_or_receive(&self) -> PayOrReceive {
        self.pay_or_receive
    }

    /// Returns the fixed-leg accrual period.
    #[must_use]
    pub fn accrual_period(&self) -> Period {
        self.accrual_period
    }

    /// Returns the floating-leg accrual period.
    #[must_use]
    pub fn floating_accrual_period(&self) -> Period {
        self.floating_accrual_period
    }

    /// Returns the accrual basis.
    #[must_use]
    pub fn accrual_basis(&self) -> AccrualBasis {
        self.accrual_basis
    }

    /// Returns the compounding method.
    #[must_use]
    pub fn compounding_method(&self) -> CompoundingMethod {
        self.compounding_method
    }

    /// Returns the payment business day convention.
    #[must_use]
    pub fn pay_business_day_convention(&self) -> BusinessDayConvention {
        self.pay_business_day_convention
    }

    /// Returns the payment holiday convention.
    #[must_use]
    pub fn pay_holiday_convention(&self) -> &HolidayConvention {
        &self.pay_holiday_convention
    }
}
