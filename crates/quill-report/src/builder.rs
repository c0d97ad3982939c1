//! Product report builder.
//!
//! Dispatches each product to the handler for its kind. A handler reads the
//! kind's fields in a fixed order, stringifies each one and appends the
//! resulting `(label, value)` rows to the builder's report.

use serde_json::Value as JsonValue;

use quill_core::error::QuillResult;
use quill_core::traits::ReportValue;
use quill_core::types::CurrencyRef;
use quill_products::{
    BulletCashflow, FixedAccrued, OvernightIndexCashflow, Product, ProductType, RfrSwap,
};

use crate::config::ReportConfig;
use crate::report::{Report, ReportRow};
use crate::stringify::{accept, ValueStringifier};
use crate::value::Value;

/// Row labels of a [`BulletCashflow`] report.
pub const BULLET_CASHFLOW_FIELDS: [&str; 6] = [
    "Type",
    "Termination Date",
    "Payment Date",
    "Currency",
    "Long/Short",
    "Notional",
];

/// Row labels of a [`FixedAccrued`] report.
pub const FIXED_ACCRUED_FIELDS: [&str; 10] = [
    "Type",
    "Effective Date",
    "Termination Date",
    "Payment Date",
    "Currency",
    "Notional",
    "Accrual Basis",
    "Business Day Convention",
    "Holiday Convention",
    "Accrued",
];

/// Row labels of an [`OvernightIndexCashflow`] report.
pub const OVERNIGHT_INDEX_CASHFLOW_FIELDS: [&str; 9] = [
    "Type",
    "Effective Date",
    "Termination Date",
    "Payment Date",
    "Currency",
    "Notional",
    "ON Index",
    "Compounding Method",
    "Spread",
];

/// Row labels of an [`RfrSwap`] report.
pub const RFR_SWAP_FIELDS: [&str; 16] = [
    "Type",
    "Effective Date",
    "Termination Date",
    "Currency",
    "Notional",
    "ON Index",
    "Pay Offset",
    "Fixed Rate",
    "Spread",
    "Pay/Receive",
    "Accrual Period",
    "Floating Accrual Period",
    "Accrual Basis",
    "Compounding Method",
    "Pay BDC",
    "Pay Holiday",
];

/// Returns the ordered row labels emitted for a product kind.
#[must_use]
pub fn field_labels(product_type: ProductType) -> &'static [&'static str] {
    match product_type {
        ProductType::BulletCashflow => &BULLET_CASHFLOW_FIELDS,
        ProductType::FixedAccrued => &FIXED_ACCRUED_FIELDS,
        ProductType::OvernightIndexCashflow => &OVERNIGHT_INDEX_CASHFLOW_FIELDS,
        ProductType::RfrSwap => &RFR_SWAP_FIELDS,
    }
}

/// Fallback of the fixed-accrued currency row when the currency offers
/// neither a display string nor a code.
const FIXED_ACCRUED_CURRENCY_FALLBACK: &str = "Currency";

/// Builds a two-column display report from products.
///
/// # Example
///
/// ```rust
/// use quill_core::types::{Currency, Date, LongOrShort};
/// use quill_products::BulletCashflow;
/// use quill_report::ProductReportBuilder;
/// use rust_decimal::Decimal;
///
/// let cashflow = BulletCashflow::new(
///     Date::from_ymd(2025, 3, 15).unwrap(),
///     Date::from_ymd(2025, 3, 17).unwrap(),
/// )
/// .with_currency(Currency::USD)
/// .with_long_or_short(LongOrShort::Long)
/// .with_notional(Decimal::from(1_000_000));
///
/// let mut builder = ProductReportBuilder::new();
/// builder.process(&cashflow.into());
///
/// let report = builder.report();
/// assert_eq!(report.get("Currency"), Some("USD"));
/// assert_eq!(report.get("Notional"), Some("1000000"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProductReportBuilder {
    stringifier: ValueStringifier,
    report: Report,
}

impl ProductReportBuilder {
    /// Creates an empty builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `QuillError::ConfigError` if the configuration is invalid.
    pub fn from_config(config: &ReportConfig) -> QuillResult<Self> {
        config.validate()?;
        Ok(Self {
            stringifier: ValueStringifier::new().with_missing_value(config.missing_value.clone()),
            report: Report::with_columns(config.name_column.clone(), config.value_column.clone()),
        })
    }

    /// Returns the stringifier used for field values.
    #[must_use]
    pub fn stringifier(&self) -> &ValueStringifier {
        &self.stringifier
    }

    /// Appends the rows of one product.
    pub fn process(&mut self, product: &Product) {
        let rows = match product {
            Product::BulletCashflow(p) => self.bullet_cashflow(p),
            Product::FixedAccrued(p) => self.fixed_accrued(p),
            Product::OvernightIndexCashflow(p) => self.overnight_index_cashflow(p),
            Product::RfrSwap(p) => self.rfr_swap(p),
        };

        let product_type = product.product_type();
        debug_assert!(rows
            .iter()
            .map(ReportRow::name)
            .eq(field_labels(product_type).iter().copied()));

        tracing::debug!(
            product_type = %product_type,
            rows = rows.len(),
            "Product processed"
        );
        self.report.extend(rows);
    }

    /// Appends the rows of each product in order.
    pub fn process_all<'p, I>(&mut self, products: I)
    where
        I: IntoIterator<Item = &'p Product>,
    {
        for product in products {
            self.process(product);
        }
    }

    /// Decodes a JSON product record and appends its rows.
    ///
    /// # Errors
    ///
    /// - `QuillError::UnsupportedProduct` if the `product_type` tag names no
    ///   supported kind
    /// - `QuillError::MalformedProduct` if the record does not decode
    ///
    /// A rejected record appends no rows.
    pub fn process_json_value(&mut self, record: &JsonValue) -> QuillResult<()> {
        let product = Product::from_json_value(record).map_err(|e| {
            tracing::warn!(error = %e, "Product record rejected");
            e
        })?;
        self.process(&product);
        Ok(())
    }

    /// Decodes a JSON product document and appends its rows.
    ///
    /// # Errors
    ///
    /// As [`ProductReportBuilder::process_json_value`], plus
    /// `QuillError::MalformedProduct` for invalid JSON.
    pub fn process_json(&mut self, json: &str) -> QuillResult<()> {
        let product = Product::from_json(json).map_err(|e| {
            tracing::warn!(error = %e, "Product record rejected");
            e
        })?;
        self.process(&product);
        Ok(())
    }

    /// Returns the rows accumulated so far.
    #[must_use]
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Consumes the builder and returns its report.
    #[must_use]
    pub fn into_report(self) -> Report {
        self.report
    }

    /// Returns the number of rows accumulated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.report.len()
    }

    /// Returns true if no rows have been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.report.is_empty()
    }

    // -------------------------------------------------------------------------
    // Handlers
    // -------------------------------------------------------------------------

    fn bullet_cashflow(&self, p: &BulletCashflow) -> Vec<ReportRow> {
        let mut w = RowWriter::new(&self.stringifier, BULLET_CASHFLOW_FIELDS.len());
        w.add("Type", Value::from(ProductType::BulletCashflow.as_str()));
        w.add("Termination Date", Value::object(&p.termination_date()));
        w.add("Payment Date", Value::object(&p.payment_date()));
        w.add_text("Currency", self.currency_or_stringify(p.currency()));
        let long_or_short = p.long_or_short();
        w.add_text(
            "Long/Short",
            self.long_or_short(long_or_short.as_ref().map(|v| v as &dyn ReportValue)),
        );
        w.add("Notional", Value::optional(p.notional().as_ref()));
        w.finish()
    }

    fn fixed_accrued(&self, p: &FixedAccrued) -> Vec<ReportRow> {
        let currency = preferred_currency(p.currency())
            .unwrap_or_else(|| FIXED_ACCRUED_CURRENCY_FALLBACK.to_string());

        let mut w = RowWriter::new(&self.stringifier, FIXED_ACCRUED_FIELDS.len());
        w.add("Type", Value::from(ProductType::FixedAccrued.as_str()));
        w.add("Effective Date", Value::object(&p.effective_date()));
        w.add("Termination Date", Value::object(&p.termination_date()));
        w.add("Payment Date", Value::object(&p.payment_date()));
        w.add_text("Currency", currency);
        w.add("Notional", Value::optional(p.notional().as_ref()));
        w.add("Accrual Basis", Value::object(&p.accrual_basis()));
        w.add(
            "Business Day Convention",
            Value::object(&p.business_day_convention()),
        );
        w.add("Holiday Convention", Value::object(p.holiday_convention()));
        w.add("Accrued", Value::optional(p.accrued().as_ref()));
        w.finish()
    }

    fn overnight_index_cashflow(&self, p: &OvernightIndexCashflow) -> Vec<ReportRow> {
        let mut w = RowWriter::new(&self.stringifier, OVERNIGHT_INDEX_CASHFLOW_FIELDS.len());
        w.add("Type", Value::from(ProductType::OvernightIndexCashflow.as_str()));
        w.add("Effective Date", Value::object(&p.effective_date()));
        w.add("Termination Date", Value::object(&p.termination_date()));
        w.add("Payment Date", Value::object(&p.payment_date()));
        w.add_text("Currency", self.currency_or_stringify(p.currency()));
        w.add("Notional", Value::optional(p.notional().as_ref()));
        w.add("ON Index", Value::optional_text(p.on_index()));
        w.add("Compounding Method", Value::object(&p.compounding_method()));
        w.add("Spread", Value::object(&p.spread()));
        w.finish()
    }

    fn rfr_swap(&self, p: &RfrSwap) -> Vec<ReportRow> {
        let mut w = RowWriter::new(&self.stringifier, RFR_SWAP_FIELDS.len());
        w.add("Type", Value::from(ProductType::RfrSwap.as_str()));
        w.add("Effective Date", Value::object(&p.effective_date()));
        w.add("Termination Date", Value::object(&p.termination_date()));
        // Raw field, no currency preference chain.
        w.add("Currency", Value::optional(p.currency()));
        w.add("Notional", Value::optional(p.notional().as_ref()));
        w.add("ON Index", Value::optional_text(p.on_index()));
        w.add("Pay Offset", Value::object(&p.pay_offset()));
        w.add("Fixed Rate", Value::object(&p.fixed_rate()));
        w.add("Spread", Value::object(&p.spread()));
        w.add("Pay/Receive", Value::object(&p.pay_or_receive()));
        w.add("Accrual Period", Value::object(&p.accrual_period()));
        w.add(
            "Floating Accrual Period",
            Value::object(&p.floating_accrual_period()),
        );
        w.add("Accrual Basis", Value::object(&p.accrual_basis()));
        w.add("Compounding Method", Value::object(&p.compounding_method()));
        w.add("Pay BDC", Value::object(&p.pay_business_day_convention()));
        w.add("Pay Holiday", Value::object(p.pay_holiday_convention()));
        w.finish()
    }

    // -------------------------------------------------------------------------
    // Field preference chains
    // -------------------------------------------------------------------------

    /// Display string, then code, then the generic stringification.
    fn currency_or_stringify(&self, currency: Option<&CurrencyRef>) -> String {
        preferred_currency(currency)
            .unwrap_or_else(|| self.stringifier.stringify(&Value::optional(currency)))
    }

    /// Symbolic name, then custom render, then the generic stringification.
    fn long_or_short(&self, value: Option<&dyn ReportValue>) -> String {
        let Some(value) = value else {
            return self.stringifier.stringify(&Value::Missing);
        };
        let type_name = value.type_name();

        let name = value.as_symbolic_name().map(|c| c.symbolic_name());
        if let Some(text) = non_empty(accept("symbolic name", type_name, name)) {
            return text;
        }

        let rendered = value.as_custom_render().map(|c| c.render());
        if let Some(text) = non_empty(accept("custom render", type_name, rendered)) {
            return text;
        }

        self.stringifier.stringify(&Value::Object(value))
    }
}

/// Currency display string, else its code. Empty results count as absent.
fn preferred_currency(currency: Option<&CurrencyRef>) -> Option<String> {
    let currency = currency?;

    let display = currency.as_display_string().map(|c| c.display_string());
    if let Some(text) = non_empty(accept("display string", currency.type_name(), display)) {
        return Some(text);
    }

    currency
        .code()
        .filter(|code| !code.is_empty())
        .map(str::to_string)
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|text| !text.is_empty())
}

/// Collects one product's rows before they reach the report.
struct RowWriter<'s> {
    stringifier: &'s ValueStringifier,
    rows: Vec<ReportRow>,
}

impl<'s> RowWriter<'s> {
    fn new(stringifier: &'s ValueStringifier, capacity: usize) -> Self {
        Self {
            stringifier,
            rows: Vec::with_capacity(capacity),
        }
    }

    fn add(&mut self, label: &str, value: Value<'_>) {
        let text = self.stringifier.stringify(&value);
        self.add_text(label, text);
    }

    fn add_text(&mut self, label: &str, text: String) {
        self.rows.push(ReportRow::new(label, text));
    }

    fn finish(self) -> Vec<ReportRow> {
        self.rows
    }
}
