//! Integration tests for quill-report.
//!
//! These tests build reports for mixed books of products, typed and decoded
//! from JSON, and check the exported table.

use quill_core::types::{
    AccrualBasis, BusinessDayConvention, CompoundingMethod, Currency, CurrencyRef, Date,
    HolidayConvention, LongOrShort, PayOrReceive, Period,
};
use quill_products::{BulletCashflow, FixedAccrued, OvernightIndexCashflow, RfrSwap};
use quill_report::prelude::*;
use rust_decimal_macros::dec;
use serde_json::json;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// A small book with one product of each kind.
fn create_book() -> Vec<Product> {
    vec![
        BulletCashflow::new(date(2025, 3, 15), date(2025, 3, 17))
            .with_currency(Currency::USD)
            .with_long_or_short(LongOrShort::Long)
            .with_notional(dec!(1_000_000))
            .into(),
        FixedAccrued::new(date(2025, 1, 15), date(2025, 7, 15), date(2025, 7, 17))
            .with_currency(Currency::EUR)
            .with_notional(dec!(5_000_000))
            .with_accrual_basis(AccrualBasis::Thirty360E)
            .with_business_day_convention(BusinessDayConvention::ModifiedFollowing)
            .with_holiday_convention(HolidayConvention::Target2)
            .with_accrued(dec!(75_000))
            .into(),
        OvernightIndexCashflow::new(date(2025, 4, 1), date(2025, 7, 1), date(2025, 7, 3))
            .with_currency(Currency::GBP)
            .with_notional(dec!(10_000_000))
            .with_on_index("SONIA")
            .with_compounding_method(CompoundingMethod::Compound)
            .with_spread(dec!(0.0005))
            .into(),
        RfrSwap::new(date(2025, 1, 2), date(2035, 1, 2))
            .with_currency(Currency::JPY)
            .with_notional(dec!(1_000_000_000))
            .with_on_index("TONA")
            .with_pay_offset(Period::days(2))
            .with_fixed_rate(dec!(0.0125))
            .with_pay_or_receive(PayOrReceive::Pay)
            .with_accrual_period(Period::years(1))
            .with_floating_accrual_period(Period::years(1))
            .with_accrual_basis(AccrualBasis::Act365Fixed)
            .with_pay_holiday_convention(HolidayConvention::Japan)
            .into(),
    ]
}

// =============================================================================
// END-TO-END
// =============================================================================

#[test]
fn test_book_report_row_count_and_order() {
    let book = create_book();
    let mut builder = ProductReportBuilder::new();
    builder.process_all(&book);

    let expected: usize = book
        .iter()
        .map(|product| field_labels(product.product_type()).len())
        .sum();
    assert_eq!(builder.len(), expected);
    assert_eq!(expected, 6 + 10 + 9 + 16);

    let labels: Vec<&str> = builder.report().iter().map(ReportRow::name).collect();
    let expected_labels: Vec<&str> = book
        .iter()
        .flat_map(|product| field_labels(product.product_type()).iter().copied())
        .collect();
    assert_eq!(labels, expected_labels);
}

#[test]
fn test_book_report_values() {
    let mut builder = ProductReportBuilder::new();
    builder.process_all(&create_book());
    let report = builder.into_report();

    assert_eq!(
        report.values("Type").collect::<Vec<_>>(),
        vec!["BulletCashflow", "FixedAccrued", "OvernightIndexCashflow", "RFRSwap"]
    );
    assert_eq!(
        report.values("Currency").collect::<Vec<_>>(),
        vec!["USD", "EUR", "GBP", "JPY"]
    );
    assert_eq!(report.get("Accrual Basis"), Some("30E/360"));
    assert_eq!(report.get("Holiday Convention"), Some("TARGET"));
    assert_eq!(report.get("Accrued"), Some("75000"));
    assert_eq!(report.get("ON Index"), Some("SONIA"));
    assert_eq!(report.get("Pay Offset"), Some("2D"));
    assert_eq!(report.get("Pay/Receive"), Some("Pay"));
    assert_eq!(report.get("Pay Holiday"), Some("JPTO"));
    assert_eq!(report.get("Fixed Rate"), Some("0.0125"));
}

#[test]
fn test_currency_chains_differ_by_kind() {
    let opaque = CurrencyRef::Opaque("gold ounce".into());
    let products: Vec<Product> = vec![
        BulletCashflow::new(date(2025, 3, 15), date(2025, 3, 17))
            .with_currency(opaque.clone())
            .into(),
        FixedAccrued::new(date(2025, 1, 15), date(2025, 7, 15), date(2025, 7, 17))
            .with_currency(opaque.clone())
            .into(),
        OvernightIndexCashflow::new(date(2025, 4, 1), date(2025, 7, 1), date(2025, 7, 3))
            .with_currency(opaque.clone())
            .into(),
        RfrSwap::new(date(2025, 1, 2), date(2030, 1, 2))
            .with_currency(opaque)
            .into(),
    ];

    let mut builder = ProductReportBuilder::new();
    builder.process_all(&products);

    assert_eq!(
        builder.report().values("Currency").collect::<Vec<_>>(),
        vec!["gold ounce", "Currency", "gold ounce", "gold ounce"]
    );
}

#[test]
fn test_absent_fields_render_missing_label() {
    let mut builder = ProductReportBuilder::new();
    builder.process(&RfrSwap::new(date(2025, 1, 2), date(2030, 1, 2)).into());

    let report = builder.report();
    assert_eq!(report.get("Currency"), Some("N/A"));
    assert_eq!(report.get("Notional"), Some("N/A"));
    assert_eq!(report.get("ON Index"), Some("N/A"));
    assert_eq!(report.get("Pay Offset"), Some("0D"));
    assert_eq!(report.get("Accrual Period"), Some("1Y"));
}

// =============================================================================
// JSON INGESTION
// =============================================================================

#[test]
fn test_json_book_with_rejected_record() {
    let records = json!([
        {
            "product_type": "BulletCashflow",
            "termination_date": "2025-03-15",
            "payment_date": "2025-03-17",
            "currency": "USD",
            "long_or_short": "Short",
            "notional": 250000
        },
        { "product_type": "ProductBondFuture", "expiry": "2025-06-20" },
        {
            "product_type": "ProductFixedAccrued",
            "effective_date": "2025-01-15",
            "termination_date": "2025-07-15",
            "payment_date": "2025-07-17",
            "accrual_basis": "ACT/ACT ISDA",
            "business_day_convention": "F",
            "holiday_convention": "GBLO"
        }
    ]);

    let mut builder = ProductReportBuilder::new();
    let mut rejected = Vec::new();
    for record in records.as_array().unwrap() {
        if let Err(e) = builder.process_json_value(record) {
            rejected.push(e);
        }
    }

    assert_eq!(
        rejected,
        vec![QuillError::unsupported_product("ProductBondFuture")]
    );
    assert_eq!(builder.len(), 6 + 10);

    let report = builder.report();
    assert_eq!(report.get("Long/Short"), Some("Short"));
    assert_eq!(report.get("Notional"), Some("250000"));
    assert_eq!(report.get("Accrual Basis"), Some("ACT/ACT ISDA"));
    assert_eq!(report.get("Holiday Convention"), Some("GBLO"));
    assert_eq!(report.get("Business Day Convention"), Some("Following"));
}

#[test]
fn test_json_market_codes_match_typed_report() {
    let mut from_json = ProductReportBuilder::new();
    from_json
        .process_json_value(&json!({
            "product_type": "FixedAccrued",
            "effective_date": "2025-01-15",
            "termination_date": "2025-07-15",
            "payment_date": "2025-07-17",
            "accrual_basis": "ACT/360",
            "business_day_convention": "MF",
            "holiday_convention": "TARGET"
        }))
        .unwrap();

    let mut typed = ProductReportBuilder::new();
    typed.process(
        &FixedAccrued::new(date(2025, 1, 15), date(2025, 7, 15), date(2025, 7, 17))
            .with_accrual_basis(AccrualBasis::Act360)
            .with_business_day_convention(BusinessDayConvention::ModifiedFollowing)
            .with_holiday_convention(HolidayConvention::Target2)
            .into(),
    );

    assert_eq!(from_json.report(), typed.report());
    assert_eq!(from_json.report().get("Accrual Basis"), Some("ACT/360"));
    assert_eq!(from_json.report().get("Holiday Convention"), Some("TARGET"));
}

#[test]
fn test_serialized_products_report_identically() {
    let book: Vec<Product> = vec![
        OvernightIndexCashflow::new(date(2025, 4, 1), date(2025, 7, 1), date(2025, 7, 3))
            .with_currency(Currency::USD)
            .with_notional(dec!(12345678901234567.89))
            .with_on_index("SOFR")
            .with_spread(dec!(0.0010))
            .into(),
        RfrSwap::new(date(2025, 1, 2), date(2030, 1, 2))
            .with_notional(dec!(100.50))
            .with_fixed_rate(dec!(0.03750))
            .with_pay_or_receive(PayOrReceive::Receive)
            .with_pay_holiday_convention(HolidayConvention::Custom("USNY+GBLO".into()))
            .into(),
    ];

    let mut typed = ProductReportBuilder::new();
    typed.process_all(&book);

    let mut decoded = ProductReportBuilder::new();
    for product in &book {
        decoded
            .process_json(&serde_json::to_string(product).unwrap())
            .unwrap();
    }

    assert_eq!(decoded.report().to_records(), typed.report().to_records());
    assert_eq!(decoded.report().get("Notional"), Some("12345678901234567.89"));
    assert_eq!(decoded.report().get("Spread"), Some("0.0010"));
    assert_eq!(decoded.report().get("Fixed Rate"), Some("0.03750"));
}

#[test]
fn test_unlisted_currency_from_json() {
    let mut builder = ProductReportBuilder::new();
    builder
        .process_json_value(&json!({
            "product_type": "FixedAccrued",
            "effective_date": "2025-01-15",
            "termination_date": "2025-07-15",
            "payment_date": "2025-07-17",
            "currency": "XAU"
        }))
        .unwrap();
    assert_eq!(builder.report().get("Currency"), Some("XAU"));
}

// =============================================================================
// EXPORT
// =============================================================================

#[test]
fn test_export_records_and_json() {
    let mut builder = ProductReportBuilder::new();
    builder.process_all(&create_book()[..1]);
    let report = builder.report();

    let records = report.to_records();
    assert_eq!(records.len(), 6);
    assert_eq!(records[3], ["Currency".to_string(), "USD".to_string()]);

    let exported: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(exported[0], json!({ "Name": "Type", "Value": "BulletCashflow" }));
    assert_eq!(exported[5], json!({ "Name": "Notional", "Value": "1000000" }));
}

#[test]
fn test_configured_report() {
    let config = ReportConfig::from_toml(
        r#"
        missing_value = "--"
        name_column = "Field"
        value_column = "Display"
        "#,
    )
    .unwrap();

    let mut builder = ProductReportBuilder::from_config(&config).unwrap();
    builder.process(&BulletCashflow::new(date(2025, 3, 15), date(2025, 3, 17)).into());
    let report = builder.report();

    assert_eq!(report.columns(), ["Field", "Display"]);
    assert_eq!(report.get("Notional"), Some("--"));

    let text = report.to_string();
    assert!(text.starts_with("Field            | Display\n"));
    assert!(text.contains("Currency         | --\n"));
}
