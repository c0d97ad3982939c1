//! Benchmarks for report building.
//!
//! Run with: cargo bench -p quill-report

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal_macros::dec;
use std::hint::black_box;

use quill_core::types::{Currency, Date, LongOrShort, Period};
use quill_products::{BulletCashflow, OvernightIndexCashflow, Product, RfrSwap};
use quill_report::{stringify, ProductReportBuilder, Value};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_product(id: usize) -> Product {
    let effective = Date::from_ymd(2025, 1, 2).unwrap();
    let maturity = Date::from_ymd(2026 + (id % 10) as i32, 1, 2).unwrap();

    match id % 3 {
        0 => BulletCashflow::new(maturity, maturity)
            .with_currency(Currency::USD)
            .with_long_or_short(LongOrShort::Long)
            .with_notional(dec!(1000000))
            .into(),
        1 => OvernightIndexCashflow::new(effective, maturity, maturity)
            .with_currency(Currency::GBP)
            .with_on_index("SONIA")
            .into(),
        _ => RfrSwap::new(effective, maturity)
            .with_currency(Currency::EUR)
            .with_on_index("ESTR")
            .with_accrual_period(Period::months(6))
            .into(),
    }
}

fn create_batch(size: usize) -> Vec<Product> {
    (0..size).map(create_product).collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_stringify(c: &mut Criterion) {
    let date = Date::from_ymd(2025, 3, 15).unwrap();
    let notional = dec!(1000000);

    c.bench_function("stringify_date", |b| {
        b.iter(|| stringify(black_box(&Value::object(&date))))
    });
    c.bench_function("stringify_decimal", |b| {
        b.iter(|| stringify(black_box(&Value::object(&notional))))
    });
}

fn bench_process_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_batch");

    for size in [10, 100, 1000].iter() {
        let products = create_batch(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &products, |b, products| {
            b.iter(|| {
                let mut builder = ProductReportBuilder::new();
                builder.process_all(black_box(products));
                builder.into_report()
            })
        });
    }
    group.finish();
}

criterion_group!(stringifier, bench_stringify);
criterion_group!(builder, bench_process_batch);
criterion_main!(stringifier, builder);
