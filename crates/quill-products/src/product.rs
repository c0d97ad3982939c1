//! The closed set of displayable products.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

use quill_core::error::{QuillError, QuillResult};

use crate::{BulletCashflow, FixedAccrued, OvernightIndexCashflow, RfrSwap};

/// Name of the JSON field carrying the product kind.
pub const PRODUCT_TYPE_FIELD: &str = "product_type";

/// Kind of a [`Product`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    /// [`BulletCashflow`]
    BulletCashflow,
    /// [`FixedAccrued`]
    FixedAccrued,
    /// [`OvernightIndexCashflow`]
    OvernightIndexCashflow,
    /// [`RfrSwap`]
    #[serde(rename = "RFRSwap")]
    RfrSwap,
}

impl ProductType {
    /// Returns the canonical type label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::BulletCashflow => "BulletCashflow",
            ProductType::FixedAccrued => "FixedAccrued",
            ProductType::OvernightIndexCashflow => "OvernightIndexCashflow",
            ProductType::RfrSwap => "RFRSwap",
        }
    }

    /// Returns all product types.
    #[must_use]
    pub fn all() -> &'static [ProductType] {
        &[
            ProductType::BulletCashflow,
            ProductType::FixedAccrued,
            ProductType::OvernightIndexCashflow,
            ProductType::RfrSwap,
        ]
    }

    /// Resolves a type tag.
    ///
    /// Accepts the canonical label and the legacy `Product`-prefixed form
    /// (`ProductBulletCashflow`). Returns `None` for anything else.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        let bare = tag.strip_prefix("Product").unwrap_or(tag);
        ProductType::all()
            .iter()
            .copied()
            .find(|product_type| product_type.as_str() == bare)
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A product record of one of the supported kinds.
///
/// Serialized internally tagged by `product_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "product_type")]
pub enum Product {
    /// Single dated cashflow.
    BulletCashflow(BulletCashflow),
    /// Fixed accrual with precomputed accrued amount.
    FixedAccrued(FixedAccrued),
    /// Overnight-index cashflow.
    OvernightIndexCashflow(OvernightIndexCashflow),
    /// Fixed-vs-overnight swap.
    #[serde(rename = "RFRSwap")]
    RfrSwap(RfrSwap),
}

impl Product {
    /// Returns the kind of this product.
    #[must_use]
    pub fn product_type(&self) -> ProductType {
        match self {
            Product::BulletCashflow(_) => ProductType::BulletCashflow,
            Product::FixedAccrued(_) => ProductType::FixedAccrued,
            Product::OvernightIndexCashflow(_) => ProductType::OvernightIndexCashflow,
            Product::RfrSwap(_) => ProductType::RfrSwap,
        }
    }

    /// Decodes a product from a JSON record tagged by `product_type`.
    ///
    /// # Errors
    ///
    /// - `QuillError::UnsupportedProduct` if the tag names no supported kind
    /// - `QuillError::MalformedProduct` if the tag is missing or the fields
    ///   do not match the kind's schema
    pub fn from_json_value(record: &JsonValue) -> QuillResult<Self> {
        let tag = record
            .get(PRODUCT_TYPE_FIELD)
            .and_then(JsonValue::as_str)
            .ok_or_else(|| {
                QuillError::malformed_product(format!(
                    "missing string field '{PRODUCT_TYPE_FIELD}'"
                ))
            })?;
        let product_type =
            ProductType::from_tag(tag).ok_or_else(|| QuillError::unsupported_product(tag))?;

        // Normalize legacy tags before handing the record to serde.
        let mut record = record.clone();
        if let Some(fields) = record.as_object_mut() {
            fields.insert(
                PRODUCT_TYPE_FIELD.to_string(),
                JsonValue::from(product_type.as_str()),
            );
        }

        serde_json::from_value(record).map_err(|e| {
            QuillError::malformed_product(format!("{product_type}: {e}"))
        })
    }

    /// Decodes a product from JSON text.
    ///
    /// # Errors
    ///
    /// As [`Product::from_json_value`], plus `MalformedProduct` for invalid JSON.
    pub fn from_json(json: &str) -> QuillResult<Self> {
        let record: JsonValue = serde_json::from_str(json)
            .map_err(|e| QuillError::malformed_product(e.to_string()))?;
        Self::from_json_value(&record)
    }
}

impl From<BulletCashflow> for Product {
    fn from(product: BulletCashflow) -> Self {
        Product::BulletCashflow(product)
    }
}

impl From<FixedAccrued> for Product {
    fn from(product: FixedAccrued) -> Self {
        Product::FixedAccrued(product)
    }
}

impl From<OvernightIndexCashflow> for Product {
    fn from(product: OvernightIndexCashflow) -> Self {
        Product::OvernightIndexCashflow(product)
    }
}

impl From<RfrSwap> for Product {
    fn from(product: RfrSwap) -> Self {
        Product::RfrSwap(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::types::{Currency, CurrencyRef, Date, LongOrShort, Period};
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(
            ProductType::from_tag("BulletCashflow"),
            Some(ProductType::BulletCashflow)
        );
        assert_eq!(
            ProductType::from_tag("ProductRFRSwap"),
            Some(ProductType::RfrSwap)
        );
        assert_eq!(ProductType::from_tag("ProductFuture"), None);
        assert_eq!(ProductType::from_tag(""), None);
    }

    #[test]
    fn test_product_type_of_each_variant() {
        let cf: Product = BulletCashflow::new(date(2025, 3, 15), date(2025, 3, 17)).into();
        assert_eq!(cf.product_type(), ProductType::BulletCashflow);
        let swap: Product = RfrSwap::new(date(2025, 1, 2), date(2030, 1, 2)).into();
        assert_eq!(swap.product_type(), ProductType::RfrSwap);
        assert_eq!(swap.product_type().to_string(), "RFRSwap");
    }

    #[test]
    fn test_decode_bullet_cashflow() {
        let record = json!({
            "product_type": "BulletCashflow",
            "termination_date": "2025-03-15",
            "payment_date": "2025-03-17",
            "currency": "USD",
            "long_or_short": "Long",
            "notional": 1000000
        });
        let product = Product::from_json_value(&record).unwrap();
        let Product::BulletCashflow(cf) = product else {
            panic!("expected a bullet cashflow");
        };
        assert_eq!(cf.payment_date(), date(2025, 3, 17));
        assert_eq!(cf.currency(), Some(&CurrencyRef::Iso(Currency::USD)));
        assert_eq!(cf.long_or_short(), Some(LongOrShort::Long));
        assert_eq!(cf.notional(), Some(dec!(1000000)));
    }

    #[test]
    fn test_decode_legacy_tag_with_defaults() {
        let record = json!({
            "product_type": "ProductRFRSwap",
            "effective_date": "2025-01-02",
            "termination_date": "2030-01-02",
            "accrual_period": "3M"
        });
        let Product::RfrSwap(swap) = Product::from_json_value(&record).unwrap() else {
            panic!("expected a swap");
        };
        assert_eq!(swap.accrual_period(), Period::months(3));
        assert_eq!(swap.floating_accrual_period(), Period::years(1));
        assert_eq!(swap.currency(), None);
    }

    #[test]
    fn test_decode_unsupported_type() {
        let record = json!({ "product_type": "ProductFuture", "expiry": "2025-06-20" });
        let err = Product::from_json_value(&record).unwrap_err();
        assert_eq!(err, QuillError::unsupported_product("ProductFuture"));
    }

    #[test]
    fn test_decode_missing_tag() {
        let err = Product::from_json_value(&json!({ "payment_date": "2025-03-17" })).unwrap_err();
        assert!(matches!(err, QuillError::MalformedProduct { .. }));
        let err = Product::from_json_value(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, QuillError::MalformedProduct { .. }));
    }

    #[test]
    fn test_decode_bad_fields() {
        let err = Product::from_json(
            r#"{"product_type": "FixedAccrued", "effective_date": "not a date"}"#,
        )
        .unwrap_err();
        match err {
            QuillError::MalformedProduct { reason } => assert!(reason.starts_with("FixedAccrued")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(Product::from_json("{not json").is_err());
    }

    #[test]
    fn test_serialize_tagged() {
        let product: Product = BulletCashflow::new(date(2025, 3, 15), date(2025, 3, 17)).into();
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["product_type"], "BulletCashflow");
        assert_eq!(value["payment_date"], "2025-03-17");
        assert!(value.get("notional").is_none());
    }
}
