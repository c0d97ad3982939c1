//! # Quill Products
//!
//! Read-only product records shown in Quill display reports.
//!
//! The set of products is closed: [`Product`] is a tagged union of
//! [`BulletCashflow`], [`FixedAccrued`], [`OvernightIndexCashflow`] and
//! [`RfrSwap`]. Records are plain data built with `new` plus `with_*`
//! setters; optional fields are `Option`s. Nothing here prices, schedules
//! or validates a product.
//!
//! Records arriving from outside the process can be decoded from JSON
//! tagged by `product_type`; tags outside the closed set are rejected with
//! [`QuillError::UnsupportedProduct`](quill_core::QuillError::UnsupportedProduct).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod bullet_cashflow;
mod fixed_accrued;
mod overnight_index_cashflow;
mod product;
mod rfr_swap;

pub use bullet_cashflow::BulletCashflow;
pub use fixed_accrued::FixedAccrued;
pub use overnight_index_cashflow::OvernightIndexCashflow;
pub use product::{Product, ProductType, PRODUCT_TYPE_FIELD};
pub use rfr_swap::RfrSwap;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        BulletCashflow, FixedAccrued, OvernightIndexCashflow, Product, ProductType, RfrSwap,
    };
}
