//! # Quill Report
//!
//! Turns product records into a two-column (`Name`, `Value`) display table.
//!
//! - [`ValueStringifier`]: converts any field value to a display string,
//!   probing the value's rendering capabilities in a fixed order and never
//!   failing
//! - [`ProductReportBuilder`]: dispatches each [`Product`](quill_products::Product)
//!   to the handler for its kind and appends one row per field, in the
//!   kind's fixed label order
//! - [`Report`]: the ordered rows, exportable as records, JSON or plain text
//! - [`ReportConfig`]: missing-value label and column headers, loadable from
//!   JSON or TOML
//!
//! ## Example
//!
//! ```rust
//! use quill_report::prelude::*;
//!
//! let mut builder = ProductReportBuilder::new();
//! builder
//!     .process_json(
//!         r#"{
//!             "product_type": "RFRSwap",
//!             "effective_date": "2025-01-02",
//!             "termination_date": "2030-01-02",
//!             "on_index": "SOFR"
//!         }"#,
//!     )
//!     .unwrap();
//!
//! let report = builder.report();
//! assert_eq!(report.len(), 16);
//! assert_eq!(report.get("Type"), Some("RFRSwap"));
//! assert_eq!(report.get("Currency"), Some("N/A"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod builder;
pub mod config;
pub mod report;
pub mod stringify;
pub mod value;

pub use builder::{field_labels, ProductReportBuilder};
pub use config::ReportConfig;
pub use report::{Report, ReportRow};
pub use stringify::{stringify, ValueStringifier, MISSING_VALUE};
pub use value::Value;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        field_labels, stringify, ProductReportBuilder, Report, ReportConfig, ReportRow, Value,
        ValueStringifier,
    };
    pub use quill_core::error::{QuillError, QuillResult};
    pub use quill_products::{Product, ProductType};
}
