//! # Quill Core
//!
//! Value objects, rendering capabilities and errors shared by the Quill
//! product display crates.
//!
//! - **Types**: `Date`, `CurrencyRef`, market conventions, tenors
//! - **Traits**: the rendering capabilities (`DisplayString`, `SymbolicName`,
//!   `CustomRender`) and [`ReportValue`](traits::ReportValue), which
//!   advertises them
//! - **Errors**: [`QuillError`] and [`QuillResult`]
//!
//! ## Example
//!
//! ```rust
//! use quill_core::prelude::*;
//!
//! let basis = AccrualBasis::Act360;
//! let display = basis.as_display_string().unwrap().display_string().unwrap();
//! assert_eq!(display, "ACT/360");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{QuillError, QuillResult};
    pub use crate::traits::{
        CapabilityError, CapabilityResult, CustomRender, DisplayString, ReportValue, SymbolicName,
    };
    pub use crate::types::{
        AccrualBasis, BusinessDayConvention, CompoundingMethod, Currency, CurrencyRef, Date,
        HolidayConvention, LongOrShort, PayOrReceive, Period, TimeUnit,
    };
}

// Re-export commonly used types at crate root
pub use error::{QuillError, QuillResult};
pub use types::{CurrencyRef, Date, Period};
