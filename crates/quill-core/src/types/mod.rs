//! Value objects carried on product records.
//!
//! - [`Date`]: calendar date, rendered as ISO 8601
//! - [`Currency`] / [`CurrencyRef`]: ISO registry and the reference a record carries
//! - [`AccrualBasis`], [`BusinessDayConvention`], [`HolidayConvention`],
//!   [`CompoundingMethod`]: market convention labels
//! - [`LongOrShort`], [`PayOrReceive`]: direction flags
//! - [`Period`]: tenors such as `3M`

mod conventions;
mod currency;
mod date;
mod direction;
mod period;

pub use conventions::{AccrualBasis, BusinessDayConvention, CompoundingMethod, HolidayConvention};
pub use currency::{Currency, CurrencyRef};
pub use date::Date;
pub use direction::{LongOrShort, PayOrReceive};
pub use period::{Period, TimeUnit};
