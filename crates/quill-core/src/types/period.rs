//! Tenor type (`3M`, `1Y`, `2D`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{QuillError, QuillResult};
use crate::traits::{CapabilityResult, CustomRender, ReportValue};

/// Unit of a [`Period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Calendar or business days
    Days,
    /// Weeks
    Weeks,
    /// Months
    Months,
    /// Years
    Years,
}

impl TimeUnit {
    /// Returns the single-letter tenor abbreviation.
    #[must_use]
    pub fn abbreviation(&self) -> char {
        match self {
            TimeUnit::Days => 'D',
            TimeUnit::Weeks => 'W',
            TimeUnit::Months => 'M',
            TimeUnit::Years => 'Y',
        }
    }

    fn from_abbreviation(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'D' => Some(TimeUnit::Days),
            'W' => Some(TimeUnit::Weeks),
            'M' => Some(TimeUnit::Months),
            'Y' => Some(TimeUnit::Years),
            _ => None,
        }
    }
}

/// A time span made up of an integer length and a [`TimeUnit`].
///
/// Used for accrual frequencies and payment offsets. Serializes as its
/// tenor string.
///
/// # Example
///
/// ```rust
/// use quill_core::types::{Period, TimeUnit};
///
/// let tenor: Period = "3M".parse().unwrap();
/// assert_eq!(tenor, Period::new(3, TimeUnit::Months));
/// assert_eq!(tenor.to_string(), "3M");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    length: i32,
    unit: TimeUnit,
}

impl Period {
    /// Creates a new period.
    #[must_use]
    pub fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// Shorthand for a number of days.
    #[must_use]
    pub fn days(length: i32) -> Self {
        Self::new(length, TimeUnit::Days)
    }

    /// Shorthand for a number of months.
    #[must_use]
    pub fn months(length: i32) -> Self {
        Self::new(length, TimeUnit::Months)
    }

    /// Shorthand for a number of years.
    #[must_use]
    pub fn years(length: i32) -> Self {
        Self::new(length, TimeUnit::Years)
    }

    /// Returns the number of units.
    #[must_use]
    pub fn length(&self) -> i32 {
        self.length
    }

    /// Returns the unit.
    #[must_use]
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Parses a tenor string such as `3M`, `-2D` or `10Y`.
    ///
    /// # Errors
    ///
    /// Returns `QuillError::InvalidPeriod` if the string is not a tenor.
    pub fn parse(s: &str) -> QuillResult<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let unit = chars
            .next_back()
            .and_then(TimeUnit::from_abbreviation)
            .ok_or_else(|| QuillError::invalid_period(s))?;
        let length = chars
            .as_str()
            .parse::<i32>()
            .map_err(|_| QuillError::invalid_period(s))?;
        Ok(Self::new(length, unit))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.length, self.unit.abbreviation())
    }
}

impl FromStr for Period {
    type Err = QuillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Period {
    type Error = QuillError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

impl CustomRender for Period {
    fn render(&self) -> CapabilityResult<String> {
        Ok(self.to_string())
    }
}

impl ReportValue for Period {
    fn as_custom_render(&self) -> Option<&dyn CustomRender> {
        Some(self)
    }
}
