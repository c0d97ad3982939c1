//! Market conventions carried on product records.
//!
//! These are labels only: no day-count fractions or date rolling happen
//! here. Each convention knows its market name and its symbolic name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuillError;
use crate::traits::{CapabilityResult, DisplayString, ReportValue, SymbolicName};

/// Accrual basis (day count convention) of a product leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum AccrualBasis {
    /// Actual/360 - money market instruments, SOFR and €STR legs
    #[default]
    Act360,
    /// Actual/365 Fixed - SONIA legs, GBP/AUD markets
    Act365Fixed,
    /// Actual/Actual ISDA - swaps
    ActActIsda,
    /// Actual/Actual ICMA - government bonds
    ActActIcma,
    /// 30/360 US (Bond Basis)
    Thirty360US,
    /// 30E/360 (Eurobond Basis)
    Thirty360E,
}

impl AccrualBasis {
    /// Returns the market name of the basis.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            AccrualBasis::Act360 => "ACT/360",
            AccrualBasis::Act365Fixed => "ACT/365F",
            AccrualBasis::ActActIsda => "ACT/ACT ISDA",
            AccrualBasis::ActActIcma => "ACT/ACT ICMA",
            AccrualBasis::Thirty360US => "30/360 US",
            AccrualBasis::Thirty360E => "30E/360",
        }
    }

    /// Returns all supported bases.
    #[must_use]
    pub fn all() -> &'static [AccrualBasis] {
        &[
            AccrualBasis::Act360,
            AccrualBasis::Act365Fixed,
            AccrualBasis::ActActIsda,
            AccrualBasis::ActActIcma,
            AccrualBasis::Thirty360US,
            AccrualBasis::Thirty360E,
        ]
    }
}

impl fmt::Display for AccrualBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AccrualBasis {
    type Err = QuillError;

    /// Accepts the market name ("ACT/360") or the variant name ("Act360").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        AccrualBasis::all()
            .iter()
            .copied()
            .find(|basis| {
                basis.name() == normalized || format!("{basis:?}").to_uppercase() == normalized
            })
            .ok_or_else(|| QuillError::unknown_convention("accrual basis", s))
    }
}

/// Business day adjustment convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum BusinessDayConvention {
    /// No adjustment.
    Unadjusted,
    /// Move to the following business day.
    Following,
    /// Following, unless it crosses a month boundary.
    #[default]
    ModifiedFollowing,
    /// Move to the preceding business day.
    Preceding,
    /// Preceding, unless it crosses a month boundary.
    ModifiedPreceding,
}

impl BusinessDayConvention {
    /// Returns the market name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
        }
    }

    /// Returns the short code used in trade tickets (F, MF, P, MP, NONE).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BusinessDayConvention::Unadjusted => "NONE",
            BusinessDayConvention::Following => "F",
            BusinessDayConvention::ModifiedFollowing => "MF",
            BusinessDayConvention::Preceding => "P",
            BusinessDayConvention::ModifiedPreceding => "MP",
        }
    }

    /// Returns all supported conventions.
    #[must_use]
    pub fn all() -> &'static [BusinessDayConvention] {
        &[
            BusinessDayConvention::Unadjusted,
            BusinessDayConvention::Following,
            BusinessDayConvention::ModifiedFollowing,
            BusinessDayConvention::Preceding,
            BusinessDayConvention::ModifiedPreceding,
        ]
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BusinessDayConvention {
    type Err = QuillError;

    /// Accepts the short code ("MF"), the market name or the variant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        BusinessDayConvention::all()
            .iter()
            .copied()
            .find(|bdc| {
                bdc.code() == normalized
                    || bdc.name().to_uppercase() == normalized
                    || format!("{bdc:?}").to_uppercase() == normalized
            })
            .ok_or_else(|| QuillError::unknown_convention("business day convention", s))
    }
}

/// Holiday calendar convention, identified by its calendar code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum HolidayConvention {
    /// Saturdays and Sundays only.
    #[default]
    WeekendsOnly,
    /// US government securities (SIFMA).
    UsGovernment,
    /// TARGET2 (Euro).
    Target2,
    /// London banking days.
    UnitedKingdom,
    /// Tokyo banking days.
    Japan,
    /// Any other calendar, by code (e.g. a joint calendar "USNY+GBLO").
    Custom(String),
}

impl HolidayConvention {
    /// Returns the calendar code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            HolidayConvention::WeekendsOnly => "WE",
            HolidayConvention::UsGovernment => "USGS",
            HolidayConvention::Target2 => "TARGET",
            HolidayConvention::UnitedKingdom => "GBLO",
            HolidayConvention::Japan => "JPTO",
            HolidayConvention::Custom(code) => code,
        }
    }

    /// Parses a calendar code. Unknown codes become [`HolidayConvention::Custom`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "WE" | "NONE" => HolidayConvention::WeekendsOnly,
            "USGS" | "SIFMA" => HolidayConvention::UsGovernment,
            "TARGET" | "TARGET2" => HolidayConvention::Target2,
            "GBLO" | "UK" => HolidayConvention::UnitedKingdom,
            "JPTO" | "JP" => HolidayConvention::Japan,
            _ => HolidayConvention::Custom(code.trim().to_string()),
        }
    }
}

impl fmt::Display for HolidayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Compounding method of an overnight-index leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum CompoundingMethod {
    /// Daily compounded overnight rate.
    #[default]
    Compound,
    /// Arithmetic average of overnight fixings.
    Average,
    /// Simple (no compounding).
    Simple,
}

impl FromStr for CompoundingMethod {
    type Err = QuillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "COMPOUND" | "COMPOUNDING" => Ok(CompoundingMethod::Compound),
            "AVERAGE" | "AVERAGING" => Ok(CompoundingMethod::Average),
            "SIMPLE" => Ok(CompoundingMethod::Simple),
            _ => Err(QuillError::unknown_convention("compounding method", s)),
        }
    }
}

// String forms used by serde.

impl TryFrom<String> for AccrualBasis {
    type Error = QuillError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AccrualBasis> for String {
    fn from(basis: AccrualBasis) -> Self {
        basis.name().to_string()
    }
}

impl TryFrom<String> for BusinessDayConvention {
    type Error = QuillError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<BusinessDayConvention> for String {
    fn from(bdc: BusinessDayConvention) -> Self {
        bdc.code().to_string()
    }
}

impl From<String> for HolidayConvention {
    fn from(code: String) -> Self {
        HolidayConvention::from_code(&code)
    }
}

impl From<HolidayConvention> for String {
    fn from(convention: HolidayConvention) -> Self {
        match convention {
            HolidayConvention::Custom(code) => code,
            other => other.code().to_string(),
        }
    }
}

impl TryFrom<String> for CompoundingMethod {
    type Error = QuillError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CompoundingMethod> for String {
    fn from(method: CompoundingMethod) -> Self {
        format!("{method:?}")
    }
}

// Rendering capabilities.

impl DisplayString for AccrualBasis {
    fn display_string(&self) -> CapabilityResult<String> {
        Ok(self.name().to_string())
    }
}

impl SymbolicName for AccrualBasis {
    fn symbolic_name(&self) -> CapabilityResult<String> {
        Ok(format!("{self:?}"))
    }
}

impl ReportValue for AccrualBasis {
    fn as_display_string(&self) -> Option<&dyn DisplayString> {
        Some(self)
    }

    fn as_symbolic_name(&self) -> Option<&dyn SymbolicName> {
        Some(self)
    }
}

impl DisplayString for BusinessDayConvention {
    fn display_string(&self) -> CapabilityResult<String> {
        Ok(self.name().to_string())
    }
}

impl SymbolicName for BusinessDayConvention {
    fn symbolic_name(&self) -> CapabilityResult<String> {
        Ok(format!("{self:?}"))
    }
}

impl ReportValue for BusinessDayConvention {
    fn as_display_string(&self) -> Option<&dyn DisplayString> {
        Some(self)
    }

    fn as_symbolic_name(&self) -> Option<&dyn SymbolicName> {
        Some(self)
    }
}

impl DisplayString for HolidayConvention {
    fn display_string(&self) -> CapabilityResult<String> {
        Ok(self.code().to_string())
    }
}

impl ReportValue for HolidayConvention {
    fn as_display_string(&self) -> Option<&dyn DisplayString> {
        Some(self)
    }
}

impl SymbolicName for CompoundingMethod {
    fn symbolic_name(&self) -> CapabilityResult<String> {
        Ok(format!("{self:?}"))
    }
}

impl ReportValue for CompoundingMethod {
    fn as_symbolic_name(&self) -> Option<&dyn SymbolicName> {
        Some(self)
    }
}
