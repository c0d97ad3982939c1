//! Position direction flags.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::QuillError;
use crate::traits::{CapabilityResult, CustomRender, ReportValue, SymbolicName};

/// Long or short position in a cashflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum LongOrShort {
    /// Receives the cashflow.
    #[default]
    Long,
    /// Pays the cashflow.
    Short,
}

impl FromStr for LongOrShort {
    type Err = QuillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LONG" | "L" => Ok(LongOrShort::Long),
            "SHORT" | "S" => Ok(LongOrShort::Short),
            _ => Err(QuillError::unknown_convention("position direction", s)),
        }
    }
}

impl TryFrom<String> for LongOrShort {
    type Error = QuillError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LongOrShort> for String {
    fn from(direction: LongOrShort) -> Self {
        format!("{direction:?}")
    }
}

impl SymbolicName for LongOrShort {
    fn symbolic_name(&self) -> CapabilityResult<String> {
        Ok(format!("{self:?}"))
    }
}

impl CustomRender for LongOrShort {
    fn render(&self) -> CapabilityResult<String> {
        Ok(format!("{self:?}").to_lowercase())
    }
}

impl ReportValue for LongOrShort {
    fn as_symbolic_name(&self) -> Option<&dyn SymbolicName> {
        Some(self)
    }

    fn as_custom_render(&self) -> Option<&dyn CustomRender> {
        Some(self)
    }
}

/// Whether the fixed leg of a swap is paid or received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum PayOrReceive {
    /// Pay fixed, receive floating.
    #[default]
    Pay,
    /// Receive fixed, pay floating.
    Receive,
}

impl FromStr for PayOrReceive {
    type Err = QuillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PAY" | "P" => Ok(PayOrReceive::Pay),
            "RECEIVE" | "REC" | "R" => Ok(PayOrReceive::Receive),
            _ => Err(QuillError::unknown_convention("pay/receive flag", s)),
        }
    }
}

impl TryFrom<String> for PayOrReceive {
    type Error = QuillError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PayOrReceive> for String {
    fn from(flag: PayOrReceive) -> Self {
        format!("{flag:?}")
    }
}

impl SymbolicName for PayOrReceive {
    fn symbolic_name(&self) -> CapabilityResult<String> {
        Ok(format!("{self:?}"))
    }
}

impl ReportValue for PayOrReceive {
    fn as_symbolic_name(&self) -> Option<&dyn SymbolicName> {
        Some(self)
    }
}
