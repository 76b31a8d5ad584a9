//! Length units
//!
//! Model coordinates are centimetres. Older documents and the boundary
//! editor may express coordinates in canvas pixels at a fixed ratio of
//! [`CM_TO_PX`](crate::constants::CM_TO_PX).

use crate::constants::CM_TO_PX;
use crate::error::UnitError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit of a stored length
///
/// Written as `"cm"` or `"px"`; read through [`FromStr`], so unit names are
/// case-insensitive and the long forms are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Centimetres
    #[default]
    Cm,
    /// Canvas pixels
    Px,
}

impl LengthUnit {
    /// Convert a value in this unit to centimetres
    pub fn to_cm(self, value: f64) -> f64 {
        match self {
            Self::Cm => value,
            Self::Px => px_to_cm(value),
        }
    }

    /// Convert a centimetre value into this unit
    pub fn from_cm(self, value_cm: f64) -> f64 {
        match self {
            Self::Cm => value_cm,
            Self::Px => cm_to_px(value_cm),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cm => write!(f, "cm"),
            Self::Px => write!(f, "px"),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimetre" => Ok(Self::Cm),
            "px" | "pixel" => Ok(Self::Px),
            _ => Err(UnitError::UnknownUnit {
                unit: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for LengthUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

pub fn cm_to_px(cm: f64) -> f64 {
    cm * CM_TO_PX
}

pub fn px_to_cm(px: f64) -> f64 {
    px / CM_TO_PX
}

/// Format centimetres as metres with two decimals, e.g. `"2.79"`.
pub fn format_meters(cm: f64) -> String {
    let cm = if cm.is_finite() { cm } else { 0.0 };
    format!("{:.2}", cm / 100.0)
}

/// Format a number with at most two decimals and no trailing zeros.
///
/// `100.0` becomes `"100"` and `37.5` becomes `"37.5"`.
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{:.2}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
