//! Measurement units for emitted documents.
//!
//! The path model itself is unit-agnostic; units only matter at the emission
//! boundary, where the SVG document declares its physical size.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement system for emitted coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Millimeters
    Mm,
    /// Inches
    Inch,
}

impl Units {
    /// Suffix used in SVG width/height attributes.
    pub fn suffix(&self) -> &'static str {
        match self {
            Units::Mm => "mm",
            Units::Inch => "in",
        }
    }

    /// Conversion factor from this unit to millimeters.
    pub fn to_mm(&self) -> f64 {
        match self {
            Units::Mm => 1.0,
            Units::Inch => 25.4,
        }
    }
}

impl Default for Units {
    fn default() -> Self {
        Units::Mm
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mm" | "metric" => Ok(Units::Mm),
            "in" | "inch" | "imperial" => Ok(Units::Inch),
            _ => Err(format!("Unknown unit: {}", s)),
        }
    }
}
