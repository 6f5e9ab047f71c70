//! Length unit conversion.
//!
//! Host geometry kernels report coordinates and lengths in their own internal
//! unit. The extractor only needs to turn those lengths into millimeters,
//! which is what [`UnitConverter`] models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MassclassError;

/// Converts a length in the host's internal unit to millimeters.
pub trait UnitConverter {
    fn to_millimeters(&self, value: f64) -> f64;
}

impl<F> UnitConverter for F
where
    F: Fn(f64) -> f64,
{
    fn to_millimeters(&self, value: f64) -> f64 {
        self(value)
    }
}

/// Linear units a host may use internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Decimal feet, the internal unit of most BIM hosts.
    #[default]
    #[serde(alias = "ft")]
    Feet,
    #[serde(alias = "in")]
    Inches,
    #[serde(alias = "m")]
    Meters,
    #[serde(alias = "cm")]
    Centimeters,
    #[serde(alias = "mm")]
    Millimeters,
}

impl LengthUnit {
    /// Millimeters per one unit.
    pub fn millimeters_per_unit(self) -> f64 {
        match self {
            Self::Feet => 304.8,
            Self::Inches => 25.4,
            Self::Meters => 1000.0,
            Self::Centimeters => 10.0,
            Self::Millimeters => 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Feet => "feet",
            Self::Inches => "inches",
            Self::Meters => "meters",
            Self::Centimeters => "centimeters",
            Self::Millimeters => "millimeters",
        }
    }
}

impl UnitConverter for LengthUnit {
    fn to_millimeters(&self, value: f64) -> f64 {
        value * self.millimeters_per_unit()
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LengthUnit {
    type Err = MassclassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "feet" | "ft" => Ok(Self::Feet),
            "inches" | "in" => Ok(Self::Inches),
            "meters" | "m" => Ok(Self::Meters),
            "centimeters" | "cm" => Ok(Self::Centimeters),
            "millimeters" | "mm" => Ok(Self::Millimeters),
            other => Err(MassclassError::InvalidInput(format!(
                "unknown length unit: {other}"
            ))),
        }
    }
}
