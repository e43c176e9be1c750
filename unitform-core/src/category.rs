//! Conversion categories

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::UnitError;

/// A domain of mutually convertible units.
///
/// The set is closed: every category owns exactly one converter and a fixed
/// list of unit names, both supplied by the converter registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
    Speed,
    Time,
    Currency,
    Power,
}

impl Category {
    /// All categories in form order
    pub const ALL: [Category; 8] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
        Category::Speed,
        Category::Time,
        Category::Currency,
        Category::Power,
    ];

    /// Display name (e.g., "Length")
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Volume => "Volume",
            Category::Speed => "Speed",
            Category::Time => "Time",
            Category::Currency => "Currency",
            Category::Power => "Power",
        }
    }

    /// Lowercase key used in config and JSON (e.g., "length")
    pub fn key(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Volume => "volume",
            Category::Speed => "speed",
            Category::Time => "time",
            Category::Currency => "currency",
            Category::Power => "power",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" | "distance" => Ok(Category::Length),
            "weight" | "mass" => Ok(Category::Weight),
            "temperature" | "temp" => Ok(Category::Temperature),
            "volume" => Ok(Category::Volume),
            "speed" | "velocity" => Ok(Category::Speed),
            "time" | "duration" => Ok(Category::Time),
            "currency" | "money" => Ok(Category::Currency),
            "power" => Ok(Category::Power),
            _ => Err(UnitError::UnknownCategory(s.trim().to_string())),
        }
    }
}
