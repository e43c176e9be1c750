//! Conversion requests and completed records

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::Category;

/// One conversion to perform: `value` in `from`, expressed in `to`.
///
/// Both unit names must belong to `category`; the registry enforces this
/// when the request is executed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: Category,
    pub from: String,
    pub to: String,
    pub value: f64,
}

impl ConversionRequest {
    pub fn new(category: Category, from: impl Into<String>, to: impl Into<String>, value: f64) -> Self {
        Self {
            category,
            from: from.into(),
            to: to.into(),
            value,
        }
    }

    /// Build the record for a completed conversion of this request
    pub fn complete(&self, converted: f64) -> ConversionRecord {
        ConversionRecord {
            value: self.value,
            from: self.from.clone(),
            converted,
            to: self.to.clone(),
        }
    }
}

/// Immutable log entry for one completed conversion.
///
/// `converted` is stored unrounded; rounding happens only when displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub value: f64,
    pub from: String,
    pub converted: f64,
    pub to: String,
}

impl fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = {} {}", self.value, self.from, self.converted, self.to)
    }
}
