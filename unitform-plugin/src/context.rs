//! Conversion Context

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use unitform_core::{format_display, DEFAULT_PRECISION};

/// How temperature pairs outside the explicit formula table are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperaturePolicy {
    /// Identity returns the value; Fahrenheit <-> Kelvin goes through Celsius
    #[default]
    Compose,
    /// Identity returns the value; Fahrenheit <-> Kelvin is an error
    Strict,
    /// Anything outside the table returns the input unchanged
    Passthrough,
}

impl fmt::Display for TemperaturePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemperaturePolicy::Compose => "compose",
            TemperaturePolicy::Strict => "strict",
            TemperaturePolicy::Passthrough => "passthrough",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for TemperaturePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compose" => Ok(TemperaturePolicy::Compose),
            "strict" => Ok(TemperaturePolicy::Strict),
            "passthrough" | "identity" => Ok(TemperaturePolicy::Passthrough),
            other => Err(format!(
                "unknown temperature policy '{}' (expected compose, strict or passthrough)",
                other
            )),
        }
    }
}

/// Settings passed to converters
#[derive(Debug, Clone)]
pub struct ConvertContext {
    /// Decimal places used when displaying results
    pub precision: usize,
    pub temperature_policy: TemperaturePolicy,
}

impl ConvertContext {
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            temperature_policy: TemperaturePolicy::default(),
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_temperature_policy(mut self, policy: TemperaturePolicy) -> Self {
        self.temperature_policy = policy;
        self
    }

    /// Round a value for display at this context's precision
    pub fn display(&self, value: f64) -> String {
        format_display(value, self.precision)
    }
}

impl Default for ConvertContext {
    fn default() -> Self {
        Self::new()
    }
}
