//! Ratio-based converter
//!
//! Each unit carries "how many of this unit equal one reference unit".
//! A value converts as `value * (factor[to] / factor[from])`, with no
//! compensation for floating-point rounding.

use unitform_core::{Category, UnitError};
use unitform_plugin::{Converter, ConverterMeta, ConvertContext};

/// Converter backed by a static factor table
#[derive(Debug, Clone, Copy)]
pub struct RatioConverter {
    pub category: Category,
    pub description: &'static str,
    /// Canonical names in selector order; the first is the reference unit
    pub units: &'static [&'static str],
    /// Factor per unit, same names as `units`
    pub factors: &'static [(&'static str, f64)],
    pub aliases: &'static [(&'static str, &'static str)],
    pub examples: &'static [&'static str],
}

impl RatioConverter {
    /// Factor for a canonical unit name. A missing unit is an error, never a default.
    pub fn factor(&self, unit: &str) -> Result<f64, UnitError> {
        self.factors.iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
            .ok_or_else(|| UnitError::unknown_unit(unit, self.category))
    }
}

impl Converter for RatioConverter {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            category: self.category,
            reference_unit: self.units.first().copied().unwrap_or_default(),
            description: self.description,
            units: self.units,
            aliases: self.aliases,
            examples: self.examples,
        }
    }

    fn convert(&self, value: f64, from: &str, to: &str, _ctx: &ConvertContext) -> Result<f64, UnitError> {
        let from_factor = self.factor(from)?;
        let to_factor = self.factor(to)?;
        Ok(value * (to_factor / from_factor))
    }
}
