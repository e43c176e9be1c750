//! Converter trait

use unitform_core::{Category, UnitError};
use crate::ConvertContext;
use serde::Serialize;

/// Metadata for a converter plugin
#[derive(Debug, Clone, Serialize)]
pub struct ConverterMeta {
    pub category: Category,
    /// Unit with factor 1 (or the formula hub, for temperature)
    pub reference_unit: &'static str,
    pub description: &'static str,
    /// Canonical unit names, in selector order
    pub units: &'static [&'static str],
    /// (alias, canonical) pairs accepted when resolving typed input
    pub aliases: &'static [(&'static str, &'static str)],
    pub examples: &'static [&'static str],
}

/// Conversion strategy for one category.
///
/// `convert` receives canonical unit names, but must still reject names
/// outside its own unit set rather than guess.
pub trait Converter: Send + Sync {
    fn meta(&self) -> ConverterMeta;

    fn convert(&self, value: f64, from: &str, to: &str, ctx: &ConvertContext) -> Result<f64, UnitError>;

    /// Map typed input to a canonical unit name (case-insensitive, aliases allowed)
    fn resolve(&self, name: &str) -> Option<&'static str> {
        let meta = self.meta();
        let needle = name.trim();
        meta.units.iter()
            .find(|u| u.eq_ignore_ascii_case(needle))
            .copied()
            .or_else(|| {
                meta.aliases.iter()
                    .find(|(alias, _)| alias.eq_ignore_ascii_case(needle))
                    .map(|(_, canonical)| *canonical)
            })
    }
}
