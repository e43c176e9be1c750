//! Converter Registry
//!
//! Lookup table from category to its conversion strategy. Every conversion
//! goes through `execute`, so a category can never be served by another
//! category's converter.

use crate::{Converter, ConverterMeta, ConvertContext};
use unitform_core::{Category, ConversionRecord, ConversionRequest, FormError, UnitError};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Central converter registry
pub struct ConverterRegistry {
    converters: HashMap<Category, Arc<dyn Converter>>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self {
            converters: HashMap::new(),
        }
    }

    /// Register a converter under the category its metadata declares
    pub fn with_converter<C: Converter + 'static>(mut self, c: C) -> Self {
        let category = c.meta().category;
        self.converters.insert(category, Arc::new(c));
        self
    }

    pub fn get(&self, category: Category) -> Option<&dyn Converter> {
        self.converters.get(&category).map(|c| c.as_ref())
    }

    pub fn converter(&self, category: Category) -> Result<&dyn Converter, UnitError> {
        self.get(category).ok_or(UnitError::NoConverter(category))
    }

    /// Registered categories in form order
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL.iter()
            .copied()
            .filter(|c| self.converters.contains_key(c))
            .collect()
    }

    /// True when every category has a converter
    pub fn is_complete(&self) -> bool {
        Category::ALL.iter().all(|c| self.converters.contains_key(c))
    }

    pub fn metas(&self) -> Vec<ConverterMeta> {
        self.categories()
            .into_iter()
            .filter_map(|c| self.get(c).map(|conv| conv.meta()))
            .collect()
    }

    /// Canonical unit names for a category, in selector order
    pub fn units(&self, category: Category) -> Result<&'static [&'static str], UnitError> {
        Ok(self.converter(category)?.meta().units)
    }

    /// Resolve typed input to a canonical unit of `category`
    pub fn resolve_unit(&self, category: Category, name: &str) -> Result<&'static str, UnitError> {
        self.converter(category)?
            .resolve(name)
            .ok_or_else(|| UnitError::unknown_unit(name.trim(), category))
    }

    /// True when `name` resolves to a unit of `category` (case-insensitive, aliases allowed)
    pub fn has_unit(&self, category: Category, name: &str) -> bool {
        self.get(category).map_or(false, |conv| conv.resolve(name).is_some())
    }

    /// Find the category owning a unit name, searching in form order
    pub fn find_category(&self, name: &str) -> Option<(Category, &'static str)> {
        let category = self.categories()
            .into_iter()
            .find(|c| self.has_unit(*c, name))?;
        self.resolve_unit(category, name).ok().map(|unit| (category, unit))
    }

    /// Convert a request, returning the raw numeric result
    pub fn convert(&self, request: &ConversionRequest, ctx: &ConvertContext) -> Result<f64, UnitError> {
        let converter = self.converter(request.category)?;
        let from = self.resolve_unit(request.category, &request.from)?;
        let to = self.resolve_unit(request.category, &request.to)?;

        let result = converter.convert(request.value, from, to, ctx)?;
        debug!(
            category = %request.category,
            from,
            to,
            value = request.value,
            result,
            "converted"
        );
        Ok(result)
    }

    /// Convert a request and build its log record with canonical unit names
    pub fn execute(&self, request: &ConversionRequest, ctx: &ConvertContext) -> Result<ConversionRecord, UnitError> {
        let converted = self.convert(request, ctx)?;
        let canonical = ConversionRequest::new(
            request.category,
            self.resolve_unit(request.category, &request.from)?,
            self.resolve_unit(request.category, &request.to)?,
            request.value,
        );
        Ok(canonical.complete(converted))
    }

    /// Turn an engine error into a user-facing error, adding similar unit names
    pub fn explain(&self, err: UnitError) -> FormError {
        if let UnitError::UnknownUnit { unit, category } = &err {
            let similar = self.suggest_units(*category, unit);
            if !similar.is_empty() {
                return FormError::from(err.clone()).with_suggestion(format!(
                    "Similar: {}. Use 'units' for the full list.",
                    similar.iter().take(3).copied().collect::<Vec<_>>().join(", ")
                ));
            }
        }
        err.into()
    }

    /// Units of `category` whose name or alias is close to `name`, best match first
    pub fn suggest_units(&self, category: Category, name: &str) -> Vec<&'static str> {
        let meta = match self.get(category) {
            Some(conv) => conv.meta(),
            None => return Vec::new(),
        };
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut best: Vec<(&'static str, usize)> = Vec::new();
        let candidates = meta.units.iter()
            .map(|unit| (*unit, *unit))
            .chain(meta.aliases.iter().copied());
        for (spelling, unit) in candidates {
            let score = name_score(&query, &spelling.to_lowercase());
            if score < SUGGEST_THRESHOLD {
                continue;
            }
            match best.iter_mut().find(|(u, _)| *u == unit) {
                Some(entry) => entry.1 = entry.1.max(score),
                None => best.push((unit, score)),
            }
        }

        best.sort_by(|a, b| b.1.cmp(&a.1));
        best.into_iter().map(|(unit, _)| unit).collect()
    }
}

/// Minimum score for a unit to be suggested
const SUGGEST_THRESHOLD: usize = 20;

/// Closeness of a typed unit to one spelling of a unit.
///
/// Rewards a shared prefix ("kilometr" vs "kilometers") and one name
/// containing the other ("kms" vs "km"), minus the length gap.
fn name_score(query: &str, spelling: &str) -> usize {
    let prefix = query.chars()
        .zip(spelling.chars())
        .take_while(|(a, b)| a == b)
        .count();
    let mut score = prefix * 10;
    if spelling.contains(query) || query.contains(spelling) {
        score += 20;
    }
    let gap = query.chars().count().abs_diff(spelling.chars().count());
    score.saturating_sub(gap * 2)
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
