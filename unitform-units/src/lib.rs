//! Unitform Units - Converters for every category
//!
//! Ratio tables (value * factor[to] / factor[from]):
//! - Length (Meters, Kilometers, Miles, Feet)
//! - Weight (Grams, Kilograms, Pounds, Ounces)
//! - Volume (Liters, Milliliters, Gallons, Cups)
//! - Speed (Meters/Second, Kilometers/Hour, Miles/Hour)
//! - Time (Seconds, Minutes, Hours, Days)
//! - Currency (USD, EUR, GBP, PKR)
//! - Power (Watts, Kilowatts, Horsepower)
//!
//! Affine formulae:
//! - Temperature (Celsius, Fahrenheit, Kelvin)

mod ratio;
mod units;
mod temperature;
mod parse;

pub use ratio::RatioConverter;
pub use units::{LENGTH, WEIGHT, VOLUME, SPEED, TIME, CURRENCY, POWER, RATIO_TABLES};
pub use temperature::TemperatureConverter;
pub use parse::{parse_conversion, parse_value};

use unitform_plugin::ConverterRegistry;

/// Load all category converters into registry
pub fn load_units_library(registry: ConverterRegistry) -> ConverterRegistry {
    registry
        .with_converter(units::LENGTH)
        .with_converter(units::WEIGHT)
        .with_converter(TemperatureConverter)
        .with_converter(units::VOLUME)
        .with_converter(units::SPEED)
        .with_converter(units::TIME)
        .with_converter(units::CURRENCY)
        .with_converter(units::POWER)
}

/// Registry with every category loaded
pub fn standard_registry() -> ConverterRegistry {
    load_units_library(ConverterRegistry::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitform_core::{Category, ConversionRequest, UnitError};
    use unitform_plugin::ConvertContext;

    const SAMPLES: [f64; 5] = [0.5, 1.0, 42.0, 999.9, -17.25];

    fn convert(category: Category, value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
        let req = ConversionRequest::new(category, from, to, value);
        standard_registry().convert(&req, &ConvertContext::new())
    }

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    #[test]
    fn test_every_category_has_its_own_converter() {
        let registry = standard_registry();
        assert!(registry.is_complete());
        for category in Category::ALL {
            let meta = registry.converter(category).unwrap().meta();
            assert_eq!(meta.category, category);
        }
    }

    #[test]
    fn test_round_trip_ratio_categories() {
        let registry = standard_registry();
        let ctx = ConvertContext::new();
        for table in RATIO_TABLES {
            for a in table.units {
                for b in table.units {
                    for x in SAMPLES {
                        let there = registry
                            .convert(&ConversionRequest::new(table.category, *a, *b, x), &ctx)
                            .unwrap();
                        let back = registry
                            .convert(&ConversionRequest::new(table.category, *b, *a, there), &ctx)
                            .unwrap();
                        assert!(approx_eq(back, x, 1e-12),
                            "{}: {} {} -> {} -> {} gave {}", table.category, x, a, b, a, back);
                    }
                }
            }
        }
    }

    #[test]
    fn test_identity_is_exact() {
        for table in RATIO_TABLES {
            for unit in table.units {
                for x in SAMPLES {
                    assert_eq!(convert(table.category, x, unit, unit).unwrap(), x);
                }
            }
        }
    }

    #[test]
    fn test_length_values() {
        let km = convert(Category::Length, 1000.0, "Meters", "Kilometers").unwrap();
        assert!(approx_eq(km, 1.0, 1e-12));

        let feet = convert(Category::Length, 1.0, "Miles", "Feet").unwrap();
        assert!((feet - 5280.0).abs() < 0.01, "got {}", feet);
    }

    #[test]
    fn test_currency_values() {
        assert_eq!(convert(Category::Currency, 1.0, "USD", "PKR").unwrap(), 277.35);

        let usd = convert(Category::Currency, 100.0, "PKR", "USD").unwrap();
        let pkr = convert(Category::Currency, usd, "USD", "PKR").unwrap();
        assert!(approx_eq(pkr, 100.0, 1e-12), "got {}", pkr);
    }

    #[test]
    fn test_temperature_through_registry() {
        assert_eq!(convert(Category::Temperature, 0.0, "Celsius", "Fahrenheit").unwrap(), 32.0);
        assert_eq!(convert(Category::Temperature, 100.0, "C", "F").unwrap(), 212.0);
        assert_eq!(convert(Category::Temperature, 0.0, "Celsius", "Kelvin").unwrap(), 273.15);
        assert_eq!(convert(Category::Temperature, 273.15, "Kelvin", "Celsius").unwrap(), 0.0);
    }

    #[test]
    fn test_time_and_volume() {
        let hours = convert(Category::Time, 3600.0, "Seconds", "Hours").unwrap();
        assert!(approx_eq(hours, 1.0, 1e-12));

        let ml = convert(Category::Volume, 1.0, "Liters", "Milliliters").unwrap();
        assert_eq!(ml, 1000.0);
    }

    #[test]
    fn test_unit_from_other_category_is_unknown() {
        // Each category only accepts its own units
        let err = convert(Category::Volume, 1.0, "Grams", "Liters").unwrap_err();
        assert_eq!(err, UnitError::unknown_unit("Grams", Category::Volume));

        let err = convert(Category::Temperature, 1.0, "Seconds", "Celsius").unwrap_err();
        assert_eq!(err, UnitError::unknown_unit("Seconds", Category::Temperature));
    }

    #[test]
    fn test_unit_lists_in_selector_order() {
        let registry = standard_registry();
        assert_eq!(registry.units(Category::Weight).unwrap(), &["Grams", "Kilograms", "Pounds", "Ounces"]);
        assert_eq!(registry.units(Category::Power).unwrap(), &["Watts", "Kilowatts", "Horsepower"]);
    }

    #[test]
    fn test_suggestions_use_aliases() {
        let registry = standard_registry();
        assert_eq!(registry.suggest_units(Category::Length, "kms"), vec!["Kilometers"]);
        assert_eq!(registry.suggest_units(Category::Length, "Kilometr")[0], "Kilometers");
        assert_eq!(registry.suggest_units(Category::Time, "hours!")[0], "Hours");
    }

    #[test]
    fn test_find_category_prefers_form_order() {
        let registry = standard_registry();
        assert_eq!(registry.find_category("pound"), Some((Category::Weight, "Pounds")));
        assert_eq!(registry.find_category("gbp"), Some((Category::Currency, "GBP")));
    }
}
