//! Temperature conversion
//!
//! Temperature is affine, not ratio-based. Four transitions are defined by
//! formula; everything else is decided by the context's `TemperaturePolicy`.

use unitform_core::{Category, UnitError};
use unitform_plugin::{Converter, ConverterMeta, ConvertContext, TemperaturePolicy};

pub struct TemperatureConverter;

const CELSIUS: &str = "Celsius";
const FAHRENHEIT: &str = "Fahrenheit";
const KELVIN: &str = "Kelvin";

static TEMPERATURE_UNITS: [&str; 3] = [CELSIUS, FAHRENHEIT, KELVIN];

static TEMPERATURE_ALIASES: [(&str, &str); 10] = [
    ("c", CELSIUS),
    ("°c", CELSIUS),
    ("degc", CELSIUS),
    ("centigrade", CELSIUS),
    ("f", FAHRENHEIT),
    ("°f", FAHRENHEIT),
    ("degf", FAHRENHEIT),
    ("k", KELVIN),
    ("kelvins", KELVIN),
    ("celcius", CELSIUS),
];

static TEMPERATURE_EXAMPLES: [&str; 3] = [
    "0 Celsius -> 32 Fahrenheit",
    "100 Celsius -> 212 Fahrenheit",
    "273.15 Kelvin -> 0 Celsius",
];

/// The explicit formula table. `None` means the pair has no direct formula.
fn direct(value: f64, from: &str, to: &str) -> Option<f64> {
    match (from, to) {
        (CELSIUS, FAHRENHEIT) => Some(value * 9.0 / 5.0 + 32.0),
        (FAHRENHEIT, CELSIUS) => Some((value - 32.0) * 5.0 / 9.0),
        (CELSIUS, KELVIN) => Some(value + 273.15),
        (KELVIN, CELSIUS) => Some(value - 273.15),
        _ => None,
    }
}

impl TemperatureConverter {
    fn check_unit(unit: &str) -> Result<(), UnitError> {
        if TEMPERATURE_UNITS.iter().any(|u| *u == unit) {
            Ok(())
        } else {
            Err(UnitError::unknown_unit(unit, Category::Temperature))
        }
    }

    fn unsupported(from: &str, to: &str) -> UnitError {
        UnitError::UnsupportedTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

impl Converter for TemperatureConverter {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            category: Category::Temperature,
            reference_unit: CELSIUS,
            description: "Temperature by affine formula through Celsius",
            units: &TEMPERATURE_UNITS,
            aliases: &TEMPERATURE_ALIASES,
            examples: &TEMPERATURE_EXAMPLES,
        }
    }

    fn convert(&self, value: f64, from: &str, to: &str, ctx: &ConvertContext) -> Result<f64, UnitError> {
        Self::check_unit(from)?;
        Self::check_unit(to)?;

        if let Some(result) = direct(value, from, to) {
            return Ok(result);
        }

        match ctx.temperature_policy {
            TemperaturePolicy::Passthrough => Ok(value),
            _ if from == to => Ok(value),
            TemperaturePolicy::Strict => Err(Self::unsupported(from, to)),
            TemperaturePolicy::Compose => direct(value, from, CELSIUS)
                .and_then(|celsius| direct(celsius, CELSIUS, to))
                .ok_or_else(|| Self::unsupported(from, to)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn convert(value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
        TemperatureConverter.convert(value, from, to, &ConvertContext::new())
    }

    fn convert_with(policy: TemperaturePolicy, value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
        let ctx = ConvertContext::new().with_temperature_policy(policy);
        TemperatureConverter.convert(value, from, to, &ctx)
    }

    #[test]
    fn test_freezing_and_boiling() {
        assert_eq!(convert(0.0, "Celsius", "Fahrenheit").unwrap(), 32.0);
        assert_eq!(convert(100.0, "Celsius", "Fahrenheit").unwrap(), 212.0);
    }

    #[test]
    fn test_kelvin() {
        assert_eq!(convert(0.0, "Celsius", "Kelvin").unwrap(), 273.15);
        assert_eq!(convert(273.15, "Kelvin", "Celsius").unwrap(), 0.0);
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(convert(212.0, "Fahrenheit", "Celsius").unwrap(), 100.0);
        assert_eq!(convert(-40.0, "Fahrenheit", "Celsius").unwrap(), -40.0);
    }

    #[test]
    fn test_identity_under_every_policy() {
        for policy in [TemperaturePolicy::Compose, TemperaturePolicy::Strict, TemperaturePolicy::Passthrough] {
            assert_eq!(convert_with(policy, 21.5, "Kelvin", "Kelvin").unwrap(), 21.5);
        }
    }

    #[test]
    fn test_compose_fahrenheit_kelvin() {
        let k = convert(32.0, "Fahrenheit", "Kelvin").unwrap();
        assert!((k - 273.15).abs() < EPS, "got {}", k);

        let f = convert(373.15, "Kelvin", "Fahrenheit").unwrap();
        assert!((f - 212.0).abs() < EPS, "got {}", f);
    }

    #[test]
    fn test_strict_rejects_fahrenheit_kelvin() {
        let err = convert_with(TemperaturePolicy::Strict, 32.0, "Fahrenheit", "Kelvin").unwrap_err();
        assert_eq!(err, UnitError::UnsupportedTransition {
            from: "Fahrenheit".to_string(),
            to: "Kelvin".to_string(),
        });
    }

    #[test]
    fn test_passthrough_returns_input() {
        assert_eq!(convert_with(TemperaturePolicy::Passthrough, 32.0, "Fahrenheit", "Kelvin").unwrap(), 32.0);
        // Defined pairs still use their formula
        assert_eq!(convert_with(TemperaturePolicy::Passthrough, 0.0, "Celsius", "Fahrenheit").unwrap(), 32.0);
    }

    #[test]
    fn test_unknown_unit_under_every_policy() {
        for policy in [TemperaturePolicy::Compose, TemperaturePolicy::Strict, TemperaturePolicy::Passthrough] {
            let err = convert_with(policy, 1.0, "Celsius", "Rankine").unwrap_err();
            assert_eq!(err, UnitError::unknown_unit("Rankine", Category::Temperature));
        }
    }

    #[test]
    fn test_resolve_symbols() {
        assert_eq!(TemperatureConverter.resolve("C"), Some("Celsius"));
        assert_eq!(TemperatureConverter.resolve("k"), Some("Kelvin"));
        assert_eq!(TemperatureConverter.resolve("fahrenheit"), Some("Fahrenheit"));
        assert_eq!(TemperatureConverter.resolve("R"), None);
    }
}
