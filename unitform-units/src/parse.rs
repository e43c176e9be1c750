//! Quick conversion parsing - "100 km to mi", "32 F -> C"

use unitform_core::{ConversionRequest, UnitError};
use unitform_plugin::ConverterRegistry;

/// Separators accepted between the source quantity and the target unit
const SEPARATORS: [&str; 4] = ["->", "→", " to ", " in "];

/// Parse a quick conversion, inferring the category from the source unit.
///
/// Supported formats:
/// - "100 km to mi"
/// - "100km in miles"
/// - "32 F -> C"
/// - "-40 Fahrenheit → Celsius"
pub fn parse_conversion(registry: &ConverterRegistry, s: &str) -> Result<ConversionRequest, UnitError> {
    let (quantity, target) = split_conversion(s)?;
    let (value, source) = parse_quantity(quantity)?;

    let (category, from) = registry.find_category(source)
        .ok_or_else(|| UnitError::Parse(format!("no category has a unit named '{}'", source)))?;
    let to = registry.resolve_unit(category, target)?;

    Ok(ConversionRequest::new(category, from, to, value))
}

/// Parse a standalone numeric value ("12.5", "-3", "1e3")
pub fn parse_value(s: &str) -> Result<f64, UnitError> {
    let s = s.trim();
    let value: f64 = s.parse()
        .map_err(|_| UnitError::InvalidValue(format!("'{}' is not a number", s)))?;
    if !value.is_finite() {
        return Err(UnitError::InvalidValue(format!("'{}' is not a finite number", s)));
    }
    Ok(value)
}

/// Split "quantity SEP unit" at the first separator found
fn split_conversion(s: &str) -> Result<(&str, &str), UnitError> {
    // ASCII lowering keeps byte offsets aligned with the input
    let lower = s.to_ascii_lowercase();

    for sep in &SEPARATORS {
        if let Some(pos) = lower.find(sep) {
            let left = s[..pos].trim();
            let right = s[pos + sep.len()..].trim();
            if left.is_empty() || right.is_empty() {
                return Err(UnitError::Parse(format!("missing quantity or target unit in '{}'", s.trim())));
            }
            return Ok((left, right));
        }
    }

    Err(UnitError::Parse(format!(
        "expected '<value> <unit> to <unit>', got '{}'",
        s.trim()
    )))
}

/// Split "100 km" or "100km" into value and unit text
fn parse_quantity(s: &str) -> Result<(f64, &str), UnitError> {
    let s = s.trim();
    let end = number_prefix_len(s);

    if end == 0 {
        return Err(UnitError::InvalidValue(format!("'{}' does not start with a number", s)));
    }

    let value = parse_value(&s[..end])?;
    let unit = s[end..].trim();

    if unit.is_empty() {
        return Err(UnitError::Parse(format!("missing source unit in '{}'", s)));
    }

    Ok((value, unit))
}

/// Byte length of the leading numeric literal (sign, digits, fraction, exponent)
fn number_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'-' || bytes[i] == b'+') {
        i += 1;
    }

    let digits_start = i;
    while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
        i += 1;
    }
    if i == digits_start {
        return 0;
    }

    // Exponent only counts when digits follow, so "5 EUR" and "5eur" stay units
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'-' || bytes[j] == b'+') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }

    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard_registry;
    use unitform_core::Category;

    #[test]
    fn test_parse_simple() {
        let req = parse_conversion(&standard_registry(), "100 km to mi").unwrap();
        assert_eq!(req.category, Category::Length);
        assert_eq!(req.from, "Kilometers");
        assert_eq!(req.to, "Miles");
        assert_eq!(req.value, 100.0);
    }

    #[test]
    fn test_parse_arrow_and_no_space() {
        let req = parse_conversion(&standard_registry(), "32F -> C").unwrap();
        assert_eq!(req.category, Category::Temperature);
        assert_eq!(req.from, "Fahrenheit");
        assert_eq!(req.to, "Celsius");
        assert_eq!(req.value, 32.0);
    }

    #[test]
    fn test_parse_unicode_arrow_negative() {
        let req = parse_conversion(&standard_registry(), "-40 Fahrenheit → Celsius").unwrap();
        assert_eq!(req.value, -40.0);
        assert_eq!(req.to, "Celsius");
    }

    #[test]
    fn test_parse_in_separator_case_insensitive() {
        let req = parse_conversion(&standard_registry(), "2 Days IN hours").unwrap();
        assert_eq!(req.category, Category::Time);
        assert_eq!(req.to, "Hours");
    }

    #[test]
    fn test_parse_currency_code_not_exponent() {
        let req = parse_conversion(&standard_registry(), "5EUR to usd").unwrap();
        assert_eq!(req.value, 5.0);
        assert_eq!(req.from, "EUR");
        assert_eq!(req.to, "USD");
    }

    #[test]
    fn test_parse_scientific() {
        let req = parse_conversion(&standard_registry(), "1.5e3 m to km").unwrap();
        assert_eq!(req.value, 1500.0);
    }

    #[test]
    fn test_parse_multiword_alias() {
        let req = parse_conversion(&standard_registry(), "60 miles per hour to km/h").unwrap();
        assert_eq!(req.category, Category::Speed);
        assert_eq!(req.from, "Miles/Hour");
    }

    #[test]
    fn test_target_in_other_category() {
        let err = parse_conversion(&standard_registry(), "1 kg to km").unwrap_err();
        assert_eq!(err, UnitError::unknown_unit("km", Category::Weight));
    }

    #[test]
    fn test_unknown_source_unit() {
        let err = parse_conversion(&standard_registry(), "3 furlongs to m").unwrap_err();
        assert!(matches!(err, UnitError::Parse(_)));
    }

    #[test]
    fn test_missing_separator() {
        let err = parse_conversion(&standard_registry(), "100 km").unwrap_err();
        assert!(matches!(err, UnitError::Parse(_)));
    }

    #[test]
    fn test_missing_number() {
        let err = parse_conversion(&standard_registry(), "km to mi").unwrap_err();
        assert!(matches!(err, UnitError::InvalidValue(_)));
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value(" 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_value("-3").unwrap(), -3.0);
        assert!(parse_value("abc").is_err());
        assert!(parse_value("inf").is_err());
        assert!(parse_value("NaN").is_err());
    }
}
