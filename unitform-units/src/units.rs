//! Unit tables for the ratio-based categories
//!
//! Factors express how many of the unit equal one reference unit
//! (the first entry of each table).

use unitform_core::Category;
use crate::RatioConverter;

// ============ length (reference: Meters) ============

const LENGTH_UNITS: [&str; 4] = ["Meters", "Kilometers", "Miles", "Feet"];

const LENGTH_FACTORS: [(&str, f64); 4] = [
    ("Meters", 1.0),
    ("Kilometers", 0.001),
    ("Miles", 0.000621371),
    ("Feet", 3.28084),
];

const LENGTH_ALIASES: [(&str, &str); 12] = [
    ("m", "Meters"),
    ("meter", "Meters"),
    ("metre", "Meters"),
    ("metres", "Meters"),
    ("km", "Kilometers"),
    ("kilometer", "Kilometers"),
    ("kilometre", "Kilometers"),
    ("kilometres", "Kilometers"),
    ("mi", "Miles"),
    ("mile", "Miles"),
    ("ft", "Feet"),
    ("foot", "Feet"),
];

const LENGTH_EXAMPLES: [&str; 2] = [
    "1000 Meters -> 1 Kilometers",
    "1 Miles -> 5280 Feet",
];

pub const LENGTH: RatioConverter = RatioConverter {
    category: Category::Length,
    description: "Distance between metric and imperial units",
    units: &LENGTH_UNITS,
    factors: &LENGTH_FACTORS,
    aliases: &LENGTH_ALIASES,
    examples: &LENGTH_EXAMPLES,
};

// ============ weight (reference: Grams) ============

const WEIGHT_UNITS: [&str; 4] = ["Grams", "Kilograms", "Pounds", "Ounces"];

const WEIGHT_FACTORS: [(&str, f64); 4] = [
    ("Grams", 1.0),
    ("Kilograms", 0.001),
    ("Pounds", 0.00220462),
    ("Ounces", 0.035274),
];

const WEIGHT_ALIASES: [(&str, &str); 10] = [
    ("g", "Grams"),
    ("gram", "Grams"),
    ("kg", "Kilograms"),
    ("kilogram", "Kilograms"),
    ("kilo", "Kilograms"),
    ("lb", "Pounds"),
    ("lbs", "Pounds"),
    ("pound", "Pounds"),
    ("oz", "Ounces"),
    ("ounce", "Ounces"),
];

const WEIGHT_EXAMPLES: [&str; 2] = [
    "1000 Grams -> 1 Kilograms",
    "1 Kilograms -> 2.20 Pounds",
];

pub const WEIGHT: RatioConverter = RatioConverter {
    category: Category::Weight,
    description: "Mass in metric and avoirdupois units",
    units: &WEIGHT_UNITS,
    factors: &WEIGHT_FACTORS,
    aliases: &WEIGHT_ALIASES,
    examples: &WEIGHT_EXAMPLES,
};

// ============ volume (reference: Liters) ============

const VOLUME_UNITS: [&str; 4] = ["Liters", "Milliliters", "Gallons", "Cups"];

const VOLUME_FACTORS: [(&str, f64); 4] = [
    ("Liters", 1.0),
    ("Milliliters", 1000.0),
    ("Gallons", 0.264172),
    ("Cups", 4.22675),
];

const VOLUME_ALIASES: [(&str, &str); 10] = [
    ("l", "Liters"),
    ("liter", "Liters"),
    ("litre", "Liters"),
    ("litres", "Liters"),
    ("ml", "Milliliters"),
    ("milliliter", "Milliliters"),
    ("millilitre", "Milliliters"),
    ("gal", "Gallons"),
    ("gallon", "Gallons"),
    ("cup", "Cups"),
];

const VOLUME_EXAMPLES: [&str; 2] = [
    "1 Liters -> 1000 Milliliters",
    "1 Gallons -> 16 Cups",
];

pub const VOLUME: RatioConverter = RatioConverter {
    category: Category::Volume,
    description: "Liquid volume in metric and US customary units",
    units: &VOLUME_UNITS,
    factors: &VOLUME_FACTORS,
    aliases: &VOLUME_ALIASES,
    examples: &VOLUME_EXAMPLES,
};

// ============ speed (reference: Meters/Second) ============

const SPEED_UNITS: [&str; 3] = ["Meters/Second", "Kilometers/Hour", "Miles/Hour"];

const SPEED_FACTORS: [(&str, f64); 3] = [
    ("Meters/Second", 1.0),
    ("Kilometers/Hour", 3.6),
    ("Miles/Hour", 2.23694),
];

const SPEED_ALIASES: [(&str, &str); 8] = [
    ("m/s", "Meters/Second"),
    ("mps", "Meters/Second"),
    ("km/h", "Kilometers/Hour"),
    ("kmh", "Kilometers/Hour"),
    ("kph", "Kilometers/Hour"),
    ("mph", "Miles/Hour"),
    ("mi/h", "Miles/Hour"),
    ("miles per hour", "Miles/Hour"),
];

const SPEED_EXAMPLES: [&str; 2] = [
    "10 Meters/Second -> 36 Kilometers/Hour",
    "100 Kilometers/Hour -> 62.14 Miles/Hour",
];

pub const SPEED: RatioConverter = RatioConverter {
    category: Category::Speed,
    description: "Velocity in metric and imperial units",
    units: &SPEED_UNITS,
    factors: &SPEED_FACTORS,
    aliases: &SPEED_ALIASES,
    examples: &SPEED_EXAMPLES,
};

// ============ time (reference: Seconds) ============

const TIME_UNITS: [&str; 4] = ["Seconds", "Minutes", "Hours", "Days"];

const TIME_FACTORS: [(&str, f64); 4] = [
    ("Seconds", 1.0),
    ("Minutes", 1.0 / 60.0),
    ("Hours", 1.0 / 3600.0),
    ("Days", 1.0 / 86400.0),
];

const TIME_ALIASES: [(&str, &str); 12] = [
    ("s", "Seconds"),
    ("sec", "Seconds"),
    ("second", "Seconds"),
    ("min", "Minutes"),
    ("mins", "Minutes"),
    ("minute", "Minutes"),
    ("h", "Hours"),
    ("hr", "Hours"),
    ("hrs", "Hours"),
    ("hour", "Hours"),
    ("d", "Days"),
    ("day", "Days"),
];

const TIME_EXAMPLES: [&str; 2] = [
    "3600 Seconds -> 1 Hours",
    "2 Days -> 48 Hours",
];

pub const TIME: RatioConverter = RatioConverter {
    category: Category::Time,
    description: "Durations from seconds to days",
    units: &TIME_UNITS,
    factors: &TIME_FACTORS,
    aliases: &TIME_ALIASES,
    examples: &TIME_EXAMPLES,
};

// ============ currency (reference: USD) ============

// Fixed rates; no live lookup.
const CURRENCY_UNITS: [&str; 4] = ["USD", "EUR", "GBP", "PKR"];

const CURRENCY_FACTORS: [(&str, f64); 4] = [
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("PKR", 277.35),
];

const CURRENCY_ALIASES: [(&str, &str); 10] = [
    ("$", "USD"),
    ("dollar", "USD"),
    ("dollars", "USD"),
    ("€", "EUR"),
    ("euro", "EUR"),
    ("euros", "EUR"),
    ("£", "GBP"),
    ("sterling", "GBP"),
    ("rupee", "PKR"),
    ("rupees", "PKR"),
];

const CURRENCY_EXAMPLES: [&str; 2] = [
    "1 USD -> 277.35 PKR",
    "100 EUR -> 85.87 GBP",
];

pub const CURRENCY: RatioConverter = RatioConverter {
    category: Category::Currency,
    description: "Currency at fixed reference rates against USD",
    units: &CURRENCY_UNITS,
    factors: &CURRENCY_FACTORS,
    aliases: &CURRENCY_ALIASES,
    examples: &CURRENCY_EXAMPLES,
};

// ============ power (reference: Watts) ============

const POWER_UNITS: [&str; 3] = ["Watts", "Kilowatts", "Horsepower"];

const POWER_FACTORS: [(&str, f64); 3] = [
    ("Watts", 1.0),
    ("Kilowatts", 0.001),
    ("Horsepower", 0.00134),
];

const POWER_ALIASES: [(&str, &str); 6] = [
    ("w", "Watts"),
    ("watt", "Watts"),
    ("kw", "Kilowatts"),
    ("kilowatt", "Kilowatts"),
    ("hp", "Horsepower"),
    ("bhp", "Horsepower"),
];

const POWER_EXAMPLES: [&str; 2] = [
    "1000 Watts -> 1 Kilowatts",
    "1 Kilowatts -> 1.34 Horsepower",
];

pub const POWER: RatioConverter = RatioConverter {
    category: Category::Power,
    description: "Power in watts and mechanical horsepower",
    units: &POWER_UNITS,
    factors: &POWER_FACTORS,
    aliases: &POWER_ALIASES,
    examples: &POWER_EXAMPLES,
};

/// All ratio-based tables, in form order
pub const RATIO_TABLES: [RatioConverter; 7] = [LENGTH, WEIGHT, VOLUME, SPEED, TIME, CURRENCY, POWER];
