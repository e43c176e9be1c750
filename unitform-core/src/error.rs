//! Errors
//!
//! `UnitError` is what the engine returns. `FormError` is what the user sees:
//! a machine-readable code, a message naming the offending input, and an
//! optional suggestion for correcting the selection.

use crate::Category;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conversion engine errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("unknown unit '{unit}' for category {category}")]
    UnknownUnit { unit: String, category: Category },

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("no temperature conversion defined from {from} to {to}")]
    UnsupportedTransition { from: String, to: String },

    #[error("no converter registered for category {0}")]
    NoConverter(Category),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("cannot parse conversion: {0}")]
    Parse(String),
}

impl UnitError {
    pub fn unknown_unit(unit: impl Into<String>, category: Category) -> Self {
        UnitError::UnknownUnit { unit: unit.into(), category }
    }
}

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNSUPPORTED_TRANSITION: &str = "UNSUPPORTED_TRANSITION";
    pub const NO_CONVERTER: &str = "NO_CONVERTER";
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const UNKNOWN_COMMAND: &str = "UNKNOWN_COMMAND";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const SCHEMA_MISMATCH: &str = "SCHEMA_MISMATCH";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// This action failed; the form is still usable
    Error,
    /// The session cannot continue
    Fatal,
}

/// Where in the form an error occurred
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Form field involved ("from", "to", "value", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Raw input line that triggered the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

/// Structured error surfaced to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,

    pub severity: Severity,
}

impl FormError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set form field context
    pub fn in_field(mut self, field: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.field = Some(field.into());
        self
    }

    /// Builder: set raw input context
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.input = Some(input.into());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    pub fn unknown_unit(unit: &str, category: Category) -> Self {
        Self::new(codes::UNKNOWN_UNIT,
            format!("Unknown unit '{}' for category {}", unit, category))
            .with_suggestion(format!("Use 'units' to list {} units", category))
    }

    pub fn unknown_category(name: &str) -> Self {
        Self::new(codes::UNKNOWN_CATEGORY, format!("Unknown category: {}", name))
            .with_suggestion("Use 'categories' to list available categories")
    }

    pub fn invalid_value(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_VALUE, format!("Invalid value: {}", details.into()))
            .with_suggestion("Enter a decimal number such as 12.5")
    }

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
            .with_suggestion("Try a form like '100 km to mi'")
    }

    pub fn unknown_command(command: &str) -> Self {
        Self::new(codes::UNKNOWN_COMMAND, format!("Unknown command: {}", command))
            .with_suggestion("Use 'help' to list commands")
    }

    pub fn io_error(details: impl Into<String>) -> Self {
        Self::new(codes::IO_ERROR, format!("I/O error: {}", details.into()))
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
            .with_severity(Severity::Fatal)
    }
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for FormError {}

impl From<UnitError> for FormError {
    fn from(err: UnitError) -> Self {
        match err {
            UnitError::UnknownUnit { unit, category } => Self::unknown_unit(&unit, category),
            UnitError::UnknownCategory(name) => Self::unknown_category(&name),
            UnitError::UnsupportedTransition { from, to } => Self::new(
                codes::UNSUPPORTED_TRANSITION,
                format!("No temperature conversion defined from {} to {}", from, to),
            )
            .with_suggestion("Convert through Celsius, or run with --temperature-policy compose"),
            UnitError::NoConverter(category) => {
                Self::internal(format!("no converter registered for {}", category))
            }
            UnitError::InvalidValue(s) => Self::invalid_value(s),
            UnitError::Parse(s) => Self::parse_error(s),
        }
    }
}
