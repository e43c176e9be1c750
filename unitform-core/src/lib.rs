//! Unitform Core - Fundamental types
//!
//! This crate provides the core types used throughout Unitform:
//! - `Category`: the closed set of conversion domains
//! - `ConversionRequest` / `ConversionRecord`: one conversion and its log entry
//! - `UnitError`: engine errors
//! - `FormError`: structured errors shown to the user

mod category;
mod record;
mod error;
mod display;

pub use category::Category;
pub use record::{ConversionRequest, ConversionRecord};
pub use error::{UnitError, FormError, ErrorContext, Severity, codes};
pub use display::{format_display, DEFAULT_PRECISION};
