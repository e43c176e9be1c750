//! Unitform Plugin System
//!
//! Provides the `Converter` trait implemented once per category, and the
//! registry that dispatches each conversion request to its category's
//! converter.

mod traits;
mod registry;
mod context;

pub use traits::{Converter, ConverterMeta};
pub use registry::ConverterRegistry;
pub use context::{ConvertContext, TemperaturePolicy};
