//! Unitform History
//!
//! Session history and CSV persistence:
//! - `Session`: explicit per-session record list with a flush mark
//! - `ConversionLog`: append-merge CSV log (`Value,From,Converted Value,To`)
//! - `export_record`: single-row export of the latest conversion

mod error;
mod log;
mod session;

pub use error::HistoryError;
pub use log::{
    ConversionLog, LogRow, export_record, export_row, to_csv_string,
    HEADER, DEFAULT_LOG_FILE, DEFAULT_EXPORT_FILE,
};
pub use session::Session;
