//! History errors

use std::string::FromUtf8Error;
use thiserror::Error;
use unitform_core::{codes, FormError};

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{path} has columns [{found}], expected [Value, From, Converted Value, To]")]
    SchemaMismatch { path: String, found: String },

    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

impl From<HistoryError> for FormError {
    fn from(err: HistoryError) -> Self {
        match err {
            HistoryError::SchemaMismatch { .. } => FormError::new(codes::SCHEMA_MISMATCH, err.to_string())
                .with_suggestion("Move the file aside or choose another --history-file"),
            other => FormError::io_error(other.to_string()),
        }
    }
}
