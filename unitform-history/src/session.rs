//! Per-session conversion history

use tracing::debug;
use unitform_core::ConversionRecord;
use crate::{ConversionLog, HistoryError};

/// History of one interactive session.
///
/// Owned by whoever drives the form; nothing is shared between sessions.
/// Records past the flush mark are pending until `flush` appends them to a log.
#[derive(Debug, Clone, Default)]
pub struct Session {
    records: Vec<ConversionRecord>,
    flushed: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: ConversionRecord) {
        debug!(%record, total = self.records.len() + 1, "recorded conversion");
        self.records.push(record);
    }

    /// Every record of this session, oldest first
    pub fn history(&self) -> &[ConversionRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&ConversionRecord> {
        self.records.last()
    }

    /// Records not yet written to a log
    pub fn pending(&self) -> &[ConversionRecord] {
        &self.records[self.flushed..]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append pending records to the log. Flushing twice never duplicates rows.
    pub fn flush(&mut self, log: &ConversionLog) -> Result<usize, HistoryError> {
        let appended = log.append(self.pending())?;
        self.flushed = self.records.len();
        Ok(appended)
    }

    /// Forget this session's history. Rows already flushed stay in the log.
    pub fn clear(&mut self) {
        self.records.clear();
        self.flushed = 0;
    }
}
