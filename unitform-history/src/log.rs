//! CSV conversion log
//!
//! One row per completed conversion under the header
//! `Value,From,Converted Value,To`. Appending merges with whatever the file
//! already holds; the merged table is written to a uniquely named temp file
//! in the same directory and persisted over the target.
//!
//! There is no cross-process locking. Two sessions appending to the same
//! file at once can lose each other's rows, but a reader never sees a
//! half-written file.

use std::fs;
use std::path::{Path, PathBuf};
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};
use unitform_core::ConversionRecord;
use crate::HistoryError;

/// Column headers shared by the log and the export file
pub const HEADER: [&str; 4] = ["Value", "From", "Converted Value", "To"];

/// Default log file name
pub const DEFAULT_LOG_FILE: &str = "conversion_history.csv";

/// Default single-row export file name
pub const DEFAULT_EXPORT_FILE: &str = "conversion_result.csv";

/// One CSV row. `converted` is empty when a form is exported before converting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRow {
    #[serde(rename = "Value")]
    pub value: f64,
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "Converted Value")]
    pub converted: Option<f64>,
    #[serde(rename = "To")]
    pub to: String,
}

impl From<&ConversionRecord> for LogRow {
    fn from(record: &ConversionRecord) -> Self {
        LogRow {
            value: record.value,
            from: record.from.clone(),
            converted: Some(record.converted),
            to: record.to.clone(),
        }
    }
}

/// Append-merge CSV log at a fixed path
#[derive(Debug, Clone)]
pub struct ConversionLog {
    path: PathBuf,
}

impl ConversionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Log file `DEFAULT_LOG_FILE` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_LOG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All rows in the log. A missing or empty file is an empty log.
    pub fn read(&self) -> Result<Vec<LogRow>, HistoryError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no conversion log yet");
            return Ok(Vec::new());
        }

        // Hand-edited logs may pad the header cells ("Value, From, ...")
        let mut reader = ReaderBuilder::new()
            .trim(Trim::Headers)
            .from_path(&self.path)?;
        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Ok(Vec::new());
        }
        check_header(&self.path, &headers)?;

        let mut rows = Vec::new();
        for result in reader.deserialize() {
            let row: LogRow = result?;
            rows.push(row);
        }
        Ok(rows)
    }

    /// Append records after the existing rows. Returns the number appended.
    pub fn append(&self, records: &[ConversionRecord]) -> Result<usize, HistoryError> {
        if records.is_empty() {
            return Ok(0);
        }

        let mut rows = self.read()?;
        let existing = rows.len();
        rows.extend(records.iter().map(LogRow::from));
        write_rows(&self.path, &rows)?;

        info!(
            path = %self.path.display(),
            existing,
            appended = records.len(),
            "conversion log updated"
        );
        Ok(records.len())
    }
}

/// Write a single-row export file for one completed conversion (overwrites)
pub fn export_record(path: impl AsRef<Path>, record: &ConversionRecord) -> Result<(), HistoryError> {
    export_row(path, &LogRow::from(record))
}

/// Write a single-row export file (overwrites)
pub fn export_row(path: impl AsRef<Path>, row: &LogRow) -> Result<(), HistoryError> {
    let path = path.as_ref();
    write_rows(path, std::slice::from_ref(row))?;
    info!(path = %path.display(), "conversion exported");
    Ok(())
}

/// Render rows as CSV text, header included
pub fn to_csv_string(rows: &[LogRow]) -> Result<String, HistoryError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_all(&mut writer, rows)?;
    let bytes = writer.into_inner().map_err(|e| HistoryError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn check_header(path: &Path, headers: &csv::StringRecord) -> Result<(), HistoryError> {
    let found: Vec<&str> = headers.iter().map(str::trim).collect();
    if found != HEADER {
        warn!(path = %path.display(), found = ?found, "conversion log has unexpected columns");
        return Err(HistoryError::SchemaMismatch {
            path: path.display().to_string(),
            found: found.join(", "),
        });
    }
    Ok(())
}

fn write_all<W: std::io::Write>(writer: &mut csv::Writer<W>, rows: &[LogRow]) -> Result<(), HistoryError> {
    // serde only emits the header alongside the first row
    if rows.is_empty() {
        writer.write_record(HEADER)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_rows(path: &Path, rows: &[LogRow]) -> Result<(), HistoryError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Removed on drop if anything below fails
    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = csv::Writer::from_writer(tmp.as_file_mut());
        write_all(&mut writer, rows)?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn record(value: f64, from: &str, converted: f64, to: &str) -> ConversionRecord {
        ConversionRecord {
            value,
            from: from.to_string(),
            converted,
            to: to.to_string(),
        }
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let log = ConversionLog::in_dir(dir.path());
        assert!(log.read().unwrap().is_empty());
    }

    #[test]
    fn test_append_creates_file_with_header() {
        let dir = tempdir().unwrap();
        let log = ConversionLog::in_dir(dir.path());

        let appended = log.append(&[record(1000.0, "Meters", 1.0, "Kilometers")]).unwrap();
        assert_eq!(appended, 1);

        let text = fs::read_to_string(log.path()).unwrap();
        assert!(text.starts_with("Value,From,Converted Value,To\n"), "got {}", text);
        assert!(text.contains("Meters"));
    }

    #[test]
    fn test_append_merges_with_existing_rows() {
        let dir = tempdir().unwrap();
        let log = ConversionLog::in_dir(dir.path());

        log.append(&[record(1.0, "USD", 277.35, "PKR")]).unwrap();
        log.append(&[
            record(0.0, "Celsius", 32.0, "Fahrenheit"),
            record(3600.0, "Seconds", 1.0, "Hours"),
        ]).unwrap();

        let rows = log.read().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].from, "USD");
        assert_eq!(rows[2].to, "Hours");
        assert_eq!(rows[1].converted, Some(32.0));
    }

    #[test]
    fn test_append_reads_externally_written_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "Value,From,Converted Value,To").unwrap();
        writeln!(file, "5.0,Kilograms,5000.0,Grams").unwrap();
        drop(file);

        let log = ConversionLog::new(&path);
        log.append(&[record(1.0, "Watts", 0.001, "Kilowatts")]).unwrap();

        let rows = log.read().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].value, 5.0);
        assert_eq!(rows[0].converted, Some(5000.0));
    }

    #[test]
    fn test_schema_mismatch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("other.csv");
        fs::write(&path, "a,b,c\n1,2,3\n").unwrap();

        let log = ConversionLog::new(&path);
        let err = log.append(&[record(1.0, "USD", 0.92, "EUR")]).unwrap_err();
        assert!(matches!(err, HistoryError::SchemaMismatch { .. }));

        // File left untouched
        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b,c\n1,2,3\n");
    }

    #[test]
    fn test_empty_file_is_empty_log() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "").unwrap();

        let log = ConversionLog::new(&path);
        assert!(log.read().unwrap().is_empty());
        log.append(&[record(1.0, "USD", 0.79, "GBP")]).unwrap();
        assert_eq!(log.read().unwrap().len(), 1);
    }

    #[test]
    fn test_append_nothing_does_not_create_file() {
        let dir = tempdir().unwrap();
        let log = ConversionLog::in_dir(dir.path());
        assert_eq!(log.append(&[]).unwrap(), 0);
        assert!(!log.path().exists());
    }

    #[test]
    fn test_export_single_row_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE);

        export_record(&path, &record(1.0, "USD", 277.35, "PKR")).unwrap();
        export_record(&path, &record(2.0, "USD", 554.7, "PKR")).unwrap();

        let rows = ConversionLog::new(&path).read().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value, 2.0);
    }

    #[test]
    fn test_export_row_without_result() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(DEFAULT_EXPORT_FILE);
        let row = LogRow {
            value: 0.0,
            from: "Meters".to_string(),
            converted: None,
            to: "Meters".to_string(),
        };
        export_row(&path, &row).unwrap();

        let rows = ConversionLog::new(&path).read().unwrap();
        assert_eq!(rows[0].converted, None);
    }

    #[test]
    fn test_padded_header_is_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("padded.csv");
        fs::write(&path, "Value, From, Converted Value, To\n1.0,USD,277.35,PKR\n").unwrap();

        let log = ConversionLog::new(&path);
        let rows = log.read().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].from, "USD");
        assert_eq!(rows[0].converted, Some(277.35));

        log.append(&[record(2.0, "USD", 1.84, "EUR")]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Value,From,Converted Value,To\n"), "got {}", text);
        assert_eq!(log.read().unwrap().len(), 2);
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        // A non-empty directory cannot be replaced by a file
        let target = dir.path().join(DEFAULT_EXPORT_FILE);
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "x").unwrap();

        let row = LogRow::from(&record(1.0, "USD", 277.35, "PKR"));
        assert!(export_row(&target, &row).is_err());

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1, "stray files: {:?}", entries);
        assert!(target.join("keep").exists());
    }

    #[test]
    fn test_write_leaves_only_target() {
        let dir = tempdir().unwrap();
        let log = ConversionLog::in_dir(dir.path());
        log.append(&[record(1.0, "Watts", 0.001, "Kilowatts")]).unwrap();
        log.append(&[record(2.0, "Watts", 0.002, "Kilowatts")]).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from(DEFAULT_LOG_FILE)]);
    }

    #[test]
    fn test_to_csv_string() {
        let rows = vec![LogRow::from(&record(1.0, "Watts", 0.001, "Kilowatts"))];
        let text = to_csv_string(&rows).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Value,From,Converted Value,To"));
        assert_eq!(lines.next(), Some("1.0,Watts,0.001,Kilowatts"));

        let empty = to_csv_string(&[]).unwrap();
        assert_eq!(empty, "Value,From,Converted Value,To\n");
    }
}
