//! Runtime settings: flags with environment fallbacks

use std::path::PathBuf;
use clap::Args;
use unitform_core::DEFAULT_PRECISION;
use unitform_history::{ConversionLog, DEFAULT_EXPORT_FILE, DEFAULT_LOG_FILE};
use unitform_plugin::{ConvertContext, TemperaturePolicy};

#[derive(Args, Debug, Clone)]
pub struct Settings {
    /// Directory holding the history and export files
    #[arg(long, env = "UNITFORM_DATA_PATH", default_value = ".", global = true)]
    pub data_dir: PathBuf,

    /// History log file name (relative to the data directory)
    #[arg(long, env = "UNITFORM_HISTORY_FILE", default_value = DEFAULT_LOG_FILE, global = true)]
    pub history_file: String,

    /// Decimal places shown for results
    #[arg(long, env = "UNITFORM_PRECISION", default_value_t = DEFAULT_PRECISION, global = true)]
    pub precision: usize,

    /// Temperature pairs without a formula: compose, strict or passthrough
    #[arg(long, env = "UNITFORM_TEMPERATURE_POLICY", default_value_t = TemperaturePolicy::Compose, global = true)]
    pub temperature_policy: TemperaturePolicy,

    /// Log filter written to stderr (e.g. "info", "unitform_history=debug")
    #[arg(long, env = "UNITFORM_LOG", default_value = "warn", global = true)]
    pub log_level: String,
}

impl Settings {
    pub fn context(&self) -> ConvertContext {
        ConvertContext::new()
            .with_precision(self.precision)
            .with_temperature_policy(self.temperature_policy)
    }

    pub fn log(&self) -> ConversionLog {
        ConversionLog::new(self.data_dir.join(&self.history_file))
    }

    /// Export target: an explicit path as given, else the default file in the data directory
    pub fn export_path(&self, output: Option<PathBuf>) -> PathBuf {
        output.unwrap_or_else(|| self.data_dir.join(DEFAULT_EXPORT_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            data_dir: PathBuf::from("data"),
            history_file: DEFAULT_LOG_FILE.to_string(),
            precision: 3,
            temperature_policy: TemperaturePolicy::Strict,
            log_level: "warn".to_string(),
        }
    }

    #[test]
    fn test_paths() {
        let s = settings();
        assert_eq!(s.log().path(), PathBuf::from("data").join(DEFAULT_LOG_FILE).as_path());
        assert_eq!(s.export_path(None), PathBuf::from("data").join(DEFAULT_EXPORT_FILE));
        assert_eq!(s.export_path(Some(PathBuf::from("out.csv"))), PathBuf::from("out.csv"));
    }

    #[test]
    fn test_context() {
        let ctx = settings().context();
        assert_eq!(ctx.precision, 3);
        assert_eq!(ctx.temperature_policy, TemperaturePolicy::Strict);
    }
}
