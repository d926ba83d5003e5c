use std::env;
use std::path::PathBuf;

use crate::history::DEFAULT_MAX_LENGTH;
use crate::priority::Priority;

/// Default location of the file sink.
pub const DEFAULT_LOG_FILE: &str = "/var/log/splash.log";

pub const ENV_VERBOSITY: &str = "SPINLOG_VERBOSITY";
pub const ENV_TO_FILE: &str = "SPINLOG_TO_FILE";
pub const ENV_FILE: &str = "SPINLOG_FILE";
pub const ENV_MAX_LENGTH: &str = "SPINLOG_MAX_LENGTH";

/// Initial settings of a [`Log`](crate::Log).
///
/// Verbosity and the file-sink flag can still be changed at runtime; the
/// history length and file path are fixed once the facility is built.
///
/// ```
/// # use spinlog::{LogConfig, Priority};
/// let config = LogConfig::default()
///     .with_verbosity(Priority::Warning)
///     .with_max_length(100);
/// assert_eq!(config.max_length, 100);
/// assert!(!config.log_to_file);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub max_length: usize,
    pub verbosity: Priority,
    pub log_to_file: bool,
    pub file_path: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            verbosity: Priority::Message,
            log_to_file: false,
            file_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl LogConfig {
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_verbosity(mut self, verbosity: Priority) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_log_to_file(mut self, log_to_file: bool) -> Self {
        self.log_to_file = log_to_file;
        self
    }

    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    /// Defaults overridden by the `SPINLOG_*` environment variables.
    ///
    /// Unparseable values are reported and ignored.
    pub fn from_env() -> Self {
        Self::default().apply_vars(|key| env::var(key).ok())
    }

    /// Applies overrides from an arbitrary variable lookup.
    pub fn apply_vars<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_VERBOSITY) {
            match raw.parse() {
                Ok(verbosity) => self.verbosity = verbosity,
                Err(err) => tracing::warn!(var = ENV_VERBOSITY, %err, "ignoring verbosity override"),
            }
        }

        if let Some(raw) = lookup(ENV_TO_FILE) {
            match parse_flag(&raw) {
                Some(flag) => self.log_to_file = flag,
                None => tracing::warn!(var = ENV_TO_FILE, value = %raw, "ignoring file sink override"),
            }
        }

        if let Some(path) = lookup(ENV_FILE) {
            if path.is_empty() {
                tracing::warn!(var = ENV_FILE, "ignoring empty log file path");
            } else {
                self.file_path = PathBuf::from(path);
            }
        }

        if let Some(raw) = lookup(ENV_MAX_LENGTH) {
            match raw.trim().parse::<usize>() {
                Ok(max_length) => self.max_length = max_length,
                Err(err) => tracing::warn!(var = ENV_MAX_LENGTH, %err, "ignoring history length override"),
            }
        }

        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
