use log::{LevelFilter, Metadata, Record, SetLoggerError};
use tracing_subscriber::EnvFilter;

use crate::facility::Log;
use crate::priority::Priority;

/// Routes records from the `log` crate macros into a [`Log`].
///
/// Levels map as Trace/Debug to `Debugging`, Info to `Message`, Warn to
/// `Warning` and Error to `Error`. The record's target prefixes the body.
pub struct LogBridge {
    log: &'static Log,
}

impl LogBridge {
    pub fn new(log: &'static Log) -> Self {
        Self { log }
    }

    /// A bridge into the process-wide facility.
    pub fn global() -> Self {
        Self::new(Log::get())
    }

    /// Installs the bridge as the global `log` logger.
    ///
    /// Fails if another logger has already been installed.
    pub fn install(self, max_level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }

    /// Installs the bridge, then a `tracing` fmt subscriber filtered by
    /// `RUST_LOG`.
    ///
    /// The bridge goes first so it owns the `log` slot; an already present
    /// tracing subscriber is left in place.
    pub fn install_with_tracing(self, max_level: LevelFilter) -> Result<(), SetLoggerError> {
        self.install(max_level)?;
        if let Err(err) = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init()
        {
            tracing::debug!(%err, "tracing subscriber already installed");
        }
        Ok(())
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        // Entries below verbosity are still retained, so nothing is dropped here
        true
    }

    fn log(&self, record: &Record) {
        // Format before recording: the facility lock is not reentrant
        let body = format!("{}: {}", record.target(), record.args());
        self.log.record_str(Priority::from(record.level()), &body);
    }

    fn flush(&self) {}
}
