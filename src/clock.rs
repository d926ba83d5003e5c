//! Timestamp sources for formatted log lines.
//!
//! Lines carry local wall-clock time at second resolution. Ordering of the
//! history never depends on these values: two entries may share a timestamp,
//! or even appear inverted after a clock adjustment.

use chrono::Local;

/// `strftime` pattern for the ISO-like local date-time (`%FT%T`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Produces the timestamp prefix of a log line.
pub trait Clock: Send {
    fn timestamp(&self) -> String;
}

/// Reads the system clock in the local time zone.
///
/// ```
/// # use spinlog::clock::{Clock, LocalClock};
/// let ts = LocalClock.timestamp();
/// assert_eq!(ts.len(), 19);
/// assert_eq!(&ts[10..11], "T");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    #[inline]
    fn timestamp(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Always returns the same timestamp. Useful for asserting exact lines.
#[derive(Debug, Clone)]
pub struct FixedClock(String);

impl FixedClock {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}
