//! Destinations for formatted log lines.
//!
//! The console sink is a trait so hosts (and tests) can redirect echoed lines;
//! the file sink is a fixed append-only path.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Receives lines echoed to the console.
///
/// Called with the facility lock held, so implementations must not log back
/// into the same facility.
///
/// # Usage
///
/// ```
/// # use spinlog::sink::ConsoleSink;
/// struct Discard;
///
/// impl ConsoleSink for Discard {
///     fn write_line(&mut self, _line: &str) {}
/// }
/// ```
pub trait ConsoleSink: Send {
    /// Writes one line. `line` carries no trailing newline.
    fn write_line(&mut self, line: &str);
}

/// Writes to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ConsoleSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        // A closed stdout is not the caller's problem.
        let _ = writeln!(out, "{}", line);
    }
}

/// Append-only log file, reopened for every line.
///
/// No handle is kept between writes, so the file can be moved or deleted
/// underneath a running process. No rotation is performed.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the file in append mode (creating it if needed), writes `line`
    /// followed by a newline and closes it again.
    pub fn append(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_append_creates_and_appends() {
        let dir = tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("out.log"));
        sink.append("first").unwrap();
        sink.append("second").unwrap();
        let content = std::fs::read_to_string(sink.path()).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_append_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("missing").join("out.log"));
        assert!(sink.append("line").is_err());
    }
}
