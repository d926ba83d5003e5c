#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use spinlog::clock::FixedClock;
use spinlog::sink::ConsoleSink;
use spinlog::{Log, LogConfig};

pub const TIMESTAMP: &str = "2024-05-17T09:30:00";

/// Console sink that keeps every echoed line.
#[derive(Clone, Default)]
pub struct CollectingConsole {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CollectingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl ConsoleSink for CollectingConsole {
    fn write_line(&mut self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

/// A facility with a fixed clock, echoing into the returned collector.
pub fn test_log(config: LogConfig) -> (Log, CollectingConsole) {
    let console = CollectingConsole::new();
    let log = Log::with_parts(config, console.clone(), FixedClock::new(TIMESTAMP));
    (log, console)
}

/// The body of a formatted line, i.e. everything after the tag.
pub fn body(text: &str) -> &str {
    text.splitn(3, " / ").nth(2).unwrap_or(text)
}
