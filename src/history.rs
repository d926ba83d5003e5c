use std::collections::VecDeque;

use crate::priority::Priority;

/// Number of entries kept when no other limit is configured.
pub const DEFAULT_MAX_LENGTH: usize = 500;

/// A single retained log line and its priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Fully formatted text, or the verbatim text of an injected entry.
    pub text: String,
    pub priority: Priority,
}

impl LogEntry {
    pub fn new(text: impl Into<String>, priority: Priority) -> Self {
        Self { text: text.into(), priority }
    }
}

/// Bounded, insertion-ordered history of log entries with a read cursor.
///
/// The history never holds more than `max_length` entries; each push past the
/// cap evicts the oldest entry. The cursor marks how far an incremental
/// consumer has read. Every eviction shifts it back by one (never below zero)
/// so that retained entries are neither skipped nor delivered twice.
///
/// `History` is not synchronized. The facility keeps it behind its spinlock.
///
/// # Examples
///
/// ```
/// # use spinlog::history::{History, LogEntry};
/// # use spinlog::Priority;
/// let mut history = History::new(2);
/// history.push(LogEntry::new("a", Priority::Message));
/// assert_eq!(history.take_new().len(), 1);
///
/// history.push(LogEntry::new("b", Priority::Message));
/// history.push(LogEntry::new("c", Priority::Message));
/// let fresh: Vec<_> = history.take_new().into_iter().map(|e| e.text).collect();
/// assert_eq!(fresh, ["b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<LogEntry>,
    max_length: usize,
    cursor: usize,
}

impl History {
    pub fn new(max_length: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_length.min(DEFAULT_MAX_LENGTH) + 1),
            max_length,
            cursor: 0,
        }
    }

    /// Appends an entry, evicting from the front while over capacity.
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.max_length {
            self.entries.pop_front();
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    /// Copy of every retained entry, oldest first.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Texts of the entries whose priority is in `priorities`, in history order.
    pub fn texts_with(&self, priorities: &[Priority]) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| priorities.contains(&entry.priority))
            .map(|entry| entry.text.clone())
            .collect()
    }

    /// Returns everything past the cursor and moves the cursor to the end.
    pub fn take_new(&mut self) -> Vec<LogEntry> {
        let fresh = self.entries.range(self.cursor..).cloned().collect();
        self.cursor = self.entries.len();
        fresh
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}
