use std::fmt;

use crate::facility::Log;
use crate::loggable::Loggable;
use crate::priority::Priority;

/// A message assembled in pieces and recorded on [`commit`](Self::commit).
///
/// Starts empty with priority [`Priority::Message`]. A builder dropped without
/// committing records nothing.
///
/// Committed messages follow the same rule as [`Log::record`]: they are
/// always retained in the history, and verbosity only decides whether they
/// are echoed to the console.
///
/// # Examples
///
/// ```
/// # use spinlog::{Log, LogConfig, Priority};
/// # use std::fmt::Write;
/// let log = Log::new(LogConfig::default().with_verbosity(Priority::None));
///
/// log.begin().append("foo").append("bar").commit();
///
/// let mut msg = log.begin().priority(Priority::Warning);
/// for id in [3, 5, 8] {
///     write!(msg, "{} ", id).unwrap();
/// }
/// msg.commit();
///
/// let logs = log.get_full_logs();
/// assert!(logs[0].text.ends_with("/ foobar"));
/// assert!(logs[1].text.ends_with("/ 3 5 8 "));
/// ```
#[must_use = "a message is only recorded once committed"]
pub struct MessageBuilder<'a> {
    log: &'a Log,
    text: String,
    priority: Priority,
}

impl<'a> MessageBuilder<'a> {
    pub(crate) fn new(log: &'a Log) -> Self {
        Self {
            log,
            text: String::new(),
            priority: Priority::Message,
        }
    }

    /// Sets the priority the message is recorded with.
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Appends the text form of `value`.
    pub fn append(mut self, value: impl Loggable) -> Self {
        value.append_to(&mut self.text);
        self
    }

    /// In-place version of [`append`](Self::append), for use in loops.
    pub fn push(&mut self, value: impl Loggable) -> &mut Self {
        value.append_to(&mut self.text);
        self
    }

    pub fn set_priority(&mut self, priority: Priority) -> &mut Self {
        self.priority = priority;
        self
    }

    /// Text accumulated so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn pending_priority(&self) -> Priority {
        self.priority
    }

    /// Records the accumulated text as one message.
    pub fn commit(self) {
        self.log.record_str(self.priority, &self.text);
    }
}

impl fmt::Write for MessageBuilder<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogConfig;

    fn quiet_log() -> Log {
        Log::new(LogConfig::default().with_verbosity(Priority::None))
    }

    #[test]
    fn test_defaults() {
        let log = quiet_log();
        let msg = log.begin();
        assert_eq!(msg.text(), "");
        assert_eq!(msg.pending_priority(), Priority::Message);
    }

    #[test]
    fn test_dropped_builder_records_nothing() {
        let log = quiet_log();
        {
            let _msg = log.begin().append("never sent");
        }
        assert!(log.get_full_logs().is_empty());
    }

    #[test]
    fn test_push_in_place() {
        let log = quiet_log();
        let mut msg = log.begin();
        for part in ["a", "b", "c"] {
            msg.push(part);
        }
        msg.set_priority(Priority::Error);
        assert_eq!(msg.text(), "abc");
        msg.commit();
        assert_eq!(log.get_logs(&[Priority::Error]).len(), 1);
    }
}
