use std::io;

use lazy_static::lazy_static;

use crate::builder::MessageBuilder;
use crate::clock::{Clock, LocalClock};
use crate::config::LogConfig;
use crate::history::{History, LogEntry};
use crate::loggable::{concat, Loggable};
use crate::priority::Priority;
use crate::sink::{ConsoleSink, FileSink, StdoutSink};
use crate::spinlock::Spinlock;

lazy_static! {
    /// The process-wide facility.
    ///
    /// Built from the environment on first access and never dropped, so
    /// producers running during process shutdown can still log safely.
    static ref GLOBAL_LOG: Log = {
        let config = LogConfig::from_env();
        tracing::debug!(?config, "log facility initialized");
        Log::new(config)
    };
}

/// Leveled, timestamped logging with a bounded in-memory history.
///
/// Every operation takes one shared [`Spinlock`] for its full duration, file
/// write included. Entries are therefore ordered exactly as their producers
/// acquired the lock, whatever their timestamps say.
///
/// Recording a message:
/// 1. Formats `<timestamp> / <tag> / <body>`
/// 2. Appends the line to the log file when the file sink is enabled
/// 3. Echoes it, with a colored tag, to the console if `priority >= verbosity`
/// 4. Pushes it onto the history, evicting the oldest entry when full
///
/// Nothing here returns an error. A log file that cannot be opened is skipped
/// for that line and the entry is still retained in memory.
///
/// # Examples
///
/// ```
/// # use spinlog::{log_record, Log, LogConfig, Priority};
/// let log = Log::new(LogConfig::default().with_verbosity(Priority::None));
///
/// log_record!(log, Priority::Warning, "queue depth ", 12, " over limit");
/// log.begin().priority(Priority::Error).append("lost ").append(3).append(" frames").commit();
///
/// let warnings = log.get_logs(&[Priority::Warning]);
/// assert!(warnings[0].ends_with("/ [WARNING] / queue depth 12 over limit"));
/// assert_eq!(log.get_new_logs().len(), 2);
/// assert!(log.get_new_logs().is_empty());
/// ```
pub struct Log {
    state: Spinlock<State>,
}

struct State {
    history: History,
    verbosity: Priority,
    log_to_file: bool,
    file: FileSink,
    console: Box<dyn ConsoleSink>,
    clock: Box<dyn Clock>,
}

impl Log {
    /// Returns the process-wide facility, creating it on first use.
    pub fn get() -> &'static Log {
        &GLOBAL_LOG
    }

    /// Creates a facility echoing to stdout and stamping with local time.
    pub fn new(config: LogConfig) -> Self {
        Self::with_parts(config, StdoutSink, LocalClock)
    }

    /// Creates a facility with a custom console sink and clock.
    pub fn with_parts(
        config: LogConfig,
        console: impl ConsoleSink + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            state: Spinlock::new(State {
                history: History::new(config.max_length),
                verbosity: config.verbosity,
                log_to_file: config.log_to_file,
                file: FileSink::new(config.file_path),
                console: Box::new(console),
                clock: Box::new(clock),
            }),
        }
    }

    /// Records the concatenated text forms of `values`.
    ///
    /// The body is built before the lock is taken, so a `Display` impl may
    /// itself log without deadlocking. See also [`log_record!`](crate::log_record).
    pub fn record(&self, priority: Priority, values: &[&dyn Loggable]) {
        self.record_str(priority, &concat(values));
    }

    /// Records a message whose body is already a single string.
    pub fn record_str(&self, priority: Priority, body: &str) {
        let failure = self.state.lock().rec(priority, body);
        if let Some(err) = failure {
            tracing::trace!(%err, "log file unavailable, entry kept in memory only");
        }
    }

    /// Starts a message to be assembled piece by piece.
    ///
    /// The builder owns its text, so threads building messages concurrently
    /// never see each other's fragments.
    pub fn begin(&self) -> MessageBuilder<'_> {
        MessageBuilder::new(self)
    }

    /// Copy of the whole history, oldest first.
    pub fn get_full_logs(&self) -> Vec<LogEntry> {
        self.state.lock().history.snapshot()
    }

    /// Texts of the entries whose priority is one of `priorities`.
    pub fn get_logs(&self, priorities: &[Priority]) -> Vec<String> {
        self.state.lock().history.texts_with(priorities)
    }

    /// Entries added since the previous call, oldest first.
    ///
    /// Two calls with no insertions in between return an empty list the
    /// second time.
    pub fn get_new_logs(&self) -> Vec<LogEntry> {
        self.state.lock().history.take_new()
    }

    pub fn verbosity(&self) -> Priority {
        self.state.lock().verbosity
    }

    /// Sets the minimum priority echoed to the console. Entries below it
    /// are still retained.
    pub fn set_verbosity(&self, verbosity: Priority) {
        self.state.lock().verbosity = verbosity;
    }

    pub fn log_to_file(&self) -> bool {
        self.state.lock().log_to_file
    }

    pub fn set_log_to_file(&self, active: bool) {
        self.state.lock().log_to_file = active;
    }

    /// Number of entries the history keeps before evicting.
    pub fn max_length(&self) -> usize {
        self.state.lock().history.max_length()
    }

    /// Adds a line produced elsewhere, typically by another process.
    ///
    /// The text is stored verbatim: no timestamp, no tag, no sinks.
    pub fn inject_external_log(&self, text: impl Into<String>, priority: Priority) {
        let entry = LogEntry::new(text, priority);
        self.state.lock().history.push(entry);
    }
}

impl State {
    /// Runs one record through the sinks and into the history. Returns the
    /// file error, if any, so it can be reported once the lock is released.
    fn rec(&mut self, priority: Priority, body: &str) -> Option<io::Error> {
        let timestamp = self.clock.timestamp();
        let text = format_line(&timestamp, priority.tag(), body);

        let mut failure = None;
        if self.log_to_file {
            failure = self.file.append(&text).err();
        }

        if priority >= self.verbosity {
            let line = format_line(&timestamp, &priority.colored_tag(), body);
            self.console.write_line(&line);
        }

        self.history.push(LogEntry { text, priority });
        failure
    }
}

/// Joins the three parts of a log line.
///
/// ```
/// # use spinlog::facility::format_line;
/// # use spinlog::Priority;
/// let line = format_line("2024-03-01T12:00:00", Priority::Error.tag(), "disk full");
/// assert_eq!(line, "2024-03-01T12:00:00 /  [ERROR]  / disk full");
/// ```
pub fn format_line(timestamp: &str, tag: &str, body: &str) -> String {
    let mut line = String::with_capacity(timestamp.len() + tag.len() + body.len() + 6);
    line.push_str(timestamp);
    line.push_str(" / ");
    line.push_str(tag);
    line.push_str(" / ");
    line.push_str(body);
    line
}

/// Records a message built from a list of values.
///
/// # Arguments
///
/// * `log` - The [`Log`](crate::Log) to record into
/// * `priority` - The message [`Priority`](crate::Priority)
/// * `values...` - Zero or more `Display` values, concatenated in order
///
/// # Examples
///
/// ```
/// # use spinlog::{log_record, Log, LogConfig, Priority};
/// # let log = Log::new(LogConfig::default().with_verbosity(Priority::None));
/// let fps = 59.9;
/// log_record!(log, Priority::Message, "fps: ", fps, ", dropped: ", 2);
/// assert!(log.get_full_logs()[0].text.ends_with("fps: 59.9, dropped: 2"));
/// ```
#[macro_export]
macro_rules! log_record {
    ($log:expr, $priority:expr $(, $value:expr)* $(,)?) => {
        $log.record($priority, &[$(&$value as &dyn $crate::Loggable),*])
    };
}

/// Same as [`log_record!`](crate::log_record) on the process-wide facility.
///
/// ```
/// # use spinlog::{log_message, Priority};
/// log_message!(Priority::Debugging, "cache warmed in ", 12, "ms");
/// ```
#[macro_export]
macro_rules! log_message {
    ($priority:expr $(, $value:expr)* $(,)?) => {
        $crate::log_record!($crate::Log::get(), $priority $(, $value)*)
    };
}
