use std::fmt;
use std::str::FromStr;

/// Severity of a log message, also used as the console verbosity threshold.
///
/// Priorities are totally ordered: `Debugging < Message < Warning < Error < None`.
/// A verbosity of `None` silences the console entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Priority {
    Debugging = 0,
    #[default]
    Message = 1,
    Warning = 2,
    Error = 3,
    None = 4,
}

/// Width of every bracketed tag, brackets and padding included.
pub const TAG_WIDTH: usize = 9;

impl Priority {
    /// All priorities, lowest first.
    pub const ALL: [Priority; 5] = [
        Priority::Debugging,
        Priority::Message,
        Priority::Warning,
        Priority::Error,
        Priority::None,
    ];

    /// Fixed-width tag written into every formatted line.
    pub const fn tag(self) -> &'static str {
        match self {
            Priority::Debugging => " [DEBUG] ",
            Priority::Message => "[MESSAGE]",
            Priority::Warning => "[WARNING]",
            Priority::Error => " [ERROR] ",
            Priority::None => "         ",
        }
    }

    /// ANSI SGR parameters used to color the tag on the console.
    pub const fn color(self) -> Option<&'static str> {
        match self {
            Priority::Debugging => Some("36;1"),
            Priority::Message => Some("32;1"),
            Priority::Warning => Some("33;1"),
            Priority::Error => Some("31;1"),
            Priority::None => None,
        }
    }

    /// Tag text between the brackets.
    pub const fn label(self) -> &'static str {
        match self {
            Priority::Debugging => "DEBUG",
            Priority::Message => "MESSAGE",
            Priority::Warning => "WARNING",
            Priority::Error => "ERROR",
            Priority::None => "",
        }
    }

    /// Console variant of [`tag`](Self::tag): the bracketed part wrapped in
    /// [`color`](Self::color), with the padding left outside the escape codes.
    pub fn colored_tag(self) -> String {
        let code = match self.color() {
            Some(code) => code,
            None => return self.tag().to_string(),
        };
        let pad = " ".repeat((TAG_WIDTH - self.label().len() - 2) / 2);
        format!("{pad}\x1b[{code}m[{label}]\x1b[0m{pad}", label = self.label())
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Priority::Debugging => "debugging",
            Priority::Message => "message",
            Priority::Warning => "warning",
            Priority::Error => "error",
            Priority::None => "none",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw priorities arriving from other processes are never rejected; anything
/// past `Error` is treated as `None`.
impl From<u8> for Priority {
    fn from(raw: u8) -> Self {
        match raw {
            0 => Priority::Debugging,
            1 => Priority::Message,
            2 => Priority::Warning,
            3 => Priority::Error,
            _ => Priority::None,
        }
    }
}

impl From<log::Level> for Priority {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Priority::Debugging,
            log::Level::Info => Priority::Message,
            log::Level::Warn => Priority::Warning,
            log::Level::Error => Priority::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePriorityError(String);

impl fmt::Display for ParsePriorityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown priority `{}`", self.0)
    }
}

impl std::error::Error for ParsePriorityError {}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" | "debugging" | "trace" => Ok(Priority::Debugging),
            "message" | "info" => Ok(Priority::Message),
            "warning" | "warn" => Ok(Priority::Warning),
            "error" => Ok(Priority::Error),
            "none" | "off" => Ok(Priority::None),
            other => Err(ParsePriorityError(other.to_string())),
        }
    }
}
