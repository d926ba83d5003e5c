//! # spinlog
//!
//! A process-wide logging facility for real-time applications:
//!
//! * **Leveled**: every message carries a [`Priority`], and a verbosity
//!   threshold decides what is echoed to the console
//! * **Bounded**: a fixed-length in-memory history evicts its oldest entry
//!   when full
//! * **Incremental**: [`Log::get_new_logs`] hands a monitoring consumer only
//!   what arrived since its last poll
//!
//! ## Key Features
//!
//! * A single spin-based lock around all state, since each critical section
//!   is only a string append and a queue push
//! * Optional append-only file sink and ANSI-colored console sink
//! * Entries ordered by lock acquisition, not by timestamp
//! * A bridge so `log::info!` and friends record into the facility
//!
//! ## Main Components
//!
//! * `Log`: the facility (one lazily created per process via [`Log::get`])
//! * `MessageBuilder`: accumulate a message piece by piece, then commit
//! * `History`: the bounded queue and its read cursor
//! * `spinlock`: the busy-wait mutual exclusion primitive
//!
//! ## Quick Start
//!
//! ```
//! use spinlog::{log_record, Log, LogConfig, Priority};
//!
//! let log = Log::new(LogConfig::default().with_verbosity(Priority::Warning));
//!
//! // Retained but not echoed: below the verbosity threshold
//! log_record!(log, Priority::Message, "loaded ", 3, " scenes");
//! // Retained and echoed
//! log_record!(log, Priority::Error, "projector ", 2, " not responding");
//!
//! log.begin().priority(Priority::Warning).append("latency ").append(48.5).append("ms").commit();
//!
//! assert_eq!(log.get_full_logs().len(), 3);
//! assert_eq!(log.get_logs(&[Priority::Warning, Priority::Error]).len(), 2);
//! ```

pub mod bridge;
pub mod builder;
pub mod clock;
pub mod config;
pub mod facility;
pub mod history;
pub mod loggable;
pub mod priority;
pub mod sink;
pub mod spinlock;

pub use bridge::LogBridge;
pub use builder::MessageBuilder;
pub use config::LogConfig;
pub use facility::Log;
pub use history::{History, LogEntry};
pub use loggable::Loggable;
pub use priority::Priority;
pub use spinlock::{RawSpinlock, Spinlock};
