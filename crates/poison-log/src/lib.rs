//! Poison Log
//!
//! Leveled logging with positional templates and pluggable sinks.
//! Each call is filtered against the logger's threshold, formatted,
//! timestamped and written as one line:
//!
//! ```text
//! 2024-05-01 12:00:00.123 [ E] fail: 42
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use poison_log::{log_error, log_template, Logger, MemorySink, Severity};
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Logger::builder()
//!     .sink(sink.clone())
//!     .threshold(Severity::Warning)
//!     .synchronized(true)
//!     .build();
//!
//! log_error!(logger, "fail: {}", 42);
//! log_template!(logger, Severity::Error, "%1% and %2%", "a", 2).unwrap();
//!
//! assert_eq!(sink.len(), 2);
//! ```
//!
//! Loggers can also be built from YAML configuration and `POISON_LOG_*`
//! environment variables, see [`config`].

pub mod error;
pub mod severity;
pub mod template;
pub mod clock;
pub mod record;
pub mod sink;
pub mod logger;
pub mod config;

// Re-export commonly used types
pub use error::{FormatError, LogError, LogResult};
pub use severity::Severity;
pub use template::{format_template, Template};
pub use clock::{Clock, FixedClock, SystemClock};
pub use record::Record;

pub use sink::{
    LogSink, SharedSink,
    ConsoleSink, NativeSink, NullSink, MemorySink, FileSink,
    register_sink, create_sink, list_sinks,
};

pub use logger::{Logger, LoggerBuilder};

pub use config::LoggerConfig;
