//! The logger: threshold filtering, formatting, timestamping, and sink output
//!
//! A `Logger` is an owned value. Hand it (or an `Arc` of it) to the code that
//! logs; there is no process-wide instance.
//!
//! ```
//! use std::sync::Arc;
//! use poison_log::{log_debug, log_error, Logger, MemorySink, Severity};
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Logger::new(sink.clone());
//! logger.set_threshold(Severity::Warning);
//!
//! log_debug!(logger, "suppressed");
//! log_error!(logger, "fail: {}", 42);
//!
//! assert_eq!(sink.len(), 1);
//! ```

mod builder;
mod macros;

use std::fmt::{self, Display};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::clock::Clock;
use crate::error::LogResult;
use crate::record::Record;
use crate::severity::Severity;
use crate::sink::{ConsoleSink, SharedSink};
use crate::template::format_template;

pub use builder::LoggerBuilder;

/// A leveled logger writing to one sink
pub struct Logger {
    threshold: AtomicU8,
    sink: SharedSink,
    clock: Arc<dyn Clock>,
    /// Present when the logger is synchronized
    lock: Option<Mutex<()>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::console()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold())
            .field("sink", &self.sink.name())
            .field("synchronized", &self.is_synchronized())
            .finish()
    }
}

impl Logger {
    /// Create an unsynchronized logger with the default threshold and system clock
    pub fn new(sink: SharedSink) -> Self {
        Self::builder().sink(sink).build()
    }

    /// Create a logger writing to standard output
    pub fn console() -> Self {
        Self::new(Arc::new(ConsoleSink::new()))
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Replace the threshold for all subsequent calls
    pub fn set_threshold(&self, threshold: Severity) {
        self.threshold.store(threshold.into(), Ordering::Relaxed);
    }

    pub fn threshold(&self) -> Severity {
        let ordinal = self.threshold.load(Ordering::Relaxed);
        Severity::try_from(ordinal).unwrap_or(Severity::Trace)
    }

    /// Whether a message at `severity` would be written
    pub fn enabled(&self, severity: Severity) -> bool {
        severity.passes(self.threshold())
    }

    pub fn is_synchronized(&self) -> bool {
        self.lock.is_some()
    }

    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    /// Log pre-checked `format_args!` output
    ///
    /// Suppressed calls return `Ok(())` without formatting. Sink errors are
    /// returned as-is.
    pub fn log(&self, severity: Severity, file: &str, line: u32, args: fmt::Arguments<'_>) -> LogResult<()> {
        let _guard = self.lock.as_ref().map(|lock| lock.lock());

        if !self.enabled(severity) {
            return Ok(());
        }

        let message = match args.as_str() {
            Some(text) => text.to_string(),
            None => args.to_string(),
        };
        self.emit(severity, file, line, &message)
    }

    /// Log a positional `%N%` template
    ///
    /// A template that does not match `args` fails with `LogError::Format` and
    /// writes nothing. Suppressed calls never look at the template.
    pub fn log_template(
        &self,
        severity: Severity,
        file: &str,
        line: u32,
        template: &str,
        args: &[&dyn Display],
    ) -> LogResult<()> {
        let _guard = self.lock.as_ref().map(|lock| lock.lock());

        if !self.enabled(severity) {
            return Ok(());
        }

        let message = format_template(template, args)?;
        self.emit(severity, file, line, &message)
    }

    pub fn flush(&self) -> LogResult<()> {
        self.sink.flush()?;
        Ok(())
    }

    fn emit(&self, severity: Severity, file: &str, line: u32, message: &str) -> LogResult<()> {
        let timestamp = self.clock.now();
        let record = Record {
            timestamp: &timestamp,
            severity,
            file,
            line,
            message,
        };
        self.sink.write(&record, &record.render())?;
        Ok(())
    }
}
