//! Sink trait definition

use std::io;
use std::sync::Arc;

use crate::record::Record;

/// Destination for rendered log lines
///
/// Implementations:
/// - `ConsoleSink`: standard output
/// - `NativeSink`: the platform log facility (logcat on Android)
/// - `NullSink`: discards everything
/// - `MemorySink`: keeps lines in memory
/// - `FileSink`: appends to a file
///
/// A sink receives both the structured record and the line rendered from it.
/// Text sinks write `line` with a single call so that one log call never
/// produces a partial line.
pub trait LogSink: Send + Sync {
    /// Human-readable name of this sink
    fn name(&self) -> &str;

    /// Write one rendered line (terminator included)
    fn write(&self, record: &Record<'_>, line: &str) -> io::Result<()>;

    /// Flush any buffered output
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn LogSink>;
