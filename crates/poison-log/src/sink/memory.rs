//! In-memory sink

use std::io;

use parking_lot::Mutex;

use super::traits::LogSink;
use crate::record::Record;

/// A sink that keeps every line in memory
///
/// Lines are stored without their terminator. Share it with a logger through an
/// `Arc` and inspect it afterwards:
///
/// ```
/// use std::sync::Arc;
/// use poison_log::{log_error, Logger, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::new(sink.clone());
/// log_error!(logger, "fail: {}", 42);
/// assert!(sink.lines()[0].ends_with("[ E] fail: 42"));
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the captured lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Captured lines joined back into one newline-terminated text
    pub fn contents(&self) -> String {
        self.lines
            .lock()
            .iter()
            .map(|line| format!("{line}\n"))
            .collect()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn write(&self, _record: &Record<'_>, line: &str) -> io::Result<()> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}
