//! No-op sink implementation

use std::io;

use super::traits::LogSink;
use crate::record::Record;

/// A sink that discards every line
///
/// Useful for tests, or to keep logging calls in place while silencing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for NullSink {
    fn name(&self) -> &str {
        "null"
    }

    fn write(&self, _record: &Record<'_>, _line: &str) -> io::Result<()> {
        Ok(())
    }
}
