//! Console sink implementation

use std::io::{self, Write};

use super::traits::LogSink;
use crate::record::Record;

/// A sink that writes to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for ConsoleSink {
    fn name(&self) -> &str {
        "console"
    }

    fn write(&self, _record: &Record<'_>, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.flush()
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().flush()
    }
}
