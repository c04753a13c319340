//! The per-call log record and its text rendering

use std::fmt;

use crate::severity::Severity;

/// One log call, alive only while it is being written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub timestamp: &'a str,
    pub severity: Severity,
    pub file: &'a str,
    pub line: u32,
    pub message: &'a str,
}

impl Record<'_> {
    /// Render as `<timestamp> [ <X>] <message>\n`
    pub fn render(&self) -> String {
        format!("{self}\n")
    }
}

/// The line without its terminator
impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [ {}] {}", self.timestamp, self.severity.tag(), self.message)
    }
}
