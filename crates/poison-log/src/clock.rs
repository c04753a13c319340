//! Timestamp providers

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::Local;

use crate::error::{LogError, LogResult};

/// Default timestamp layout: local time with millisecond precision
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Source of display-ready timestamps for log lines
pub trait Clock: Send + Sync {
    fn now(&self) -> String;
}

/// Wall-clock time in the local timezone
#[derive(Debug, Clone)]
pub struct SystemClock {
    format: String,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Use a custom `chrono` strftime layout
    ///
    /// Layouts with unknown specifiers are rejected up front.
    pub fn with_format(format: impl Into<String>) -> LogResult<Self> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(LogError::Config(format!("invalid timestamp format '{format}'")));
        }
        Ok(Self { format })
    }
}

impl Clock for SystemClock {
    fn now(&self) -> String {
        let mut out = String::new();
        // an unrenderable layout leaves a partial timestamp rather than panicking
        let _ = write!(out, "{}", Local::now().format(&self.format));
        out
    }
}

/// A clock that always returns the same timestamp
///
/// Useful for tests that compare whole output lines.
#[derive(Debug, Clone)]
pub struct FixedClock(String);

impl FixedClock {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}
