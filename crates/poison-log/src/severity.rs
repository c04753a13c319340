//! Severity levels
//!
//! Ordinals grow with verbosity: `None` lets nothing through as a threshold,
//! `Trace` lets everything through.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Ordinal importance of a log message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    None = 0,
    Error = 1,
    #[serde(alias = "warn")]
    Warning = 2,
    #[default]
    Debug = 3,
    Trace = 4,
}

impl Severity {
    /// All levels in ascending ordinal order
    pub const ALL: [Severity; 5] = [
        Severity::None,
        Severity::Error,
        Severity::Warning,
        Severity::Debug,
        Severity::Trace,
    ];

    /// Single-letter tag written between the brackets of an output line
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::None => "",
            Severity::Error => "E",
            Severity::Warning => "W",
            Severity::Debug => "D",
            Severity::Trace => "T",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Debug => "debug",
            Severity::Trace => "trace",
        }
    }

    /// Whether a message at `self` passes a logger set to `threshold`
    pub fn passes(&self, threshold: Severity) -> bool {
        *self <= threshold
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> u8 {
        severity as u8
    }
}

impl TryFrom<u8> for Severity {
    type Error = LogError;

    fn try_from(value: u8) -> Result<Self, LogError> {
        Severity::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| LogError::InvalidSeverity(value.to_string()))
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, LogError> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<u8>() {
            return Severity::try_from(n);
        }
        match trimmed.to_lowercase().as_str() {
            "none" | "null" | "off" => Ok(Severity::None),
            "error" | "err" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "debug" | "dbg" => Ok(Severity::Debug),
            "trace" => Ok(Severity::Trace),
            _ => Err(LogError::InvalidSeverity(s.to_string())),
        }
    }
}
