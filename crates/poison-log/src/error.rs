//! Error types

use thiserror::Error;

/// A positional template did not match its argument list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The template references an argument that was not supplied
    #[error("template expects at least {expected} arguments, {supplied} supplied")]
    TooFewArguments { expected: usize, supplied: usize },

    /// Some supplied arguments are never referenced by the template
    #[error("template consumes {consumed} arguments, {supplied} supplied")]
    TooManyArguments { consumed: usize, supplied: usize },

    /// A `%` at this byte offset does not start a valid directive
    #[error("bad format directive at byte {position}")]
    BadDirective { position: usize },
}

/// Errors that can occur while configuring or writing to a logger
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid severity: {0}")]
    InvalidSeverity(String),

    #[error("Unknown sink: {0}")]
    UnknownSink(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type LogResult<T> = Result<T, LogError>;
