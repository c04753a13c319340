//! Call-site macros
//!
//! Each macro captures `file!()` and `line!()` and checks the threshold before
//! evaluating its arguments. Write errors are discarded; call
//! [`Logger::log`](super::Logger::log) directly to observe them.

/// Log at an explicit severity with `format!`-style arguments
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let severity: $crate::Severity = $severity;
        if logger.enabled(severity) {
            let _ = logger.log(severity, file!(), line!(), format_args!($($arg)+));
        }
    }};
}

#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a positional `%N%` template, returning the result
///
/// ```
/// use poison_log::{log_template, Logger, NullSink, Severity};
/// use std::sync::Arc;
///
/// let logger = Logger::new(Arc::new(NullSink::new()));
/// assert!(log_template!(logger, Severity::Error, "fail: %1%", 42).is_ok());
/// assert!(log_template!(logger, Severity::Error, "fail: %1% %2%", 42).is_err());
/// ```
#[macro_export]
macro_rules! log_template {
    ($logger:expr, $severity:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_template(
            $severity,
            file!(),
            line!(),
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}
