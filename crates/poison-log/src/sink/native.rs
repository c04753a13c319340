//! Platform-native log facility
//!
//! - Android: logcat via `__android_log_write`, tagged with the sink's tag
//! - Apple targets: standard output
//! - Everything else: nothing is written

use std::borrow::Cow;
use std::io;

use super::traits::LogSink;
use crate::record::Record;
use crate::severity::Severity;

/// Tag used when none is configured
pub const DEFAULT_TAG: &str = "poison";

/// Priorities understood by the native facility
///
/// Discriminants match Android's `android_LogPriority`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum NativePriority {
    Unknown = 0,
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
}

impl From<Severity> for NativePriority {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Trace => NativePriority::Info,
            Severity::Debug => NativePriority::Debug,
            Severity::Warning => NativePriority::Warn,
            Severity::Error => NativePriority::Error,
            Severity::None => NativePriority::Unknown,
        }
    }
}

/// A sink that writes to the operating system's log
#[derive(Debug, Clone)]
pub struct NativeSink {
    tag: String,
}

impl Default for NativeSink {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeSink {
    /// Create a native sink with the default tag
    pub fn new() -> Self {
        Self::with_tag(DEFAULT_TAG)
    }

    /// Create a native sink with a custom tag (the application name on Android)
    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// Replace interior NULs with a visible `\\0` so the value fits in a C string
#[cfg_attr(not(target_os = "android"), allow(dead_code))]
fn escape_nul(value: &str) -> Cow<'_, str> {
    if value.contains('\0') {
        Cow::Owned(value.replace('\0', "\\0"))
    } else {
        Cow::Borrowed(value)
    }
}

impl LogSink for NativeSink {
    fn name(&self) -> &str {
        "native"
    }

    #[cfg(target_os = "android")]
    fn write(&self, record: &Record<'_>, line: &str) -> io::Result<()> {
        android::write(&self.tag, NativePriority::from(record.severity), line.trim_end_matches('\n'))
    }

    #[cfg(any(target_os = "macos", target_os = "ios"))]
    fn write(&self, _record: &Record<'_>, line: &str) -> io::Result<()> {
        use std::io::Write;

        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.flush()
    }

    #[cfg(not(any(target_os = "android", target_os = "macos", target_os = "ios")))]
    fn write(&self, _record: &Record<'_>, _line: &str) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(target_os = "android")]
mod android {
    use std::ffi::CString;
    use std::io;
    use std::os::raw::c_int;

    use super::{escape_nul, NativePriority};

    fn c_string(value: &str) -> io::Result<CString> {
        CString::new(escape_nul(value).into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
    }

    pub(super) fn write(tag: &str, priority: NativePriority, message: &str) -> io::Result<()> {
        let tag = c_string(tag)?;
        let message = c_string(message)?;
        // SAFETY: both pointers are valid NUL-terminated strings that outlive the call.
        let rc = unsafe {
            android_log_sys::__android_log_write(priority as c_int, tag.as_ptr(), message.as_ptr())
        };
        if rc < 0 {
            return Err(io::Error::from_raw_os_error(-rc));
        }
        Ok(())
    }
}
