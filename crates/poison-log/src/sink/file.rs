//! File sink
//!
//! Appends lines to a single file. Useful when stdout isn't visible, e.g. a
//! process started by a GUI host.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::traits::LogSink;
use crate::record::Record;

/// A sink that appends to a file
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Open `path` for appending, creating it and its parent directory if needed
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Default location in the system temp directory
    pub fn default_path() -> PathBuf {
        std::env::temp_dir().join("poison.log")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncate the file
    pub fn clear(&self) -> io::Result<()> {
        self.file.lock().set_len(0)
    }
}

impl LogSink for FileSink {
    fn name(&self) -> &str {
        "file"
    }

    fn write(&self, _record: &Record<'_>, line: &str) -> io::Result<()> {
        let mut file = self.file.lock();
        file.write_all(line.as_bytes())?;
        file.flush()
    }

    fn flush(&self) -> io::Result<()> {
        self.file.lock().flush()
    }
}
