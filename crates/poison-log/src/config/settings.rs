//! Logger configuration values and environment overrides

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clock::SystemClock;
use crate::error::{LogError, LogResult};
use crate::logger::Logger;
use crate::severity::Severity;
use crate::sink::{create_sink, FileSink, NativeSink, SharedSink, DEFAULT_TAG};

/// Environment variable overriding [`LoggerConfig::level`]
pub const ENV_LEVEL: &str = "POISON_LOG_LEVEL";
/// Environment variable overriding [`LoggerConfig::sink`]
pub const ENV_SINK: &str = "POISON_LOG_SINK";
/// Environment variable overriding [`LoggerConfig::synchronized`]
pub const ENV_SYNC: &str = "POISON_LOG_SYNC";
/// Environment variable overriding [`LoggerConfig::tag`]
pub const ENV_TAG: &str = "POISON_LOG_TAG";
/// Environment variable overriding [`LoggerConfig::file`]
pub const ENV_FILE: &str = "POISON_LOG_FILE";

/// Everything needed to build a [`Logger`]
///
/// ```yaml
/// level: warning
/// sink: file
/// file: /var/log/app.log
/// synchronized: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Threshold; messages more verbose than this are dropped
    pub level: Severity,

    /// `file`, or the name of a registered sink (`console`, `native`, `null`, ...)
    pub sink: String,

    /// Serialize log calls behind a mutex
    pub synchronized: bool,

    /// Tag passed to the native sink
    pub tag: String,

    /// Path for the `file` sink; defaults to the temp directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// `chrono` strftime layout for timestamps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_format: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Severity::default(),
            sink: "console".to_string(),
            synchronized: false,
            tag: DEFAULT_TAG.to_string(),
            file: None,
            timestamp_format: None,
        }
    }
}

fn parse_bool(name: &str, value: &str) -> LogResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LogError::Config(format!("{name} must be a boolean, got '{value}'"))),
    }
}

impl LoggerConfig {
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    pub fn with_sink(mut self, sink: impl Into<String>) -> Self {
        self.sink = sink.into();
        self
    }

    pub fn with_synchronized(mut self, synchronized: bool) -> Self {
        self.synchronized = synchronized;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sink = "file".to_string();
        self.file = Some(path.into());
        self
    }

    /// Apply `POISON_LOG_*` overrides from the process environment
    pub fn apply_env(&mut self) -> LogResult<()> {
        self.apply_env_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides using `lookup` in place of the process environment
    ///
    /// Empty values are ignored. Nothing is changed unless every override parses.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> LogResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut updated = self.clone();

        if let Some(level) = get(ENV_LEVEL) {
            updated.level = level.parse()?;
        }
        if let Some(sink) = get(ENV_SINK) {
            updated.sink = sink.trim().to_lowercase();
        }
        if let Some(sync) = get(ENV_SYNC) {
            updated.synchronized = parse_bool(ENV_SYNC, &sync)?;
        }
        if let Some(tag) = get(ENV_TAG) {
            updated.tag = tag;
        }
        if let Some(file) = get(ENV_FILE) {
            updated.file = Some(PathBuf::from(file));
        }

        *self = updated;
        Ok(())
    }

    /// Instantiate the configured sink
    pub fn create_sink(&self) -> LogResult<SharedSink> {
        match self.sink.as_str() {
            "file" => {
                let path = self.file.clone().unwrap_or_else(FileSink::default_path);
                Ok(Arc::new(FileSink::open(path)?))
            }
            "native" => Ok(Arc::new(NativeSink::with_tag(self.tag.clone()))),
            name => create_sink(name).ok_or_else(|| LogError::UnknownSink(name.to_string())),
        }
    }

    /// Build a logger from this configuration
    pub fn build(&self) -> LogResult<Logger> {
        let clock = match &self.timestamp_format {
            Some(format) => SystemClock::with_format(format.clone())?,
            None => SystemClock::new(),
        };

        Ok(Logger::builder()
            .threshold(self.level)
            .sink(self.create_sink()?)
            .clock(clock)
            .synchronized(self.synchronized)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, Severity::Debug);
        assert_eq!(config.sink, "console");
        assert!(!config.synchronized);
        assert_eq!(config.tag, DEFAULT_TAG);
        assert!(config.file.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = LoggerConfig::default();
        config
            .apply_env_from(env(&[
                (ENV_LEVEL, "warn"),
                (ENV_SINK, "NULL"),
                (ENV_SYNC, "yes"),
                (ENV_TAG, "MyApp"),
                (ENV_FILE, "/tmp/x.log"),
            ]))
            .unwrap();

        assert_eq!(config.level, Severity::Warning);
        assert_eq!(config.sink, "null");
        assert!(config.synchronized);
        assert_eq!(config.tag, "MyApp");
        assert_eq!(config.file, Some(PathBuf::from("/tmp/x.log")));
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let mut config = LoggerConfig::default();
        config.apply_env_from(env(&[(ENV_LEVEL, ""), (ENV_SINK, "  ")])).unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_invalid_env_values() {
        let mut config = LoggerConfig::default();
        assert!(matches!(
            config.apply_env_from(env(&[(ENV_LEVEL, "verbose")])),
            Err(LogError::InvalidSeverity(_))
        ));
        assert!(matches!(
            config.apply_env_from(env(&[(ENV_SYNC, "maybe")])),
            Err(LogError::Config(_))
        ));
    }

    #[test]
    fn test_failed_env_override_leaves_config_untouched() {
        let mut config = LoggerConfig::default();
        let result = config.apply_env_from(env(&[
            (ENV_LEVEL, "warn"),
            (ENV_SINK, "null"),
            (ENV_SYNC, "maybe"),
        ]));

        assert!(matches!(result, Err(LogError::Config(_))));
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_build_logger() {
        let logger = LoggerConfig::default()
            .with_level(Severity::Error)
            .with_sink("null")
            .with_synchronized(true)
            .build()
            .unwrap();
        assert_eq!(logger.threshold(), Severity::Error);
        assert_eq!(logger.sink().name(), "null");
        assert!(logger.is_synchronized());
    }

    #[test]
    fn test_build_native_sink() {
        let logger = LoggerConfig::default().with_sink("native").build().unwrap();
        assert_eq!(logger.sink().name(), "native");
    }

    #[test]
    fn test_build_unknown_sink() {
        let err = LoggerConfig::default().with_sink("carrier-pigeon").build().unwrap_err();
        assert!(matches!(err, LogError::UnknownSink(ref name) if name == "carrier-pigeon"));
    }

    #[test]
    fn test_memory_sink_cannot_be_configured() {
        let err = LoggerConfig::default().with_sink("memory").build().unwrap_err();
        assert!(matches!(err, LogError::UnknownSink(ref name) if name == "memory"));
    }

    #[test]
    fn test_build_file_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        let logger = LoggerConfig::default()
            .with_file(&path)
            .build()
            .unwrap();

        crate::log_error!(logger, "to file {}", 1);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with(" [ E] to file 1\n"));
    }

    #[test]
    fn test_timestamp_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        let mut config = LoggerConfig::default().with_file(&path);
        config.timestamp_format = Some("STAMP".to_string());

        let logger = config.build().unwrap();
        crate::log_warn!(logger, "w");

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "STAMP [ W] w\n");
    }

    #[test]
    fn test_invalid_timestamp_format_fails_to_build() {
        let config = LoggerConfig::from_yaml_str("sink: \"null\"\ntimestamp_format: \"%Q\"\n").unwrap();
        assert!(matches!(config.build(), Err(LogError::Config(_))));
    }
}
