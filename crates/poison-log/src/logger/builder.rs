//! Logger construction

use std::sync::atomic::AtomicU8;
use std::sync::Arc;

use parking_lot::Mutex;

use super::Logger;
use crate::clock::{Clock, SystemClock};
use crate::severity::Severity;
use crate::sink::{ConsoleSink, SharedSink};

/// Builder for [`Logger`]
///
/// Defaults: console sink, `Debug` threshold, system clock, unsynchronized.
pub struct LoggerBuilder {
    threshold: Severity,
    sink: Option<SharedSink>,
    clock: Option<Arc<dyn Clock>>,
    synchronized: bool,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            threshold: Severity::default(),
            sink: None,
            clock: None,
            synchronized: false,
        }
    }

    pub fn threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn sink(mut self, sink: SharedSink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Serialize every call (check, format and write) behind one mutex
    pub fn synchronized(mut self, synchronized: bool) -> Self {
        self.synchronized = synchronized;
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            threshold: AtomicU8::new(self.threshold.into()),
            sink: self.sink.unwrap_or_else(|| Arc::new(ConsoleSink::new())),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock::new())),
            lock: self.synchronized.then(|| Mutex::new(())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::NullSink;

    #[test]
    fn test_builder_defaults() {
        let logger = LoggerBuilder::new().build();
        assert_eq!(logger.threshold(), Severity::Debug);
        assert_eq!(logger.sink().name(), "console");
        assert!(!logger.is_synchronized());
    }

    #[test]
    fn test_builder_options() {
        let logger = Logger::builder()
            .threshold(Severity::Trace)
            .sink(Arc::new(NullSink::new()))
            .synchronized(true)
            .build();
        assert_eq!(logger.threshold(), Severity::Trace);
        assert_eq!(logger.sink().name(), "null");
        assert!(logger.is_synchronized());
    }
}
