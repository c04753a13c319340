//! Log sinks: where rendered lines go
//!
//! This module provides a pluggable sink system with:
//! - `LogSink` trait for implementing custom destinations
//! - Built-in implementations: `ConsoleSink`, `NativeSink`, `NullSink`, `MemorySink`, `FileSink`
//! - A registry for discovering and creating sinks by name

mod traits;
mod console;
mod native;
mod null;
mod memory;
mod file;
mod registry;

pub use traits::{LogSink, SharedSink};
pub use console::ConsoleSink;
pub use native::{NativePriority, NativeSink, DEFAULT_TAG};
pub use null::NullSink;
pub use memory::MemorySink;
pub use file::FileSink;
pub use registry::{
    create_sink, has_sink, list_sinks, register_sink, unregister_sink, SinkDefinition, SinkFactory,
};
