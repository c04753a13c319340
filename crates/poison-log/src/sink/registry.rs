//! Sink registry for discovering and creating sinks by name

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::console::ConsoleSink;
use super::native::NativeSink;
use super::null::NullSink;
use super::traits::SharedSink;

/// Factory function type for creating sinks
pub type SinkFactory = Box<dyn Fn() -> SharedSink + Send + Sync>;

/// Definition of a registered sink
pub struct SinkDefinition {
    /// Unique name for this sink
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Factory function to create instances
    pub factory: SinkFactory,
    /// Whether this sink was registered at runtime rather than built in
    pub is_custom: bool,
}

impl std::fmt::Debug for SinkDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("is_custom", &self.is_custom)
            .finish()
    }
}

fn builtin(name: &str, description: &str, factory: SinkFactory) -> (String, SinkDefinition) {
    (
        name.to_string(),
        SinkDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
            is_custom: false,
        },
    )
}

/// Global registry of sinks
static REGISTRY: Lazy<RwLock<HashMap<String, SinkDefinition>>> = Lazy::new(|| {
    let map = HashMap::from([
        builtin(
            "console",
            "Write lines to standard output",
            Box::new(|| Arc::new(ConsoleSink::new()) as SharedSink),
        ),
        builtin(
            "native",
            "Platform log facility (logcat on Android, stdout on Apple, silent elsewhere)",
            Box::new(|| Arc::new(NativeSink::new()) as SharedSink),
        ),
        builtin(
            "null",
            "Discard all output",
            Box::new(|| Arc::new(NullSink::new()) as SharedSink),
        ),
    ]);

    RwLock::new(map)
});

/// Register a new sink type, replacing any sink with the same name
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use poison_log::sink::{register_sink, create_sink, NullSink, SharedSink};
///
/// register_sink("quiet", "Custom silent sink", Box::new(|| Arc::new(NullSink::new()) as SharedSink));
/// assert!(create_sink("quiet").is_some());
/// ```
pub fn register_sink(name: &str, description: &str, factory: SinkFactory) {
    let mut registry = REGISTRY.write();
    registry.insert(
        name.to_string(),
        SinkDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
            is_custom: true,
        },
    );
}

/// Create a sink by name
///
/// Returns `None` if the name is not registered.
pub fn create_sink(name: &str) -> Option<SharedSink> {
    let registry = REGISTRY.read();
    registry.get(name).map(|def| (def.factory)())
}

/// List all registered sinks as (name, description, is_custom) tuples, sorted by name
pub fn list_sinks() -> Vec<(String, String, bool)> {
    let registry = REGISTRY.read();
    let mut sinks: Vec<_> = registry
        .values()
        .map(|def| (def.name.clone(), def.description.clone(), def.is_custom))
        .collect();
    sinks.sort_by(|a, b| a.0.cmp(&b.0));
    sinks
}

/// Check if a sink is registered
pub fn has_sink(name: &str) -> bool {
    REGISTRY.read().contains_key(name)
}

/// Unregister a sink (mainly for testing)
pub fn unregister_sink(name: &str) -> bool {
    REGISTRY.write().remove(name).is_some()
}
