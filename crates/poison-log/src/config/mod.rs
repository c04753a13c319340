//! Logger configuration
//!
//! Sources, later ones winning:
//! - Defaults (`LoggerConfig::default()`)
//! - YAML file, user level (~/.config/poison/logging.yaml) or workspace level
//! - `POISON_LOG_*` environment variables

mod settings;
mod file;

pub use settings::{LoggerConfig, ENV_FILE, ENV_LEVEL, ENV_SINK, ENV_SYNC, ENV_TAG};
pub use file::{user_config_path, workspace_config_path, ConfigLevel};
