//! File-based logger configuration (YAML)
//!
//! Supports user-level (~/.config/poison/logging.yaml) and workspace-level
//! (.config/poison/logging.yaml) files.

use std::fs;
use std::path::{Path, PathBuf};

use super::settings::LoggerConfig;
use crate::error::{LogError, LogResult};

const CONFIG_DIR: &str = "poison";
const CONFIG_FILE: &str = "logging.yaml";

/// Config level (user or workspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLevel {
    /// User-level config (~/.config/poison/logging.yaml)
    User,
    /// Workspace-level config (.config/poison/logging.yaml in workspace root)
    Workspace,
}

impl ConfigLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigLevel::User => "user",
            ConfigLevel::Workspace => "workspace",
        }
    }
}

/// User-level config path
pub fn user_config_path() -> PathBuf {
    // XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
    config_dir.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Workspace-level config path under `workspace_root`
pub fn workspace_config_path(workspace_root: impl AsRef<Path>) -> PathBuf {
    workspace_root
        .as_ref()
        .join(".config")
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}

impl LoggerConfig {
    pub fn from_yaml_str(content: &str) -> LogResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| LogError::Config(format!("Failed to parse YAML: {}", e)))
    }

    pub fn to_yaml_string(&self) -> LogResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| LogError::Config(format!("Failed to serialize YAML: {}", e)))
    }

    /// Import from JSON (e.g. settings handed over by an embedding host)
    pub fn from_json_str(content: &str) -> LogResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| LogError::Config(format!("Failed to parse JSON: {}", e)))
    }

    pub fn to_json_string(&self) -> LogResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LogError::Config(format!("Failed to serialize JSON: {}", e)))
    }

    /// Load from a YAML file; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Save to a YAML file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> LogResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }

    /// Resolve the effective configuration
    ///
    /// The workspace file wins over the user file; environment overrides are
    /// applied last. Returns the level the file came from, if any.
    pub fn discover(workspace_root: Option<&Path>) -> LogResult<(Self, Option<ConfigLevel>)> {
        let mut candidates = Vec::new();
        if let Some(root) = workspace_root {
            candidates.push((workspace_config_path(root), ConfigLevel::Workspace));
        }
        candidates.push((user_config_path(), ConfigLevel::User));

        let found = candidates.into_iter().find(|(path, _)| path.exists());
        let (mut config, level) = match found {
            Some((path, level)) => (Self::load(&path)?, Some(level)),
            None => (Self::default(), None),
        };

        config.apply_env()?;
        Ok((config, level))
    }
}
