use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Root configuration structure for config.json
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MigrateConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via config.json
#[derive(Debug, Clone, Deserialize)]
pub struct Defaults {
    /// Directory holding the component sources (`SessionsZone.tsx`, ...).
    /// A leading `~` is expanded.
    #[serde(default = "default_components_dir")]
    pub components_dir: String,

    #[serde(default = "default_source_extension")]
    pub source_extension: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            components_dir: default_components_dir(),
            source_extension: default_source_extension(),
        }
    }
}

impl Defaults {
    pub fn components_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.components_dir).into_owned())
    }
}

fn default_components_dir() -> String {
    "~/Documents/taskerino/src/components".to_string()
}

fn default_source_extension() -> String {
    "tsx".to_string()
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load defaults, merging file config with built-in defaults.
/// If config.json is missing or invalid, returns built-in defaults.
pub fn load_defaults() -> Defaults {
    load_config().defaults
}

/// Load the full config.json, falling back to defaults on any error.
pub fn load_config() -> MigrateConfig {
    let Ok(path) = paths::config_json() else {
        return MigrateConfig::default();
    };

    if !path.exists() {
        return MigrateConfig::default();
    }

    match load_config_from(&path) {
        Ok(config) => config,
        Err(err) => {
            crate::log_status!("config", "Ignoring {}: {}", path.display(), err.details);
            MigrateConfig::default()
        }
    }
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> crate::Result<MigrateConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        crate::Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    serde_json::from_str(&content)
        .map_err(|e| crate::Error::config_invalid_json(path.display().to_string(), e))
}
