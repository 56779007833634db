use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ui::theme::ThemePreset;

/// Base URL the orchestrator listens on during development
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Simulation package launched by the Run button
pub const DEFAULT_APP_PACKAGE_ID: &str = "5g-pdsch-mock";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub launcher: LauncherConfig,
}

/// Orchestration backend settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Scheme, host and port of the orchestrator (no `/api` suffix)
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// What gets launched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_app_package_id")]
    pub app_package_id: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            app_package_id: default_app_package_id(),
        }
    }
}

fn default_app_package_id() -> String {
    DEFAULT_APP_PACKAGE_ID.to_string()
}

/// Launcher appearance settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LauncherConfig {
    #[serde(default)]
    pub theme: ThemePreset,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "vemu", "VEMU Launcher")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        let config_dir = dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, falling back to defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            tracing::info!("Loaded configuration from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Read a value by dotted key (e.g. `backend.base_url`)
    pub fn get_value(&self, key: &str) -> Result<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["backend", "base_url"] => Ok(self.backend.base_url.clone()),
            ["simulation", "app_package_id"] => Ok(self.simulation.app_package_id.clone()),
            ["launcher", "theme"] => Ok(self.launcher.theme.key().to_string()),
            _ => anyhow::bail!("Unknown config key: {}", key),
        }
    }

    /// Set a value by dotted key
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["backend", "base_url"] => {
                let url = reqwest::Url::parse(value)
                    .map_err(|e| anyhow::anyhow!("Invalid URL '{}': {}", value, e))?;
                if !matches!(url.scheme(), "http" | "https") {
                    anyhow::bail!("Base URL must use http or https: {}", value);
                }
                self.backend.base_url = value.to_string();
            }
            ["simulation", "app_package_id"] => {
                self.simulation.app_package_id = value.to_string();
            }
            ["launcher", "theme"] => {
                self.launcher.theme = ThemePreset::from_key(value)
                    .ok_or_else(|| anyhow::anyhow!("Unknown theme: {}", value))?;
            }
            _ => anyhow::bail!("Unknown or read-only config key: {}", key),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_point_at_local_orchestrator() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://localhost:8080");
        assert_eq!(config.simulation.app_package_id, "5g-pdsch-mock");
        assert_eq!(config.launcher.theme, ThemePreset::Cyan);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[backend]\nbase_url = \"http://orchestrator:9000\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.backend.base_url, "http://orchestrator:9000");
        assert_eq!(config.simulation.app_package_id, "5g-pdsch-mock");
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.set_value("simulation.app_package_id", "lte-mock").unwrap();
        config.set_value("launcher.theme", "amber").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.get_value("launcher.theme").unwrap(), "amber");
    }

    #[test]
    fn test_set_value_rejects_bad_input() {
        let mut config = Config::default();
        assert!(config.set_value("backend.base_url", "not a url").is_err());
        assert!(config.set_value("backend.base_url", "ftp://host").is_err());
        assert!(config.set_value("launcher.theme", "neon").is_err());
        assert!(config.set_value("backend.port", "80").is_err());
        assert!(config.get_value("nope").is_err());
        assert_eq!(config, Config::default());
    }
}
