//! Editable copy of the backend settings shown on the Settings tab

use anyhow::Result;

use crate::config::Config;

/// Uncommitted text field contents
#[derive(Debug, Clone, Default)]
pub struct SettingsDraft {
    pub base_url: String,
    pub app_package_id: String,
    /// Validation error from the last save attempt
    pub error: Option<String>,
}

impl SettingsDraft {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.backend.base_url.clone(),
            app_package_id: config.simulation.app_package_id.clone(),
            error: None,
        }
    }

    pub fn reset_from(&mut self, config: &Config) {
        *self = Self::from_config(config);
    }

    /// Whether the draft differs from what is saved
    pub fn is_dirty(&self, config: &Config) -> bool {
        self.base_url.trim() != config.backend.base_url
            || self.app_package_id.trim() != config.simulation.app_package_id
    }

    /// Validate and copy the draft into `config`.
    ///
    /// On error `config` is left untouched.
    pub fn apply_to(&self, config: &mut Config) -> Result<()> {
        let package = self.app_package_id.trim();
        if package.is_empty() {
            anyhow::bail!("App package id must not be empty");
        }

        let mut updated = config.clone();
        updated.set_value("backend.base_url", self.base_url.trim())?;
        updated.set_value("simulation.app_package_id", package)?;
        *config = updated;
        Ok(())
    }
}
