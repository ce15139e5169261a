use crate::settings::RenameSettings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory holding the project config, relative to the working directory
pub const CONFIG_DIR: &str = ".bulkren";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default preview format: "table", "summary", "json" or "none"
    #[serde(default = "default_preview")]
    pub preview_format: String,

    #[serde(default = "default_true")]
    pub case_sensitive: bool,

    #[serde(default = "default_true")]
    pub include_subfolders: bool,

    #[serde(default = "default_true")]
    pub skip_if_no_change: bool,

    #[serde(default = "default_true")]
    pub skip_if_collision: bool,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            preview_format: default_preview(),
            case_sensitive: true,
            include_subfolders: true,
            skip_if_no_change: true,
            skip_if_collision: true,
            use_color: None,
        }
    }
}

fn default_preview() -> String {
    "table".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load config from .bulkren/config.toml if it exists
    pub fn load() -> Result<Self> {
        if let Ok(cwd) = std::env::current_dir() {
            let config_path = cwd.join(CONFIG_DIR).join("config.toml");
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Copy the configured defaults into `settings`
    pub fn apply_to(&self, settings: &mut RenameSettings) {
        settings.case_sensitive = self.defaults.case_sensitive;
        settings.include_subfolders = self.defaults.include_subfolders;
        settings.skip_if_no_change = self.defaults.skip_if_no_change;
        settings.skip_if_collision = self.defaults.skip_if_collision;
    }

    pub fn settings(&self) -> RenameSettings {
        let mut settings = RenameSettings::default();
        self.apply_to(&mut settings);
        settings
    }
}
