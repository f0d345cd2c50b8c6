//! Configuration directory and persistent settings

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::text::SlugOptions;

/// Get the configuration directory for bitfn
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("bitfn"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path_with_override(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            Ok(path.to_path_buf())
        }
        None => default_config_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User configuration stored in config file
///
/// Every field is optional; unset fields fall back to [`SlugOptions::default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PersistentConfig {
    /// Default for `slug --lowercase`
    pub lowercase: Option<bool>,
    /// Default for `slug --parenthetical`
    pub parenthetical: Option<bool>,
    /// Default for `slug --strict`
    pub strict: Option<bool>,
}

impl PersistentConfig {
    /// Load configuration from custom path
    ///
    /// A missing file yields the default configuration.
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Save configuration to custom path, returning the path written
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<PathBuf> {
        let path = config_file_path_with_override(custom_path)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        info!("Saved config to {}", path.display());
        Ok(path)
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(
        &self,
        lowercase: Option<bool>,
        parenthetical: Option<bool>,
        strict: Option<bool>,
    ) -> Self {
        Self {
            lowercase: lowercase.or(self.lowercase),
            parenthetical: parenthetical.or(self.parenthetical),
            strict: strict.or(self.strict),
        }
    }

    /// Resolve into slug options, unset fields off
    pub fn slug_options(&self) -> SlugOptions {
        SlugOptions::new()
            .lowercase(self.lowercase.unwrap_or(false))
            .parenthetical(self.parenthetical.unwrap_or(false))
            .strict(self.strict.unwrap_or(false))
    }
}
