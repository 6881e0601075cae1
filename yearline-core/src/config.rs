//! Global yearline configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{YearlineError, YearlineResult};
use crate::grid::AlignMode;

/// Global configuration at ~/.config/yearline/config.toml
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct AppConfig {
    /// Where the snapshot blobs live. Supports `~` expansion.
    /// Defaults to the platform data directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Default timeline alignment mode, overridable per invocation.
    #[serde(default)]
    pub align: AlignMode,
}

impl AppConfig {
    pub fn config_path() -> YearlineResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| YearlineError::Config("Could not determine config directory".into()))?
            .join("yearline");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> YearlineResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: AppConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| YearlineError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| YearlineError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Save the current config to ~/.config/yearline/config.toml
    pub fn save(&self) -> YearlineResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| YearlineError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| YearlineError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Resolve the data directory, expanding `~` in a configured override.
    pub fn data_path(&self) -> YearlineResult<PathBuf> {
        if let Some(dir) = &self.data_dir {
            let expanded = shellexpand::tilde(&dir.to_string_lossy()).into_owned();
            return Ok(PathBuf::from(expanded));
        }

        let base = dirs::data_dir()
            .ok_or_else(|| YearlineError::Config("Could not determine data directory".into()))?;

        Ok(base.join("yearline"))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> YearlineResult<()> {
        let contents = "\
# yearline configuration

# Where your event and category snapshots live:
# data_dir = \"~/.local/share/yearline\"

# How month rows line up: \"weekday\" places day 1 under its weekday,
# \"first-day\" pins day 1 of every month to the first column.
# align = \"weekday\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                YearlineError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| YearlineError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
