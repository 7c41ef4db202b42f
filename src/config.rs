use crate::convention::NamingConvention;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_convention")]
    pub convention: NamingConvention,

    /// Custom separator used instead of the convention when set
    #[serde(default)]
    pub separator: Option<String>,

    #[serde(default = "default_format")]
    pub format: String,
}

fn default_convention() -> NamingConvention {
    NamingConvention::Snake
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            convention: default_convention(),
            separator: None,
            format: default_format(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        convention: Option<NamingConvention>,
        separator: Option<String>,
        format: Option<String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".recase.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(convention) = convention {
            config.convention = convention;
        }
        if separator.is_some() {
            config.separator = separator;
        }
        if let Some(format) = format {
            config.format = format;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.convention != default_convention() {
            self.convention = other.convention;
        }
        if other.separator.is_some() {
            self.separator = other.separator;
        }
        if other.format != default_format() {
            self.format = other.format;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
