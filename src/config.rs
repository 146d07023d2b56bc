//! Configuration for the uxpro application.
//!
//! Everything is optional in the TOML file; missing sections fall back to
//! the built-in knowledge base layout and the reference ranking parameters.
//!
//! ```toml
//! data_dir = "/usr/share/uxpro/data"
//!
//! [search]
//! max_results = 3
//!
//! [output]
//! format = "json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uxpro_search::{DomainClassifier, Registry, SearchConfig};

use crate::error::{AppError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory the registry's file locators are resolved against.
    pub data_dir: PathBuf,
    /// Ranking parameters.
    pub search: SearchConfig,
    /// Domain and stack tables.
    pub registry: Registry,
    /// Keyword table used when no domain is given.
    pub classifier: DomainClassifier,
    /// Result rendering.
    pub output: OutputConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: crate::app_dirs::data_dir(),
            search: SearchConfig::default(),
            registry: Registry::builtin(),
            classifier: DomainClassifier::builtin(),
            output: OutputConfig::default(),
        }
    }
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable Markdown.
    #[default]
    Markdown,
    /// Pretty-printed JSON.
    Json,
}

/// Output rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Markdown values longer than this many characters are cut with `...`.
    /// Zero disables truncation.
    pub max_value_chars: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Markdown,
            max_value_chars: 300,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise the default config file if it exists,
    /// otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be loaded.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Self::default_config_path();
                if default_path.is_file() {
                    tracing::debug!(path = %default_path.display(), "loading default config");
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path (see [`crate::app_dirs::config_file`]).
    pub fn default_config_path() -> PathBuf {
        crate::app_dirs::config_file()
    }

    /// Validates ranking parameters and the table registry.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid ranking parameters, duplicate table ids,
    /// or tables without search columns.
    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        for (family, tables) in [
            ("domain", &self.registry.domains),
            ("stack", &self.registry.stacks),
        ] {
            for (i, table) in tables.iter().enumerate() {
                if tables[..i].iter().any(|t| t.id == table.id) {
                    return Err(AppError::Config(format!(
                        "duplicate {family} table id: {}",
                        table.id
                    )));
                }
                if table.search_cols.is_empty() {
                    return Err(AppError::Config(format!(
                        "{family} table {} has no search columns",
                        table.id
                    )));
                }
            }
        }
        Ok(())
    }
}
