//! Application directory paths for uxpro.
//!
//! Uses the [`dirs`] crate for platform-appropriate resolution.
//!
//! | Purpose | macOS | Linux |
//! |---------|-------|-------|
//! | Data (CSV tables) | `~/Library/Application Support/uxpro/data/` | `~/.local/share/uxpro/data/` |
//! | Config | `~/Library/Application Support/uxpro/` | `~/.config/uxpro/` |
//!
//! # Environment Overrides
//!
//! - `UXPRO_DATA_DIR` overrides [`data_dir`]
//! - `UXPRO_CONFIG_DIR` overrides [`config_dir`]

use std::path::PathBuf;

/// Directory holding the knowledge-base CSV files.
///
/// Resolves to `dirs::data_dir()/uxpro/data/` by default. Override with
/// the `UXPRO_DATA_DIR` environment variable.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("UXPRO_DATA_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::data_dir()
        .map(|d| d.join("uxpro").join("data"))
        .unwrap_or_else(|| PathBuf::from("/tmp/uxpro-data"))
}

/// Application config directory.
///
/// Resolves to `dirs::config_dir()/uxpro/` by default. Override with
/// the `UXPRO_CONFIG_DIR` environment variable.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("UXPRO_CONFIG_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join("uxpro"))
        .unwrap_or_else(|| PathBuf::from("/tmp/uxpro-config"))
}

/// Path of the main config file: `config_dir()/config.toml`.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}
