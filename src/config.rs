//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/morsetree/morsetree.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `MORSETREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Extra symbol registered on top of (or instead of) the default alphabet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymbolEntry {
    pub symbol: char,
    pub code: String,
}

/// Unified configuration for morsetree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Load A-Z and 0-9 before anything else (default: true)
    pub preload_alphabet: bool,
    /// Extra symbols, inserted in order after the default alphabet
    pub symbols: Vec<SymbolEntry>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preload_alphabet: true,
            symbols: vec![],
        }
    }
}

/// Raw settings for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub preload_alphabet: Option<bool>,
    pub symbols: Option<Vec<SymbolEntry>>,
}

/// Get the XDG config directory for morsetree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "morsetree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("morsetree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Apply global config onto defaults: anything specified replaces.
    fn apply_global(&self, global: &RawSettings) -> Self {
        Self {
            preload_alphabet: global.preload_alphabet.unwrap_or(self.preload_alphabet),
            symbols: global
                .symbols
                .clone()
                .unwrap_or_else(|| self.symbols.clone()),
        }
    }

    /// Merge an explicit config file onto self.
    ///
    /// - Scalar options: overlay wins if Some
    /// - Symbols: appended, so later entries override earlier codes on insert
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        let mut symbols = self.symbols.clone();
        if let Some(extra) = &overlay.symbols {
            symbols.extend(extra.iter().cloned());
        }
        Self {
            preload_alphabet: overlay.preload_alphabet.unwrap_or(self.preload_alphabet),
            symbols,
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path();
        let current = Self::load_from(global.as_deref(), config_file)?;
        Self::apply_env_overrides(current)
    }

    /// Load the file layers only (no environment variables).
    ///
    /// A missing global file is skipped; a missing explicit file is an error.
    pub fn load_from(
        global: Option<&Path>,
        config_file: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                let raw = load_raw_settings(global_path)?;
                current = current.apply_global(&raw);
            }
        }

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        Ok(current)
    }

    /// Apply MORSETREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("MORSETREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        match config.get_bool("preload_alphabet") {
            Ok(val) => settings.preload_alphabet = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }

    /// Render as TOML, e.g. for `config show`.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
