//! Overlay configuration.
//!
//! [`OverlayConfig`] is the single setup surface: cache TTL, debounce delay,
//! symbol and color overrides, and the status backend. Every field has a
//! default, and partial JSON documents fill the rest from those defaults.
//!
//! # Lookup
//! 1. `GIT_OVERLAY_CONFIG`, when set, names the config file
//! 2. Otherwise `<config dir>/git-overlay/config.json`
//! 3. A missing file means all defaults

use crate::core::cache::DEFAULT_TTL;
use crate::core::dirs::get_config_directory;
use crate::core::display::{DisplayMapping, HighlightColors, Symbols};
use crate::core::error::{OverlayError, Result};
use crate::core::fetcher::{StatusBackend, StatusFetcher};
use crate::core::scheduler::DEFAULT_DEBOUNCE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV_VAR: &str = "GIT_OVERLAY_CONFIG";

/// Upper bound for `ttl_ms` and `debounce_ms`
pub const MAX_DURATION_MS: u64 = 60 * 60 * 1000;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OverlayConfig {
    pub ttl_ms: u64,
    pub debounce_ms: u64,
    pub symbols: Symbols,
    pub highlights: HighlightColors,
    pub backend: StatusBackend,
    pub git_program: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            ttl_ms: DEFAULT_TTL.as_millis() as u64,
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            symbols: Symbols::default(),
            highlights: HighlightColors::default(),
            backend: StatusBackend::default(),
            git_program: "git".to_string(),
        }
    }
}

impl OverlayConfig {
    /// Load from the configured location, falling back to defaults when no file exists
    pub fn load_or_default() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load and validate a config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| OverlayError::config_read_failed(path, e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| OverlayError::config_parse_failed(path, e))?;
        config.validate()?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => Ok(get_config_directory()?.join("config.json")),
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("ttl_ms", self.ttl_ms), ("debounce_ms", self.debounce_ms)] {
            if value > MAX_DURATION_MS {
                return Err(OverlayError::invalid_duration(field, value, MAX_DURATION_MS));
            }
        }
        self.highlights.validate()
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn display_mapping(&self) -> DisplayMapping {
        DisplayMapping::new(self.symbols.clone(), self.highlights.clone())
    }

    pub fn fetcher(&self) -> Box<dyn StatusFetcher> {
        self.backend.fetcher(&self.git_program)
    }
}
