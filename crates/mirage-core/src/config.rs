//! Browser configuration

use mirage_navigation::SearchEngine;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::CoreError;
use crate::Result;

/// Overrides the platform data directory when set.
pub const DATA_DIR_ENV: &str = "MIRAGE_DATA_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Engine used for non-address input and the search box
    pub search_engine: SearchEngine,
    /// Simulated time from load start to completion
    pub load_latency_ms: u64,
    /// Spacing of the intermediate progress steps
    pub progress_interval_ms: u64,
    /// How often the shell advances the load clock
    pub tick_interval_ms: u64,
    pub interface: InterfaceConfig,
    /// New tab page shortcuts
    pub shortcuts: Vec<Shortcut>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceConfig {
    pub dark_mode: bool,
    pub accent_color: String,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            accent_color: "#0A84FF".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub title: String,
    pub url: String,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("mirage.db"),
            search_engine: SearchEngine::default(),
            load_latency_ms: 2500,
            progress_interval_ms: 500,
            tick_interval_ms: 100,
            interface: InterfaceConfig::default(),
            shortcuts: Vec::new(),
        }
    }

    pub fn data_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
            return PathBuf::from(dir);
        }

        dirs::data_local_dir()
            .map(|d| d.join("Mirage"))
            .unwrap_or_else(|| PathBuf::from(".mirage"))
    }

    /// Load a JSON config file. A missing file yields the defaults; fields
    /// absent from the file keep their default values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| CoreError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn load_latency(&self) -> Duration {
        Duration::from_millis(self.load_latency_ms)
    }

    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}
