// ABOUTME: Configuration management for the kiosk
// Optional TOML files; every field has a default so the kiosk runs with no config at all

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the screen images
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    /// Where JSON-lines logs are written (default: ~/.evol-kiosk/logs)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// tracing filter used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_log_filter() -> String {
    "evol_kiosk=info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            log_dir: None,
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Load configuration. An explicit path must exist; otherwise the default
    /// locations are tried and missing files are skipped.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        let mut config = Self::default();
        for path in Self::get_config_paths() {
            if path.exists() {
                config.merge(Self::load_from_path(&path)?);
            }
        }
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Configuration file paths, later entries overriding earlier ones
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. Kiosk-local config next to the assets
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join("kiosk.toml"));
        }

        // 2. User config (~/.evol-kiosk/config.toml)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".evol-kiosk").join("config.toml"));
        }

        paths
    }

    /// Merge another config into this one; only non-default values override
    fn merge(&mut self, other: AppConfig) {
        if other.assets_dir != default_assets_dir() {
            self.assets_dir = other.assets_dir;
        }
        if other.log_dir.is_some() {
            self.log_dir = other.log_dir;
        }
        if other.log_filter != default_log_filter() {
            self.log_filter = other.log_filter;
        }
    }

    /// Log directory with the home-directory fallback applied
    pub fn resolved_log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.log_dir {
            return dir.clone();
        }
        dirs::home_dir()
            .map(|home| home.join(".evol-kiosk").join("logs"))
            .unwrap_or_else(|| PathBuf::from(".evol-kiosk/logs"))
    }
}
