// ABOUTME: CLI argument parsing and command routing for evol-kiosk
//
// Provides command-line interface for:
// - Running the kiosk (kiosk, default)
// - Checking the image assets before opening the store (assets)

pub mod assets;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AppConfig;

/// Evol Jewels personalized jewelry stylist kiosk
#[derive(Parser)]
#[command(name = "evol-kiosk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to use instead of ./kiosk.toml and ~/.evol-kiosk/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the screen images (overrides the config file)
    #[arg(long, global = true)]
    pub assets_dir: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the kiosk full screen (default if no command given)
    Kiosk,

    /// Report which screen images are present and decodable
    Assets,
}

impl Cli {
    /// Load the config and apply command-line overrides
    pub fn resolve_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref())?;
        if let Some(dir) = &self.assets_dir {
            config.assets_dir = dir.clone();
        }
        Ok(config)
    }
}
