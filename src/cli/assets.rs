// ABOUTME: Assets command - lists every screen image and whether it loads

use anyhow::Result;
use tracing::info;

use crate::assets::{AssetError, AssetLoader, KNOWN_ASSETS};
use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    Ok { width: u32, height: u32 },
    Missing,
    Unreadable(String),
}

/// Check each known asset at its native size
pub fn check(loader: &AssetLoader) -> Vec<(&'static str, AssetStatus)> {
    KNOWN_ASSETS
        .iter()
        .map(|name| {
            let status = match loader.load(name, None) {
                Ok(image) => AssetStatus::Ok {
                    width: image.width(),
                    height: image.height(),
                },
                Err(AssetError::Missing(_)) => AssetStatus::Missing,
                Err(e @ AssetError::Decode { .. }) => AssetStatus::Unreadable(e.to_string()),
            };
            (*name, status)
        })
        .collect()
}

/// Execute the assets command
pub fn execute(config: &AppConfig) -> Result<()> {
    let loader = AssetLoader::new(config.assets_dir.clone());
    let results = check(&loader);

    println!("Assets in {}", loader.assets_dir().display());
    println!();

    let mut problems = 0;
    for (name, status) in &results {
        match status {
            AssetStatus::Ok { width, height } => println!("  ✓ {name:<16} {width}x{height}"),
            AssetStatus::Missing => {
                problems += 1;
                println!("  ✗ {name:<16} missing");
            }
            AssetStatus::Unreadable(reason) => {
                problems += 1;
                println!("  ✗ {name:<16} {reason}");
            }
        }
    }

    println!();
    if problems == 0 {
        println!("All {} assets load.", results.len());
    } else {
        println!(
            "{problems} of {} assets unavailable; those slots will render blank.",
            results.len()
        );
    }
    info!("Asset check finished with {} problems", problems);

    Ok(())
}
