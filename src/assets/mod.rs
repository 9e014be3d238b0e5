// ABOUTME: Image assets for the kiosk screens: loading, resizing, caching and cell rasters
// A missing or undecodable file is never fatal; callers get None and leave the slot blank

pub mod cache;
pub mod loader;
pub mod raster;

use std::path::PathBuf;
use thiserror::Error;

pub use cache::{AssetCache, AssetKey};
pub use loader::AssetLoader;
pub use raster::{CellSize, RasterImage};

/// Full-screen background drawn behind every screen
pub const BACKGROUND: &str = "bg_mirror.jpg";

/// Every file the screens reference
pub const KNOWN_ASSETS: &[&str] = &[
    BACKGROUND,
    "deepika.jpg",
    "alia.jpg",
    "priyanka.jpg",
    "kiara.jpg",
    "jhumka.jpg",
    "choker.jpg",
    "earrings.jpg",
    "ring.jpg",
];

/// Picture slot sizes used by the screens for one display resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSizes {
    /// Thumbnail on each style option button
    pub style_thumbnail: CellSize,
    /// Celebrity portrait on the result screen
    pub celebrity_portrait: CellSize,
    /// Product thumbnail on the result screen
    pub product_thumbnail: CellSize,
}

impl SlotSizes {
    pub const REGULAR: Self = Self {
        style_thumbnail: CellSize::new(14, 7),
        celebrity_portrait: CellSize::new(16, 10),
        product_thumbnail: CellSize::new(14, 7),
    };

    pub const COMPACT: Self = Self {
        style_thumbnail: CellSize::new(10, 4),
        celebrity_portrait: CellSize::new(10, 6),
        product_thumbnail: CellSize::new(10, 4),
    };

    /// Displays shorter than this many rows get compact slots
    const COMPACT_BELOW_ROWS: u16 = 32;

    pub fn for_screen(screen: CellSize) -> Self {
        if screen.rows < Self::COMPACT_BELOW_ROWS {
            Self::COMPACT
        } else {
            Self::REGULAR
        }
    }
}

/// Why an asset could not be produced
#[derive(Error, Debug)]
pub enum AssetError {
    /// File does not exist in the assets directory
    #[error("Missing asset: {}", .0.display())]
    Missing(PathBuf),

    /// File exists but could not be opened or decoded
    #[error("Failed to load {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
