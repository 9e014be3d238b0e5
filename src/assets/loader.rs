// ABOUTME: Loads image files from the assets directory, optionally resized to an exact cell size

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use tracing::debug;

use super::{AssetError, CellSize, RasterImage};

#[derive(Debug, Clone)]
pub struct AssetLoader {
    assets_dir: PathBuf,
}

impl AssetLoader {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
        }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.assets_dir.join(filename)
    }

    /// Decode `filename`. With a size the image is stretched to exactly fill
    /// it; aspect ratio is not preserved.
    pub fn load(&self, filename: &str, size: Option<CellSize>) -> Result<RasterImage, AssetError> {
        let path = self.path_for(filename);
        if !path.is_file() {
            return Err(AssetError::Missing(path));
        }

        let image = image::open(&path).map_err(|source| AssetError::Decode {
            path: path.clone(),
            source,
        })?;

        let image = match size {
            Some(size) => {
                let (width, height) = size.pixel_dimensions();
                image.resize_exact(width.max(1), height.max(1), FilterType::Triangle)
            }
            None => image,
        };

        debug!(
            "Loaded {} at {}x{} px",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(RasterImage::from_dynamic(&image))
    }
}
