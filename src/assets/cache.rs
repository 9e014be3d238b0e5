// ABOUTME: Memoizes loaded assets by filename and requested size
// Failures are cached too, so a missing file is reported once per key

use std::collections::HashMap;
use std::rc::Rc;

use tracing::warn;

use super::{AssetLoader, CellSize, RasterImage};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetKey {
    pub filename: String,
    pub size: Option<CellSize>,
}

/// Owned by the UI thread; entries are never evicted
#[derive(Debug)]
pub struct AssetCache {
    loader: AssetLoader,
    entries: HashMap<AssetKey, Option<Rc<RasterImage>>>,
}

impl AssetCache {
    pub fn new(loader: AssetLoader) -> Self {
        Self {
            loader,
            entries: HashMap::new(),
        }
    }

    /// Cached image for `filename` at `size`, loading it on first use.
    /// `None` means the asset is unavailable and the slot should stay blank.
    pub fn get(&mut self, filename: &str, size: Option<CellSize>) -> Option<Rc<RasterImage>> {
        let key = AssetKey {
            filename: filename.to_string(),
            size,
        };
        let loader = &self.loader;
        self.entries
            .entry(key)
            .or_insert_with(|| match loader.load(filename, size) {
                Ok(image) => Some(Rc::new(image)),
                Err(e) => {
                    warn!("Asset unavailable, leaving slot blank: {}", e);
                    None
                }
            })
            .clone()
    }

    pub fn contains(&self, filename: &str, size: Option<CellSize>) -> bool {
        self.entries.contains_key(&AssetKey {
            filename: filename.to_string(),
            size,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
