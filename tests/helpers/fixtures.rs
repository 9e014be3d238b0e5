// ABOUTME: Shared test fixtures for kiosk integration tests
//
// Provides:
// - AssetDir: temporary assets directory filled with small generated images
// - AssetDir::state() / state_on(): AppState on a fixed-size screen backed by the directory
// - tap(): press the centre of a button found by its label

#![allow(dead_code)]

use evol_kiosk::app::{AppEvent, AppState, EventHandler};
use evol_kiosk::assets::{AssetCache, AssetLoader, CellSize, KNOWN_ASSETS};
use evol_kiosk::components::MIN_SCREEN;
use image::{Rgb, RgbImage};
use tempfile::TempDir;

pub const SCREEN: CellSize = CellSize::new(120, 40);
/// Standard 80x24 terminal, the smallest display the kiosk supports
pub const SMALL_SCREEN: CellSize = MIN_SCREEN;
/// Every display size the layout tests run on
pub const SCREENS: [CellSize; 4] = [
    SMALL_SCREEN,
    CellSize::new(100, 30),
    SCREEN,
    CellSize::new(200, 60),
];

/// Temporary assets directory
pub struct AssetDir {
    pub dir: TempDir,
}

impl AssetDir {
    /// No images at all: every slot renders blank
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Every image the screens reference, each a distinct solid colour
    pub fn complete() -> Self {
        Self::with(KNOWN_ASSETS)
    }

    pub fn with(names: &[&str]) -> Self {
        let assets = Self::empty();
        for (i, name) in names.iter().enumerate() {
            let shade = (i as u8).wrapping_mul(25);
            RgbImage::from_pixel(8, 8, Rgb([shade, 128, 255 - shade]))
                .save(assets.dir.path().join(name))
                .unwrap();
        }
        assets
    }

    pub fn state(&self) -> AppState {
        self.state_on(SCREEN)
    }

    pub fn state_on(&self, screen: CellSize) -> AppState {
        let cache = AssetCache::new(AssetLoader::new(self.dir.path()));
        AppState::new(cache, screen)
    }
}

/// Tap the centre of the button showing `label`
pub fn tap(state: &mut AppState, label: &str) {
    let rect = state
        .scene
        .button_rect(label)
        .unwrap_or_else(|| panic!("no button labelled {label:?} on {:?}", state.current_screen));
    EventHandler::process_event(
        AppEvent::MouseClick {
            x: rect.x + rect.width / 2,
            y: rect.y + rect.height / 2,
        },
        state,
    );
}
