// ABOUTME: UI components for the kiosk: scene model, per-screen builders, renderer and painter

pub mod layout;
pub mod question_screen;
pub mod result_screen;
pub mod scene;
pub mod screen_renderer;
pub mod welcome_screen;

pub use layout::LayoutComponent;
pub use scene::{Anchor, ButtonVariant, Element, ElementKind, LabelStyle, MIN_SCREEN, Scene};
pub use screen_renderer::ScreenRenderer;
