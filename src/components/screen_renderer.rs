// ABOUTME: Rebuilds the scene for a screen: clears the old elements, redraws the background,
// then places the screen's title, body and navigation elements and settles them

use tracing::{debug, warn};

use super::{Scene, question_screen, result_screen, welcome_screen};
use crate::app::state::Screen;
use crate::assets::{AssetCache, BACKGROUND};
use crate::models::{AnswerStore, Bundle};

pub struct ScreenRenderer;

impl ScreenRenderer {
    /// Replace `scene` with `screen`. Returns the resolved bundle when the
    /// result screen was built.
    pub fn render(
        screen: Screen,
        scene: &mut Scene,
        answers: &AnswerStore,
        assets: &mut AssetCache,
    ) -> Option<&'static Bundle> {
        scene.clear_elements();
        scene.set_background(assets.get(BACKGROUND, Some(scene.screen())));

        let recommendation = match screen {
            Screen::Welcome => {
                welcome_screen::build(scene);
                None
            }
            Screen::AskStyle => {
                question_screen::build_style(scene, assets);
                None
            }
            Screen::AskOccasion => {
                question_screen::build_occasion(scene);
                None
            }
            Screen::AskBudget => {
                question_screen::build_budget(scene);
                None
            }
            Screen::Result => Some(result_screen::build(scene, answers, assets)),
        };

        if !scene.arrange() {
            let size = scene.screen();
            warn!(
                "{:?} does not fit a {}x{} screen; elements are pinned to the top edge",
                screen, size.cols, size.rows
            );
        }

        debug!(
            "Rendered {:?} with {} elements",
            screen,
            scene.element_count()
        );
        recommendation
    }
}
