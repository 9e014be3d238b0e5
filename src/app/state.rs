// ABOUTME: Application state and the five-screen questionnaire state machine
// AppState owns the answers, asset cache and current scene; nothing is global

use tracing::info;

use crate::assets::{AssetCache, AssetLoader, CellSize};
use crate::components::{Scene, ScreenRenderer};
use crate::config::AppConfig;
use crate::models::{AnswerStore, Bundle, Question};

/// Screens of the kiosk flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    AskStyle,
    AskOccasion,
    AskBudget,
    Result,
}

impl Screen {
    /// All screens in flow order
    pub fn all() -> &'static [Screen] {
        &[
            Self::Welcome,
            Self::AskStyle,
            Self::AskOccasion,
            Self::AskBudget,
            Self::Result,
        ]
    }

    /// Question answered on this screen, if any
    pub fn question(&self) -> Option<Question> {
        match self {
            Self::AskStyle => Some(Question::Style),
            Self::AskOccasion => Some(Question::Occasion),
            Self::AskBudget => Some(Question::Budget),
            Self::Welcome | Self::Result => None,
        }
    }

    /// Screen reached by moving forward
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Welcome => Some(Self::AskStyle),
            Self::AskStyle => Some(Self::AskOccasion),
            Self::AskOccasion => Some(Self::AskBudget),
            Self::AskBudget => Some(Self::Result),
            Self::Result => None,
        }
    }

    /// Screen reached by "← Back"
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Welcome => None,
            Self::AskStyle => Some(Self::Welcome),
            Self::AskOccasion => Some(Self::AskStyle),
            Self::AskBudget => Some(Self::AskOccasion),
            Self::Result => Some(Self::AskBudget),
        }
    }
}

pub struct AppState {
    pub current_screen: Screen,
    pub answers: AnswerStore,
    pub assets: AssetCache,
    pub scene: Scene,
    /// Bundle resolved on the last entry to the result screen
    pub recommendation: Option<&'static Bundle>,
    pub should_quit: bool,
}

impl AppState {
    /// Starts on the welcome screen, already rendered. `screen_size` is
    /// measured once at startup and not re-queried.
    pub fn new(assets: AssetCache, screen_size: CellSize) -> Self {
        let mut state = Self {
            current_screen: Screen::Welcome,
            answers: AnswerStore::new(),
            assets,
            scene: Scene::new(screen_size),
            recommendation: None,
            should_quit: false,
        };
        state.render_current_screen();
        state
    }

    /// Switch screens and rebuild the destination from scratch
    pub fn go_to(&mut self, screen: Screen) {
        info!("Screen transition {:?} -> {:?}", self.current_screen, screen);
        self.current_screen = screen;
        self.render_current_screen();
    }

    pub fn render_current_screen(&mut self) {
        let recommendation = ScreenRenderer::render(
            self.current_screen,
            &mut self.scene,
            &self.answers,
            &mut self.assets,
        );
        if recommendation.is_some() {
            self.recommendation = recommendation;
        }
    }
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(config: &AppConfig, screen_size: CellSize) -> Self {
        let loader = AssetLoader::new(config.assets_dir.clone());
        info!(
            "Starting kiosk with assets from {} on a {}x{} screen",
            loader.assets_dir().display(),
            screen_size.cols,
            screen_size.rows
        );
        Self {
            state: AppState::new(AssetCache::new(loader), screen_size),
        }
    }
}
