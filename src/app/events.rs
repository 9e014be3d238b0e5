// ABOUTME: Event handling: maps taps and operator keys to app events and applies screen transitions

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

use crate::app::state::{AppState, Screen};
use crate::models::Question;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// "Tap to Start" on the welcome screen
    Start,
    /// "Exit" on the welcome screen, or the operator escape
    Quit,
    /// An option picked on a question screen. The value is bound when the
    /// button is created.
    Answer { question: Question, value: String },
    /// "← Back" on any screen after the welcome screen
    Back,
    /// "Restart" on the result screen
    Restart,
    // Mouse events
    MouseClick { x: u16, y: u16 },
}

pub struct EventHandler;

impl EventHandler {
    /// Customers only tap; Ctrl+C is the operator's way out
    pub fn handle_key_event(key_event: KeyEvent, _state: &mut AppState) -> Option<AppEvent> {
        if key_event.kind != KeyEventKind::Press {
            return None;
        }
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                info!("Operator requested shutdown");
                Some(AppEvent::Quit)
            }
            _ => None,
        }
    }

    pub fn handle_mouse_event(event: AppEvent, state: &mut AppState) -> Option<AppEvent> {
        match event {
            AppEvent::MouseClick { x, y } => {
                let hit = state.scene.hit_test(x, y).cloned();
                if hit.is_none() {
                    debug!("Tap at ({}, {}) missed every button", x, y);
                }
                hit
            }
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        let current = state.current_screen;
        match event {
            AppEvent::Quit => {
                info!("Quit from {:?}", current);
                state.should_quit = true;
            }
            AppEvent::Start => {
                if current == Screen::Welcome {
                    state.go_to(Screen::AskStyle);
                }
            }
            AppEvent::Answer { question, value } => {
                if current.question() != Some(question) {
                    debug!("Ignoring {:?} answer on {:?}", question, current);
                    return;
                }
                info!("Answer {} = {:?}", question.key(), value);
                state.answers.record(question, value);
                if let Some(next) = current.next() {
                    state.go_to(next);
                }
            }
            AppEvent::Back => {
                if let Some(previous) = current.previous() {
                    state.go_to(previous);
                }
            }
            AppEvent::Restart => {
                if current == Screen::Result {
                    info!("Restarting questionnaire, clearing {} answers", state.answers.len());
                    state.answers.clear();
                    state.recommendation = None;
                    state.go_to(Screen::Welcome);
                }
            }
            AppEvent::MouseClick { .. } => {
                if let Some(tapped) = Self::handle_mouse_event(event, state) {
                    Self::process_event(tapped, state);
                }
            }
        }
    }
}
