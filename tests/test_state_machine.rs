// ABOUTME: Integration tests for the questionnaire state machine driven through taps

#[path = "helpers/fixtures.rs"]
mod fixtures;

use evol_kiosk::app::{AppEvent, EventHandler, Screen};
use evol_kiosk::components::question_screen::{
    BACK_LABEL, BUDGET_OPTIONS, OCCASION_OPTIONS, STYLE_OPTIONS,
};
use evol_kiosk::components::result_screen::RESTART_LABEL;
use evol_kiosk::components::welcome_screen::{EXIT_LABEL, START_LABEL};
use evol_kiosk::models::Question;
use fixtures::{AssetDir, tap};
use pretty_assertions::assert_eq;

#[test]
fn test_starts_on_welcome() {
    let assets = AssetDir::empty();
    let state = assets.state();

    assert_eq!(state.current_screen, Screen::Welcome);
    assert!(state.answers.is_empty());
    assert!(!state.should_quit);
    assert!(state.scene.button_rect(START_LABEL).is_some());
}

#[test]
fn test_forward_flow_records_answers() {
    let assets = AssetDir::empty();
    let mut state = assets.state();

    tap(&mut state, START_LABEL);
    assert_eq!(state.current_screen, Screen::AskStyle);
    tap(&mut state, "Traditional & Graceful");
    assert_eq!(state.current_screen, Screen::AskOccasion);
    tap(&mut state, "Weddings");
    assert_eq!(state.current_screen, Screen::AskBudget);
    tap(&mut state, "₹25,000 – ₹50,000");
    assert_eq!(state.current_screen, Screen::Result);

    assert_eq!(state.answers.get(Question::Style), Some("Traditional & Graceful"));
    assert_eq!(state.answers.get(Question::Occasion), Some("Weddings"));
    assert_eq!(state.answers.get(Question::Budget), Some("₹25,000 – ₹50,000"));
    assert_eq!(state.answers.len(), 3);

    let bundle = state.recommendation.unwrap();
    assert_eq!(bundle.celebrity, "Deepika Padukone");
    assert_eq!(bundle.products.len(), 3);
    assert_eq!(bundle.products[0].name, "Temple Gold Jhumka");
    assert_eq!(bundle.products[0].price, "₹27,999");
}

#[test]
fn test_every_option_records_its_own_value() {
    let assets = AssetDir::empty();

    for (style, _) in STYLE_OPTIONS {
        for occasion in OCCASION_OPTIONS {
            for budget in BUDGET_OPTIONS {
                let mut state = assets.state();
                tap(&mut state, START_LABEL);
                tap(&mut state, style);
                tap(&mut state, occasion);
                tap(&mut state, budget);

                assert_eq!(state.current_screen, Screen::Result);
                assert_eq!(state.answers.get(Question::Style), Some(style));
                assert_eq!(state.answers.get(Question::Occasion), Some(occasion));
                assert_eq!(state.answers.get(Question::Budget), Some(budget));
            }
        }
    }
}

#[test]
fn test_revisiting_a_question_overwrites() {
    let assets = AssetDir::empty();
    let mut state = assets.state();

    tap(&mut state, START_LABEL);
    tap(&mut state, "Bold & Festive");
    tap(&mut state, "Parties");
    tap(&mut state, "₹5,000 – ₹10,000");
    assert_eq!(state.recommendation.unwrap().celebrity, "Priyanka Chopra");

    // Back to the style question and pick again
    tap(&mut state, BACK_LABEL);
    tap(&mut state, BACK_LABEL);
    tap(&mut state, BACK_LABEL);
    assert_eq!(state.current_screen, Screen::AskStyle);
    tap(&mut state, "Modern & Trendy");
    tap(&mut state, "Festivals");
    tap(&mut state, "₹50,000+");

    assert_eq!(state.answers.len(), 3);
    assert_eq!(state.answers.get(Question::Style), Some("Modern & Trendy"));
    assert_eq!(state.answers.get(Question::Occasion), Some("Festivals"));
    assert_eq!(state.answers.get(Question::Budget), Some("₹50,000+"));
    assert_eq!(state.recommendation.unwrap().celebrity, "Alia Bhatt");
}

#[test]
fn test_back_keeps_answers() {
    let assets = AssetDir::empty();
    let mut state = assets.state();

    tap(&mut state, START_LABEL);
    tap(&mut state, "Simple & Elegant");
    tap(&mut state, "Everyday Wear");
    tap(&mut state, BACK_LABEL);

    assert_eq!(state.current_screen, Screen::AskOccasion);
    assert_eq!(state.answers.get(Question::Style), Some("Simple & Elegant"));
    assert_eq!(state.answers.get(Question::Occasion), Some("Everyday Wear"));

    tap(&mut state, BACK_LABEL);
    tap(&mut state, BACK_LABEL);
    assert_eq!(state.current_screen, Screen::Welcome);
    assert_eq!(state.answers.len(), 2);
}

#[test]
fn test_result_back_returns_to_budget() {
    let assets = AssetDir::empty();
    let mut state = assets.state();

    tap(&mut state, START_LABEL);
    tap(&mut state, "Modern & Trendy");
    tap(&mut state, "Parties");
    tap(&mut state, "₹10,000 – ₹25,000");
    tap(&mut state, BACK_LABEL);

    assert_eq!(state.current_screen, Screen::AskBudget);
    assert_eq!(state.answers.len(), 3);
}

#[test]
fn test_restart_clears_answers() {
    let assets = AssetDir::empty();
    let mut state = assets.state();

    tap(&mut state, START_LABEL);
    tap(&mut state, "Modern & Trendy");
    tap(&mut state, "Parties");
    tap(&mut state, "₹10,000 – ₹25,000");
    tap(&mut state, RESTART_LABEL);

    assert_eq!(state.current_screen, Screen::Welcome);
    assert!(state.answers.is_empty());
    assert!(state.recommendation.is_none());
}

#[test]
fn test_exit_quits_from_welcome() {
    let assets = AssetDir::empty();
    let mut state = assets.state();

    tap(&mut state, EXIT_LABEL);

    assert!(state.should_quit);
}

#[test]
fn test_modern_parties_is_alia() {
    let assets = AssetDir::empty();
    let mut state = assets.state();

    tap(&mut state, START_LABEL);
    tap(&mut state, "Modern & Trendy");
    tap(&mut state, "Parties");
    tap(&mut state, "₹50,000+");

    let bundle = state.recommendation.unwrap();
    assert_eq!(bundle.celebrity, "Alia Bhatt");
    assert_eq!(bundle.products.len(), 2);
}

#[test]
fn test_result_without_answers_uses_default() {
    let assets = AssetDir::empty();
    let mut state = assets.state();

    state.go_to(Screen::Result);

    assert_eq!(state.recommendation.unwrap().celebrity, "Kiara Advani");
    assert!(state.scene.find("✨ Your Style Matches: Kiara Advani ✨").is_some());
}

#[test]
fn test_answer_for_another_screen_is_ignored() {
    let assets = AssetDir::empty();
    let mut state = assets.state();
    tap(&mut state, START_LABEL);

    EventHandler::process_event(
        AppEvent::Answer {
            question: Question::Budget,
            value: "₹50,000+".to_string(),
        },
        &mut state,
    );

    assert_eq!(state.current_screen, Screen::AskStyle);
    assert!(state.answers.is_empty());
}

#[test]
fn test_tap_outside_buttons_does_nothing() {
    let assets = AssetDir::empty();
    let mut state = assets.state();
    let before = state.scene.clone();

    EventHandler::process_event(AppEvent::MouseClick { x: 0, y: 0 }, &mut state);
    EventHandler::process_event(AppEvent::MouseClick { x: 119, y: 39 }, &mut state);

    assert_eq!(state.current_screen, Screen::Welcome);
    assert!(!state.should_quit);
    assert_eq!(state.scene, before);
}

#[test]
fn test_round_trips_do_not_accumulate_elements() {
    let assets = AssetDir::complete();
    let mut state = assets.state();
    tap(&mut state, START_LABEL);
    tap(&mut state, "Bold & Festive");

    let occasion_count = state.scene.element_count();
    tap(&mut state, BACK_LABEL);
    let style_count = state.scene.element_count();

    for _ in 0..25 {
        tap(&mut state, "Bold & Festive");
        assert_eq!(state.scene.element_count(), occasion_count);
        tap(&mut state, BACK_LABEL);
        assert_eq!(state.scene.element_count(), style_count);
    }

    // Each (file, size) pair was decoded once
    let cached = state.assets.len();
    tap(&mut state, "Bold & Festive");
    tap(&mut state, BACK_LABEL);
    assert_eq!(state.assets.len(), cached);
}

#[test]
fn test_rendering_twice_is_idempotent() {
    let assets = AssetDir::complete();
    let mut state = assets.state();

    for screen in Screen::all() {
        state.go_to(*screen);
        let first = state.scene.clone();
        state.render_current_screen();
        assert_eq!(state.scene, first, "{screen:?} changed on re-render");
    }
}

#[test]
fn test_operator_ctrl_c_quits() {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    let assets = AssetDir::empty();
    let mut state = assets.state();
    tap(&mut state, START_LABEL);

    let plain = EventHandler::handle_key_event(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE),
        &mut state,
    );
    assert_eq!(plain, None);

    let event = EventHandler::handle_key_event(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &mut state,
    )
    .unwrap();
    EventHandler::process_event(event, &mut state);
    assert!(state.should_quit);
}
