// ABOUTME: Question screens for style, occasion and budget
// Every option button carries its own Answer event, bound when the button is created

use super::scene::{Anchor, ButtonVariant, ELEMENT_GAP, Element, LabelStyle, Scene};
use crate::app::events::AppEvent;
use crate::assets::{AssetCache, CellSize, SlotSizes};
use crate::models::Question;

pub const BACK_LABEL: &str = "← Back";

pub const STYLE_PROMPT: &str = "How would you describe your style?";
pub const OCCASION_PROMPT: &str = "What's your favorite occasion to wear jewelry?";
pub const BUDGET_PROMPT: &str = "What's your preferred budget range?";

/// Style options and the celebrity thumbnail shown on each
pub const STYLE_OPTIONS: [(&str, &str); 4] = [
    ("Traditional & Graceful", "deepika.jpg"),
    ("Modern & Trendy", "alia.jpg"),
    ("Bold & Festive", "priyanka.jpg"),
    ("Simple & Elegant", "kiara.jpg"),
];

pub const OCCASION_OPTIONS: [&str; 4] = ["Weddings", "Festivals", "Parties", "Everyday Wear"];

pub const BUDGET_OPTIONS: [&str; 4] = [
    "₹5,000 – ₹10,000",
    "₹10,000 – ₹25,000",
    "₹25,000 – ₹50,000",
    "₹50,000+",
];

const OPTION_LIST_TOP: f32 = 0.3;
const OPTION_LIST_STEP: f32 = 0.1;
const STYLE_ROW: f32 = 0.45;
/// Rows for the two-by-two grid used when the style cards do not fit in one row
const STYLE_GRID_ROWS: [f32; 2] = [0.35, 0.6];
const NAVIGATION_ROW: f32 = 0.85;

fn answer(question: Question, value: &str) -> AppEvent {
    AppEvent::Answer {
        question,
        value: value.to_string(),
    }
}

fn push_back_button(scene: &mut Scene) {
    scene.push(Element::button(
        BACK_LABEL,
        ButtonVariant::Primary,
        AppEvent::Back,
        12,
        Anchor::centered(NAVIGATION_ROW),
    ));
}

/// Style options sit side by side, each with a thumbnail, or in a
/// two-by-two grid on narrow screens. A missing thumbnail leaves the
/// picture blank but the option stays tappable.
pub fn build_style(scene: &mut Scene, assets: &mut AssetCache) {
    scene.push(Element::label(STYLE_PROMPT, LabelStyle::Prompt, Anchor::centered(0.1)));

    let thumbnail = SlotSizes::for_screen(scene.screen()).style_thumbnail;
    let cards: Vec<Element> = STYLE_OPTIONS
        .iter()
        .map(|(style, file)| {
            Element::image_button(
                assets.get(file, Some(thumbnail)),
                thumbnail,
                *style,
                answer(Question::Style, style),
                Anchor::centered(STYLE_ROW),
            )
        })
        .collect();

    let widest = cards.iter().map(|card| card.size.cols).max().unwrap_or(0);
    let columns = style_columns(scene.screen(), widest);
    let single_row = columns >= cards.len();

    for (i, mut card) in cards.into_iter().enumerate() {
        let x = ((i % columns) as f32 + 0.5) / columns as f32;
        let y = if single_row {
            STYLE_ROW
        } else {
            STYLE_GRID_ROWS.get(i / columns).copied().unwrap_or(STYLE_ROW)
        };
        card.anchor = Anchor::new(x, y);
        scene.push(card);
    }

    push_back_button(scene);
}

/// All four cards across when each gets a slot at least as wide as the
/// widest card plus a gap, otherwise two across
fn style_columns(screen: CellSize, card_width: u16) -> usize {
    let across = STYLE_OPTIONS.len();
    if usize::from(screen.cols) >= across * usize::from(card_width + ELEMENT_GAP) {
        across
    } else {
        2
    }
}

fn build_option_list(scene: &mut Scene, prompt: &str, question: Question, options: &[&str]) {
    scene.push(Element::label(prompt, LabelStyle::Prompt, Anchor::centered(0.15)));

    for (i, option) in options.iter().enumerate() {
        let y = OPTION_LIST_TOP + i as f32 * OPTION_LIST_STEP;
        scene.push(Element::button(
            *option,
            ButtonVariant::Primary,
            answer(question, option),
            25,
            Anchor::centered(y),
        ));
    }

    push_back_button(scene);
}

pub fn build_occasion(scene: &mut Scene) {
    build_option_list(scene, OCCASION_PROMPT, Question::Occasion, &OCCASION_OPTIONS);
}

pub fn build_budget(scene: &mut Scene) {
    build_option_list(scene, BUDGET_PROMPT, Question::Budget, &BUDGET_OPTIONS);
}
