// ABOUTME: Result screen: matched celebrity, vibe, portrait and recommended product cards

use super::question_screen::BACK_LABEL;
use super::scene::{Anchor, ButtonVariant, ELEMENT_GAP, Element, LabelStyle, Scene};
use crate::app::events::AppEvent;
use crate::assets::{AssetCache, SlotSizes};
use crate::models::{AnswerStore, Bundle, resolve_answers};

pub const PRODUCTS_HEADING: &str = "Recommended Jewelry For You";
pub const RESTART_LABEL: &str = "Restart";

/// Horizontal distance between product card centres, in percent of width.
/// Widened on narrow screens so neighbouring cards keep a gap.
const PRODUCT_SPACING: f32 = 0.2;
const PRODUCT_ROW: f32 = 0.6;

pub fn headline(bundle: &Bundle) -> String {
    format!("✨ Your Style Matches: {} ✨", bundle.celebrity)
}

pub fn vibe_line(bundle: &Bundle) -> String {
    format!("Vibe: {}", bundle.vibe)
}

pub fn build(scene: &mut Scene, answers: &AnswerStore, assets: &mut AssetCache) -> &'static Bundle {
    let bundle = resolve_answers(answers);

    scene.push(Element::label(headline(bundle), LabelStyle::Headline, Anchor::centered(0.1)));
    scene.push(Element::label(vibe_line(bundle), LabelStyle::Caption, Anchor::centered(0.16)));

    let slots = SlotSizes::for_screen(scene.screen());
    let portrait = assets.get(bundle.image, Some(slots.celebrity_portrait));
    scene.push(Element::image(portrait, slots.celebrity_portrait, Anchor::centered(0.3)));

    scene.push(Element::label(PRODUCTS_HEADING, LabelStyle::Prompt, Anchor::centered(0.45)));

    let cards: Vec<Element> = bundle
        .products
        .iter()
        .map(|product| {
            Element::product_card(
                assets.get(product.image, Some(slots.product_thumbnail)),
                slots.product_thumbnail,
                product.name,
                product.price,
                Anchor::centered(PRODUCT_ROW),
            )
        })
        .collect();

    let widest = cards.iter().map(|card| card.size.cols).max().unwrap_or(0);
    let min_spacing = f32::from(widest + ELEMENT_GAP) / f32::from(scene.screen().cols);
    let spacing = PRODUCT_SPACING.max(min_spacing);
    let middle = (cards.len() as f32 - 1.0) / 2.0;
    for (i, mut card) in cards.into_iter().enumerate() {
        card.anchor = Anchor::new(0.5 + (i as f32 - middle) * spacing, PRODUCT_ROW);
        scene.push(card);
    }

    scene.push(Element::button(
        BACK_LABEL,
        ButtonVariant::Primary,
        AppEvent::Back,
        12,
        Anchor::new(0.42, 0.85),
    ));
    scene.push(Element::button(
        RESTART_LABEL,
        ButtonVariant::Primary,
        AppEvent::Restart,
        12,
        Anchor::new(0.58, 0.85),
    ));

    bundle
}
