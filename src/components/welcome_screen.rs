// ABOUTME: Welcome screen: brand title, tagline, start and exit buttons

use super::scene::{Anchor, ButtonVariant, Element, LabelStyle, Scene};
use crate::app::events::AppEvent;

pub const TITLE: &str = "✨ Evol Jewels ✨";
pub const TAGLINE: &str = "Your Personalized Jewelry Stylist";
pub const START_LABEL: &str = "Tap to Start";
pub const EXIT_LABEL: &str = "Exit";

pub fn build(scene: &mut Scene) {
    scene.push(Element::label(TITLE, LabelStyle::Headline, Anchor::centered(0.15)));
    scene.push(Element::label(TAGLINE, LabelStyle::Caption, Anchor::centered(0.22)));

    scene.push(Element::button(
        START_LABEL,
        ButtonVariant::Primary,
        AppEvent::Start,
        20,
        Anchor::centered(0.4),
    ));
    scene.push(Element::button(
        EXIT_LABEL,
        ButtonVariant::Secondary,
        AppEvent::Quit,
        12,
        Anchor::centered(0.5),
    ));
}
