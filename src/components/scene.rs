// ABOUTME: Retained element list for the current screen, positioned in percent of screen size
// The renderer rebuilds it on every transition, then settles it so no two elements share a cell.
// The layout paints it and taps are hit-tested against it.

use std::rc::Rc;

use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::app::events::AppEvent;
use crate::assets::{CellSize, RasterImage};

/// Smallest display on which every screen settles without overlapping elements
pub const MIN_SCREEN: CellSize = CellSize::new(80, 24);

/// Blank cells kept between neighbouring elements
pub const ELEMENT_GAP: u16 = 1;

/// Centre point of an element as fractions of screen width and height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

impl Anchor {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontally centred at `y` percent of screen height
    pub const fn centered(y: f32) -> Self {
        Self { x: 0.5, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    /// Large gold heading
    Headline,
    /// Gold question or section prompt
    Prompt,
    /// Plain white text
    Caption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Gold background, dark text
    Primary,
    /// Dark grey background, white text
    Secondary,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Label {
        text: String,
        style: LabelStyle,
    },
    Button {
        label: String,
        variant: ButtonVariant,
        event: AppEvent,
    },
    /// Picture with a caption underneath; the whole card is tappable
    ImageButton {
        image: Option<Rc<RasterImage>>,
        caption: String,
        event: AppEvent,
    },
    Image {
        image: Option<Rc<RasterImage>>,
    },
    ProductCard {
        image: Option<Rc<RasterImage>>,
        name: String,
        price: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    pub anchor: Anchor,
    pub size: CellSize,
    /// Cells the element occupies once placed in a scene
    area: Rect,
}

impl Element {
    pub fn label(text: impl Into<String>, style: LabelStyle, anchor: Anchor) -> Self {
        let text = text.into();
        let width = text_width(&text) + 2;
        Self {
            kind: ElementKind::Label { text, style },
            anchor,
            size: CellSize::new(width, 1),
            area: Rect::default(),
        }
    }

    /// Button at least `min_width` cells wide, grown to fit its label
    pub fn button(
        label: impl Into<String>,
        variant: ButtonVariant,
        event: AppEvent,
        min_width: u16,
        anchor: Anchor,
    ) -> Self {
        let label = label.into();
        let width = min_width.max(text_width(&label) + 4);
        Self {
            kind: ElementKind::Button {
                label,
                variant,
                event,
            },
            anchor,
            size: CellSize::new(width, 3),
            area: Rect::default(),
        }
    }

    pub fn image_button(
        image: Option<Rc<RasterImage>>,
        thumbnail: CellSize,
        caption: impl Into<String>,
        event: AppEvent,
        anchor: Anchor,
    ) -> Self {
        let caption = caption.into();
        let width = (thumbnail.cols + 2).max(text_width(&caption) + 2);
        Self {
            kind: ElementKind::ImageButton {
                image,
                caption,
                event,
            },
            anchor,
            // one row of padding above the picture, one for the caption
            size: CellSize::new(width, thumbnail.rows + 2),
            area: Rect::default(),
        }
    }

    pub fn image(image: Option<Rc<RasterImage>>, size: CellSize, anchor: Anchor) -> Self {
        Self {
            kind: ElementKind::Image { image },
            anchor,
            size,
            area: Rect::default(),
        }
    }

    pub fn product_card(
        image: Option<Rc<RasterImage>>,
        thumbnail: CellSize,
        name: impl Into<String>,
        price: impl Into<String>,
        anchor: Anchor,
    ) -> Self {
        let name = name.into();
        let price = price.into();
        let width = (thumbnail.cols + 2)
            .max(text_width(&name) + 2)
            .max(text_width(&price) + 2);
        Self {
            kind: ElementKind::ProductCard { image, name, price },
            anchor,
            size: CellSize::new(width, thumbnail.rows + 2),
            area: Rect::default(),
        }
    }

    /// Event emitted when this element is tapped, if it is tappable
    pub fn event(&self) -> Option<&AppEvent> {
        match &self.kind {
            ElementKind::Button { event, .. } | ElementKind::ImageButton { event, .. } => {
                Some(event)
            }
            _ => None,
        }
    }

    /// Text a customer reads on the element, used to find buttons by label
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Label { text, .. } => Some(text),
            ElementKind::Button { label, .. } => Some(label),
            ElementKind::ImageButton { caption, .. } => Some(caption),
            ElementKind::ProductCard { name, .. } => Some(name),
            ElementKind::Image { .. } => None,
        }
    }

    /// Where the anchor alone would put the element on a screen of the
    /// given size, clamped inside it
    pub fn anchored_rect(&self, screen: CellSize) -> Rect {
        let width = self.size.cols.min(screen.cols);
        let height = self.size.rows.min(screen.rows);

        let center_x = (f32::from(screen.cols) * self.anchor.x).round() as i32;
        let center_y = (f32::from(screen.rows) * self.anchor.y).round() as i32;

        let max_x = i32::from(screen.cols - width);
        let max_y = i32::from(screen.rows - height);
        let x = (center_x - i32::from(width) / 2).clamp(0, max_x);
        let y = (center_y - i32::from(height) / 2).clamp(0, max_y);

        Rect::new(x as u16, y as u16, width, height)
    }

    /// Placed rectangle; only meaningful once the element is in a scene
    pub fn area(&self) -> Rect {
        self.area
    }
}

fn overlaps_horizontally(a: Rect, b: Rect) -> bool {
    a.x < b.right() && b.x < a.right()
}

fn text_width(text: &str) -> u16 {
    Span::raw(text).width().min(usize::from(u16::MAX - 4)) as u16
}

/// Everything drawn on the current screen: a shared background surface plus
/// the screen's own elements
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    screen: CellSize,
    background: Option<Rc<RasterImage>>,
    elements: Vec<Element>,
}

impl Scene {
    pub fn new(screen: CellSize) -> Self {
        Self {
            screen,
            background: None,
            elements: Vec::new(),
        }
    }

    pub fn screen(&self) -> CellSize {
        self.screen
    }

    pub fn background(&self) -> Option<&Rc<RasterImage>> {
        self.background.as_ref()
    }

    pub fn set_background(&mut self, background: Option<Rc<RasterImage>>) {
        self.background = background;
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Drop every element of the previous screen; the background stays
    pub fn clear_elements(&mut self) {
        self.elements.clear();
    }

    /// Add an element at its anchored position. Screens push elements top
    /// to bottom and call [`Scene::arrange`] once they are all in.
    pub fn push(&mut self, mut element: Element) {
        element.area = element.anchored_rect(self.screen);
        self.elements.push(element);
    }

    /// Settle the elements so no two of them overlap. An element keeps its
    /// anchored row when it is clear of everything pushed before it;
    /// otherwise it moves below whatever it collides with, and the stack is
    /// then pulled back up to sit inside the bottom edge. Elements side by
    /// side do not push each other. Returns false when the screen is too
    /// short to hold the stack, in which case the top rows stay pinned at 0.
    pub fn arrange(&mut self) -> bool {
        let gap = i32::from(ELEMENT_GAP);
        let rows = i32::from(self.screen.rows);
        let areas: Vec<Rect> = self.elements.iter().map(|e| e.area).collect();
        let mut tops: Vec<i32> = areas.iter().map(|a| i32::from(a.y)).collect();

        for i in 0..areas.len() {
            for j in 0..i {
                if overlaps_horizontally(areas[i], areas[j]) {
                    tops[i] = tops[i].max(tops[j] + i32::from(areas[j].height) + gap);
                }
            }
        }

        for i in (0..areas.len()).rev() {
            let height = i32::from(areas[i].height);
            tops[i] = tops[i].min(rows - height);
            for j in i + 1..areas.len() {
                if overlaps_horizontally(areas[i], areas[j]) {
                    tops[i] = tops[i].min(tops[j] - gap - height);
                }
            }
        }

        let fits = tops.iter().all(|top| *top >= 0);
        for (element, top) in self.elements.iter_mut().zip(tops) {
            element.area.y = top.max(0) as u16;
        }
        fits
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Event of the topmost tappable element under (x, y)
    pub fn hit_test(&self, x: u16, y: u16) -> Option<&AppEvent> {
        self.elements.iter().rev().find_map(|element| {
            let event = element.event()?;
            let rect = element.area;
            let inside =
                x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom();
            inside.then_some(event)
        })
    }

    /// First element showing exactly `text`
    pub fn find(&self, text: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.text() == Some(text))
    }

    /// Rectangle of the first tappable element showing exactly `label`
    pub fn button_rect(&self, label: &str) -> Option<Rect> {
        self.elements
            .iter()
            .find(|e| e.event().is_some() && e.text() == Some(label))
            .map(|e| e.area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: CellSize = CellSize::new(100, 40);

    fn start_button(anchor: Anchor) -> Element {
        Element::button("Start", ButtonVariant::Primary, AppEvent::Start, 20, anchor)
    }

    fn exit_button(anchor: Anchor) -> Element {
        Element::button("Exit", ButtonVariant::Secondary, AppEvent::Quit, 12, anchor)
    }

    fn areas(scene: &Scene) -> Vec<Rect> {
        scene.elements().iter().map(Element::area).collect()
    }

    #[test]
    fn test_rect_uses_percent_anchor() {
        let element = Element::image(None, CellSize::new(10, 4), Anchor::new(0.5, 0.25));
        assert_eq!(element.anchored_rect(SCREEN), Rect::new(45, 8, 10, 4));
    }

    #[test]
    fn test_rect_clamped_to_screen() {
        let element = Element::image(None, CellSize::new(10, 4), Anchor::new(1.0, 1.0));
        assert_eq!(element.anchored_rect(SCREEN), Rect::new(90, 36, 10, 4));

        let oversized = Element::image(None, CellSize::new(200, 80), Anchor::centered(0.5));
        assert_eq!(oversized.anchored_rect(SCREEN), Rect::new(0, 0, 100, 40));
    }

    #[test]
    fn test_button_grows_to_fit_label() {
        let short = Element::button(
            "Exit",
            ButtonVariant::Secondary,
            AppEvent::Quit,
            12,
            Anchor::centered(0.5),
        );
        assert_eq!(short.size, CellSize::new(12, 3));

        let long = Element::button(
            "A label much longer than twelve",
            ButtonVariant::Primary,
            AppEvent::Quit,
            12,
            Anchor::centered(0.5),
        );
        assert_eq!(long.size.cols, 35);
    }

    #[test]
    fn test_hit_test_returns_bound_event() {
        let mut scene = Scene::new(SCREEN);
        scene.push(Element::label("Title", LabelStyle::Headline, Anchor::centered(0.1)));
        scene.push(start_button(Anchor::centered(0.4)));
        scene.push(exit_button(Anchor::centered(0.6)));

        let start = scene.button_rect("Start").unwrap();
        assert_eq!(scene.hit_test(start.x, start.y), Some(&AppEvent::Start));
        assert_eq!(
            scene.hit_test(start.right() - 1, start.bottom() - 1),
            Some(&AppEvent::Start)
        );
        assert_eq!(scene.hit_test(start.right(), start.y), None);

        let exit = scene.button_rect("Exit").unwrap();
        assert_eq!(scene.hit_test(exit.x + 1, exit.y + 1), Some(&AppEvent::Quit));

        // Labels are not tappable
        let title = scene.find("Title").unwrap().area();
        assert_eq!(scene.hit_test(title.x + 1, title.y), None);
    }

    #[test]
    fn test_clear_keeps_background() {
        let mut scene = Scene::new(SCREEN);
        let bg = Rc::new(RasterImage::from_dynamic(&image::DynamicImage::new_rgb8(2, 2)));
        scene.set_background(Some(bg));
        scene.push(Element::label("x", LabelStyle::Caption, Anchor::centered(0.5)));

        scene.clear_elements();

        assert_eq!(scene.element_count(), 0);
        assert!(scene.background().is_some());
    }

    #[test]
    fn test_arrange_keeps_anchors_when_clear() {
        let mut scene = Scene::new(SCREEN);
        scene.push(start_button(Anchor::centered(0.4)));
        scene.push(exit_button(Anchor::centered(0.6)));
        let anchored = areas(&scene);

        assert!(scene.arrange());

        assert_eq!(areas(&scene), anchored);
    }

    #[test]
    fn test_arrange_moves_colliding_button_below() {
        let mut scene = Scene::new(MIN_SCREEN);
        scene.push(start_button(Anchor::centered(0.4)));
        scene.push(exit_button(Anchor::centered(0.5)));
        // Anchored, the two buttons share row 11
        assert!(scene.elements()[0].area().intersects(scene.elements()[1].area()));

        assert!(scene.arrange());

        let start = scene.button_rect("Start").unwrap();
        let exit = scene.button_rect("Exit").unwrap();
        assert_eq!(start, Rect::new(30, 9, 20, 3));
        assert_eq!(exit, Rect::new(34, 13, 12, 3));
        // Every cell of Start now starts the kiosk
        for y in start.y..start.bottom() {
            assert_eq!(scene.hit_test(start.x + 10, y), Some(&AppEvent::Start));
        }
    }

    #[test]
    fn test_arrange_pulls_stack_above_bottom_edge() {
        let mut scene = Scene::new(CellSize::new(40, 12));
        scene.push(start_button(Anchor::centered(0.7)));
        scene.push(exit_button(Anchor::centered(0.9)));

        assert!(scene.arrange());

        let start = scene.button_rect("Start").unwrap();
        let exit = scene.button_rect("Exit").unwrap();
        assert_eq!(exit.bottom(), 12);
        assert_eq!(start.bottom() + 1, exit.y);
    }

    #[test]
    fn test_arrange_leaves_side_by_side_elements_alone() {
        let mut scene = Scene::new(MIN_SCREEN);
        scene.push(start_button(Anchor::new(0.25, 0.5)));
        scene.push(exit_button(Anchor::new(0.75, 0.5)));
        let anchored = areas(&scene);

        assert!(scene.arrange());

        assert_eq!(areas(&scene), anchored);
    }

    #[test]
    fn test_arrange_reports_screen_too_short() {
        let mut scene = Scene::new(CellSize::new(40, 8));
        scene.push(start_button(Anchor::centered(0.2)));
        scene.push(exit_button(Anchor::centered(0.5)));
        scene.push(Element::label("Footer", LabelStyle::Caption, Anchor::centered(0.9)));

        assert!(!scene.arrange());
        assert!(areas(&scene).iter().all(|a| a.bottom() <= 8));
    }
}
