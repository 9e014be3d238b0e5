// ABOUTME: Paints the current scene full screen: background surface first, then each element

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use super::scene::{ButtonVariant, Element, ElementKind, LabelStyle, Scene};
use crate::assets::RasterImage;

// Kiosk palette
const GOLD: Color = Color::Rgb(255, 215, 0);
const INK: Color = Color::Rgb(17, 17, 17);
const CHARCOAL: Color = Color::Rgb(51, 51, 51);
const WHITE: Color = Color::Rgb(255, 255, 255);
const BLACK: Color = Color::Rgb(0, 0, 0);

pub struct LayoutComponent;

impl LayoutComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, scene: &Scene) {
        let area = frame.size();
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(BLACK)), area);

        if let Some(background) = scene.background() {
            frame.render_widget(background.as_ref(), area);
        }

        for element in scene.elements() {
            let rect = element.area().intersection(area);
            if rect.is_empty() {
                continue;
            }
            self.render_element(frame, element, rect);
        }
    }

    fn render_element(&self, frame: &mut Frame, element: &Element, area: Rect) {
        // Filled elements must not inherit background glyphs
        if !matches!(element.kind, ElementKind::Image { .. }) {
            frame.render_widget(Clear, area);
        }

        match &element.kind {
            ElementKind::Label { text, style } => {
                let style = label_style(*style);
                let label = Paragraph::new(Line::from(Span::styled(text.as_str(), style)))
                    .alignment(Alignment::Center)
                    .style(Style::default().bg(BLACK));
                frame.render_widget(label, area);
            }
            ElementKind::Button { label, variant, .. } => {
                let (bg, fg) = match variant {
                    ButtonVariant::Primary => (GOLD, INK),
                    ButtonVariant::Secondary => (CHARCOAL, WHITE),
                };
                frame.render_widget(Block::default().style(Style::default().bg(bg)), area);

                let label_row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
                let label = Paragraph::new(Span::styled(
                    label.as_str(),
                    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center);
                frame.render_widget(label, label_row);
            }
            ElementKind::ImageButton { image, caption, .. } => {
                frame.render_widget(Block::default().style(Style::default().bg(WHITE)), area);
                let picture =
                    Rect::new(area.x, area.y + 1, area.width, area.height.saturating_sub(2));
                render_picture(frame, image.as_deref(), picture);
                render_line(frame, caption, Style::default().fg(INK).bg(WHITE), last_row(area));
            }
            ElementKind::Image { image } => {
                render_picture(frame, image.as_deref(), area);
            }
            ElementKind::ProductCard { image, name, price } => {
                frame.render_widget(Block::default().style(Style::default().bg(BLACK)), area);
                let picture = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(2));
                render_picture(frame, image.as_deref(), picture);

                if area.height >= 2 {
                    let name_row = Rect::new(area.x, area.bottom() - 2, area.width, 1);
                    render_line(frame, name, Style::default().fg(WHITE).bg(BLACK), name_row);
                }
                render_line(frame, price, Style::default().fg(GOLD).bg(BLACK), last_row(area));
            }
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn label_style(style: LabelStyle) -> Style {
    match style {
        LabelStyle::Headline => Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        LabelStyle::Prompt => Style::default().fg(GOLD),
        LabelStyle::Caption => Style::default().fg(WHITE),
    }
}

fn last_row(area: Rect) -> Rect {
    Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1.min(area.height))
}

fn render_line(frame: &mut Frame, text: &str, style: Style, area: Rect) {
    let line = Paragraph::new(Span::styled(text, style)).alignment(Alignment::Center);
    frame.render_widget(line, area);
}

/// Draw `image` horizontally centred in `area`; an unavailable image leaves it blank
fn render_picture(frame: &mut Frame, image: Option<&RasterImage>, area: Rect) {
    let Some(image) = image else {
        return;
    };
    let footprint = image.cell_size();
    let width = footprint.cols.min(area.width);
    let x = area.x + (area.width - width) / 2;
    frame.render_widget(image, Rect::new(x, area.y, width, area.height));
}
