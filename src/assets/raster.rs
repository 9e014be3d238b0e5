// ABOUTME: Decoded image stored as RGB pixels and drawn with half-block cells
// Each terminal cell shows two vertically stacked pixels: "▀" with fg = top, bg = bottom

use image::DynamicImage;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

const HALF_BLOCK: &str = "▀";

/// Size of an on-screen slot in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSize {
    pub cols: u16,
    pub rows: u16,
}

impl CellSize {
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Pixel dimensions an image needs to fill this slot exactly
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        (u32::from(self.cols), u32::from(self.rows) * 2)
    }

    /// At least as wide and as tall as `other`
    pub fn covers(&self, other: CellSize) -> bool {
        self.cols >= other.cols && self.rows >= other.rows
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl RasterImage {
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        let pixels = rgb.pixels().map(|p| p.0).collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Footprint in cells (an odd trailing pixel row still takes a cell)
    pub fn cell_size(&self) -> CellSize {
        CellSize::new(
            self.width.min(u32::from(u16::MAX)) as u16,
            self.height.div_ceil(2).min(u32::from(u16::MAX)) as u16,
        )
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }
}

fn to_color([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

impl Widget for &RasterImage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let footprint = self.cell_size();
        let cols = area.width.min(footprint.cols);
        let rows = area.height.min(footprint.rows);

        for row in 0..rows {
            for col in 0..cols {
                let x = u32::from(col);
                let top_y = u32::from(row) * 2;
                let Some(top) = self.pixel(x, top_y) else {
                    continue;
                };
                // Odd heights: the last row repeats its top pixel
                let bottom = self.pixel(x, top_y + 1).unwrap_or(top);

                buf.get_mut(area.x + col, area.y + row)
                    .set_symbol(HALF_BLOCK)
                    .set_fg(to_color(top))
                    .set_bg(to_color(bottom));
            }
        }
    }
}
