//! Terminal-cell implementations of the swatch drawing primitives.

use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::color::Argb;
use crate::swatch::{Bounds, Canvas, TextMetrics};

/// Text metrics for the terminal cell grid: every glyph is one cell wide,
/// rises one cell above the baseline, and has no descender row.
pub struct CellMetrics;

impl TextMetrics for CellMetrics {
    fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32
    }

    fn ascent(&self) -> i32 {
        -1
    }

    fn descent(&self) -> i32 {
        0
    }
}

/// Convert a packed ARGB value to a ratatui RGB color (alpha is dropped;
/// terminals have no alpha channel).
pub fn to_color(color: Argb) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

/// Convert a ratatui area to swatch bounds.
pub fn bounds_of(area: Rect) -> Bounds {
    Bounds {
        x: i32::from(area.x),
        y: i32::from(area.y),
        width: i32::from(area.width),
        height: i32::from(area.height),
    }
}

/// Canvas that draws into a ratatui buffer, clipped to one region.
///
/// The outline pass has no true stroke on a cell grid; instead it paints the
/// outline tone as the background of the glyph row, one cell wider on each
/// side (the round-cap ends), so the label keeps a dark halo over any swatch
/// color.
pub struct TermCanvas<'a> {
    buf: &'a mut Buffer,
    clip: Rect,
}

impl<'a> TermCanvas<'a> {
    pub fn new(buf: &'a mut Buffer, clip: Rect) -> Self {
        Self { buf, clip }
    }

    fn cell_in_clip(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        if x < i32::from(self.clip.left())
            || x >= i32::from(self.clip.right())
            || y < i32::from(self.clip.top())
            || y >= i32::from(self.clip.bottom())
        {
            return None;
        }
        self.buf.cell_mut((x as u16, y as u16))
    }

    /// Leftmost cell of a label centered on `anchor_x`.
    fn text_start(text: &str, anchor_x: i32) -> (i32, i32) {
        let width = text.chars().count() as i32;
        (anchor_x - width / 2, width)
    }
}

impl Canvas for TermCanvas<'_> {
    fn fill(&mut self, bounds: Bounds, color: Argb) {
        let bg = to_color(color);
        for y in bounds.y..bounds.y + bounds.height {
            for x in bounds.x..bounds.x + bounds.width {
                if let Some(cell) = self.cell_in_clip(x, y) {
                    cell.set_char(' ');
                    cell.set_bg(bg);
                }
            }
        }
    }

    fn stroke_text(&mut self, text: &str, anchor_x: i32, anchor_y: i32, color: Argb) {
        let bg = to_color(color);
        let (start, width) = Self::text_start(text, anchor_x);
        // glyph row sits one cell above the baseline
        let row = anchor_y - 1;
        for x in (start - 1)..=(start + width) {
            if let Some(cell) = self.cell_in_clip(x, row) {
                cell.set_bg(bg);
            }
        }
    }

    fn fill_text(&mut self, text: &str, anchor_x: i32, anchor_y: i32, color: Argb) {
        let fg = to_color(color);
        let (start, _) = Self::text_start(text, anchor_x);
        let row = anchor_y - 1;
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cell_in_clip(start + i as i32, row) {
                cell.set_char(ch);
                cell.set_fg(fg);
            }
        }
    }
}
