//! Self-measuring, self-rendering color swatches.
//!
//! A [`Swatch`] is a plain value: it owns a color, a label, and a square
//! flag, and produces a size from layout constraints and pixels from a
//! [`Canvas`]. Text geometry comes from a [`TextMetrics`] provider so the
//! same measurement algorithm serves terminal cells and fixed-size fonts
//! alike. Swatches never touch persistence.

use std::fmt::Write as _;

use crate::color::Argb;

/// Fixed dark tone for the label outline pass.
const OUTLINE_TONE: Argb = Argb(0xFF00_0000);
/// Fixed light tone for the label fill pass.
const LABEL_TONE: Argb = Argb(0xFFFF_FFFF);

const DEFAULT_H_PADDING: i32 = 2;
const DEFAULT_V_PADDING: i32 = 0;

/// A layout constraint on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The axis must be exactly this size.
    Exact(i32),
    /// The axis may be anything up to this size.
    AtMost(i32),
    /// No bound on this axis.
    Unconstrained,
}

/// A measured size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// A rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Text geometry for the fixed label font.
pub trait TextMetrics {
    /// Advance width of `text`.
    fn text_width(&self, text: &str) -> i32;
    /// Distance from baseline to glyph top. Negative, per the usual
    /// text-metrics convention.
    fn ascent(&self) -> i32;
    /// Distance from baseline to glyph bottom.
    fn descent(&self) -> i32;
}

/// Drawing surface for swatch rendering.
///
/// Text anchors are (horizontal center, baseline). `stroke_text` is the
/// outline pass behind the glyphs; `fill_text` is the solid pass on top.
pub trait Canvas {
    fn fill(&mut self, bounds: Bounds, color: Argb);
    fn stroke_text(&mut self, text: &str, anchor_x: i32, anchor_y: i32, color: Argb);
    fn fill_text(&mut self, text: &str, anchor_x: i32, anchor_y: i32, color: Argb);
}

/// One palette entry as a drawable unit: a colored rectangle with a
/// centered, outlined label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    color: Argb,
    label: String,
    square: bool,
    h_padding: i32,
    v_padding: i32,
}

impl Swatch {
    pub fn new(color: Argb, label: impl Into<String>, square: bool) -> Self {
        Self {
            color,
            label: label.into(),
            square,
            h_padding: DEFAULT_H_PADDING,
            v_padding: DEFAULT_V_PADDING,
        }
    }

    /// Override the total horizontal/vertical padding added around the label
    /// when measuring.
    pub fn with_padding(mut self, horizontal: i32, vertical: i32) -> Self {
        self.h_padding = horizontal;
        self.v_padding = vertical;
        self
    }

    pub fn color(&self) -> Argb {
        self.color
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_square(&self) -> bool {
        self.square
    }

    pub fn set_color(&mut self, color: Argb) {
        self.color = color;
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Rebind the label to a slot number, reusing the label buffer.
    pub fn set_number(&mut self, number: usize) {
        self.label.clear();
        let _ = write!(self.label, "{number}");
    }

    /// Compute the intrinsic size under the given constraints. In square
    /// mode the height constraint is ignored once the width is known.
    pub fn measure(
        &self,
        width: MeasureSpec,
        height: MeasureSpec,
        metrics: &dyn TextMetrics,
    ) -> Size {
        let w = self.measure_width(width, metrics);
        let h = if self.square {
            w
        } else {
            self.measure_height(height, metrics)
        };
        Size {
            width: w,
            height: h,
        }
    }

    fn measure_width(&self, spec: MeasureSpec, metrics: &dyn TextMetrics) -> i32 {
        match spec {
            MeasureSpec::Exact(size) => size,
            _ => {
                let mut result = metrics.text_width(&self.label) + self.h_padding;
                if let MeasureSpec::AtMost(size) = spec {
                    result = result.min(size);
                }
                result
            }
        }
    }

    fn measure_height(&self, spec: MeasureSpec, metrics: &dyn TextMetrics) -> i32 {
        match spec {
            MeasureSpec::Exact(size) => size,
            _ => {
                // ascent is a negative number
                let mut result = -metrics.ascent() + metrics.descent() + self.v_padding;
                if let MeasureSpec::AtMost(size) = spec {
                    result = result.min(size);
                }
                result
            }
        }
    }

    /// Fill `bounds` with the swatch color, then draw the label twice at
    /// the anchor point: outline first, solid fill second, so the numeral
    /// stays legible over any background.
    pub fn render(&self, canvas: &mut dyn Canvas, bounds: Bounds, metrics: &dyn TextMetrics) {
        canvas.fill(bounds, self.color);

        let anchor_x = bounds.x + bounds.width / 2;
        // h/2 - ascent/2 shifts the baseline down so the glyph body lands
        // on the visual center.
        let anchor_y = bounds.y + bounds.height / 2 - metrics.ascent().div_euclid(2);

        canvas.stroke_text(&self.label, anchor_x, anchor_y, OUTLINE_TONE);
        canvas.fill_text(&self.label, anchor_x, anchor_y, LABEL_TONE);
    }
}
