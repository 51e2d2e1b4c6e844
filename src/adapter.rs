//! Binding the palette to recyclable swatch instances.
//!
//! Grid and selector views both draw swatches from the live palette but
//! with different shapes. Each binding is a [`SwatchBinder`]: a narrow
//! `{count, bind(position, recycled)}` capability, recycling existing
//! instances instead of reconstructing them on every redraw.

use crate::color::{PALETTE_SIZE, Palette, PaletteError};
use crate::swatch::Swatch;

/// A fixed-size sequence of colors bindable to swatch instances.
pub trait SwatchBinder {
    fn count(&self) -> usize;

    /// Produce the swatch for `position`, rebinding `recycled` in place
    /// when one is supplied.
    fn bind(&self, position: usize, recycled: Option<Swatch>) -> Result<Swatch, PaletteError>;

    fn item_identity(&self, position: usize) -> usize {
        position
    }
}

/// Square swatches for the 16-slot grid, labeled 1-16.
pub struct GridAdapter<'a> {
    palette: &'a Palette,
}

impl<'a> GridAdapter<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl SwatchBinder for GridAdapter<'_> {
    fn count(&self) -> usize {
        PALETTE_SIZE
    }

    fn bind(&self, position: usize, recycled: Option<Swatch>) -> Result<Swatch, PaletteError> {
        let color = self.palette.get(position)?;
        Ok(match recycled {
            Some(mut swatch) => {
                swatch.set_color(color);
                // display numbering is 1-based over 0-based slots
                swatch.set_number(position + 1);
                swatch
            }
            None => Swatch::new(color, (position + 1).to_string(), true),
        })
    }
}

/// Inline (non-square) swatches for the single-choice default selectors.
pub struct SelectorAdapter<'a> {
    palette: &'a Palette,
}

impl<'a> SelectorAdapter<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl SwatchBinder for SelectorAdapter<'_> {
    fn count(&self) -> usize {
        PALETTE_SIZE
    }

    fn bind(&self, position: usize, recycled: Option<Swatch>) -> Result<Swatch, PaletteError> {
        let color = self.palette.get(position)?;
        Ok(match recycled {
            Some(mut swatch) => {
                swatch.set_color(color);
                swatch.set_number(position + 1);
                swatch
            }
            None => Swatch::new(color, (position + 1).to_string(), false),
        })
    }
}

/// Free-list of constructed swatch instances keyed by position. Views take
/// an instance out before binding and put it back after drawing, so redraws
/// reuse allocations instead of rebuilding swatches every frame.
pub struct SwatchPool {
    slots: Vec<Option<Swatch>>,
}

impl SwatchPool {
    pub fn with_capacity(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| None).collect(),
        }
    }

    pub fn take(&mut self, position: usize) -> Option<Swatch> {
        self.slots.get_mut(position).and_then(Option::take)
    }

    pub fn put(&mut self, position: usize, swatch: Swatch) {
        if let Some(slot) = self.slots.get_mut(position) {
            *slot = Some(swatch);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
