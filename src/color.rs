//! Packed ARGB colors and the 16-slot palette data model.

use std::fmt;
use std::str::FromStr;

use crate::store::StoreError;

/// Number of slots in an ANSI palette.
pub const PALETTE_SIZE: usize = 16;

/// A packed 32-bit ARGB color value (alpha in the high byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    pub const OPAQUE_BLACK: Argb = Argb(0xFF00_0000);
    pub const OPAQUE_WHITE: Argb = Argb(0xFFFF_FFFF);

    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }

    /// Perceived luminance on the 0-255 scale (BT.601 weights).
    pub fn luminance(self) -> f32 {
        0.299 * f32::from(self.red()) + 0.587 * f32::from(self.green()) + 0.114 * f32::from(self.blue())
    }

    /// Parse a `#rrggbb` or `#aarrggbb` hex literal. Six digits imply an
    /// opaque color.
    pub fn parse(input: &str) -> Result<Self, String> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        let raw = u32::from_str_radix(hex, 16)
            .map_err(|e| format!("invalid color literal '{input}': {e}"))?;
        match hex.len() {
            6 => Ok(Self(0xFF00_0000 | raw)),
            8 => Ok(Self(raw)),
            n => Err(format!(
                "invalid color literal '{input}': expected 6 or 8 hex digits, found {n}"
            )),
        }
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

impl FromStr for Argb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Stock xterm ANSI colors for slots 0-15, fully opaque.
pub const ANSI_16: [Argb; PALETTE_SIZE] = [
    Argb(0xFF00_0000), // 0  black
    Argb(0xFFCC_0000), // 1  red
    Argb(0xFF4E_9A06), // 2  green
    Argb(0xFFC4_A000), // 3  yellow
    Argb(0xFF34_65A4), // 4  blue
    Argb(0xFF75_507B), // 5  magenta
    Argb(0xFF06_989A), // 6  cyan
    Argb(0xFFD3_D7CF), // 7  white
    Argb(0xFF55_5753), // 8  bright black
    Argb(0xFFEF_2929), // 9  bright red
    Argb(0xFF8A_E234), // 10 bright green
    Argb(0xFFFC_E94F), // 11 bright yellow
    Argb(0xFF72_9FCF), // 12 bright blue
    Argb(0xFFAD_7FA8), // 13 bright magenta
    Argb(0xFF34_E2E2), // 14 bright cyan
    Argb(0xFFEE_EEEC), // 15 bright white
];

/// Error type for palette and controller operations.
#[derive(Debug)]
pub enum PaletteError {
    /// Slot index outside 0-15
    IndexOutOfRange(usize),
    /// Palette constructed from a sequence that is not 16 entries long
    WrongLength(usize),
    /// Edit started while another edit is in flight
    AlreadyEditing(usize),
    /// Commit without an edit in flight
    NotEditing,
    /// Mutation attempted after the store handle was released
    StoreDetached,
    /// Persistence failure
    Store(StoreError),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange(i) => write!(f, "palette index {i} out of range (0-15)"),
            Self::WrongLength(n) => {
                write!(f, "palette must have exactly {PALETTE_SIZE} entries, found {n}")
            }
            Self::AlreadyEditing(i) => write!(f, "an edit of slot {i} is already in flight"),
            Self::NotEditing => write!(f, "no edit in flight"),
            Self::StoreDetached => write!(f, "palette store handle has been released"),
            Self::Store(e) => write!(f, "store error: {e}"),
        }
    }
}

impl std::error::Error for PaletteError {}

impl From<StoreError> for PaletteError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

/// The 16-slot color table. Length is fixed for the lifetime of a value;
/// out-of-range access is an error, never a clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    slots: [Argb; PALETTE_SIZE],
}

impl Palette {
    pub fn new(slots: [Argb; PALETTE_SIZE]) -> Self {
        Self { slots }
    }

    pub fn get(&self, index: usize) -> Result<Argb, PaletteError> {
        self.slots
            .get(index)
            .copied()
            .ok_or(PaletteError::IndexOutOfRange(index))
    }

    pub fn set(&mut self, index: usize, value: Argb) -> Result<(), PaletteError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(PaletteError::IndexOutOfRange(index))?;
        *slot = value;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = Argb> + '_ {
        self.slots.iter().copied()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { slots: ANSI_16 }
    }
}

impl TryFrom<&[Argb]> for Palette {
    type Error = PaletteError;

    fn try_from(slice: &[Argb]) -> Result<Self, Self::Error> {
        let slots: [Argb; PALETTE_SIZE] = slice
            .try_into()
            .map_err(|_| PaletteError::WrongLength(slice.len()))?;
        Ok(Self { slots })
    }
}

/// The default foreground/background slot pair. Both indices are always
/// valid palette indices; nothing requires them to differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultColors {
    foreground: usize,
    background: usize,
}

impl DefaultColors {
    pub fn new(foreground: usize, background: usize) -> Result<Self, PaletteError> {
        if foreground >= PALETTE_SIZE {
            return Err(PaletteError::IndexOutOfRange(foreground));
        }
        if background >= PALETTE_SIZE {
            return Err(PaletteError::IndexOutOfRange(background));
        }
        Ok(Self {
            foreground,
            background,
        })
    }

    pub fn foreground(self) -> usize {
        self.foreground
    }

    pub fn background(self) -> usize {
        self.background
    }
}

impl Default for DefaultColors {
    /// Stock terminal defaults: white on black.
    fn default() -> Self {
        Self {
            foreground: 7,
            background: 0,
        }
    }
}

/// The host a palette belongs to; `global()` is the default palette shared
/// by hosts without one of their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Scope(Option<String>);

impl Scope {
    pub fn global() -> Self {
        Self(None)
    }

    pub fn host(name: impl Into<String>) -> Self {
        Self(Some(name.into()))
    }

    pub fn is_global(&self) -> bool {
        self.0.is_none()
    }

    pub fn host_name(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "global"),
        }
    }
}
