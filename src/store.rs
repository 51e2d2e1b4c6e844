//! TOML-backed persistence for palettes and default color pairs.
//!
//! The store file holds a `[global]` section plus optional `[hosts.<name>]`
//! sections. Each section carries 16 slot colors as hex strings and the
//! default foreground/background indices; missing fields fall back to the
//! stock xterm values. Every mutation rewrites the whole document; the
//! volume is small and bounded, so no incremental update path exists.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::color::{Argb, DefaultColors, PALETTE_SIZE, Palette, Scope};

/// Error type for store operations.
#[derive(Debug)]
pub enum StoreError {
    /// IO error reading/writing the store file
    Io(std::io::Error),
    /// TOML parsing error
    Parse(toml::de::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// A persisted color failed to parse
    InvalidColor(String),
    /// Slot index outside the palette
    SlotOutOfRange(usize),
    /// Persisted state violates a palette invariant
    Corrupt(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Parse(e) => write!(f, "TOML parse error: {e}"),
            Self::Serialize(e) => write!(f, "TOML serialize error: {e}"),
            Self::InvalidColor(s) => write!(f, "invalid color: {s}"),
            Self::SlotOutOfRange(i) => write!(f, "slot index {i} out of range (0-15)"),
            Self::Corrupt(s) => write!(f, "corrupt palette store: {s}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

/// The persistence collaborator consumed by the palette controller.
pub trait PaletteStore {
    /// Full palette for a scope; an unknown scope yields the stock palette.
    fn colors(&self, scope: &Scope) -> Result<Palette, StoreError>;

    /// Default foreground/background pair for a scope.
    fn default_colors(&self, scope: &Scope) -> Result<DefaultColors, StoreError>;

    /// Persist a single slot.
    fn set_color(&mut self, scope: &Scope, index: usize, value: Argb) -> Result<(), StoreError>;

    /// Persist the default pair atomically.
    fn set_default_colors(
        &mut self,
        scope: &Scope,
        defaults: DefaultColors,
    ) -> Result<(), StoreError>;
}

/// Root structure of the store file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreDocument {
    /// The global/default palette section
    pub global: ScopeSection,
    /// Per-host palette sections
    pub hosts: BTreeMap<String, ScopeSection>,
}

impl StoreDocument {
    pub fn section(&self, scope: &Scope) -> Option<&ScopeSection> {
        match scope.host_name() {
            Some(name) => self.hosts.get(name),
            None => Some(&self.global),
        }
    }

    pub fn section_mut(&mut self, scope: &Scope) -> &mut ScopeSection {
        match scope.host_name() {
            Some(name) => self.hosts.entry(name.to_string()).or_default(),
            None => &mut self.global,
        }
    }
}

/// One scope's persisted palette state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeSection {
    /// 16 slot colors as `#aarrggbb` strings; absent = stock palette
    pub colors: Option<Vec<String>>,
    /// Default foreground slot index
    pub foreground: Option<usize>,
    /// Default background slot index
    pub background: Option<usize>,
}

impl ScopeSection {
    /// Decode the persisted palette, validating the slot count.
    pub fn palette(&self) -> Result<Palette, StoreError> {
        let Some(raw) = &self.colors else {
            return Ok(Palette::default());
        };
        if raw.len() != PALETTE_SIZE {
            return Err(StoreError::Corrupt(format!(
                "section has {} colors, expected {PALETTE_SIZE}",
                raw.len()
            )));
        }
        let mut slots = [Argb::OPAQUE_BLACK; PALETTE_SIZE];
        for (slot, text) in slots.iter_mut().zip(raw) {
            *slot = Argb::parse(text).map_err(StoreError::InvalidColor)?;
        }
        Ok(Palette::new(slots))
    }

    /// Decode the persisted default pair, validating both indices.
    pub fn defaults(&self) -> Result<DefaultColors, StoreError> {
        let stock = DefaultColors::default();
        let fg = self.foreground.unwrap_or(stock.foreground());
        let bg = self.background.unwrap_or(stock.background());
        DefaultColors::new(fg, bg).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    fn record_palette(&mut self, palette: &Palette) {
        self.colors = Some(palette.iter().map(|c| c.to_string()).collect());
    }
}

/// File-backed palette store. Opening reads the whole document (or starts
/// from an empty one when the file does not exist yet); each mutation
/// writes it back.
pub struct TomlStore {
    path: PathBuf,
    document: StoreDocument,
}

impl TomlStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let document = if path.exists() {
            toml::from_str(&std::fs::read_to_string(&path)?)?
        } else {
            StoreDocument::default()
        };
        Ok(Self { path, document })
    }

    fn save(&self) -> Result<(), StoreError> {
        let content = toml::to_string_pretty(&self.document)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PaletteStore for TomlStore {
    fn colors(&self, scope: &Scope) -> Result<Palette, StoreError> {
        match self.document.section(scope) {
            Some(section) => section.palette(),
            None => Ok(Palette::default()),
        }
    }

    fn default_colors(&self, scope: &Scope) -> Result<DefaultColors, StoreError> {
        match self.document.section(scope) {
            Some(section) => section.defaults(),
            None => Ok(DefaultColors::default()),
        }
    }

    fn set_color(&mut self, scope: &Scope, index: usize, value: Argb) -> Result<(), StoreError> {
        let mut palette = self.colors(scope)?;
        palette
            .set(index, value)
            .map_err(|_| StoreError::SlotOutOfRange(index))?;
        self.document.section_mut(scope).record_palette(&palette);
        self.save()
    }

    fn set_default_colors(
        &mut self,
        scope: &Scope,
        defaults: DefaultColors,
    ) -> Result<(), StoreError> {
        let section = self.document.section_mut(scope);
        section.foreground = Some(defaults.foreground());
        section.background = Some(defaults.background());
        self.save()
    }
}
