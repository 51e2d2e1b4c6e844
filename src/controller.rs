//! Palette editing state machine.
//!
//! [`PaletteController`] owns the in-memory palette and default pair for one
//! scope, tracks the in-flight edit target, and writes every mutation
//! through the persistence collaborator. The store handle is scoped:
//! acquired on entry or resume via [`PaletteController::attach`], released
//! on exit via [`PaletteController::detach`], and never used after release.

use tracing::{debug, info};

use crate::color::{Argb, DefaultColors, PALETTE_SIZE, Palette, PaletteError, Scope};
use crate::store::PaletteStore;

/// Which palette slot an open modal edit will commit to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditTarget {
    #[default]
    Idle,
    Editing(usize),
}

/// Which half of the default pair a selector controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorSlot {
    Foreground,
    Background,
}

/// Screen-lifetime controller for one scope's palette.
pub struct PaletteController<S> {
    scope: Scope,
    store: Option<S>,
    palette: Palette,
    defaults: DefaultColors,
    edit: EditTarget,
    loaded: bool,
    redraw: bool,
}

impl<S: PaletteStore> PaletteController<S> {
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            store: None,
            palette: Palette::default(),
            defaults: DefaultColors::default(),
            edit: EditTarget::Idle,
            loaded: false,
            redraw: false,
        }
    }

    /// Acquire the store handle. The first call fetches palette and default
    /// pair; later calls (resume after teardown) keep the in-memory state,
    /// which remains valid across the handle gap.
    pub fn attach(&mut self, store: S) -> Result<(), PaletteError> {
        if self.loaded {
            debug!(scope = %self.scope, "store handle reattached");
            self.store = Some(store);
            return Ok(());
        }

        let palette = store.colors(&self.scope)?;
        let defaults = store.default_colors(&self.scope)?;
        info!(
            scope = %self.scope,
            fg = defaults.foreground(),
            bg = defaults.background(),
            "palette loaded"
        );
        self.palette = palette;
        self.defaults = defaults;
        self.store = Some(store);
        self.loaded = true;
        Ok(())
    }

    /// Release the store handle. In-memory state stays put for a later
    /// resume.
    pub fn detach(&mut self) -> Option<S> {
        if self.store.is_some() {
            debug!(scope = %self.scope, "store handle released");
        }
        self.store.take()
    }

    pub fn is_attached(&self) -> bool {
        self.store.is_some()
    }

    /// Re-fetch palette and default pair from the attached store.
    pub fn reload(&mut self) -> Result<(), PaletteError> {
        let store = self.store.as_ref().ok_or(PaletteError::StoreDetached)?;
        self.palette = store.colors(&self.scope)?;
        self.defaults = store.default_colors(&self.scope)?;
        self.redraw = true;
        Ok(())
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn defaults(&self) -> DefaultColors {
        self.defaults
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn edit_target(&self) -> EditTarget {
        self.edit
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.edit, EditTarget::Editing(_))
    }

    /// Start an edit of `index` and return the seed value for the modal
    /// picker. Only one edit can be in flight at a time.
    pub fn begin_edit(&mut self, index: usize) -> Result<Argb, PaletteError> {
        if let EditTarget::Editing(current) = self.edit {
            return Err(PaletteError::AlreadyEditing(current));
        }
        let seed = self.palette.get(index)?;
        self.edit = EditTarget::Editing(index);
        debug!(index, %seed, "edit started");
        Ok(seed)
    }

    /// Commit the in-flight edit with the picker's chosen value: update the
    /// slot, persist it, and request a grid redraw. The edit target resets
    /// on every commit, successful or not.
    pub fn commit_edit(&mut self, value: Argb) -> Result<usize, PaletteError> {
        let EditTarget::Editing(index) = self.edit else {
            return Err(PaletteError::NotEditing);
        };
        self.edit = EditTarget::Idle;

        let store = self.store.as_mut().ok_or(PaletteError::StoreDetached)?;
        self.palette.set(index, value)?;
        self.redraw = true;
        // Slot writes always land in the global palette even when the screen
        // was opened for a host scope, while reads honor the scope. Inherited
        // asymmetry, kept as-is; per-host slot editing is not supported.
        store.set_color(&Scope::global(), index, value)?;
        info!(index, %value, "palette slot updated");
        Ok(index)
    }

    /// Abandon the in-flight edit without mutating anything.
    pub fn cancel_edit(&mut self) {
        if let EditTarget::Editing(index) = std::mem::take(&mut self.edit) {
            debug!(index, "edit cancelled");
        }
    }

    /// Move one half of the default pair to `position`. Re-selecting the
    /// current value is a no-op with zero persistence traffic; some UI
    /// toolkits re-fire selection events spuriously.
    pub fn select_default(
        &mut self,
        slot: SelectorSlot,
        position: usize,
    ) -> Result<bool, PaletteError> {
        if position >= PALETTE_SIZE {
            return Err(PaletteError::IndexOutOfRange(position));
        }

        let current = match slot {
            SelectorSlot::Foreground => self.defaults.foreground(),
            SelectorSlot::Background => self.defaults.background(),
        };
        if position == current {
            return Ok(false);
        }

        let updated = match slot {
            SelectorSlot::Foreground => DefaultColors::new(position, self.defaults.background()),
            SelectorSlot::Background => DefaultColors::new(self.defaults.foreground(), position),
        }?;

        let store = self.store.as_mut().ok_or(PaletteError::StoreDetached)?;
        self.defaults = updated;
        store.set_default_colors(&self.scope, updated)?;
        info!(
            fg = updated.foreground(),
            bg = updated.background(),
            "default colors updated"
        );
        Ok(true)
    }

    /// Consume the pending grid-redraw request, if any.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }
}
