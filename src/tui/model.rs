//! Application model for the TUI.

use std::path::PathBuf;

use tracing::error;
use tuirealm::Update;

use crate::color::{Argb, PaletteError, Scope};
use crate::controller::{PaletteController, SelectorSlot};
use crate::store::TomlStore;

use super::msg::Msg;

/// Model shared by the activities: the palette controller plus UI state.
pub struct Model {
    pub controller: PaletteController<TomlStore>,
    pub store_path: PathBuf,
    /// Outcome of the last picker run: Some = committed value, None = cancel.
    pub pending_pick: Option<Argb>,
    pub show_help: bool,
    pub message: Option<String>,
}

impl Model {
    pub fn new(scope: Scope, store_path: PathBuf) -> Self {
        Self {
            controller: PaletteController::new(scope),
            store_path,
            pending_pick: None,
            show_help: false,
            message: None,
        }
    }

    /// Acquire the store handle if absent. The controller's first attach
    /// loads palette state; reattach after teardown keeps it.
    pub fn reattach_store(&mut self) -> Result<(), PaletteError> {
        if self.controller.is_attached() {
            return Ok(());
        }
        let store = TomlStore::open(&self.store_path)?;
        self.controller.attach(store)
    }

    /// Apply the picker outcome to the in-flight edit, if any.
    pub fn resolve_pending_edit(&mut self) -> Result<(), PaletteError> {
        if !self.controller.is_editing() {
            self.pending_pick = None;
            return Ok(());
        }
        match self.pending_pick.take() {
            Some(value) => {
                self.controller.commit_edit(value)?;
            }
            None => self.controller.cancel_edit(),
        }
        Ok(())
    }

    fn report(&mut self, err: &PaletteError) {
        error!("{err}");
        self.message = Some(err.to_string());
    }
}

impl Update<Msg> for Model {
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;

        match msg {
            Msg::ShowHelp => {
                self.show_help = true;
                None
            }
            Msg::HideHelp => {
                self.show_help = false;
                None
            }

            Msg::ForegroundSelected(position) => {
                if let Err(e) = self
                    .controller
                    .select_default(SelectorSlot::Foreground, position)
                {
                    self.report(&e);
                }
                None
            }
            Msg::BackgroundSelected(position) => {
                if let Err(e) = self
                    .controller
                    .select_default(SelectorSlot::Background, position)
                {
                    self.report(&e);
                }
                None
            }

            Msg::Reload => {
                match self.controller.reload() {
                    Ok(()) => self.message = None,
                    Err(e) => self.report(&e),
                }
                None
            }

            // Handled at the activity level
            Msg::Quit | Msg::EditColor(_) | Msg::FocusNext | Msg::FocusPrev | Msg::None => None,
        }
    }
}
