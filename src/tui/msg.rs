//! Application messages for the TUI.

use crate::color::Argb;

/// Messages produced on the colors screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // Application control
    Quit,
    ShowHelp,
    HideHelp,

    // Focus/Navigation
    FocusNext,
    FocusPrev,

    // Grid interaction: open the modal picker for a slot
    EditColor(usize),

    // Default pair selection
    ForegroundSelected(usize),
    BackgroundSelected(usize),

    // Re-read palette and defaults from the store
    Reload,

    // No-op (for unhandled events)
    None,
}

/// Messages produced on the picker screen.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerMsg {
    /// The user accepted this color for the slot being edited.
    Committed(Argb),
    /// The user backed out; the slot stays untouched.
    Cancelled,
    Quit,
    None,
}
