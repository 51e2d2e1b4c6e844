//! Key event dispatch shared by all components.

use std::sync::LazyLock;

use crossterm_actions::{AppEvent, TuiEvent, TuiRealmDispatcher, emacs_defaults};

use super::msg::Msg;

/// Custom user events (currently unused, but required by tui-realm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}

/// Global dispatcher instance - shared by all components.
static DISPATCHER: LazyLock<TuiRealmDispatcher<TuiEvent>> =
    LazyLock::new(|| TuiRealmDispatcher::new(emacs_defaults()));

/// Convenience function for components to access the dispatcher.
pub fn dispatcher() -> &'static TuiRealmDispatcher<TuiEvent> {
    &DISPATCHER
}

/// Map actions that mean the same thing in every colors-screen component.
/// Returns Some(Msg) if the action was handled, None otherwise.
pub fn handle_global_events(action: &TuiEvent) -> Option<Msg> {
    match action {
        TuiEvent::App(AppEvent::Quit) => Some(Msg::Quit),
        TuiEvent::App(AppEvent::Help) => Some(Msg::ShowHelp),
        TuiEvent::App(AppEvent::Refresh) => Some(Msg::Reload),
        _ => None,
    }
}
