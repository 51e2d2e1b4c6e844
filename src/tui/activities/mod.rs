//! Activity modules for the TUI.

pub mod colors;
pub mod picker;

pub use colors::ColorsActivity;
pub use picker::PickerActivity;
