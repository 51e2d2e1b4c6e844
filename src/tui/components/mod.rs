//! TUI components using tui-realm.

pub mod help;
pub mod picker;
pub mod selector;
pub mod swatch_grid;

pub use help::{COLORS_FOOTER, PICKER_FOOTER, render_help};
pub use picker::HsvPicker;
pub use selector::DefaultSelector;
pub use swatch_grid::SwatchGrid;
