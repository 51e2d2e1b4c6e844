//! Interactive palette configuration TUI.
//!
//! Architecture: activity-based with tui-realm for components. The colors
//! screen and the modal color picker are separate activities; the
//! ActivityManager swaps between them while the shared Context carries the
//! palette controller (and with it the in-flight edit target) across.

mod activities;
mod activity;
pub mod canvas;
mod components;
pub mod event;
mod model;
pub mod msg;

use std::io::stdout;

use color_eyre::eyre::Result;
use ratatui::{
    Terminal,
    crossterm::ExecutableCommand,
    crossterm::terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
    prelude::CrosstermBackend,
};

use crate::cli::Cli;

pub use event::UserEvent;
pub use model::Model;

use activity::{ActivityManager, Context};

/// Run the palette configuration screen.
pub fn run(cli: &Cli) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let model = Model::new(cli.scope(), cli.store.clone());
    let context = Context { model };
    let mut manager = ActivityManager::new(context);

    let result = manager.run(&mut terminal);

    // Cleanup terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}
