//! CLI entry point for swatchboard.

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use swatchboard::cli::Cli;
use swatchboard::logging::init_logging;
use swatchboard::store::{PaletteStore, TomlStore};
use swatchboard::tui;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let _guard = init_logging(cli.log_file.as_deref(), cli.log_level.as_deref());

    if cli.show {
        return show_palette(&cli);
    }

    tui::run(&cli)
}

/// Print the scope's 16 slots and default pair without entering the TUI.
fn show_palette(cli: &Cli) -> Result<()> {
    let scope = cli.scope();
    let store = TomlStore::open(&cli.store)
        .wrap_err_with(|| format!("Failed to open palette store {}", cli.store.display()))?;

    let palette = store.colors(&scope)?;
    let defaults = store.default_colors(&scope)?;

    println!("scope: {scope}");
    for (index, color) in palette.iter().enumerate() {
        let marker = match (
            index == defaults.foreground(),
            index == defaults.background(),
        ) {
            (true, true) => "  (fg, bg)",
            (true, false) => "  (fg)",
            (false, true) => "  (bg)",
            (false, false) => "",
        };
        println!("{:>2}  {color}{marker}", index + 1);
    }

    Ok(())
}
