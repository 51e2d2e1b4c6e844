//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::color::Scope;

/// Palette configuration screen for terminal emulators: edit the 16 ANSI
/// slots and choose the default foreground/background pair.
#[derive(Parser, Debug)]
#[command(name = "swatchboard", version, about)]
pub struct Cli {
    /// Host whose palette scope to open; omit for the global palette
    #[arg(long)]
    pub host: Option<String>,

    /// Path to the palette store file
    #[arg(long, default_value = "palettes.toml")]
    pub store: PathBuf,

    /// Print the scope's palette and default pair, then exit
    #[arg(long)]
    pub show: bool,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// The palette scope selected by `--host`.
    pub fn scope(&self) -> Scope {
        match &self.host {
            Some(host) => Scope::host(host),
            None => Scope::global(),
        }
    }
}
