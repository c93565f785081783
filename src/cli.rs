//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "tui-memorize")]
#[command(version)]
#[command(about = "Memory card game for the terminal", long_about = None)]
#[command(styles = styles())]
pub struct Cli {
    /// Theme to start with (see --list-themes)
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Seed for reproducible deals
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Config file [default: <config dir>/tui-memorize/config.toml]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "debug" (overrides RUST_LOG and the config file)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the available themes and exit
    #[arg(long)]
    pub list_themes: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub print_config: bool,
}

fn styles() -> clap::builder::Styles {
    use clap::builder::styling::{AnsiColor, Effects, Styles};
    Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default())
}

impl Cli {
    /// Overlay command line values on top of the file configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
    }
}
