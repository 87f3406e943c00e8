//! Terminal connect-the-pairs runner (default binary).
//!
//! `tui-linkup` (or `tui-linkup play`) opens the interactive game; it uses
//! crossterm for input and the framebuffer renderer from `tui-linkup-term`.
//! `tui-linkup auto` plays headlessly and prints JSON lines.

mod app;
mod cli;
mod headless;
mod logging;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_path.as_deref())?;

    let config = cli.game.session_config();
    config.validate()?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => app::run(config),
        Command::Auto { games, max_moves } => headless::run(config, games, max_moves),
    }
}
