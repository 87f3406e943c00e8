//! Command-line interface for tui-linkup.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Args, Parser, Subcommand};

use tui_linkup::core::SessionConfig;
use tui_linkup::types::{DEFAULT_BOARD_SIZE, DEFAULT_TIME_LIMIT_SECS};

/// Connect-the-pairs tile matching in the terminal
#[derive(Parser, Debug)]
#[command(name = "tui-linkup")]
#[command(
    about = "Match pairs of tiles joined by a path with at most two bends",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub game: GameArgs,

    /// Write logs to this file (nothing is logged when unset)
    #[arg(long, env = "LINKUP_LOG_PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Session settings shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Seed for board generation; derived from the system time when unset
    #[arg(long, env = "LINKUP_SEED", global = true)]
    pub seed: Option<u32>,

    /// Board edge length (2..=16)
    #[arg(long, env = "LINKUP_BOARD_SIZE", default_value_t = DEFAULT_BOARD_SIZE, global = true)]
    pub board_size: u8,

    /// Seconds per game
    #[arg(
        long,
        env = "LINKUP_TIME_LIMIT",
        default_value_t = DEFAULT_TIME_LIMIT_SECS,
        global = true
    )]
    pub time_limit: u32,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Let the built-in player run games headlessly, one JSON line per game
    Auto {
        /// Number of games to play
        #[arg(short, long, default_value_t = 1)]
        games: u32,

        /// Give up a game after this many matched pairs
        #[arg(long, default_value_t = 1000)]
        max_moves: usize,
    },
}

impl GameArgs {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            board_size: self.board_size,
            time_limit_secs: self.time_limit,
            seed: self.seed.unwrap_or_else(time_seed),
            ..SessionConfig::default()
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}
