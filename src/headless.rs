//! Headless auto-play: no terminal, one JSON line per game on stdout.

use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use tui_linkup::core::{GameSession, ManualClock, SessionConfig};
use tui_linkup::engine::{AutoPlayer, MoveRecord};

/// Summary of one headless game
#[derive(Debug, Serialize)]
pub struct GameReport {
    pub game: u32,
    pub seed: u32,
    pub won: bool,
    pub score: u32,
    pub remaining_tiles: usize,
    pub time_left_secs: u32,
    pub moves: Vec<MoveRecord>,
}

/// Play `games` games back to back with one session
///
/// The clock is a [`ManualClock`] that never advances, so a run depends only
/// on the seed and every win collects the full time bonus.
pub fn play_games(config: SessionConfig, games: u32, max_moves: usize) -> Result<Vec<GameReport>> {
    let mut session = GameSession::try_new(config, ManualClock::new(0))?;
    let mut reports = Vec::with_capacity(games as usize);

    for game in 1..=games {
        if game > 1 {
            session.start_new_game();
        }
        let moves = AutoPlayer::play(&mut session, max_moves);

        let report = GameReport {
            game,
            seed: config.seed,
            won: session.won(),
            score: session.score(),
            remaining_tiles: session.board().remaining_tiles(),
            time_left_secs: session.time_left_secs(),
            moves,
        };
        info!(game, won = report.won, score = report.score, "headless game finished");
        reports.push(report);
    }
    Ok(reports)
}

pub fn run(config: SessionConfig, games: u32, max_moves: usize) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for report in play_games(config, games, max_moves)? {
        serde_json::to_writer(&mut out, &report)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
