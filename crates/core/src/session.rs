//! Session module - one player's run of games
//!
//! Ties together the board, the seeded RNG, the clock and the score, and
//! owns the phase machine:
//!
//! ```text
//! Menu --start--> Playing --(cleared | time up | no moves)--> GameOver
//!                    ^                                           |
//!                    +------------------restart------------------+
//! ```
//!
//! Elapsed time is always derived from `clock.now_ms() - start_ms`; nothing
//! accumulates per tick except the advisory path animation.

use tracing::{debug, info};

use crate::board::Board;
use crate::clock::{Clock, MonotonicClock};
use crate::config::{ConfigError, SessionConfig};
use crate::rng::SimpleRng;
use crate::scoring::{match_award, time_bonus};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, MatchOutcome, NoOpReason, Phase, Pos};

#[derive(Debug, Clone)]
pub struct GameSession<C: Clock = MonotonicClock> {
    config: SessionConfig,
    board: Board,
    rng: SimpleRng,
    clock: C,
    phase: Phase,
    score: u32,
    won: bool,
    start_ms: Option<u64>,
    /// Set exactly once per game, on entering GameOver
    end_ms: Option<u64>,
    hint: Option<(Pos, Pos)>,
    games_started: u32,
}

impl<C: Clock> GameSession<C> {
    /// Create a session in the menu, with a board already dealt
    ///
    /// Out-of-range board sizes are clamped; use [`GameSession::try_new`]
    /// to reject them instead.
    pub fn new(config: SessionConfig, clock: C) -> Self {
        let mut rng = SimpleRng::new(config.seed);
        let board = Board::generate(config.board_size, &mut rng);
        Self {
            config,
            board,
            rng,
            clock,
            phase: Phase::Menu,
            score: 0,
            won: false,
            start_ms: None,
            end_ms: None,
            hint: None,
            games_started: 0,
        }
    }

    pub fn try_new(config: SessionConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, clock))
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access, for scenario setup
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Only meaningful once the phase is GameOver
    pub fn won(&self) -> bool {
        self.won
    }

    pub fn hint(&self) -> Option<(Pos, Pos)> {
        self.hint
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Deal a fresh board and start the countdown
    ///
    /// Works from any phase; [`GameSession::apply_action`] decides when a
    /// player is allowed to trigger it.
    pub fn start_new_game(&mut self) {
        // The board may have been swapped out through `board_mut`.
        if self.board.size() != self.config.board_size {
            self.board = Board::new(self.config.board_size);
        }
        self.board.reset_and_generate(&mut self.rng);
        self.score = 0;
        self.won = false;
        self.start_ms = Some(self.clock.now_ms());
        self.end_ms = None;
        self.hint = None;
        self.phase = Phase::Playing;
        self.games_started = self.games_started.wrapping_add(1);
        info!(
            game = self.games_started,
            size = self.board.size(),
            tiles = self.board.remaining_tiles(),
            "game started"
        );
    }

    /// Select the tile at `pos` on behalf of the player
    pub fn handle_click(&mut self, pos: Pos) -> MatchOutcome {
        if self.phase != Phase::Playing {
            return MatchOutcome::NoOp(NoOpReason::NotPlaying);
        }

        self.hint = None;
        let outcome = self.board.select_tile(pos);
        debug!(?pos, ?outcome, "click");

        if outcome.is_matched() {
            self.score = self.score.saturating_add(match_award(&self.config));
            if self.board.is_cleared() {
                self.finish(true);
            }
        }
        outcome
    }

    /// Advance one frame: animation, then cleared board, timeout, deadlock
    pub fn tick(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }

        self.board.advance_animation();

        // A 2x2 board is dealt with no pairs at all.
        if self.board.is_cleared() {
            self.finish(true);
        } else if self.time_left_secs() == 0 {
            info!("time is up");
            self.finish(false);
        } else if !self.board.has_possible_moves() {
            info!(remaining = self.board.remaining_tiles(), "no moves left");
            self.finish(false);
        }
    }

    /// Whole seconds left on the countdown
    ///
    /// The full limit before the first game; frozen once the game is over.
    pub fn time_left_secs(&self) -> u32 {
        let Some(start) = self.start_ms else {
            return self.config.time_limit_secs;
        };
        let now = self.end_ms.unwrap_or_else(|| self.clock.now_ms());
        let elapsed_secs = now.saturating_sub(start) / 1000;
        let elapsed_secs = u32::try_from(elapsed_secs).unwrap_or(u32::MAX);
        self.config.time_limit_secs.saturating_sub(elapsed_secs)
    }

    /// Apply a session-level action
    ///
    /// Returns true if the action did something. Cursor movement and
    /// selection belong to the front end and are ignored here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match (action, self.phase) {
            (GameAction::Start, Phase::Menu) | (GameAction::Restart, Phase::GameOver) => {
                self.start_new_game();
                true
            }
            (GameAction::Hint, Phase::Playing) => {
                self.hint = self.board.find_move();
                debug!(hint = ?self.hint, "hint requested");
                self.hint.is_some()
            }
            _ => false,
        }
    }

    fn finish(&mut self, won: bool) {
        self.end_ms = Some(self.clock.now_ms());
        self.won = won;
        self.phase = Phase::GameOver;
        self.hint = None;
        self.board.clear_selection();
        if won {
            let bonus = time_bonus(self.time_left_secs(), self.config.time_bonus_multiplier);
            self.score = self.score.saturating_add(bonus);
        }
        info!(won, score = self.score, "game over");
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.size = self.board.size();
        self.board.write_kind_grid(&mut out.board);
        out.selection.clear();
        out.selection.extend_from_slice(self.board.selection());
        out.pending_path = self.board.pending_path().map(|p| p.path.waypoints.clone());
        out.path_ticks_left = self.board.pending_path().map_or(0, |p| p.ticks_left);
        out.hint = self.hint;
        out.phase = self.phase;
        out.won = self.won;
        out.score = self.score;
        out.time_left_secs = self.time_left_secs();
        out.remaining_tiles = self.board.remaining_tiles() as u32;
        out.seed = self.config.seed;
        out.game_id = self.games_started;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
