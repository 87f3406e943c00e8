use serde::Serialize;
use tracing::{debug, warn};

use tui_linkup_core::types::{MatchOutcome, PathShape, Phase, Pos};
use tui_linkup_core::{Clock, GameSession};

use crate::hint::find_hint;

/// One pair the auto-player removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub first: Pos,
    pub second: Pos,
    pub shape: PathShape,
    pub score_after: u32,
}

/// Plays a session by always taking the hinted pair
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoPlayer;

impl AutoPlayer {
    /// Play until the game ends or `max_moves` pairs have been removed
    ///
    /// Starts the game first when the session is still in the menu. The
    /// session is ticked before every move, so a timeout or deadlock ends
    /// the run the same way it would under the terminal loop.
    pub fn play<C: Clock>(session: &mut GameSession<C>, max_moves: usize) -> Vec<MoveRecord> {
        if session.phase() == Phase::Menu {
            session.start_new_game();
        }

        let mut moves = Vec::new();
        while moves.len() < max_moves {
            session.tick();
            if session.phase() != Phase::Playing {
                break;
            }

            let Some((first, second)) = find_hint(session.board()) else {
                break;
            };

            session.handle_click(first);
            match session.handle_click(second) {
                MatchOutcome::Matched(shape) => {
                    debug!(?first, ?second, ?shape, "auto move");
                    moves.push(MoveRecord {
                        first,
                        second,
                        shape,
                        score_after: session.score(),
                    });
                }
                outcome => {
                    // A hint is always connectable, so this means the board
                    // changed under us.
                    warn!(?first, ?second, ?outcome, "hinted pair refused");
                    break;
                }
            }
        }
        moves
    }
}
