use serde::Serialize;

use crate::path::Waypoints;
use crate::types::{Phase, Pos, TileKind, DEFAULT_BOARD_SIZE};

/// Read-only copy of everything a renderer needs
///
/// Owned so the view never borrows the session, and reusable across frames
/// through [`GameSession::snapshot_into`](crate::GameSession::snapshot_into).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub size: u8,
    /// Row-major 1-based kind indices, 0 = empty
    pub board: Vec<u8>,
    pub selection: Vec<Pos>,
    pub pending_path: Option<Waypoints>,
    pub path_ticks_left: u32,
    pub hint: Option<(Pos, Pos)>,
    pub phase: Phase,
    pub won: bool,
    pub score: u32,
    pub time_left_secs: u32,
    pub remaining_tiles: u32,
    pub seed: u32,
    pub game_id: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            board: Vec::new(),
            selection: Vec::new(),
            pending_path: None,
            path_ticks_left: 0,
            hint: None,
            phase: Phase::Menu,
            won: false,
            score: 0,
            time_left_secs: 0,
            remaining_tiles: 0,
            seed: 0,
            game_id: 0,
        }
    }
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.size = DEFAULT_BOARD_SIZE;
        self.board.clear();
        self.selection.clear();
        self.pending_path = None;
        self.path_ticks_left = 0;
        self.hint = None;
        self.phase = Phase::Menu;
        self.won = false;
        self.score = 0;
        self.time_left_secs = 0;
        self.remaining_tiles = 0;
        self.seed = 0;
        self.game_id = 0;
    }

    /// Kind at `(x, y)`; `None` when empty or out of bounds
    pub fn kind_at(&self, x: i8, y: i8) -> Option<TileKind> {
        let size = self.size as i8;
        if !(0..size).contains(&x) || !(0..size).contains(&y) {
            return None;
        }
        let idx = y as usize * self.size as usize + x as usize;
        self.board.get(idx).copied().and_then(TileKind::from_index)
    }

    pub fn is_selected(&self, pos: Pos) -> bool {
        self.selection.contains(&pos)
    }

    pub fn is_hinted(&self, pos: Pos) -> bool {
        matches!(self.hint, Some((a, b)) if a == pos || b == pos)
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }
}
