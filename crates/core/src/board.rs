//! Board module - the tile grid and its selection lifecycle
//!
//! The board is a square grid where each cell is empty or holds one tile kind.
//! Uses a flat row-major vector (`y * size + x`) sized once at construction.
//! Coordinates: (x, y) where x runs left to right and y top to bottom.
//!
//! A player selects two tiles; once two are selected the pair is adjudicated
//! (same kind + connectable, see [`crate::path`]) and the selection is cleared
//! whatever the outcome.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::path::{ConnectPath, PathFinder};
use crate::rng::SimpleRng;
use crate::types::{
    MatchOutcome, NoOpReason, Pos, RejectReason, Tile, TileKind, MATCH_ANIMATION_TICKS,
    MAX_BOARD_SIZE, MIN_BOARD_SIZE, PALETTE_SIZE, RESERVED_EMPTY_CELLS,
};

/// Path of the latest match, kept around for a few frames so it can be drawn
///
/// Purely advisory; nothing in the game logic reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPath {
    pub path: ConnectPath,
    pub ticks_left: u32,
}

/// The game board - `size` x `size` tiles in flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    /// Flat array of tiles, row-major order (y * size + x)
    cells: Vec<Tile>,
    /// Selected positions in click order
    selection: ArrayVec<Pos, 2>,
    pending_path: Option<PendingPath>,
}

impl Board {
    /// Create an empty board
    ///
    /// `size` is clamped to `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn new(size: u8) -> Self {
        let size = size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        Self {
            size,
            cells: vec![Tile::EMPTY; size as usize * size as usize],
            selection: ArrayVec::new(),
            pending_path: None,
        }
    }

    /// Create a board and deal a fresh set of pairs onto it
    pub fn generate(size: u8, rng: &mut SimpleRng) -> Self {
        let mut board = Self::new(size);
        board.reset_and_generate(rng);
        board
    }

    /// Build a board from rows of 1-based kind indices (0 = empty)
    ///
    /// The board is square with `rows.len()` as its size; short rows are
    /// padded with empty cells and unknown indices read as empty.
    ///
    /// ```
    /// use tui_linkup_core::Board;
    /// use tui_linkup_core::types::{Pos, TileKind};
    ///
    /// let board = Board::from_rows(&[&[1, 0], &[0, 1]]);
    /// assert_eq!(board.size(), 2);
    /// assert_eq!(board.kind_at(Pos::new(1, 1)), Some(TileKind::Circle));
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let mut board = Self::new(rows.len().min(MAX_BOARD_SIZE as usize) as u8);
        for (y, row) in rows.iter().enumerate().take(board.size as usize) {
            for (x, &index) in row.iter().enumerate().take(board.size as usize) {
                board.set_kind(Pos::new(x as i8, y as i8), TileKind::from_index(index));
            }
        }
        board
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(pos.y as usize * self.size as usize + pos.x as usize)
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        let size = self.size as i8;
        (0..size).contains(&pos.x) && (0..size).contains(&pos.y)
    }

    /// Tile at `pos`, `None` when out of bounds
    pub fn get(&self, pos: Pos) -> Option<Tile> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Borrowing variant of [`Board::get`]
    pub fn tile(&self, pos: Pos) -> Option<&Tile> {
        self.index(pos).map(|idx| &self.cells[idx])
    }

    /// Kind at `pos`; `None` for empty cells and out-of-bounds positions
    pub fn kind_at(&self, pos: Pos) -> Option<TileKind> {
        self.get(pos).and_then(|tile| tile.kind)
    }

    /// In bounds and holding no tile
    ///
    /// Positions outside the board are *not* empty; path searches treat the
    /// border lanes separately.
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Some(tile) if tile.is_empty())
    }

    /// Overwrite the kind at `pos`
    ///
    /// Emptying a selected tile also drops it from the selection.
    /// Returns false if out of bounds.
    pub fn set_kind(&mut self, pos: Pos, kind: Option<TileKind>) -> bool {
        let Some(idx) = self.index(pos) else {
            return false;
        };
        self.cells[idx].kind = kind;
        if kind.is_none() {
            self.cells[idx].selected = false;
            self.selection.retain(|p| *p != pos);
        }
        true
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.cells
    }

    /// Currently selected positions, in click order
    pub fn selection(&self) -> &[Pos] {
        &self.selection
    }

    pub fn pending_path(&self) -> Option<&PendingPath> {
        self.pending_path.as_ref()
    }

    /// Non-empty positions in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, tile)| !tile.is_empty())
            .map(|(i, _)| self.pos_of(i))
    }

    /// Inverse of `index`
    #[inline(always)]
    fn pos_of(&self, idx: usize) -> Pos {
        let size = self.size as usize;
        Pos::new((idx % size) as i8, (idx / size) as i8)
    }

    pub fn remaining_tiles(&self) -> usize {
        self.cells.iter().filter(|tile| !tile.is_empty()).count()
    }

    /// Every cell is empty
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(Tile::is_empty)
    }

    /// Alias of [`Board::is_cleared`]: the board has nothing left to match
    pub fn is_game_over(&self) -> bool {
        self.is_cleared()
    }

    /// Empty every cell and forget selection and pending path
    pub fn clear(&mut self) {
        self.cells.fill(Tile::EMPTY);
        self.selection.clear();
        self.pending_path = None;
    }

    /// Clear the grid and deal `(size² - 4) / 2` pairs at random positions
    ///
    /// Kinds cycle through the palette, two tiles per pair, so every kind
    /// ends up with an even count. Both the kind list and the position list
    /// are shuffled with `rng`.
    pub fn reset_and_generate(&mut self, rng: &mut SimpleRng) {
        self.clear();

        let total = self.cells.len();
        let pairs_count = total.saturating_sub(RESERVED_EMPTY_CELLS) / 2;

        let mut kinds: Vec<TileKind> = (0..pairs_count)
            .flat_map(|i| {
                let kind = TileKind::ALL[i % PALETTE_SIZE];
                [kind, kind]
            })
            .collect();
        rng.shuffle(&mut kinds);

        let mut positions: Vec<Pos> = (0..total).map(|i| self.pos_of(i)).collect();
        rng.shuffle(&mut positions);

        for (pos, kind) in positions.into_iter().zip(kinds) {
            self.set_kind(pos, Some(kind));
        }

        debug!(size = self.size, pairs = pairs_count, "board generated");
    }

    /// Pathfinder bound to the current state of this board
    pub fn path_finder(&self) -> PathFinder<'_> {
        PathFinder::new(self)
    }

    /// Select (or deselect) the tile at `pos`
    ///
    /// The second distinct selection triggers adjudication; the selection is
    /// always empty again afterwards.
    pub fn select_tile(&mut self, pos: Pos) -> MatchOutcome {
        let Some(idx) = self.index(pos) else {
            return MatchOutcome::NoOp(NoOpReason::InvalidCoordinate);
        };
        if self.cells[idx].is_empty() {
            return MatchOutcome::NoOp(NoOpReason::EmptyTile);
        }

        if self.selection.contains(&pos) {
            self.cells[idx].selected = false;
            self.selection.retain(|p| *p != pos);
            return MatchOutcome::NoOp(NoOpReason::Deselected);
        }

        if self.selection.is_full() {
            self.clear_selection();
        }

        self.cells[idx].selected = true;
        self.selection.push(pos);

        if self.selection.len() < 2 {
            return MatchOutcome::AwaitingSecond;
        }

        let outcome = self.adjudicate(self.selection[0], self.selection[1]);
        self.clear_selection();
        outcome
    }

    /// Deselect everything
    pub fn clear_selection(&mut self) {
        for pos in std::mem::take(&mut self.selection) {
            if let Some(idx) = self.index(pos) {
                self.cells[idx].selected = false;
            }
        }
    }

    fn adjudicate(&mut self, a: Pos, b: Pos) -> MatchOutcome {
        let (Some(tile_a), Some(tile_b)) = (self.get(a), self.get(b)) else {
            return MatchOutcome::Rejected(RejectReason::KindMismatch);
        };
        if !tile_a.is_same_kind(&tile_b) {
            debug!(?a, ?b, "rejected: kinds differ");
            return MatchOutcome::Rejected(RejectReason::KindMismatch);
        }

        let Some(path) = self.path_finder().find_path(a, b) else {
            debug!(?a, ?b, "rejected: no path");
            return MatchOutcome::Rejected(RejectReason::NoPath);
        };

        let shape = path.shape;
        self.set_kind(a, None);
        self.set_kind(b, None);
        self.pending_path = Some(PendingPath {
            path,
            ticks_left: MATCH_ANIMATION_TICKS,
        });
        debug!(?a, ?b, ?shape, remaining = self.remaining_tiles(), "matched");
        MatchOutcome::Matched(shape)
    }

    /// First connectable same-kind pair, scanning row-major
    ///
    /// Runs every tick while playing, so it walks the flat cells directly
    /// instead of collecting positions.
    pub fn find_move(&self) -> Option<(Pos, Pos)> {
        let finder = self.path_finder();
        let n = self.cells.len();

        (0..n).find_map(|i| {
            let kind = self.cells[i].kind?;
            let a = self.pos_of(i);
            (i + 1..n)
                .filter(|&j| self.cells[j].kind == Some(kind))
                .map(|j| self.pos_of(j))
                .find(|&b| finder.can_connect(a, b))
                .map(|b| (a, b))
        })
    }

    /// Some pair on the board can still be matched
    pub fn has_possible_moves(&self) -> bool {
        self.find_move().is_some()
    }

    /// Count down the advisory path; drop it when it expires
    pub fn advance_animation(&mut self) {
        if let Some(pending) = self.pending_path.as_mut() {
            pending.ticks_left = pending.ticks_left.saturating_sub(1);
            if pending.ticks_left == 0 {
                self.pending_path = None;
            }
        }
    }

    /// Write 1-based kind indices (0 = empty) in row-major order
    pub fn write_kind_grid(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(
            self.cells
                .iter()
                .map(|tile| tile.kind.map_or(0, TileKind::index)),
        );
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_BOARD_SIZE)
    }
}
