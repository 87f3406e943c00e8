//! Core types module - shared data structures and constants
//!
//! This module defines the value types used throughout the workspace.
//! Everything here is plain data, usable from the core logic, the terminal
//! view and the headless auto-player alike.
//!
//! # Board Geometry
//!
//! - **Size**: square, 8x8 by default (any size in `2..=MAX_BOARD_SIZE`)
//! - **Coordinates**: `(x, y)`, x left to right, y top to bottom
//! - **Border lanes**: the virtual row/column just outside the grid
//!   (`y = -1`, `y = size`, `x = -1`, `x = size`), always traversable
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_SIZE` | 8 | Board edge length |
//! | `PALETTE_SIZE` | 8 | Number of distinct tile kinds |
//! | `RESERVED_EMPTY_CELLS` | 4 | Cells left empty after generation |
//! | `DEFAULT_TIME_LIMIT_SECS` | 300 | Countdown per game |
//! | `POINTS_PER_MATCH` | 10 | Award for one matched pair |
//! | `TIME_BONUS_MULTIPLIER` | 1 | Points per remaining second on a win |
//! | `MATCH_ANIMATION_TICKS` | 30 | Frames a matched path stays visible |
//! | `TICK_MS` | 16 | Frame interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_linkup_types::{GameAction, Pos, TileKind, PALETTE_SIZE};
//!
//! // Tile kinds are numbered 1..=8, 0 is reserved for "empty"
//! assert_eq!(TileKind::from_index(1), Some(TileKind::Circle));
//! assert_eq!(TileKind::Gem.index(), 8);
//! assert_eq!(TileKind::ALL.len(), PALETTE_SIZE);
//!
//! // Positions are signed so border lanes can be expressed
//! let lane = Pos::new(-1, 3);
//! assert!(lane.x < 0);
//!
//! // Parse game action
//! assert_eq!(GameAction::from_str("select"), Some(GameAction::Select));
//! ```

use serde::{Deserialize, Serialize};

/// Default board edge length (8x8)
pub const DEFAULT_BOARD_SIZE: u8 = 8;

/// Largest accepted board edge length
///
/// Keeps every coordinate (including the border lane at `size`) inside `i8`
/// and the pair scan of a full board cheap.
pub const MAX_BOARD_SIZE: u8 = 16;

/// Smallest accepted board edge length
pub const MIN_BOARD_SIZE: u8 = 2;

/// Number of distinct tile kinds
pub const PALETTE_SIZE: usize = 8;

/// Cells left empty on a freshly generated board
pub const RESERVED_EMPTY_CELLS: usize = 4;

/// Default countdown for one game, in seconds (5 minutes)
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 300;

/// Points awarded for each matched pair
pub const POINTS_PER_MATCH: u32 = 10;

/// Points per remaining second, added when the board is cleared
pub const TIME_BONUS_MULTIPLIER: u32 = 1;

/// How many ticks a matched path stays on screen (30 frames ≈ 0.5s)
pub const MATCH_ANIMATION_TICKS: u32 = 30;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// The eight tile kinds
///
/// Each kind has its own glyph and colour in the terminal view:
/// - **Circle**: red
/// - **Star**: yellow
/// - **Heart**: pink
/// - **Diamond**: cyan
/// - **Triangle**: orange
/// - **Flower**: magenta
/// - **Butterfly**: blue
/// - **Gem**: green
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    Circle,
    Star,
    Heart,
    Diamond,
    Triangle,
    Flower,
    Butterfly,
    Gem,
}

impl TileKind {
    /// The full palette in generation order
    pub const ALL: [TileKind; PALETTE_SIZE] = [
        TileKind::Circle,
        TileKind::Star,
        TileKind::Heart,
        TileKind::Diamond,
        TileKind::Triangle,
        TileKind::Flower,
        TileKind::Butterfly,
        TileKind::Gem,
    ];

    /// 1-based type number (0 is reserved for an empty cell)
    pub fn index(self) -> u8 {
        match self {
            TileKind::Circle => 1,
            TileKind::Star => 2,
            TileKind::Heart => 3,
            TileKind::Diamond => 4,
            TileKind::Triangle => 5,
            TileKind::Flower => 6,
            TileKind::Butterfly => 7,
            TileKind::Gem => 8,
        }
    }

    /// Inverse of [`TileKind::index`]
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_linkup_types::TileKind;
    ///
    /// assert_eq!(TileKind::from_index(0), None);
    /// assert_eq!(TileKind::from_index(3), Some(TileKind::Heart));
    /// assert_eq!(TileKind::from_index(9), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1..=8 => Some(Self::ALL[(index - 1) as usize]),
            _ => None,
        }
    }

    /// Parse kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "circle" => Some(TileKind::Circle),
            "star" => Some(TileKind::Star),
            "heart" => Some(TileKind::Heart),
            "diamond" => Some(TileKind::Diamond),
            "triangle" => Some(TileKind::Triangle),
            "flower" => Some(TileKind::Flower),
            "butterfly" => Some(TileKind::Butterfly),
            "gem" => Some(TileKind::Gem),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Circle => "circle",
            TileKind::Star => "star",
            TileKind::Heart => "heart",
            TileKind::Diamond => "diamond",
            TileKind::Triangle => "triangle",
            TileKind::Flower => "flower",
            TileKind::Butterfly => "butterfly",
            TileKind::Gem => "gem",
        }
    }
}

/// One grid cell
///
/// `kind == None` is an empty cell. `selected` is presentation state only;
/// matching never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tile {
    pub kind: Option<TileKind>,
    pub selected: bool,
}

impl Tile {
    pub const EMPTY: Tile = Tile {
        kind: None,
        selected: false,
    };

    pub fn new(kind: TileKind) -> Self {
        Self {
            kind: Some(kind),
            selected: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
    }

    /// Both tiles are non-empty and of the same kind
    pub fn is_same_kind(&self, other: &Tile) -> bool {
        match (self.kind, other.kind) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// A grid coordinate
///
/// Signed so that path waypoints on the border lanes (`-1` and `size`)
/// share the same type as on-board positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Pos {
    pub x: i8,
    pub y: i8,
}

impl Pos {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

impl From<(i8, i8)> for Pos {
    fn from((x, y): (i8, i8)) -> Self {
        Self { x, y }
    }
}

/// Virtual lanes just outside the board, used by two-bend paths
///
/// The declaration order is the search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    /// Row `y = -1`
    Top,
    /// Row `y = size`
    Bottom,
    /// Column `x = -1`
    Left,
    /// Column `x = size`
    Right,
}

impl Lane {
    pub const ALL: [Lane; 4] = [Lane::Top, Lane::Bottom, Lane::Left, Lane::Right];

    /// Coordinate of the lane on its axis for a board of `size`
    pub fn offset(self, size: u8) -> i8 {
        match self {
            Lane::Top | Lane::Left => -1,
            Lane::Bottom | Lane::Right => size as i8,
        }
    }

    /// Top/Bottom lanes are rows; Left/Right lanes are columns
    pub fn is_horizontal(self) -> bool {
        matches!(self, Lane::Top | Lane::Bottom)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Lane::Top => "top",
            Lane::Bottom => "bottom",
            Lane::Left => "left",
            Lane::Right => "right",
        }
    }
}

/// Which of the three path classes connected a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathShape {
    /// No bend: shared row or column
    Straight,
    /// One bend at a corner cell
    OneBend,
    /// Two bends through a border lane
    BorderLane(Lane),
}

impl PathShape {
    pub fn bends(&self) -> u8 {
        match self {
            PathShape::Straight => 0,
            PathShape::OneBend => 1,
            PathShape::BorderLane(_) => 2,
        }
    }
}

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Menu,
    Playing,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Menu => "menu",
            Phase::Playing => "playing",
            Phase::GameOver => "game_over",
        }
    }
}

/// Why a selection had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoOpReason {
    /// Coordinate outside `[0, size)`
    InvalidCoordinate,
    /// The cell holds no tile
    EmptyTile,
    /// The tile was already selected and got toggled off
    Deselected,
    /// The session is not in [`Phase::Playing`]
    NotPlaying,
}

/// Why a complete pair was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    KindMismatch,
    NoPath,
}

/// Result of selecting a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Nothing was adjudicated
    NoOp(NoOpReason),
    /// One tile is selected, waiting for its partner
    AwaitingSecond,
    /// The pair was connected and removed
    Matched(PathShape),
    /// The pair was refused; the board is unchanged
    Rejected(RejectReason),
}

impl MatchOutcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }
}

/// Where the board's cell `(0, 0)` sits on screen and how large a cell is
///
/// Produced by the view, consumed by pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoardLayout {
    pub origin_x: u16,
    pub origin_y: u16,
    pub cell_w: u16,
    pub cell_h: u16,
}

/// Session-level actions, produced by keyboard input
///
/// Pointer clicks carry a coordinate and go through
/// `GameSession::handle_click` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the keyboard cursor one cell left
    CursorLeft,
    /// Move the keyboard cursor one cell right
    CursorRight,
    /// Move the keyboard cursor one cell up
    CursorUp,
    /// Move the keyboard cursor one cell down
    CursorDown,
    /// Select the tile under the cursor (or start from the menu)
    Select,
    /// Leave the menu and start a game
    Start,
    /// Start over after a game ended
    Restart,
    /// Highlight a connectable pair
    Hint,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_linkup_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("cursorLeft"), Some(GameAction::CursorLeft));
    /// assert_eq!(GameAction::from_str("hint"), Some(GameAction::Hint));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "cursorup" => Some(GameAction::CursorUp),
            "cursordown" => Some(GameAction::CursorDown),
            "select" => Some(GameAction::Select),
            "start" => Some(GameAction::Start),
            "restart" => Some(GameAction::Restart),
            "hint" => Some(GameAction::Hint),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::CursorLeft => "cursorLeft",
            GameAction::CursorRight => "cursorRight",
            GameAction::CursorUp => "cursorUp",
            GameAction::CursorDown => "cursorDown",
            GameAction::Select => "select",
            GameAction::Start => "start",
            GameAction::Restart => "restart",
            GameAction::Hint => "hint",
        }
    }
}
