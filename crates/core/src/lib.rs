//! Core game logic - pure, deterministic, and testable
//!
//! Contains the board, the connectivity rules and the session state machine.
//! No terminal, no wall-clock reads, no ambient randomness:
//!
//! - **Deterministic**: the same seed deals the same boards
//! - **Injectable time**: the countdown reads a [`Clock`], so tests drive it by hand
//! - **Portable**: the same session runs under the TUI and the headless auto-player
//!
//! # Module Structure
//!
//! - [`board`]: square tile grid, pair generation, selection and match adjudication
//! - [`path`]: straight / one-bend / border-lane connectivity search
//! - [`session`]: phases, score, countdown, win and loss detection
//! - [`rng`]: seeded LCG used for dealing
//! - [`clock`]: monotonic time sources
//! - [`scoring`]: match award and time bonus
//! - [`config`]: session tunables and their validation
//! - [`snapshot`]: owned, serializable view for renderers
//!
//! # Example
//!
//! ```
//! use tui_linkup_core::{GameSession, ManualClock, SessionConfig};
//! use tui_linkup_core::types::{GameAction, Phase};
//!
//! let mut session = GameSession::new(SessionConfig::with_seed(7), ManualClock::new(0));
//! session.apply_action(GameAction::Start);
//! assert_eq!(session.phase(), Phase::Playing);
//!
//! // Play the first connectable pair
//! let (a, b) = session.board().find_move().expect("fresh board has a move");
//! session.handle_click(a);
//! assert!(session.handle_click(b).is_matched());
//! assert_eq!(session.score(), 10);
//! ```

pub use tui_linkup_types as types;

pub mod board;
pub mod clock;
pub mod config;
pub mod path;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use board::{Board, PendingPath};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{ConfigError, SessionConfig};
pub use path::{ConnectPath, PathFinder, Waypoints};
pub use rng::SimpleRng;
pub use scoring::{match_award, time_bonus};
pub use session::GameSession;
pub use snapshot::GameSnapshot;
