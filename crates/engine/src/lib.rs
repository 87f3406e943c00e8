//! Engine crate - move search and headless play on top of the core
//!
//! - [`hint`]: find connectable pairs on a board
//! - [`autoplay`]: drive a [`GameSession`](tui_linkup_core::GameSession) to the end
//!   without a terminal

pub mod autoplay;
pub mod hint;

pub use autoplay::{AutoPlayer, MoveRecord};
pub use hint::{all_moves, find_hint};
