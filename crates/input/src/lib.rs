//! Terminal input - key and mouse events to game intents
//!
//! Independent of any UI framework beyond `crossterm`'s event types. Keys map
//! to [`crate::types::GameAction`]; mouse clicks map to board coordinates
//! through a [`crate::types::BoardLayout`] supplied by the view.

pub mod cursor;
pub mod map;
pub mod pointer;

pub use tui_linkup_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
pub use pointer::{grid_from_pixel, handle_mouse_event};
