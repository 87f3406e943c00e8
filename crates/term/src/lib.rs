//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and renders into a plain framebuffer that is flushed to the
//! terminal with per-run diffing.
//!
//! - `core` stays free of any drawing concern
//! - [`GameView`] is pure: snapshot in, framebuffer out
//! - cells are 2 columns wide to keep the board roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_linkup_core as core;
pub use tui_linkup_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
