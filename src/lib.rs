//! tui-linkup (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benches share `tui_linkup::{core, engine, input, term, types}`.

pub use tui_linkup_core as core;
pub use tui_linkup_engine as engine;
pub use tui_linkup_input as input;
pub use tui_linkup_term as term;
pub use tui_linkup_types as types;
