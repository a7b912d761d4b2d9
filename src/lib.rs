//! Falling-block puzzle game for the terminal (workspace facade crate).
//!
//! Re-exports the member crates under short names so the binary, the
//! integration tests and the benches share one import path.

pub use tui_blockfall_core as core;
pub use tui_blockfall_engine as engine;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
