//! Terminal input module.
//!
//! Maps `crossterm` key events into [`types::Key`] and provides a
//! non-blocking [`TerminalInput`] for the game loop.

pub mod map;
pub mod terminal;

pub use tui_blockfall_engine as engine;
pub use tui_blockfall_types as types;

pub use map::{map_key_event, should_quit};
pub use terminal::TerminalInput;
