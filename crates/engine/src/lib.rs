//! Game loop crate: ties the pure core to a renderer, an input source and a
//! clock.
//!
//! The loop never touches a terminal directly. Backends implement
//! [`Renderer`] and [`InputSource`]. With the `testing` feature, `testing`
//! provides in-memory doubles so whole games can be played in tests.

pub mod capability;
pub mod config;
pub mod frame;
pub mod game_loop;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use capability::{Clock, InputSource, Renderer, SystemClock};
pub use config::GameConfig;
pub use game_loop::{run, step, LoopExit};
