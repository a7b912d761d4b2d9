//! Terminal rendering backend.
//!
//! Frames are composed in a character [`FrameBuffer`] through the engine's
//! [`Renderer`](tui_blockfall_engine::Renderer) calls and flushed to the
//! terminal as a diff against the previous frame, which keeps the busy loop
//! from repainting the whole screen every iteration.

pub mod fb;
pub mod renderer;

pub use tui_blockfall_engine as engine;
pub use tui_blockfall_types as types;

pub use fb::FrameBuffer;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
