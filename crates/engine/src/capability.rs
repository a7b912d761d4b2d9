//! The outside world as the game loop sees it: a renderer, a key source and
//! a clock. Terminal backends implement the first two; tests swap all three
//! for in-memory doubles.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::types::Key;

/// Character-cell drawing surface.
///
/// Drawing calls only touch the pending frame; nothing reaches the screen
/// until [`Renderer::present`].
pub trait Renderer {
    /// Erase the pending frame.
    fn clear(&mut self);

    /// Draw one board cell. `col` is a board column; implementations place it
    /// at terminal column `col * CELL_COLUMNS`.
    fn draw_cell(&mut self, row: u16, col: u16, occupied: bool);

    /// Draw text at a raw terminal position.
    fn draw_text(&mut self, row: u16, col: u16, text: &str);

    /// Flush the pending frame to the screen.
    fn present(&mut self) -> Result<()>;
}

/// Keyboard source.
pub trait InputSource {
    /// Non-blocking poll. `Ok(None)` means nothing recognizable is pending.
    fn poll_key(&mut self) -> Result<Option<Key>>;

    /// Block until any key at all is pressed.
    fn wait_key(&mut self) -> Result<()>;
}

/// Millisecond clock used for gravity timing.
pub trait Clock {
    fn now_ms(&self) -> u64;

    fn sleep_ms(&mut self, ms: u32);
}

/// Wall-clock time measured from construction.
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u32) {
        if ms > 0 {
            std::thread::sleep(Duration::from_millis(u64::from(ms)));
        }
    }
}
