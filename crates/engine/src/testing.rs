//! In-memory doubles for the loop's capabilities.
//!
//! Used by this crate's unit tests and by the workspace integration tests.

use std::collections::VecDeque;

use anyhow::{bail, Result};

use crate::capability::{Clock, InputSource, Renderer};
use crate::types::{Key, CELL_COLUMNS};

const SCREEN_ROWS: usize = 24;
const SCREEN_COLS: usize = 48;

/// Renderer that draws into a character grid and snapshots it on present.
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    screen: Vec<Vec<char>>,
    last_frame: Option<String>,
    presents: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            screen: vec![vec![' '; SCREEN_COLS]; SCREEN_ROWS],
            last_frame: None,
            presents: 0,
        }
    }

    fn put_str(&mut self, row: u16, col: u16, text: &str) {
        let Some(line) = self.screen.get_mut(row as usize) else {
            return;
        };
        for (i, ch) in text.chars().enumerate() {
            if let Some(slot) = line.get_mut(col as usize + i) {
                *slot = ch;
            }
        }
    }

    /// `len` characters of the pending frame starting at (row, col).
    pub fn text_at(&self, row: u16, col: u16, len: usize) -> String {
        self.screen[row as usize]
            .iter()
            .skip(col as usize)
            .take(len)
            .collect()
    }

    /// How many frames have been presented.
    pub fn presents(&self) -> usize {
        self.presents
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.last_frame.as_deref()
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        for line in &mut self.screen {
            line.fill(' ');
        }
    }

    fn draw_cell(&mut self, row: u16, col: u16, occupied: bool) {
        self.put_str(row, col * CELL_COLUMNS, if occupied { "[]" } else { "  " });
    }

    fn draw_text(&mut self, row: u16, col: u16, text: &str) {
        self.put_str(row, col, text);
    }

    fn present(&mut self) -> Result<()> {
        self.last_frame = Some(render_lines(&self.screen));
        self.presents += 1;
        Ok(())
    }
}

fn render_lines(screen: &[Vec<char>]) -> String {
    screen
        .iter()
        .map(|line| line.iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Input that replays a script of polls; `None` entries are "no key".
///
/// Once the script runs dry every poll reports no key. `wait_key` consumes
/// one entry of the wait budget and fails when none is left, so a test can
/// never hang on the game-over acknowledgement.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    polls: VecDeque<Option<Key>>,
    waits_allowed: usize,
    polled: usize,
    waited: usize,
}

impl ScriptedInput {
    pub fn new(polls: impl IntoIterator<Item = Option<Key>>) -> Self {
        Self {
            polls: polls.into_iter().collect(),
            waits_allowed: 1,
            polled: 0,
            waited: 0,
        }
    }

    /// Never produces a key.
    pub fn idle() -> Self {
        Self::new(std::iter::empty())
    }

    pub fn polled(&self) -> usize {
        self.polled
    }

    pub fn waited(&self) -> usize {
        self.waited
    }
}

impl InputSource for ScriptedInput {
    fn poll_key(&mut self) -> Result<Option<Key>> {
        self.polled += 1;
        Ok(self.polls.pop_front().flatten())
    }

    fn wait_key(&mut self) -> Result<()> {
        if self.waited >= self.waits_allowed {
            bail!("scripted input has no key left to wait for");
        }
        self.waited += 1;
        Ok(())
    }
}

/// Clock that only moves when told to. Each idle sleep advances it.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    pub fn new(now: u64) -> Self {
        Self { now }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.now += u64::from(ms);
    }
}
