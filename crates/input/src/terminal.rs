//! crossterm-backed [`InputSource`].

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::engine::InputSource;
use crate::map::map_key_event;
use crate::types::Key;

/// Reads keys from the controlling terminal. Expects raw mode to be on.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    /// Consume at most one pending event without waiting.
    fn poll_key(&mut self) -> Result<Option<Key>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(map_key_event(key)),
            // Resizes are picked up by the renderer on its next present.
            _ => Ok(None),
        }
    }

    fn wait_key(&mut self) -> Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    return Ok(());
                }
            }
        }
    }
}
