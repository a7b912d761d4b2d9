//! TerminalRenderer: composes frames in a [`FrameBuffer`] and flushes only
//! the runs that changed since the previous frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::engine::Renderer;
use crate::fb::FrameBuffer;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, CELL_COLUMNS};

/// Terminal columns needed for the board, the gap and the score line.
pub const FRAME_WIDTH: u16 = BOARD_WIDTH as u16 * CELL_COLUMNS + 2 + 20;

pub const FRAME_HEIGHT: u16 = BOARD_HEIGHT as u16;

pub const OCCUPIED_GLYPH: &str = "[]";
pub const EMPTY_GLYPH: &str = "  ";

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    pending: FrameBuffer,
    last: Option<FrameBuffer>,
    /// Terminal size seen at the previous present, if it could be read.
    last_size: Option<(u16, u16)>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            pending: FrameBuffer::new(FRAME_WIDTH, FRAME_HEIGHT),
            last: None,
            last_size: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.last = None;
        Ok(())
    }

    /// Restore the terminal to the state `enter` found it in.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next present to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Record the current terminal size; a change forces a full redraw,
    /// since the terminal may have reflowed or blanked the old frame.
    pub fn note_terminal_size(&mut self, size: Option<(u16, u16)>) {
        if size != self.last_size {
            self.last_size = size;
            self.invalidate();
        }
    }

    /// The frame being composed.
    pub fn pending(&self) -> &FrameBuffer {
        &self.pending
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self) {
        self.pending.clear();
    }

    fn draw_cell(&mut self, row: u16, col: u16, occupied: bool) {
        let glyph = if occupied { OCCUPIED_GLYPH } else { EMPTY_GLYPH };
        self.pending.put_str(col * CELL_COLUMNS, row, glyph);
    }

    fn draw_text(&mut self, row: u16, col: u16, text: &str) {
        self.pending.put_str(col, row, text);
    }

    fn present(&mut self) -> Result<()> {
        self.note_terminal_size(terminal::size().ok());
        self.buf.clear();
        match self.last.as_mut() {
            Some(prev) => {
                encode_diff_into(prev, &self.pending, &mut self.buf)?;
                prev.clone_from(&self.pending);
            }
            None => {
                encode_full_into(&self.pending, &mut self.buf)?;
                self.last = Some(self.pending.clone());
            }
        }
        self.flush_buf()
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        out.queue(Print(fb.row_text(y)))?;
    }
    Ok(())
}

/// Encode only the changed runs between `prev` and `next` into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        let run: String = (x..x + len).filter_map(|cx| next.get(cx, y)).collect();
        out.queue(Print(run))?;
        Ok(())
    })
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    for y in 0..next.height() {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
