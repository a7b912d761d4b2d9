//! Active piece - the falling tetromino and its movement rules

use crate::board::Board;
use crate::shapes::{get_shape, rotation_count};
use crate::types::{Offset, ShapeKind, SPAWN_OFFSET};

/// The currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    /// Index into the kind's rotation states, always `< rotation_count(kind)`
    pub rotation: usize,
    /// Board-relative `(row, col)` translation of the pivot
    pub offset: Offset,
}

impl ActivePiece {
    /// Create a new piece at the spawn offset
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            rotation: 0,
            offset: SPAWN_OFFSET,
        }
    }

    /// Reset to the spawn pose as `kind`.
    pub fn spawn(&mut self, kind: ShapeKind) {
        *self = Self::new(kind);
    }

    /// Absolute board cells for the current pose
    pub fn cells(&self) -> [Offset; 4] {
        cells_at(self.kind, self.rotation, self.offset)
    }

    /// Shift by `(d_row, d_col)` if the destination is free.
    pub fn try_move(&mut self, board: &Board, d_row: i8, d_col: i8) -> bool {
        let offset = (self.offset.0 + d_row, self.offset.1 + d_col);
        if board.is_blocked(&cells_at(self.kind, self.rotation, offset)) {
            return false;
        }
        self.offset = offset;
        true
    }

    /// Advance to the next rotation state in place. No kicks: a colliding
    /// rotation is rejected outright.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let rotation = (self.rotation + 1) % rotation_count(self.kind);
        if board.is_blocked(&cells_at(self.kind, rotation, self.offset)) {
            return false;
        }
        self.rotation = rotation;
        true
    }

    /// True if the piece overlaps the board or its edges in its current pose.
    pub fn is_blocked(&self, board: &Board) -> bool {
        board.is_blocked(&self.cells())
    }
}

fn cells_at(kind: ShapeKind, rotation: usize, (off_row, off_col): Offset) -> [Offset; 4] {
    get_shape(kind, rotation).map(|(row, col)| (row + off_row, col + off_col))
}
