//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of occupancy flags stored in a flat array for
//! cache locality and zero allocation.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom) and col
//! ranges 0..9 (left to right). Rows above the board (negative) belong to
//! the spawn overhang: they are bounds-checked horizontally but never stored.

use arrayvec::ArrayVec;

use crate::types::{Offset, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by a single clear, bottom to top.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if col < 0 || col >= BOARD_WIDTH as i8 || row < 0 || row >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Occupancy at (row, col); None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<bool> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set occupancy at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, occupied: bool) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(true))
    }

    /// True if any cell is off the sides, at or below the floor, or lands on
    /// an occupied cell. Cells with a negative row only get the side check.
    pub fn is_blocked(&self, cells: &[Offset]) -> bool {
        cells.iter().any(|&(row, col)| {
            if col < 0 || col >= BOARD_WIDTH as i8 || row >= BOARD_HEIGHT as i8 {
                return true;
            }
            row >= 0 && self.is_occupied(row, col)
        })
    }

    /// Mark cells as occupied. Cells above the board are dropped.
    pub fn merge(&mut self, cells: &[Offset]) {
        for &(row, col) in cells {
            if row >= 0 {
                self.set(row, col, true);
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = row * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell)
    }

    /// Clear all full rows and return the row indices that were cleared
    /// (sorted bottom to top). Surviving rows keep their order and the board
    /// is topped up with empty rows.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_row = BOARD_HEIGHT as usize;

        for read_row in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_row) {
                cleared_rows.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src_start = read_row * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_row * width);
                }
            }
        }

        self.cells[..write_row * width].fill(false);
        cleared_rows
    }

    /// Remove full rows and return how many were removed.
    pub fn clear_lines(&mut self) -> usize {
        self.clear_full_rows().len()
    }

    /// Iterate rows top to bottom as slices of occupancy flags.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Build a board from rows of `'#'` (occupied) and `'.'` (empty),
    /// aligned to the bottom of the board.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let top = BOARD_HEIGHT as usize - rows.len().min(BOARD_HEIGHT as usize);
        for (i, line) in rows.iter().take(BOARD_HEIGHT as usize).enumerate() {
            for (col, ch) in line.chars().take(BOARD_WIDTH as usize).enumerate() {
                board.set((top + i) as i8, col as i8, ch == '#');
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 9), Some(9));
        assert_eq!(Board::index(1, 0), Some(10));
        assert_eq!(Board::index(19, 9), Some(199));
        assert_eq!(Board::index(0, -1), None);
        assert_eq!(Board::index(0, 10), None);
        assert_eq!(Board::index(20, 0), None);
        assert_eq!(Board::index(-1, 0), None);
    }

    #[test]
    fn test_from_rows_is_bottom_aligned() {
        let board = Board::from_rows(&["#.........", "##########"]);
        assert!(board.is_occupied(18, 0));
        assert!(!board.is_occupied(18, 1));
        assert!(board.is_row_full(19));
        assert!(!board.is_row_full(18));
    }

    #[test]
    fn test_clear_full_rows_reports_indices_bottom_up() {
        let mut board = Board::from_rows(&["##########", "#.........", "##########"]);
        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);
        assert!(board.is_occupied(19, 0));
        assert!(!board.is_occupied(18, 0));
    }

    #[test]
    fn test_rows_iterates_full_height() {
        let board = Board::new();
        assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);
        assert!(board.rows().all(|r| r.len() == BOARD_WIDTH as usize));
    }
}
