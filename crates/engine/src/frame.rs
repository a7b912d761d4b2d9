//! Frame composition: maps session state onto [`Renderer`] calls.
//!
//! Pure with respect to the terminal; only the renderer decides how cells
//! become characters.

use crate::capability::Renderer;
use crate::core::{ActivePiece, Board};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, CELL_COLUMNS};

/// Terminal position of the score line.
pub const SCORE_POS: (u16, u16) = (0, BOARD_WIDTH as u16 * CELL_COLUMNS + 2);

/// Terminal position of the game-over notice.
pub const GAME_OVER_POS: (u16, u16) = (BOARD_HEIGHT as u16 / 2, BOARD_WIDTH as u16 - 4);

pub const GAME_OVER_TEXT: &str = "GAME OVER";

/// Start a new frame with the locked cells and the score.
pub fn draw_board<R: Renderer + ?Sized>(renderer: &mut R, board: &Board, score: u32) {
    renderer.clear();
    for (row, cells) in board.rows().enumerate() {
        for (col, &occupied) in cells.iter().enumerate() {
            renderer.draw_cell(row as u16, col as u16, occupied);
        }
    }
    renderer.draw_text(SCORE_POS.0, SCORE_POS.1, &format!("Score: {score}"));
}

/// Overlay the falling piece. Cells still above the board are skipped.
pub fn draw_piece<R: Renderer + ?Sized>(renderer: &mut R, piece: &ActivePiece) {
    for (row, col) in piece.cells() {
        if row >= 0 && col >= 0 {
            renderer.draw_cell(row as u16, col as u16, true);
        }
    }
}

pub fn draw_game_over<R: Renderer + ?Sized>(renderer: &mut R) {
    renderer.draw_text(GAME_OVER_POS.0, GAME_OVER_POS.1, GAME_OVER_TEXT);
}
