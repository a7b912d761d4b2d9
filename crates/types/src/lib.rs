//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be
//! shared by the pure game logic, the loop and the terminal backends.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn offset**: row -2, column `WIDTH / 2 - 1`
//!
//! Coordinates are always `(row, col)` with rows growing downward. Rows above
//! the board (negative) are legal for a falling piece.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_MS` | 500 | Default gravity interval |
//! | `SOFT_DROP_GRAVITY_MS` | 50 | Gravity interval while soft drop is engaged |
//! | `IDLE_SLEEP_MS` | 1 | Idle pause per loop iteration |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_OFFSET};
//!
//! assert_eq!(ShapeKind::ALL.len(), 7);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! assert_eq!(SPAWN_OFFSET, (-2, 4));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Default gravity interval (500ms per row)
pub const GRAVITY_MS: u32 = 500;

/// Gravity interval once soft drop has been engaged
pub const SOFT_DROP_GRAVITY_MS: u32 = 50;

/// Idle sleep per loop iteration so the busy-poll does not peg a core
pub const IDLE_SLEEP_MS: u32 = 1;

/// Points awarded per cleared line
pub const LINE_CLEAR_POINTS: u32 = 100;

/// A `(row, col)` pair, either a shape offset or an absolute board position.
pub type Offset = (i8, i8);

/// Board-relative offset every freshly spawned piece starts at.
pub const SPAWN_OFFSET: Offset = (-2, (BOARD_WIDTH / 2) as i8 - 1);

/// Terminal columns used per board cell.
pub const CELL_COLUMNS: u16 = 2;

/// The seven tetromino shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// Every kind, in catalog order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];
}

/// Logical keys recognized by the game loop.
///
/// Anything the input backend cannot map is reported as "no key".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Quit,
}
