//! Shapes module - the static rotation table for every tetromino
//!
//! Classic (non-SRS) rotation: asymmetric shapes list every orientation
//! explicitly and there is no kick table. Offsets are `(row, col)` relative
//! to the piece pivot.

use crate::types::{Offset, ShapeKind};

/// Shape of a piece - 4 cell offsets from the pivot
pub type ShapeCells = [Offset; 4];

const I_STATES: [ShapeCells; 2] = [
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    [(1, -1), (1, 0), (1, 1), (1, 2)],
];

const O_STATES: [ShapeCells; 1] = [[(0, 0), (0, 1), (1, 0), (1, 1)]];

const T_STATES: [ShapeCells; 4] = [
    [(0, 0), (1, -1), (1, 0), (1, 1)],
    [(0, 0), (1, 0), (2, 0), (1, 1)],
    [(1, -1), (1, 0), (1, 1), (2, 0)],
    [(0, 0), (1, 0), (2, 0), (1, -1)],
];

const S_STATES: [ShapeCells; 2] = [
    [(0, 0), (0, 1), (1, -1), (1, 0)],
    [(0, 0), (1, 0), (1, 1), (2, 1)],
];

const Z_STATES: [ShapeCells; 2] = [
    [(0, -1), (0, 0), (1, 0), (1, 1)],
    [(0, 1), (1, 0), (1, 1), (2, 0)],
];

const J_STATES: [ShapeCells; 4] = [
    [(0, -1), (1, -1), (1, 0), (1, 1)],
    [(0, 0), (0, 1), (1, 0), (2, 0)],
    [(1, -1), (1, 0), (1, 1), (2, 1)],
    [(0, 0), (1, 0), (2, 0), (2, -1)],
];

const L_STATES: [ShapeCells; 4] = [
    [(0, 1), (1, -1), (1, 0), (1, 1)],
    [(0, 0), (1, 0), (2, 0), (2, 1)],
    [(1, -1), (1, 0), (1, 1), (2, -1)],
    [(0, -1), (0, 0), (1, 0), (2, 0)],
];

/// All rotation states of a kind, in rotation order.
pub fn rotation_states(kind: ShapeKind) -> &'static [ShapeCells] {
    match kind {
        ShapeKind::I => &I_STATES,
        ShapeKind::O => &O_STATES,
        ShapeKind::T => &T_STATES,
        ShapeKind::S => &S_STATES,
        ShapeKind::Z => &Z_STATES,
        ShapeKind::J => &J_STATES,
        ShapeKind::L => &L_STATES,
    }
}

/// Number of distinct orientations of a kind
pub fn rotation_count(kind: ShapeKind) -> usize {
    rotation_states(kind).len()
}

/// Get the cell offsets for a kind and rotation index.
///
/// The index is reduced modulo the rotation count, so any value is accepted.
pub fn get_shape(kind: ShapeKind, rotation: usize) -> ShapeCells {
    let states = rotation_states(kind);
    states[rotation % states.len()]
}
