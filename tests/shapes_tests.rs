//! Shape catalog and rotation tests

use tui_blockfall::core::{get_shape, rotation_count, rotation_states, ActivePiece, Board};
use tui_blockfall::types::ShapeKind;

#[test]
fn test_all_states_have_four_distinct_cells() {
    for kind in ShapeKind::ALL {
        assert_eq!(rotation_states(kind).len(), rotation_count(kind));
        for state in rotation_states(kind) {
            let mut cells = state.to_vec();
            cells.sort();
            cells.dedup();
            assert_eq!(cells.len(), 4, "{:?} has a duplicated cell", kind);
        }
    }
}

#[test]
fn test_i_piece_shapes() {
    assert_eq!(get_shape(ShapeKind::I, 0), [(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert_eq!(get_shape(ShapeKind::I, 1), [(1, -1), (1, 0), (1, 1), (1, 2)]);
}

#[test]
fn test_o_piece_single_state() {
    assert_eq!(rotation_count(ShapeKind::O), 1);
    assert_eq!(get_shape(ShapeKind::O, 0), [(0, 0), (0, 1), (1, 0), (1, 1)]);
}

#[test]
fn test_t_piece_states() {
    assert_eq!(get_shape(ShapeKind::T, 0), [(0, 0), (1, -1), (1, 0), (1, 1)]);
    assert_eq!(get_shape(ShapeKind::T, 2), [(1, -1), (1, 0), (1, 1), (2, 0)]);
}

#[test]
fn test_o_rotation_keeps_pose() {
    let board = Board::new();
    let mut piece = ActivePiece::new(ShapeKind::O);
    assert!(piece.try_rotate(&board));
    assert_eq!(piece.rotation, 0);
    assert_eq!(piece.offset, (-2, 4));
}

#[test]
fn test_blocked_rotation_leaves_piece_unchanged() {
    let mut board = Board::new();
    // I at offset (5, 4), rotation 0 covers column 4 rows 5..=8.
    // Rotation 1 would cover row 6 columns 3..=6; block column 6.
    board.set(6, 6, true);

    let mut piece = ActivePiece::new(ShapeKind::I);
    piece.offset = (5, 4);
    let before = piece;

    assert!(!piece.try_rotate(&board));
    assert_eq!(piece, before);
}

#[test]
fn test_rotation_against_wall_has_no_kick() {
    let board = Board::new();
    let mut piece = ActivePiece::new(ShapeKind::I);
    piece.offset = (5, 0);

    // Horizontal I would need column -1.
    assert!(!piece.try_rotate(&board));
    assert_eq!(piece.rotation, 0);
    assert_eq!(piece.offset, (5, 0));
}

#[test]
fn test_blocked_move_is_noop() {
    let mut board = Board::new();
    board.set(0, 3, true);
    let mut piece = ActivePiece::new(ShapeKind::O);
    piece.offset = (0, 4);

    assert!(!piece.try_move(&board, 0, -1));
    assert_eq!(piece.offset, (0, 4));
    assert!(piece.try_move(&board, 0, 1));
    assert_eq!(piece.offset, (0, 5));
}
