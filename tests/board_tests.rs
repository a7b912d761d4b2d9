//! Board tests - collision, merging and line clearing

use tui_blockfall::core::Board;
use tui_blockfall::types::{BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for row in 0..BOARD_HEIGHT as i8 {
        for col in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(row, col), Some(false), "({}, {}) should be empty", row, col);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_HEIGHT as i8, 0), None);
    assert_eq!(board.get(0, BOARD_WIDTH as i8), None);
}

#[test]
fn test_is_blocked_out_of_bounds_regardless_of_contents() {
    let empty = Board::new();
    let mut full = Board::new();
    for row in 0..BOARD_HEIGHT as i8 {
        for col in 0..BOARD_WIDTH as i8 {
            full.set(row, col, true);
        }
    }

    for board in [&empty, &full] {
        assert!(board.is_blocked(&[(5, -1)]));
        assert!(board.is_blocked(&[(5, 10)]));
        assert!(board.is_blocked(&[(20, 3)]));
        assert!(board.is_blocked(&[(0, 0), (25, 0)]));
    }
}

#[test]
fn test_is_blocked_ignores_occupancy_above_board_but_checks_columns() {
    let mut board = Board::new();
    board.set(0, 3, true);

    assert!(!board.is_blocked(&[(-1, 3), (-2, 3)]));
    assert!(board.is_blocked(&[(-1, -1)]));
    assert!(board.is_blocked(&[(-3, 10)]));
    assert!(board.is_blocked(&[(-1, 3), (0, 3)]));
}

#[test]
fn test_is_blocked_on_occupied_cell() {
    let mut board = Board::new();
    board.set(10, 5, true);
    assert!(board.is_blocked(&[(10, 5)]));
    assert!(!board.is_blocked(&[(10, 4), (9, 5), (11, 5)]));
}

#[test]
fn test_merge_drops_hidden_cells() {
    let mut board = Board::new();
    board.merge(&[(-2, 4), (-1, 4), (0, 4), (1, 4)]);

    assert!(board.is_occupied(0, 4));
    assert!(board.is_occupied(1, 4));
    assert_eq!(board.cells().iter().filter(|&&c| c).count(), 2);
}

#[test]
fn test_clear_single_full_row() {
    let mut board = Board::from_rows(&[
        "#.........",
        "##########",
        ".#......#.",
    ]);
    let before: Vec<Vec<bool>> = board.rows().map(|r| r.to_vec()).collect();

    assert_eq!(board.clear_lines(), 1);

    let after: Vec<Vec<bool>> = board.rows().map(|r| r.to_vec()).collect();
    assert_eq!(after.len(), BOARD_HEIGHT as usize);
    assert!(after[0].iter().all(|&c| !c), "an empty row is prepended at the top");
    // Rows 0..=17 shift down by one; row 19 stays.
    assert_eq!(&after[1..=18], &before[0..=17]);
    assert_eq!(after[19], before[19]);
}

#[test]
fn test_merge_completes_row_then_clear() {
    let mut board = Board::from_rows(&["#####.####"]);
    board.merge(&[(19, 5)]);
    assert!(board.is_row_full(19));
    assert_eq!(board.clear_lines(), 1);
    assert!(board.cells().iter().all(|&c| !c));
}

#[test]
fn test_clear_non_adjacent_rows_preserves_order() {
    let mut board = Board::from_rows(&[
        "#.........",
        "##########",
        ".#........",
        "##########",
        "..#.......",
    ]);
    assert_eq!(board.clear_lines(), 2);
    assert!(board.is_occupied(17, 0));
    assert!(board.is_occupied(18, 1));
    assert!(board.is_occupied(19, 2));
    assert_eq!(board.cells().iter().filter(|&&c| c).count(), 3);
}

#[test]
fn test_clear_no_full_rows_is_noop() {
    let mut board = Board::from_rows(&["#########."]);
    let before = board.clone();
    assert_eq!(board.clear_lines(), 0);
    assert_eq!(board, before);
}
