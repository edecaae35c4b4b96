//! Board tests - collision, placement and line clearing through the public API

use mino_tetris::core::{Board, Mino, Position};
use mino_tetris::types::{MinoKind, BOARD_HEIGHT, BOARD_WIDTH};

const W: i8 = BOARD_WIDTH as i8;
const H: i8 = BOARD_HEIGHT as i8;

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.row(0).len(), usize::from(BOARD_WIDTH));
    assert_eq!(board.cells().len(), usize::from(BOARD_WIDTH) * usize::from(BOARD_HEIGHT));

    for y in 0..H {
        for x in 0..W {
            assert_eq!(board.get(x, y), Some(MinoKind::Empty), "({}, {})", x, y);
        }
    }
}

#[test]
fn test_boundary_is_u_shaped() {
    let board = Board::with_boundary();

    for y in 0..H {
        assert_eq!(board.get(0, y), Some(MinoKind::Wall));
        assert_eq!(board.get(W - 1, y), Some(MinoKind::Wall));
    }
    for x in 0..W {
        assert_eq!(board.get(x, H - 1), Some(MinoKind::Wall));
    }
    // Open top.
    for x in 1..W - 1 {
        assert_eq!(board.get(x, 0), Some(MinoKind::Empty));
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::with_boundary();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(W, 0), None);
    assert_eq!(board.get(0, H), None);
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();
    assert!(!board.set(-1, 0, MinoKind::T));
    assert!(!board.set(W, 0, MinoKind::T));
    assert!(board.set(3, 3, MinoKind::T));
    assert_eq!(board.get(3, 3), Some(MinoKind::T));
}

#[test]
fn test_can_place_fails_on_any_bad_cell() {
    let mut board = Board::with_boundary();
    let t = Mino::new(MinoKind::T);

    assert!(board.can_place(Position::new(5, 5), &t));

    // One occupied cell is enough to fail.
    board.set(6, 5, MinoKind::Z);
    assert!(!board.can_place(Position::new(5, 5), &t));

    // The T's nub (0, -1) sticks out of the top at row 0.
    assert!(!board.can_place(Position::new(3, 0), &t));
}

#[test]
fn test_place_does_not_check() {
    let mut board = Board::with_boundary();
    let s = Mino::new(MinoKind::S);

    // Overwrites whatever is there, including wall.
    board.place(Position::new(1, 5), &s);
    assert_eq!(board.get(0, 5), Some(MinoKind::S));
    assert_eq!(board.get(1, 5), Some(MinoKind::S));
    assert_eq!(board.get(1, 4), Some(MinoKind::S));
    assert_eq!(board.get(2, 4), Some(MinoKind::S));
}

#[test]
fn test_completing_a_row_clears_it() {
    let mut board = Board::with_boundary();

    // Row 20 full except (7, 20); a marker above it.
    for x in 1..W - 1 {
        if x != 7 {
            board.set(x, 20, MinoKind::O);
        }
    }
    board.set(2, 19, MinoKind::T);

    // A vertical I standing in the gap completes the row.
    let i = Mino::new(MinoKind::I);
    let at = Position::new(7, 18);
    assert!(board.can_place(at, &i));
    board.place(at, &i);

    let cleared = board.clear_lines();
    assert_eq!(cleared.len(), 1);
    assert_eq!(cleared[0], 20);

    // Rows above shifted down by one.
    assert_eq!(board.get(2, 20), Some(MinoKind::T));
    for y in 18..=20 {
        assert_eq!(board.get(7, y), Some(MinoKind::I));
    }
    assert_eq!(board.get(7, 17), Some(MinoKind::Empty));

    // New boundary-only row at the top.
    assert_eq!(board.get(0, 0), Some(MinoKind::Wall));
    assert_eq!(board.get(W - 1, 0), Some(MinoKind::Wall));
    for x in 1..W - 1 {
        assert_eq!(board.get(x, 0), Some(MinoKind::Empty));
    }
}

#[test]
fn test_clear_lines_idempotent_without_full_rows() {
    let mut board = Board::with_boundary();
    board.set(4, 20, MinoKind::J);
    board.set(5, 12, MinoKind::L);

    let first = board.clear_lines();
    let after_first = board.clone();
    let second = board.clear_lines();

    assert!(first.is_empty());
    assert!(second.is_empty());
    assert_eq!(board, after_first);
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::with_boundary();
    for y in 17..=20 {
        for x in 1..W - 1 {
            board.set(x, y, MinoKind::I);
        }
    }
    board.set(5, 16, MinoKind::Z);

    assert_eq!(board.clear_lines().len(), 4);
    assert_eq!(board.get(5, 20), Some(MinoKind::Z));
    assert_eq!(board.count_blocks(), 1);
    assert_eq!(board, {
        let mut expected = Board::with_boundary();
        expected.set(5, 20, MinoKind::Z);
        expected
    });
}

#[test]
fn test_freeze() {
    let mut board = Board::with_boundary();
    board.set(3, 10, MinoKind::O);
    board.freeze();

    assert_eq!(board.get(3, 10), Some(MinoKind::Wall));
    assert!(board
        .cells()
        .iter()
        .all(|&c| c == MinoKind::Wall || c == MinoKind::Empty));
}
