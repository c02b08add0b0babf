use super::*;
use crate::game_repr::coords::*;

// ==================== COORDINATE TESTS ====================

#[test]
fn test_coordinates_round_trip_every_square() {
    for idx in 0..BOARD_SIZE {
        let c = to_coordinates(idx);
        assert_eq!(from_coordinates(c.x, c.y), idx as i32, "square {} did not round trip", idx);
    }
}

#[test]
fn test_coordinates_layout() {
    assert_eq!(to_coordinates(0), Coordinates::new(0, 0)); // a8
    assert_eq!(to_coordinates(12), Coordinates::new(4, 1)); // e7
    assert_eq!(to_coordinates(60), Coordinates::new(4, 7)); // e1
    assert_eq!(to_coordinates(63), Coordinates::new(7, 7)); // h1
}

#[test]
fn test_range_checks() {
    assert!(index_out_of_range(-1));
    assert!(index_out_of_range(64));
    assert!(!index_out_of_range(0));
    assert!(!index_out_of_range(63));

    assert!(coordinates_out_of_range(-1, 0));
    assert!(coordinates_out_of_range(0, -1));
    assert!(coordinates_out_of_range(8, 0));
    assert!(coordinates_out_of_range(0, 8));
    assert!(!coordinates_out_of_range(7, 7));
    assert!(!coordinates_out_of_range(0, 0));

    assert_eq!(Coordinates::new(8, 3).to_index(), None);
    assert_eq!(Coordinates::new(3, 2).to_index(), Some(19));
}

#[test]
fn test_piece_at_rejects_out_of_range() {
    let pos = Position::default();
    assert_eq!(pos.piece_at(-1), Err(ChessError::OutOfRange { index: -1 }));
    assert_eq!(pos.piece_at(64), Err(ChessError::OutOfRange { index: 64 }));
    assert_eq!(pos.piece_at(4), Ok(Piece::castling(Color::Black, Type::King)));
}

// ==================== INITIALIZER TESTS ====================

#[test]
fn test_starting_layout_codes() {
    #[rustfmt::skip]
    let expected: [u8; 64] = [
        13, 14, 15, 16, 18, 15, 14, 13,
        10, 10, 10, 10, 10, 10, 10, 10,
        0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0,
        1, 1, 1, 1, 1, 1, 1, 1,
        4, 5, 6, 7, 9, 6, 5, 4,
    ];
    assert_eq!(Position::default().codes(), expected);
    assert_eq!(Position::from_codes(&expected), Ok(Position::default()));
}

#[test]
fn test_notation_is_ignored() {
    let pos = Position::from_notation("8/8/8/8/8/8/8/8 w - - 0 1");
    assert_eq!(pos, Position::default());
}

#[test]
fn test_from_codes_rejects_unknown_code() {
    let mut codes = [0u8; 64];
    codes[10] = 19;
    assert_eq!(Position::from_codes(&codes), Err(ChessError::InvalidPieceCode(19)));
}

#[test]
fn test_board_printing() {
    let printed = Position::default().to_string();
    let rows: Vec<&str> = printed.lines().collect();

    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0], "13 14 15 16 18 15 14 13 ");
    assert_eq!(rows[1], "10 10 10 10 10 10 10 10 ");
    assert_eq!(rows[3], "0  0  0  0  0  0  0  0  ");
    assert_eq!(rows[7], "4  5  6  7  9  6  5  4  ");
    assert!(printed.ends_with('\n'));
}

// ==================== APPLY MOVE TESTS ====================

#[test]
fn test_apply_move_relocates_piece() {
    let mut pos = Position::default();
    pos.apply_move(Move::new(62, 45)).unwrap(); // Ng1-f3

    assert!(pos.position[62].is_none());
    assert_eq!(pos.position[45], Piece::new(Color::White, Type::Knight));
}

#[test]
fn test_apply_move_captures_by_overwriting() {
    let mut pos = empty_board();
    place_piece(&mut pos, 36, Piece::new(Color::White, Type::Rook));
    place_piece(&mut pos, 4, Piece::new(Color::Black, Type::Queen));

    pos.apply_move(Move::new(36, 4)).unwrap();

    assert_eq!(pos.position[4], Piece::new(Color::White, Type::Rook));
    assert_eq!(pos.position.iter().filter(|p| !p.is_none()).count(), 1);
}

#[test]
fn test_apply_move_out_of_range_is_rejected() {
    let mut pos = Position::default();
    let before = pos.clone();

    let err = pos.apply_move(Move::new(52, 64)).unwrap_err();
    assert_eq!(err, ChessError::InvalidMove { origin: 52, destination: 64 });

    let err = pos.apply_move(Move::new(100, 3)).unwrap_err();
    assert_eq!(err, ChessError::InvalidMove { origin: 100, destination: 3 });

    assert_eq!(pos, before, "rejected moves must leave the board untouched");
}

#[test]
fn test_apply_move_drops_castle_eligibility() {
    let mut pos = Position::default();
    pos.apply_move(Move::new(63, 47)).unwrap(); // rook lifted off h1

    assert!(!pos.position[47].castle_eligible);
    assert_eq!(pos.position[47].code(), code::WHITE_ROOK);
}
