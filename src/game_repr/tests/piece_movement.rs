use super::*;

// ==================== OTHER PIECE MOVEMENT TESTS ====================

#[test]
fn test_knight_moves() {
    let mut pos = empty_board();

    // Knight on e4
    place_piece(&mut pos, 36, Piece::new(Color::White, Type::Knight));

    let moves = pos.knight_moves(36).unwrap();

    assert_eq!(moves.len(), 8, "Knight should have 8 moves from center");
}

#[test]
fn test_bishop_moves() {
    let mut pos = empty_board();

    // Bishop on e4
    place_piece(&mut pos, 36, Piece::new(Color::White, Type::Bishop));

    let moves = pos.bishop_moves(36).unwrap();

    assert_eq!(moves.len(), 13, "Bishop should have 13 moves from e4");
}

#[test]
fn test_rook_moves() {
    let mut pos = empty_board();

    // Rook on e4
    place_piece(&mut pos, 36, Piece::new(Color::White, Type::Rook));

    let moves = pos.rook_moves(36).unwrap();

    assert_eq!(moves.len(), 14, "Rook should have 14 moves from e4 (7 vertical + 7 horizontal)");
}

#[test]
fn test_queen_moves() {
    let mut pos = empty_board();

    // Queen on e4
    place_piece(&mut pos, 36, Piece::new(Color::White, Type::Queen));

    let moves = pos.queen_moves(36).unwrap();

    assert_eq!(moves.len(), 27, "Queen should have 27 moves from e4 (combines rook + bishop)");
    // diagonals come first
    assert_eq!(moves.get(0).unwrap(), Move::new(36, 27));
}

#[test]
fn test_rook_blocked_by_own_piece() {
    let mut pos = empty_board();

    // Rook on a1, own knight on a3
    place_piece(&mut pos, 56, Piece::new(Color::White, Type::Rook));
    place_piece(&mut pos, 40, Piece::new(Color::White, Type::Knight));

    let moves = pos.rook_moves(56).unwrap();

    assert!(has_move(&moves, 56, 48), "Rook reaches a2");
    assert!(!has_move(&moves, 56, 40), "Rook cannot take its own knight");
    assert!(!has_move(&moves, 56, 32), "Rook cannot jump over its own knight");
    assert_eq!(moves.len(), 8);
}

#[test]
fn test_bishop_captures_enemy_and_stops() {
    let mut pos = empty_board();

    // Black bishop on c8, white pawn on e6
    place_piece(&mut pos, 2, Piece::new(Color::Black, Type::Bishop));
    place_piece(&mut pos, 20, Piece::new(Color::White, Type::Pawn));

    let moves = pos.bishop_moves(2).unwrap();

    assert!(has_move(&moves, 2, 11));
    assert!(has_move(&moves, 2, 20), "Bishop captures on e6");
    assert!(!has_move(&moves, 2, 29), "Capture ends the ray");
    // b7, a6 on the other diagonal
    assert!(has_move(&moves, 2, 9));
    assert!(has_move(&moves, 2, 16));
    assert_eq!(moves.len(), 4);
}
