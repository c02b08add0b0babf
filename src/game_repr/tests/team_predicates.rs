use super::*;

// ==================== CODE PREDICATE TESTS ====================

#[test]
fn test_code_predicates_cover_enumeration() {
    for value in code::EMPTY..=code::BLACK_KING_CASTLE {
        assert_eq!(code::is_white(value), (1..=9).contains(&value), "is_white({})", value);
        assert_eq!(code::is_black(value), value >= 10, "is_black({})", value);
        assert_eq!(code::is_white_or_empty(value), value < 10, "is_white_or_empty({})", value);
        assert_eq!(
            code::is_pawn(value),
            value == code::WHITE_PAWN || value == code::BLACK_PAWN,
            "is_pawn({})",
            value
        );
    }
}

#[test]
fn test_white_codes_below_black_codes() {
    let white = [
        code::WHITE_PAWN, code::WHITE_PAWN_EN_PASSANT, code::WHITE_ROOK, code::WHITE_ROOK_CASTLE,
        code::WHITE_KNIGHT, code::WHITE_BISHOP, code::WHITE_QUEEN, code::WHITE_KING,
        code::WHITE_KING_CASTLE,
    ];
    for &w in &white {
        assert!(code::EMPTY < w);
        assert!(w < code::BLACK_PAWN);
        assert!(code::is_black(w + code::BLACK_OFFSET));
    }
}

#[test]
fn test_piece_codes_match_enumeration() {
    for value in code::EMPTY..=code::BLACK_KING_CASTLE {
        let piece = Piece::from_code(value).unwrap();
        assert_eq!(piece.code(), value);
    }
    assert_eq!(Piece::en_passant_pawn(Color::Black).code(), code::BLACK_PAWN_EN_PASSANT);
    assert_eq!(Piece::castling(Color::White, Type::King).code(), code::WHITE_KING_CASTLE);
    assert_eq!(Piece::new(Color::Black, Type::Rook).code(), code::BLACK_ROOK);
    assert_eq!(Piece::from_code(42), Err(ChessError::InvalidPieceCode(42)));
}

// ==================== TEAM CHECKER TESTS ====================

#[test]
fn test_team_checkers() {
    let white_knight = Piece::new(Color::White, Type::Knight);
    let black_pawn = Piece::en_passant_pawn(Color::Black);
    let empty = Piece::none();

    assert!(Color::White.checker().is_member(white_knight));
    assert!(!Color::White.checker().is_member(black_pawn));
    assert!(Color::Black.checker().is_member(black_pawn));
    assert!(!Color::Black.checker().is_member(white_knight));

    // empty squares belong to no team
    assert!(!WhiteTeam.is_member(empty));
    assert!(!BlackTeam.is_member(empty));
    assert!(empty.is_white_or_empty());
}

#[test]
fn test_flagged_pawn_is_not_plain_pawn() {
    assert!(Piece::new(Color::White, Type::Pawn).is_pawn());
    assert!(!Piece::en_passant_pawn(Color::White).is_pawn());
    assert!(!Piece::new(Color::White, Type::Rook).is_pawn());
}
