use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty board
pub fn empty_board() -> Position {
    Position::empty()
}

/// Helper function to place a piece
pub fn place_piece(pos: &mut Position, idx: usize, piece: Piece) {
    pos.position[idx] = piece;
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &MoveList, from: usize, to: usize) -> bool {
    moves.iter().any(|m| m.origin() == from && m.destination() == to)
}

/// Destinations in generation order
pub fn destinations(moves: &MoveList) -> Vec<usize> {
    moves.iter().map(|m| m.destination()).collect()
}

// ==================== TEST MODULES ====================

mod board_model;
mod team_predicates;
mod piece_movement;
