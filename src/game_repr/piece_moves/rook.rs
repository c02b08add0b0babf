use crate::game_repr::{ChessResult, MoveList, TeamChecker};

use super::super::position::Position;

impl Position {
    /// Generate rook moves into a provided buffer.
    /// Castle-eligible rooks move the same way.
    pub fn rook_moves_into(
        &self,
        idx: usize,
        checker: &dyn TeamChecker,
        moves: &mut MoveList,
    ) -> ChessResult<()> {
        self.straight_moves(idx, checker, moves)
    }

    pub fn rook_moves(&self, idx: usize) -> ChessResult<MoveList> {
        let mut moves = MoveList::new();
        self.rook_moves_into(idx, self.occupant(idx)?.color.checker(), &mut moves)?;
        Ok(moves)
    }
}
