use crate::game_repr::{ChessResult, MoveList, TeamChecker};

use super::super::position::Position;

impl Position {
    /// Generate queen moves into a provided buffer: diagonals first, then lines
    pub fn queen_moves_into(
        &self,
        idx: usize,
        checker: &dyn TeamChecker,
        moves: &mut MoveList,
    ) -> ChessResult<()> {
        self.diagonal_moves(idx, checker, moves)?;
        self.straight_moves(idx, checker, moves)
    }

    pub fn queen_moves(&self, idx: usize) -> ChessResult<MoveList> {
        let mut moves = MoveList::new();
        self.queen_moves_into(idx, self.occupant(idx)?.color.checker(), &mut moves)?;
        Ok(moves)
    }
}
