use crate::game_repr::{ChessResult, MoveList, TeamChecker};

use super::super::position::Position;
use super::traversal::KNIGHT_OFFSETS;

impl Position {
    /// Generate knight moves into a provided buffer
    pub fn knight_moves_into(
        &self,
        idx: usize,
        checker: &dyn TeamChecker,
        moves: &mut MoveList,
    ) -> ChessResult<()> {
        self.offset_array_moves(idx, checker, &KNIGHT_OFFSETS, moves)
    }

    /// Generate knight moves for the piece standing on `idx`
    pub fn knight_moves(&self, idx: usize) -> ChessResult<MoveList> {
        let mut moves = MoveList::new();
        self.knight_moves_into(idx, self.occupant(idx)?.color.checker(), &mut moves)?;
        Ok(moves)
    }
}
