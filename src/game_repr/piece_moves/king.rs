use log::debug;

use crate::game_repr::coords::from_coordinates;
use crate::game_repr::{ChessResult, Move, MoveList, TeamChecker, Type};

use super::super::position::Position;
use super::traversal::KING_OFFSETS;

const KING_FILE: i32 = 4;
const QUEENSIDE_ROOK_FILE: i32 = 0;
const KINGSIDE_ROOK_FILE: i32 = 7;
const CASTLING_OFFSET: usize = 2;

impl Position {
    /// Generate king steps into a provided buffer.
    /// Check is not considered.
    pub fn king_moves_into(
        &self,
        idx: usize,
        checker: &dyn TeamChecker,
        moves: &mut MoveList,
    ) -> ChessResult<()> {
        self.offset_array_moves(idx, checker, &KING_OFFSETS, moves)
    }

    /// Two-square king moves toward each castle-eligible rook of the same
    /// team whose path to the king is empty. Queenside is tested first.
    pub fn castle_moves_into(
        &self,
        idx: usize,
        checker: &dyn TeamChecker,
        moves: &mut MoveList,
    ) -> ChessResult<()> {
        let king = self.occupant(idx)?;
        if king.piece_type != Type::King || !king.castle_eligible {
            return Ok(());
        }

        let row = king.color.back_row();
        if idx != from_coordinates(KING_FILE, row) as usize {
            return Ok(());
        }

        let queenside_rook = from_coordinates(QUEENSIDE_ROOK_FILE, row) as usize;
        if self.is_castling_rook(queenside_rook, checker)
            && self.is_path_empty(queenside_rook + 1, idx)
        {
            debug!("queenside castling available for king on {}", idx);
            moves.append(Move::new(idx, idx - CASTLING_OFFSET))?;
        }

        let kingside_rook = from_coordinates(KINGSIDE_ROOK_FILE, row) as usize;
        if self.is_castling_rook(kingside_rook, checker)
            && self.is_path_empty(idx + 1, kingside_rook)
        {
            debug!("kingside castling available for king on {}", idx);
            moves.append(Move::new(idx, idx + CASTLING_OFFSET))?;
        }
        Ok(())
    }

    /// Castling moves first, then the regular steps
    pub fn king_moves(&self, idx: usize) -> ChessResult<MoveList> {
        let mut moves = MoveList::new();
        let checker = self.occupant(idx)?.color.checker();
        self.castle_moves_into(idx, checker, &mut moves)?;
        self.king_moves_into(idx, checker, &mut moves)?;
        Ok(moves)
    }

    fn is_castling_rook(&self, idx: usize, checker: &dyn TeamChecker) -> bool {
        let piece = self.position[idx];
        piece.piece_type == Type::Rook && piece.castle_eligible && checker.is_member(piece)
    }

    /// Squares in `start..end` are all empty
    fn is_path_empty(&self, start: usize, end: usize) -> bool {
        self.position[start..end].iter().all(|piece| piece.is_none())
    }
}
