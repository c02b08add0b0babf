use log::debug;

use crate::game_repr::coords::to_coordinates;
use crate::game_repr::{ChessResult, Move, MoveList, TeamChecker};

use super::super::position::Position;

impl Position {
    /// Generate pawn moves into a provided buffer.
    ///
    /// Order: capture left, capture right, single advance, double advance.
    /// The double advance needs the home row and a successful single advance.
    pub fn pawn_moves_into(
        &self,
        idx: usize,
        checker: &dyn TeamChecker,
        moves: &mut MoveList,
    ) -> ChessResult<()> {
        let color = self.occupant(idx)?.color;
        let direction = color.pawn_direction();

        self.offset_move(idx, checker, (-1, direction), true, moves)?;
        self.offset_move(idx, checker, (1, direction), true, moves)?;

        let origin = to_coordinates(idx);
        let single = origin.offset(0, direction);
        match single.to_index() {
            Some(target) if self.position[target].is_none() => {
                moves.append(Move::new(idx, target))?;
            }
            _ => return Ok(()),
        }

        if origin.y != color.pawn_home_row() {
            return Ok(());
        }

        if let Some(target) = single.offset(0, direction).to_index() {
            if self.position[target].is_none() {
                moves.append(Move::new(idx, target))?;
            }
        }
        Ok(())
    }

    /// Diagonal step of an en-passant-eligible pawn onto an empty square.
    /// The +x diagonal is tried first; only one of the two directions is ever taken.
    pub fn en_passant_moves_into(
        &self,
        idx: usize,
        checker: &dyn TeamChecker,
        moves: &mut MoveList,
    ) -> ChessResult<()> {
        let direction = self.occupant(idx)?.color.pawn_direction();

        // capture square is empty when taking en passant
        if self.offset_move(idx, checker, (1, direction), false, moves)? {
            return Ok(());
        }
        self.offset_move(idx, checker, (-1, direction), false, moves)?;
        Ok(())
    }

    pub fn pawn_moves(&self, idx: usize) -> ChessResult<MoveList> {
        let mut moves = MoveList::new();
        let piece = self.occupant(idx)?;
        let checker = piece.color.checker();
        if piece.en_passant_eligible {
            self.en_passant_moves_into(idx, checker, &mut moves)?;
        }
        self.pawn_moves_into(idx, checker, &mut moves)?;
        Ok(moves)
    }

    /// Marks enemy pawns beside `idx` (the landing square of a double
    /// advance) as en-passant-eligible. Returns how many were flagged.
    pub fn set_en_passant_flags(&mut self, idx: usize, checker: &dyn TeamChecker) -> usize {
        let origin = to_coordinates(idx);
        let mut flagged = 0;
        for dx in [-1, 1] {
            let Some(target) = origin.offset(dx, 0).to_index() else {
                continue;
            };
            let piece = &mut self.position[target];
            if !checker.is_member(*piece) && piece.is_pawn() {
                piece.en_passant_eligible = true;
                flagged += 1;
                debug!("pawn on {} may now answer en passant", target);
            }
        }
        flagged
    }
}
