use log::trace;

use crate::game_repr::coords::to_coordinates;
use crate::game_repr::{ChessResult, Move, MoveList, TeamChecker};

use super::super::position::Position;

/// (dx, dy) pairs; dy grows toward white's side of the board
pub type Offset = (i32, i32);

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (-2, -1), (-2, 1), (2, -1), (2, 1),
    (-1, -2), (-1, 2), (1, -2), (1, 2),
];

pub const KING_OFFSETS: [Offset; 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

// down, up, left, right
pub const STRAIGHT_DIRECTIONS: [Offset; 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

pub const DIAGONAL_DIRECTIONS: [Offset; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Position {
    /// Single step to `idx + (dx, dy)`.
    ///
    /// Nothing is produced when the target is off the board, holds a piece of
    /// the moving team, or is empty while `must_capture` is set.
    /// Returns whether a move was appended.
    pub fn offset_move(
        &self,
        idx: usize,
        checker: &dyn TeamChecker,
        offset: Offset,
        must_capture: bool,
        moves: &mut MoveList,
    ) -> ChessResult<bool> {
        self.occupant(idx)?;
        let (dx, dy) = offset;
        let Some(target) = to_coordinates(idx).offset(dx, dy).to_index() else {
            return Ok(false);
        };

        let piece = self.position[target];
        if checker.is_member(piece) || (must_capture && piece.is_none()) {
            return Ok(false);
        }

        moves.append(Move::new(idx, target))?;
        Ok(true)
    }

    /// Applies [`Position::offset_move`] independently for every offset
    pub fn offset_array_moves(
        &self,
        idx: usize,
        checker: &dyn TeamChecker,
        offsets: &[Offset],
        moves: &mut MoveList,
    ) -> ChessResult<()> {
        for &offset in offsets {
            self.offset_move(idx, checker, offset, false, moves)?;
        }
        Ok(())
    }

    /// Slides from `idx` in one direction.
    /// Stops before a friendly piece, stops after the first enemy piece.
    pub fn ray_moves(
        &self,
        idx: usize,
        checker: &dyn TeamChecker,
        direction: Offset,
        moves: &mut MoveList,
    ) -> ChessResult<()> {
        self.occupant(idx)?;
        let (dx, dy) = direction;
        let mut current = to_coordinates(idx);
        loop {
            current = current.offset(dx, dy);
            let Some(target) = current.to_index() else {
                break;
            };

            let piece = self.position[target];
            if checker.is_member(piece) {
                break;
            }

            moves.append(Move::new(idx, target))?;

            if !piece.is_none() {
                break;
            }
        }
        Ok(())
    }

    /// Rook lines: down, up, left, right
    pub fn straight_moves(
        &self,
        idx: usize,
        checker: &dyn TeamChecker,
        moves: &mut MoveList,
    ) -> ChessResult<()> {
        for &direction in &STRAIGHT_DIRECTIONS {
            self.ray_moves(idx, checker, direction, moves)?;
        }
        trace!("straight rays from {} -> {} moves so far", idx, moves.len());
        Ok(())
    }

    /// Bishop lines
    pub fn diagonal_moves(
        &self,
        idx: usize,
        checker: &dyn TeamChecker,
        moves: &mut MoveList,
    ) -> ChessResult<()> {
        for &direction in &DIAGONAL_DIRECTIONS {
            self.ray_moves(idx, checker, direction, moves)?;
        }
        trace!("diagonal rays from {} -> {} moves so far", idx, moves.len());
        Ok(())
    }
}
