use std::fmt;

use smallvec::SmallVec;

use super::coords::BOARD_SIZE;
use super::error::{ChessError, ChessResult};

/*-------ARCHITECTURE--------*/

// | origin | destination |
// |  0..63 |    0..63    |
// Castling, promotion and en passant completion are not encoded on the move.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    origin: usize,
    destination: usize,
}

impl Move {
    pub fn new(origin: usize, destination: usize) -> Move {
        Self { origin, destination }
    }

    pub fn origin(&self) -> usize {
        self.origin
    }

    pub fn destination(&self) -> usize {
        self.destination
    }

    /// Either endpoint lies outside 0..63
    pub fn is_out_of_range(&self) -> bool {
        self.origin >= BOARD_SIZE || self.destination >= BOARD_SIZE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move from {} to {}", self.origin, self.destination)
    }
}

/// Moves in discovery order. Owns every move it holds.
#[derive(Debug, Clone, Default)]
pub struct MoveList {
    moves: SmallVec<[Move; 64]>,
}

impl MoveList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append in O(1). Moves with an off-board endpoint are rejected and
    /// leave the list untouched.
    pub fn append(&mut self, mv: Move) -> ChessResult<()> {
        if mv.is_out_of_range() {
            return Err(ChessError::InvalidArgument("move endpoint outside the board"));
        }
        self.moves.push(mv);
        Ok(())
    }

    pub fn get(&self, index: usize) -> ChessResult<Move> {
        self.moves.get(index).copied().ok_or(ChessError::NotFound {
            index,
            len: self.moves.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Most recently appended move
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn last_destination(&self) -> Option<usize> {
        self.last().map(Move::destination)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Drop the list together with every move it owns; returns how many
    /// moves were released.
    pub fn release(self) -> usize {
        self.moves.len()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = smallvec::IntoIter<[Move; 64]>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mv in &self.moves {
            writeln!(f, "{}", mv)?;
        }
        Ok(())
    }
}
