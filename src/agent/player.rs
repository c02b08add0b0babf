//! Player trait for entities that pick a move from a generated list.
//!
//! The orchestrator generates the side's pseudo-legal moves itself (it needs
//! the count for its summary) and hands the list to the player, which only
//! decides which entry to play.

use crate::game_repr::{ChessResult, Color, Move, MoveList, Position};

/// Result of a finished self-play run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Every requested ply was played
    Completed,
    /// The side to move had nothing to play
    NoMoves(Color),
}

/// Something that can pick one move out of a generated list.
pub trait Player {
    /// Choose a move for `color`. `moves` is never empty.
    fn choose_move(&mut self, position: &Position, color: Color, moves: &MoveList) -> ChessResult<Move>;

    /// Display name used in log output
    fn name(&self) -> &str;
}
