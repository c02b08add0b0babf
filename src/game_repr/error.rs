//! Error types for board and move-generation operations.

use thiserror::Error;

use super::Color;

/// Errors raised by the board model, the move list and the driver
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Square index outside 0..63
    #[error("Square index {index} is out of range (must be 0-63)")]
    OutOfRange { index: i32 },

    /// Move with an endpoint outside the board
    #[error("Invalid move: from square {origin} to square {destination}")]
    InvalidMove { origin: usize, destination: usize },

    /// Argument rejected by a collection or board operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Numeric code outside the piece enumeration
    #[error("Invalid piece code {0} (must be 0-18)")]
    InvalidPieceCode(u8),

    /// Positional lookup past the end of a move list
    #[error("No move at position {index} (list holds {len})")]
    NotFound { index: usize, len: usize },

    /// Side to move has nothing to play
    #[error("{team:?} has no moves available")]
    NoMoves { team: Color },
}

/// Result type alias for board and move-generation operations
pub type ChessResult<T> = Result<T, ChessError>;
