pub mod traversal;
pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

pub use traversal::{Offset, DIAGONAL_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, STRAIGHT_DIRECTIONS};
