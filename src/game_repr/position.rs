use std::fmt;

use log::{debug, error, trace, warn};

use super::coords::{from_coordinates, index_out_of_range, BOARD_SIZE, ROW_SIZE};
use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * THE BOARD AND PER-SIDE MOVE GENERATION
 */

const BACK_RANK: [Type; 8] = [
    Type::Rook,
    Type::Knight,
    Type::Bishop,
    Type::Queen,
    Type::King,
    Type::Bishop,
    Type::Knight,
    Type::Rook,
];

/// Rows between a pawn's start and landing square of a double advance
const DOUBLE_ADVANCE_DISTANCE: usize = 2 * ROW_SIZE as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Mailbox, index 0 is a8 (black's back rank, left corner)
    pub position: [Piece; 64],
}

impl Default for Position {
    fn default() -> Self {
        let mut position = [Piece::default(); BOARD_SIZE];

        for (file, &piece_type) in BACK_RANK.iter().enumerate() {
            for color in [Color::White, Color::Black] {
                let idx = from_coordinates(file as i32, color.back_row()) as usize;
                position[idx] = match piece_type {
                    Type::Rook | Type::King => Piece::castling(color, piece_type),
                    _ => Piece::new(color, piece_type),
                };

                let pawn_idx = from_coordinates(file as i32, color.pawn_home_row()) as usize;
                position[pawn_idx] = Piece::new(color, Type::Pawn);
            }
        }

        Self { position }
    }
}

impl Position {
    /// Starting position. The notation string is accepted but not parsed yet.
    pub fn from_notation(notation: &str) -> Position {
        if !notation.is_empty() {
            debug!("ignoring board notation {:?}, using the standard layout", notation);
        }
        Self::default()
    }

    pub fn empty() -> Position {
        Self {
            position: [Piece::default(); BOARD_SIZE],
        }
    }

    /// Board from numeric piece codes (see [`code`])
    pub fn from_codes(codes: &[u8; 64]) -> ChessResult<Position> {
        let mut position = [Piece::default(); BOARD_SIZE];
        for (square, &value) in position.iter_mut().zip(codes.iter()) {
            *square = Piece::from_code(value)?;
        }
        Ok(Self { position })
    }

    pub fn codes(&self) -> [u8; 64] {
        let mut codes = [code::EMPTY; BOARD_SIZE];
        for (value, piece) in codes.iter_mut().zip(self.position.iter()) {
            *value = piece.code();
        }
        codes
    }

    pub fn piece_at(&self, index: i32) -> ChessResult<Piece> {
        if index_out_of_range(index) {
            return Err(ChessError::OutOfRange { index });
        }
        Ok(self.position[index as usize])
    }

    /// Occupant of `idx`, or `OutOfRange` past the last square
    pub fn occupant(&self, idx: usize) -> ChessResult<Piece> {
        self.position.get(idx).copied().ok_or(ChessError::OutOfRange {
            index: i32::try_from(idx).unwrap_or(i32::MAX),
        })
    }

    /// Moves the occupant of the origin onto the destination and empties the origin.
    ///
    /// The moved piece loses its castle-eligible state. A pawn landing two rows
    /// away flags adjacent enemy pawns for en passant, and the mover's own stale
    /// en-passant flags are cleared. Rook relocation on castling, removal of a
    /// pawn taken en passant and promotion are not resolved here.
    pub fn apply_move(&mut self, mv: Move) -> ChessResult<()> {
        if mv.is_out_of_range() {
            error!("invalid move supplied: {:?}", mv);
            return Err(ChessError::InvalidMove {
                origin: mv.origin(),
                destination: mv.destination(),
            });
        }

        let (from, to) = (mv.origin(), mv.destination());
        let mut moving_piece = self.position[from];
        moving_piece.castle_eligible = false;

        self.position[to] = moving_piece;
        self.position[from] = Piece::default();

        if moving_piece.is_none() {
            return Ok(());
        }

        self.clear_en_passant_flags(moving_piece.color);

        if moving_piece.piece_type == Type::Pawn && from.abs_diff(to) == DOUBLE_ADVANCE_DISTANCE {
            self.set_en_passant_flags(to, moving_piece.color.checker());
        }

        trace!("applied {}", mv);
        Ok(())
    }

    fn clear_en_passant_flags(&mut self, color: Color) {
        for piece in self.position.iter_mut().filter(|piece| piece.is(color)) {
            piece.en_passant_eligible = false;
        }
    }

    /// Dispatches the piece on `idx` to its generators
    pub fn square_moves_into(
        &self,
        idx: usize,
        checker: &dyn TeamChecker,
        moves: &mut MoveList,
    ) -> ChessResult<()> {
        let piece = self.occupant(idx)?;
        match piece.piece_type {
            Type::Pawn => {
                if piece.en_passant_eligible {
                    self.en_passant_moves_into(idx, checker, moves)?;
                }
                self.pawn_moves_into(idx, checker, moves)
            }
            Type::Rook => self.rook_moves_into(idx, checker, moves),
            Type::Knight => self.knight_moves_into(idx, checker, moves),
            Type::Bishop => self.bishop_moves_into(idx, checker, moves),
            Type::Queen => self.queen_moves_into(idx, checker, moves),
            Type::King => {
                // castling augments the regular steps
                if piece.castle_eligible {
                    self.castle_moves_into(idx, checker, moves)?;
                }
                self.king_moves_into(idx, checker, moves)
            }
            Type::None => Ok(()),
        }
    }

    /// All pseudo-legal moves for `team`, square-ascending.
    ///
    /// A generator that fails is abandoned for its square only; moves already
    /// collected are kept.
    pub fn generate_moves(&self, team: Color) -> MoveList {
        self.generate_moves_from(team, 0..BOARD_SIZE)
    }

    /// Pseudo-legal moves for `team` from the given squares, in the order given.
    /// Squares off the board fail on their own and are skipped.
    pub fn generate_moves_from<I>(&self, team: Color, squares: I) -> MoveList
    where
        I: IntoIterator<Item = usize>,
    {
        let checker = team.checker();
        let mut moves = MoveList::new();

        for idx in squares {
            if self.occupant(idx).is_ok_and(|piece| !checker.is_member(piece)) {
                continue;
            }
            if let Err(err) = self.square_moves_into(idx, checker, &mut moves) {
                warn!("move generation for square {} aborted: {}", idx, err);
            }
        }

        debug!("generated {} moves for {:?}", moves.len(), team);
        moves
    }

    /// Both sides' move lists, generated in parallel over a shared read-only board.
    /// Returns (white, black).
    pub fn generate_moves_for_both(&self) -> (MoveList, MoveList) {
        rayon::join(
            || self.generate_moves(Color::White),
            || self.generate_moves(Color::Black),
        )
    }
}

/// Eight rows of eight piece codes, left-aligned in three columns
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.position.chunks(ROW_SIZE as usize) {
            for piece in row {
                let value = piece.code();
                if value > 9 {
                    write!(f, "{} ", value)?;
                } else {
                    write!(f, "{}  ", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
