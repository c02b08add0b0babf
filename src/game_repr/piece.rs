use super::error::{ChessError, ChessResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a pawn advance
    pub fn pawn_direction(&self) -> i32 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Row the pawns start on
    pub fn pawn_home_row(&self) -> i32 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    /// Row the king and rooks start on
    pub fn back_row(&self) -> i32 {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }
}

/*
 * NUMERIC PIECE CODES
 * 0 empty, 1..=9 white, 10..=18 black (white code + 9).
 * Every white code is below every black code and empty is the minimum,
 * so team membership is a range check.
 */
pub mod code {
    pub const EMPTY: u8 = 0;
    pub const WHITE_PAWN: u8 = 1;
    pub const WHITE_PAWN_EN_PASSANT: u8 = 2;
    pub const WHITE_ROOK: u8 = 3;
    pub const WHITE_ROOK_CASTLE: u8 = 4;
    pub const WHITE_KNIGHT: u8 = 5;
    pub const WHITE_BISHOP: u8 = 6;
    pub const WHITE_QUEEN: u8 = 7;
    pub const WHITE_KING: u8 = 8;
    pub const WHITE_KING_CASTLE: u8 = 9;
    pub const BLACK_PAWN: u8 = 10;
    pub const BLACK_PAWN_EN_PASSANT: u8 = 11;
    pub const BLACK_ROOK: u8 = 12;
    pub const BLACK_ROOK_CASTLE: u8 = 13;
    pub const BLACK_KNIGHT: u8 = 14;
    pub const BLACK_BISHOP: u8 = 15;
    pub const BLACK_QUEEN: u8 = 16;
    pub const BLACK_KING: u8 = 17;
    pub const BLACK_KING_CASTLE: u8 = 18;

    pub const BLACK_OFFSET: u8 = BLACK_PAWN - WHITE_PAWN;

    pub fn is_white_or_empty(piece: u8) -> bool {
        piece < BLACK_PAWN
    }

    pub fn is_white(piece: u8) -> bool {
        piece > EMPTY && piece < BLACK_PAWN
    }

    pub fn is_black(piece: u8) -> bool {
        piece >= BLACK_PAWN
    }

    /// Plain pawns only; pawns already flagged for en passant are excluded
    pub fn is_pawn(piece: u8) -> bool {
        piece == WHITE_PAWN || piece == BLACK_PAWN
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
    /// King or rook that has not moved yet
    pub castle_eligible: bool,
    /// Pawn allowed to answer an adjacent double advance this turn
    pub en_passant_eligible: bool,
}

impl Default for Piece {
    fn default() -> Self {
        Self::none()
    }
}

impl Piece {
    pub fn none() -> Self {
        Self::new(Color::White, Type::None)
    }

    pub fn new(color: Color, piece_type: Type) -> Self {
        Self {
            color,
            piece_type,
            castle_eligible: false,
            en_passant_eligible: false,
        }
    }

    /// Unmoved king or rook
    pub fn castling(color: Color, piece_type: Type) -> Self {
        Self {
            castle_eligible: true,
            ..Self::new(color, piece_type)
        }
    }

    pub fn en_passant_pawn(color: Color) -> Self {
        Self {
            en_passant_eligible: true,
            ..Self::new(color, Type::Pawn)
        }
    }

    pub fn is_none(&self) -> bool {
        self.piece_type == Type::None
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Occupied by a piece of `color`; empty squares belong to nobody
    pub fn is(&self, color: Color) -> bool {
        !self.is_none() && self.color == color
    }

    pub fn is_white(&self) -> bool {
        code::is_white(self.code())
    }

    pub fn is_black(&self) -> bool {
        code::is_black(self.code())
    }

    pub fn is_white_or_empty(&self) -> bool {
        code::is_white_or_empty(self.code())
    }

    pub fn is_pawn(&self) -> bool {
        code::is_pawn(self.code())
    }

    pub fn code(&self) -> u8 {
        let white = match (self.piece_type, self.castle_eligible, self.en_passant_eligible) {
            (Type::None, _, _) => return code::EMPTY,
            (Type::Pawn, _, true) => code::WHITE_PAWN_EN_PASSANT,
            (Type::Pawn, _, false) => code::WHITE_PAWN,
            (Type::Rook, true, _) => code::WHITE_ROOK_CASTLE,
            (Type::Rook, false, _) => code::WHITE_ROOK,
            (Type::Knight, _, _) => code::WHITE_KNIGHT,
            (Type::Bishop, _, _) => code::WHITE_BISHOP,
            (Type::Queen, _, _) => code::WHITE_QUEEN,
            (Type::King, true, _) => code::WHITE_KING_CASTLE,
            (Type::King, false, _) => code::WHITE_KING,
        };
        match self.color {
            Color::White => white,
            Color::Black => white + code::BLACK_OFFSET,
        }
    }

    pub fn from_code(value: u8) -> ChessResult<Self> {
        if value == code::EMPTY {
            return Ok(Self::none());
        }
        let (color, white) = if code::is_black(value) {
            (Color::Black, value - code::BLACK_OFFSET)
        } else {
            (Color::White, value)
        };
        let piece = match white {
            code::WHITE_PAWN => Self::new(color, Type::Pawn),
            code::WHITE_PAWN_EN_PASSANT => Self::en_passant_pawn(color),
            code::WHITE_ROOK => Self::new(color, Type::Rook),
            code::WHITE_ROOK_CASTLE => Self::castling(color, Type::Rook),
            code::WHITE_KNIGHT => Self::new(color, Type::Knight),
            code::WHITE_BISHOP => Self::new(color, Type::Bishop),
            code::WHITE_QUEEN => Self::new(color, Type::Queen),
            code::WHITE_KING => Self::new(color, Type::King),
            code::WHITE_KING_CASTLE => Self::castling(color, Type::King),
            _ => return Err(ChessError::InvalidPieceCode(value)),
        };
        Ok(piece)
    }
}
