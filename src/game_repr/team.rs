use super::piece::{Color, Piece};

/// "Is this piece a member of my team?"
///
/// Passed into every generator so one geometry routine serves both colors.
pub trait TeamChecker: Sync {
    fn is_member(&self, piece: Piece) -> bool;
}

pub struct WhiteTeam;
pub struct BlackTeam;

impl TeamChecker for WhiteTeam {
    fn is_member(&self, piece: Piece) -> bool {
        piece.is_white()
    }
}

impl TeamChecker for BlackTeam {
    fn is_member(&self, piece: Piece) -> bool {
        piece.is_black()
    }
}

impl Color {
    pub fn checker(&self) -> &'static dyn TeamChecker {
        match self {
            Color::White => &WhiteTeam,
            Color::Black => &BlackTeam,
        }
    }
}
