//! Uniform random move selection.

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::player::Player;
use crate::game_repr::{ChessError, ChessResult, Color, Move, MoveList, Position};

/// Picks integers uniformly from an inclusive range.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Seeded selectors replay the same sequence; `None` draws from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Integer in `[low, high]`, both ends included
    pub fn select(&mut self, low: usize, high: usize) -> ChessResult<usize> {
        if low > high {
            return Err(ChessError::InvalidArgument("selection range is empty"));
        }
        Ok(self.rng.gen_range(low..=high))
    }
}

/// Plays a uniformly random move from the generated list.
pub struct RandomPlayer {
    name: String,
    selector: RandomSelector,
}

impl RandomPlayer {
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        Self {
            name: name.into(),
            selector: RandomSelector::new(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn choose_move(&mut self, _position: &Position, color: Color, moves: &MoveList) -> ChessResult<Move> {
        if moves.is_empty() {
            return Err(ChessError::NoMoves { team: color });
        }
        let index = self.selector.select(0, moves.len() - 1)?;
        trace!("{} ({:?}) chose move {} of {}", self.name, color, index, moves.len());
        moves.get(index)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
