//! Random self-play driver.
//!
//! The [`Orchestrator`] owns the board and both players and runs the game
//! loop:
//!
//! ```text
//! [Generate side's moves] -> [Player picks one] -> [Apply to board]
//!   -> [Switch turn] -> [Generate side's moves] ...
//! ```
//!
//! The loop ends after the configured number of plies, or earlier when the
//! side to move has no pseudo-legal move at all.

use std::time::{Duration, Instant};

use log::{debug, info, trace};

use crate::agent::player::{GameResult, Player};
use crate::agent::RandomPlayer;
use crate::config::GameConfig;
use crate::game_repr::{ChessError, ChessResult, Color, Move, Position};

/// Totals reported once a run finishes.
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub result: GameResult,
    pub plies_played: usize,
    /// Sum of every generated list's length
    pub total_moves_generated: usize,
    pub elapsed: Duration,
    pub final_position: Position,
}

pub struct Orchestrator {
    position: Position,

    /// (white_player, black_player)
    players: (Box<dyn Player>, Box<dyn Player>),

    current_turn: Color,

    plies: usize,

    total_moves_generated: usize,
}

impl Orchestrator {
    /// Board from the configured notation, two random players.
    pub fn new(config: &GameConfig) -> Self {
        let players: (Box<dyn Player>, Box<dyn Player>) = (
            Box::new(RandomPlayer::new("white", config.player_seed(0))),
            Box::new(RandomPlayer::new("black", config.player_seed(1))),
        );
        Self::with_players(Position::from_notation(&config.notation), players, config.plies)
    }

    pub fn with_players(
        position: Position,
        players: (Box<dyn Player>, Box<dyn Player>),
        plies: usize,
    ) -> Self {
        debug!("orchestrator created for {} plies", plies);
        Self {
            position,
            players,
            current_turn: Color::White,
            plies,
            total_moves_generated: 0,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    /// Generate, choose, apply, switch sides.
    pub fn play_turn(&mut self) -> ChessResult<Move> {
        let team = self.current_turn;
        let moves = self.position.generate_moves(team);
        if moves.is_empty() {
            return Err(ChessError::NoMoves { team });
        }
        self.total_moves_generated += moves.len();
        trace!("{:?} candidates:\n{}", team, moves);

        let player = match team {
            Color::White => &mut self.players.0,
            Color::Black => &mut self.players.1,
        };
        let mv = player.choose_move(&self.position, team, &moves)?;
        debug!("{} plays {}", player.name(), mv);

        self.position.apply_move(mv)?;
        moves.release();

        self.current_turn = team.opposite();
        Ok(mv)
    }

    /// Plays the whole game, calling `on_ply` after every applied move.
    pub fn run_with<F>(mut self, mut on_ply: F) -> ChessResult<GameSummary>
    where
        F: FnMut(usize, Move, &Position),
    {
        let start = Instant::now();
        let mut plies_played = 0;
        let mut result = GameResult::Completed;

        while plies_played < self.plies {
            match self.play_turn() {
                Ok(mv) => {
                    on_ply(plies_played, mv, &self.position);
                    plies_played += 1;
                }
                Err(ChessError::NoMoves { team }) => {
                    info!("{:?} has no moves after {} plies", team, plies_played);
                    result = GameResult::NoMoves(team);
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        let elapsed = start.elapsed();
        info!(
            "finished {} plies, {} moves generated in {:.3}s",
            plies_played,
            self.total_moves_generated,
            elapsed.as_secs_f64()
        );

        Ok(GameSummary {
            result,
            plies_played,
            total_moves_generated: self.total_moves_generated,
            elapsed,
            final_position: self.position,
        })
    }

    pub fn run(self) -> ChessResult<GameSummary> {
        self.run_with(|_, _, _| {})
    }
}
