//! Self-play configuration.
//!
//! The binary fills a [`GameConfig`] from its command line; library users
//! start from [`GameConfig::default`] and adjust with the `with_*` helpers.

/// Everything the orchestrator needs to run a random self-play game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of half-moves to play, white first
    pub plies: usize,
    /// Seed for move selection; `None` draws from entropy
    pub seed: Option<u64>,
    /// Board notation handed to the initializer
    pub notation: String,
    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,
    /// Print the board after every ply
    pub show_boards: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            plies: 100,
            seed: None,
            notation: String::new(),
            log_level: "info".to_string(),
            show_boards: true,
        }
    }
}

impl GameConfig {
    pub fn with_plies(mut self, plies: usize) -> Self {
        self.plies = plies;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_notation(mut self, notation: impl Into<String>) -> Self {
        self.notation = notation.into();
        self
    }

    pub fn quiet(mut self) -> Self {
        self.show_boards = false;
        self
    }

    /// Seed for one side's player, derived so both sides differ
    pub fn player_seed(&self, offset: u64) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(offset))
    }
}
