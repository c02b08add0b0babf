pub mod player;
pub use player::*;

pub mod random_player;
pub use random_player::*;
