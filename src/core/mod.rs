//! Core puzzle types: coins, configuration, RNG, and game state.

pub mod coin;
pub mod config;
pub mod rng;
pub mod state;

pub use coin::{join_labels, CoinId};
pub use config::{turn_budget, Mode, PuzzleConfig, DEFAULT_COIN_COUNT, MAX_COIN_COUNT};
pub use rng::GameRng;
pub use state::{Counterfeit, Deviation, PuzzleState};
