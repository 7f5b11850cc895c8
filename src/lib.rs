//! # counterfeit-coin
//!
//! The classic balance-scale puzzle: among N coins exactly one has a different
//! weight, and the player must find it with the fewest weighings information
//! theory allows.
//!
//! ## Modes
//!
//! - **Known**: the player is told whether the odd coin is heavier or lighter.
//!   Budget: `⌈log₃ N⌉` weighings.
//! - **Unknown**: the player is only told that one coin differs.
//!   Budget: `⌈log₃(2N + 1)⌉` weighings.
//!
//! ## Modules
//!
//! - `core`: coins, configuration, RNG, puzzle state
//! - `scale`: weighing resolution and ASCII diagrams
//! - `rules`: input validation, the turn state machine, and multi-game sessions
//! - `console`: line-based I/O the engine talks through
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use counterfeit_coin::{Counterfeit, GameEngine, PuzzleConfig, PuzzleState, Terminal};
//!
//! let state = PuzzleState::with_counterfeit(PuzzleConfig::default(), Counterfeit::heavier(3)).unwrap();
//! let input = "1 2 3\n4 5 6\ny\n4\n";
//! let mut console = Terminal::new(Cursor::new(input), Vec::new());
//!
//! let result = GameEngine::new(state, &mut console).play().unwrap();
//! assert!(result.is_won());
//! ```

pub mod console;
pub mod core;
pub mod error;
pub mod rules;
pub mod scale;

// Re-export commonly used types
pub use crate::console::{Console, Terminal};
pub use crate::core::{
    turn_budget, CoinId, Counterfeit, Deviation, GameRng, Mode, PuzzleConfig, PuzzleState,
};
pub use crate::error::{ConfigError, Error, GuessError, Result, SelectionError};
pub use crate::rules::{session, GameEngine, GameResult, Phase, Round};
pub use crate::scale::{render, resolve, Outcome, Pan, ScaleTemplate, Weighing};
