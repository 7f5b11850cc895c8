//! Game rules: input validation and the turn state machine.
//!
//! - `selection`: turns raw lines into pans and guesses
//! - `engine`: runs one game from the intro to a result
//! - `session`: runs consecutive games with restarts in between

pub mod engine;
pub mod selection;
pub mod session;

pub use engine::{GameEngine, GameResult, Phase};
pub use selection::{is_yes, parse_guess, Round};
pub use session::session;
