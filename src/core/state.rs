//! Puzzle state: hidden truth plus turn progress.
//!
//! ## Hidden truth
//!
//! The odd coin and its deviation are drawn once at setup and kept in a private
//! field. Only `weigh` and `is_correct` read them while a game runs; nothing in
//! rendering or input parsing can reach them.
//!
//! ## Progress
//!
//! - `current_turn` starts at 1 and only moves forward
//! - `current_guess` is cleared at the start of every guess phase

use serde::{Deserialize, Serialize};

use super::coin::CoinId;
use super::config::{Mode, PuzzleConfig};
use super::rng::GameRng;
use crate::error::ConfigError;
use crate::scale::{resolve, Outcome, Weighing};

/// Direction in which the odd coin deviates from the others.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Deviation {
    Heavier,
    Lighter,
}

impl Deviation {
    /// `true` for `Heavier`.
    #[must_use]
    pub const fn is_heavier(self) -> bool {
        matches!(self, Deviation::Heavier)
    }
}

impl std::fmt::Display for Deviation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Deviation::Heavier => write!(f, "heavier"),
            Deviation::Lighter => write!(f, "lighter"),
        }
    }
}

/// The odd coin and how it differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counterfeit {
    pub coin: CoinId,
    pub deviation: Deviation,
}

impl Counterfeit {
    /// Create a counterfeit description.
    #[must_use]
    pub const fn new(coin: CoinId, deviation: Deviation) -> Self {
        Self { coin, deviation }
    }

    /// Shorthand for a heavier counterfeit at a 0-based index.
    #[must_use]
    pub const fn heavier(index: u32) -> Self {
        Self::new(CoinId::new(index), Deviation::Heavier)
    }

    /// Shorthand for a lighter counterfeit at a 0-based index.
    #[must_use]
    pub const fn lighter(index: u32) -> Self {
        Self::new(CoinId::new(index), Deviation::Lighter)
    }
}

/// State of one game.
#[derive(Clone)]
pub struct PuzzleState {
    config: PuzzleConfig,
    counterfeit: Counterfeit,
    turn_budget: u32,
    current_turn: u32,
    current_guess: Option<CoinId>,
}

impl PuzzleState {
    /// Draw a fresh puzzle: uniform odd coin, fair deviation.
    #[must_use]
    pub fn setup(config: PuzzleConfig, rng: &mut GameRng) -> Self {
        let coin = CoinId::new(rng.gen_below(config.coin_limit()));
        let deviation = if rng.gen_bool(0.5) {
            Deviation::Heavier
        } else {
            Deviation::Lighter
        };
        Self::new(config, Counterfeit::new(coin, deviation))
    }

    /// Build a puzzle with a fixed truth, for tests and replays.
    pub fn with_counterfeit(config: PuzzleConfig, counterfeit: Counterfeit) -> Result<Self, ConfigError> {
        if counterfeit.coin.index() >= config.coin_count() {
            return Err(ConfigError::CoinOutOfRange {
                coin: counterfeit.coin.index(),
                coin_count: config.coin_count(),
            });
        }
        Ok(Self::new(config, counterfeit))
    }

    fn new(config: PuzzleConfig, counterfeit: Counterfeit) -> Self {
        Self {
            config,
            counterfeit,
            turn_budget: config.turn_budget(),
            current_turn: 1,
            current_guess: None,
        }
    }

    /// Number of coins.
    #[must_use]
    pub fn coin_count(&self) -> usize {
        self.config.coin_count()
    }

    /// Game mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.config.mode()
    }

    /// Number of weighings allowed.
    #[must_use]
    pub fn turn_budget(&self) -> u32 {
        self.turn_budget
    }

    /// Current turn (1-based).
    #[must_use]
    pub fn current_turn(&self) -> u32 {
        self.current_turn
    }

    /// Turns left including the current one.
    #[must_use]
    pub fn turns_remaining(&self) -> u32 {
        self.turn_budget + 1 - self.current_turn
    }

    /// Is this the last allowed turn?
    #[must_use]
    pub fn is_last_turn(&self) -> bool {
        self.current_turn >= self.turn_budget
    }

    /// The player's guess for the current turn, if any.
    #[must_use]
    pub fn current_guess(&self) -> Option<CoinId> {
        self.current_guess
    }

    /// The deviation the player is told up front. `None` in unknown mode.
    #[must_use]
    pub fn announced_deviation(&self) -> Option<Deviation> {
        match self.mode() {
            Mode::Known => Some(self.counterfeit.deviation),
            Mode::Unknown => None,
        }
    }

    /// Put a weighing on the scale.
    #[must_use]
    pub fn weigh(&self, weighing: &Weighing) -> Outcome {
        resolve(&self.counterfeit, weighing)
    }

    /// Record the player's answer for this turn.
    pub fn set_guess(&mut self, guess: Option<CoinId>) {
        self.current_guess = guess;
    }

    /// Does the current guess name the odd coin?
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.current_guess == Some(self.counterfeit.coin)
    }

    /// Move to the next turn. Never passes the budget.
    pub fn advance_turn(&mut self) {
        debug_assert!(self.current_turn < self.turn_budget, "advanced past the turn budget");
        if self.current_turn < self.turn_budget {
            self.current_turn += 1;
        }
    }

    /// Reveal the truth. Only meaningful once the game is over.
    #[must_use]
    pub(crate) fn reveal(&self) -> Counterfeit {
        self.counterfeit
    }
}

impl std::fmt::Debug for PuzzleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PuzzleState")
            .field("config", &self.config)
            .field("counterfeit", &"<hidden>")
            .field("turn_budget", &self.turn_budget)
            .field("current_turn", &self.current_turn)
            .field("current_guess", &self.current_guess)
            .finish()
    }
}
