//! Turn state machine for one game.
//!
//! ```text
//! Intro -> AwaitingLeft -> AwaitingRight -> Weighed -> AwaitingGuess
//!              ^                                            |
//!              +------------- next turn --------------------+--> Finished(Won | Exhausted)
//! ```
//!
//! Rejected input keeps the engine in the same phase. The turn counter only moves
//! when a guess phase ends without a correct answer and turns remain.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::selection::{is_yes, parse_guess, Round};
use crate::console::Console;
use crate::core::{join_labels, CoinId, Counterfeit, PuzzleState};
use crate::error::Result;
use crate::scale::{render, Outcome, Pan, Weighing};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The player named the counterfeit on this turn.
    Won { turn: u32 },
    /// The turn budget ran out. Carries the truth for the reveal.
    Exhausted { counterfeit: Counterfeit },
}

impl GameResult {
    /// Did the player find the counterfeit?
    #[must_use]
    pub fn is_won(&self) -> bool {
        matches!(self, GameResult::Won { .. })
    }
}

/// Where the engine is within a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Game not announced yet.
    Intro,
    /// Waiting for the left pan.
    AwaitingLeft,
    /// Left pan chosen, waiting for the right pan.
    AwaitingRight { left: Pan },
    /// Both pans on the scale; result not shown yet.
    Weighed { weighing: Weighing, outcome: Outcome },
    /// Waiting for an optional answer.
    AwaitingGuess,
    /// Game over.
    Finished(GameResult),
}

/// Drives one game against a console.
pub struct GameEngine<'c, C: Console + ?Sized> {
    state: PuzzleState,
    console: &'c mut C,
    phase: Phase,
    round: Round,
}

impl<'c, C: Console + ?Sized> GameEngine<'c, C> {
    /// Create an engine for a freshly set up puzzle.
    pub fn new(state: PuzzleState, console: &'c mut C) -> Self {
        let round = Round::new(state.coin_count());
        Self {
            state,
            console,
            phase: Phase::Intro,
            round,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Puzzle state.
    #[must_use]
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::Finished(result) => Some(result),
            _ => None,
        }
    }

    /// Run until the game ends.
    pub fn play(mut self) -> Result<GameResult> {
        loop {
            if let Some(result) = self.result() {
                return Ok(result);
            }
            self.step()?;
        }
    }

    /// Perform one phase transition. Does nothing once finished.
    pub fn step(&mut self) -> Result<()> {
        self.phase = match self.phase.clone() {
            Phase::Intro => {
                self.announce()?;
                self.begin_turn()?
            }
            Phase::AwaitingLeft => match self.select_pan("left")? {
                Some(left) => {
                    self.console.say("")?;
                    Phase::AwaitingRight { left }
                }
                None => Phase::AwaitingLeft,
            },
            Phase::AwaitingRight { left } => match self.select_pan("right")? {
                Some(right) => {
                    let weighing = Weighing::new(left, right);
                    let outcome = self.state.weigh(&weighing);
                    debug!(
                        turn = self.state.current_turn(),
                        left = %join_labels(&weighing.left),
                        right = %join_labels(&weighing.right),
                        ?outcome,
                        "weighed"
                    );
                    Phase::Weighed { weighing, outcome }
                }
                None => Phase::AwaitingRight { left },
            },
            Phase::Weighed { weighing, outcome } => {
                for line in render(outcome, &weighing) {
                    self.console.say(&line)?;
                }
                self.console.say(outcome.verdict())?;
                Phase::AwaitingGuess
            }
            Phase::AwaitingGuess => {
                let guess = self.ask_for_guess()?;
                self.state.set_guess(guess);
                self.evaluate()?
            }
            Phase::Finished(result) => Phase::Finished(result),
        };
        Ok(())
    }

    fn announce(&mut self) -> Result<()> {
        info!(
            coins = self.state.coin_count(),
            mode = %self.state.mode(),
            turn_budget = self.state.turn_budget(),
            "starting game"
        );

        let info = match self.state.announced_deviation() {
            Some(deviation) => deviation.to_string(),
            None => "different".to_string(),
        };
        self.console.say("Starting game...")?;
        self.console.say(&format!(
            "You have {} coins! However, one of them is {}.",
            self.state.coin_count(),
            info
        ))?;
        self.console.say(&format!(
            "All you have is a scale to find the counterfeit coin; try to find it in {} turns on the scale!",
            self.state.turn_budget()
        ))?;
        self.console.say("")?;
        self.console.pause();
        Ok(())
    }

    fn begin_turn(&mut self) -> Result<Phase> {
        self.round = Round::new(self.state.coin_count());
        self.console
            .say(&format!("{} turn(s) remaining!", self.state.turns_remaining()))?;
        Ok(Phase::AwaitingLeft)
    }

    /// Prompt for one pan. `None` means the line was rejected.
    fn select_pan(&mut self, side: &str) -> Result<Option<Pan>> {
        let available: Vec<CoinId> = self.round.available().collect();
        self.console
            .say(&format!("Available coins: {}", join_labels(&available)))?;

        let line = self
            .console
            .prompt(&format!("Select the coins to go in the {side} bucket: "))?;
        match self.round.select(&line) {
            Ok(pan) => Ok(Some(pan)),
            Err(error) => {
                debug!(side, %error, "rejected selection");
                self.console.say("Invalid input, try again.")?;
                Ok(None)
            }
        }
    }

    fn ask_for_guess(&mut self) -> Result<Option<CoinId>> {
        let line = self.console.prompt(&format!(
            "It's been {} turn(s), do you have an answer? (y/n) ",
            self.state.current_turn()
        ))?;
        if !is_yes(&line) {
            return Ok(None);
        }

        let line = self.console.prompt("Answer: ")?;
        match parse_guess(&line, self.state.coin_count()) {
            Ok(coin) => Ok(Some(coin)),
            Err(error) => {
                debug!(%error, "rejected guess");
                self.console.say("Invalid input, continuing game.")?;
                Ok(None)
            }
        }
    }

    fn evaluate(&mut self) -> Result<Phase> {
        if self.state.is_correct() {
            self.console.say("Correct!")?;
            self.console.say("")?;
            return self.finish(GameResult::Won {
                turn: self.state.current_turn(),
            });
        }

        self.console
            .say("No correct answer found yet, attempting to continue game...")?;
        self.console.say("")?;

        if self.state.is_last_turn() {
            let counterfeit = self.state.reveal();
            self.console.say("Out of turns!")?;
            self.console.say(&format!(
                "The counterfeit was coin {}, which is {}.",
                counterfeit.coin, counterfeit.deviation
            ))?;
            self.console.say("")?;
            return self.finish(GameResult::Exhausted { counterfeit });
        }

        self.state.advance_turn();
        self.begin_turn()
    }

    fn finish(&mut self, result: GameResult) -> Result<Phase> {
        info!(?result, turns_used = self.state.current_turn(), "game finished");
        self.console.say("Game over.")?;
        Ok(Phase::Finished(result))
    }
}
