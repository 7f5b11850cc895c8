//! A sitting of consecutive games.
//!
//! Each game draws a fresh puzzle from its own fork of the session RNG, so a
//! seeded session replays the same puzzles in the same order. Between games the
//! console pauses and announces the restart.

use tracing::{debug, info};

use super::engine::{GameEngine, GameResult};
use crate::console::Console;
use crate::core::{GameRng, PuzzleConfig, PuzzleState};
use crate::error::{Error, Result};

/// Play games until `games` have finished, or until input closes when `games` is 0.
///
/// Closed input ends the session cleanly; a game cut short that way has no
/// result. Any other console failure is returned.
pub fn session<C: Console + ?Sized>(
    config: PuzzleConfig,
    rng: &mut GameRng,
    console: &mut C,
    games: usize,
) -> Result<Vec<GameResult>> {
    let mut results = Vec::new();

    loop {
        let state = PuzzleState::setup(config, &mut rng.fork());
        match GameEngine::new(state, &mut *console).play() {
            Ok(result) => results.push(result),
            Err(Error::InputClosed) => {
                debug!(played = results.len(), "input closed");
                break;
            }
            Err(error) => return Err(error),
        }

        if games != 0 && results.len() >= games {
            break;
        }
        console.pause();
        console.say("---------------")?;
        console.say("Restarting game...")?;
        console.say("--------------")?;
    }

    info!(
        played = results.len(),
        won = results.iter().filter(|r| r.is_won()).count(),
        "session ended"
    );
    Ok(results)
}
