//! Play the counterfeit coin puzzle in a terminal.
//!
//! Usage:
//!   counterfeit-coin                       # 8 coins, direction known, endless games
//!   counterfeit-coin -n 12 -m unknown      # the classic twelve-coin problem
//!   counterfeit-coin --seed 7 --games 1    # one reproducible game

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use counterfeit_coin::{session, GameRng, Mode, PuzzleConfig, Terminal};
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find the counterfeit coin with a balance scale")]
struct Args {
    /// Number of coins on the table.
    #[arg(short = 'n', long, default_value_t = counterfeit_coin::core::DEFAULT_COIN_COUNT)]
    coins: usize,

    /// Whether you are told if the odd coin is heavier or lighter (known | unknown).
    #[arg(short, long, default_value_t = Mode::Known)]
    mode: Mode,

    /// Seed for reproducible puzzles. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to play; 0 keeps playing until input closes.
    #[arg(long, default_value_t = 0)]
    games: usize,

    /// Pause after the introduction and between games, in milliseconds.
    #[arg(long, default_value_t = 3000)]
    pause_ms: u64,

    /// Log level for diagnostics on stderr.
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = PuzzleConfig::new(args.coins, args.mode).context("invalid puzzle configuration")?;
    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!(seed = rng.seed(), coins = config.coin_count(), mode = %config.mode(), "session started");

    let pause = Duration::from_millis(args.pause_ms);
    let mut console = Terminal::stdio(pause);

    session(config, &mut rng, &mut console, args.games).context("game aborted")?;
    Ok(())
}
