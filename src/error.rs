//! Error types.
//!
//! Input errors (`SelectionError`, `GuessError`) are recoverable and absorbed by the
//! game engine. `Error` covers what can actually stop a game: bad configuration and
//! a console that fails or runs out of input.

use thiserror::Error;

use crate::core::CoinId;

/// Invalid puzzle configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a puzzle needs at least one coin")]
    ZeroCoins,
    #[error("{coin_count} coins is more than the supported {max}")]
    TooManyCoins { coin_count: usize, max: usize },
    #[error("unknown mode '{0}' (expected 'known' or 'unknown')")]
    UnknownMode(String),
    #[error("coin index {coin} is out of range for {coin_count} coins")]
    CoinOutOfRange { coin: usize, coin_count: usize },
}

/// Rejected coin selection for one pan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("'{0}' is not a coin number")]
    NotANumber(String),
    #[error("coin {coin} does not exist (1-{coin_count})")]
    OutOfRange { coin: i64, coin_count: usize },
    #[error("coin {0} is already on the scale")]
    AlreadyPlaced(CoinId),
    #[error("coin {0} was selected twice")]
    Duplicate(CoinId),
}

/// Rejected answer to the guess prompt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("'{0}' is not a coin number")]
    NotANumber(String),
    #[error("coin {guess} does not exist (1-{coin_count})")]
    OutOfRange { guess: i64, coin_count: usize },
}

/// Error that ends a game without a result.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("console error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed")]
    InputClosed,
}

/// Result type for game operations.
pub type Result<T> = std::result::Result<T, Error>;
