//! Puzzle configuration.
//!
//! Two parameters shape a game:
//! - `coin_count`: how many coins are on the table (default 8)
//! - `mode`: whether the player is told the direction of the odd coin (default `Known`)
//!
//! The turn budget follows from both and is fixed at setup.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default number of coins.
pub const DEFAULT_COIN_COUNT: usize = 8;

/// Largest puzzle a `CoinId` can index.
pub const MAX_COIN_COUNT: usize = u32::MAX as usize;

/// What the player is told before the first weighing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The player knows whether the odd coin is heavier or lighter.
    #[default]
    Known,
    /// The player only knows that one coin is different.
    Unknown,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Known => write!(f, "known"),
            Mode::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "known" => Ok(Mode::Known),
            "unknown" => Ok(Mode::Unknown),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// Validated shape of one puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    coin_count: u32,
    mode: Mode,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            coin_count: DEFAULT_COIN_COUNT as u32,
            mode: Mode::Known,
        }
    }
}

impl PuzzleConfig {
    /// Create a configuration. Rejects zero coins and counts a `CoinId` cannot index.
    pub fn new(coin_count: usize, mode: Mode) -> Result<Self, ConfigError> {
        if coin_count == 0 {
            return Err(ConfigError::ZeroCoins);
        }
        let coin_count = u32::try_from(coin_count).map_err(|_| ConfigError::TooManyCoins {
            coin_count,
            max: MAX_COIN_COUNT,
        })?;
        Ok(Self { coin_count, mode })
    }

    /// Number of coins on the table.
    #[must_use]
    pub fn coin_count(&self) -> usize {
        self.coin_count as usize
    }

    /// Number of coins, as the index type of `CoinId`.
    #[must_use]
    pub fn coin_limit(&self) -> u32 {
        self.coin_count
    }

    /// Game mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of weighings the player is allowed.
    #[must_use]
    pub fn turn_budget(&self) -> u32 {
        turn_budget(self.coin_count(), self.mode)
    }
}

/// Information-theoretic number of weighings for `coin_count` coins.
///
/// `⌈log₃ N⌉` when the direction is known, `⌈log₃(2N + 1)⌉` otherwise,
/// never less than one.
///
/// ```
/// use counterfeit_coin::core::{turn_budget, Mode};
///
/// assert_eq!(turn_budget(8, Mode::Known), 2);
/// assert_eq!(turn_budget(12, Mode::Unknown), 3);
/// ```
#[must_use]
pub fn turn_budget(coin_count: usize, mode: Mode) -> u32 {
    let outcomes = match mode {
        Mode::Known => coin_count as u128,
        Mode::Unknown => 2 * coin_count as u128 + 1,
    };
    ceil_log3(outcomes).max(1)
}

/// Smallest `k` with `3^k >= n`. Integer only: `log(243, 3)` is not 5 in floating point.
fn ceil_log3(n: u128) -> u32 {
    let mut k = 0;
    let mut power: u128 = 1;
    while power < n {
        power = power.saturating_mul(3);
        k += 1;
    }
    k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PuzzleConfig::default();
        assert_eq!(config.coin_count(), 8);
        assert_eq!(config.mode(), Mode::Known);
        assert_eq!(config.turn_budget(), 2);
    }

    #[test]
    fn test_zero_coins_rejected() {
        assert_eq!(PuzzleConfig::new(0, Mode::Known), Err(ConfigError::ZeroCoins));
    }

    #[test]
    fn test_largest_coin_count_accepted() {
        let config = PuzzleConfig::new(MAX_COIN_COUNT, Mode::Unknown).unwrap();
        assert_eq!(config.coin_count(), MAX_COIN_COUNT);
        assert_eq!(config.coin_limit(), u32::MAX);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_too_many_coins_rejected() {
        for coin_count in [MAX_COIN_COUNT + 1, MAX_COIN_COUNT + 2, usize::MAX] {
            assert_eq!(
                PuzzleConfig::new(coin_count, Mode::Known),
                Err(ConfigError::TooManyCoins {
                    coin_count,
                    max: MAX_COIN_COUNT
                })
            );
        }
    }

    #[test]
    fn test_known_budget_table() {
        let expected = [(1, 1), (2, 1), (3, 1), (4, 2), (8, 2), (9, 2), (10, 3), (27, 3), (28, 4), (243, 5), (244, 6)];
        for (coins, budget) in expected {
            assert_eq!(turn_budget(coins, Mode::Known), budget, "{} coins", coins);
        }
    }

    #[test]
    fn test_unknown_budget_table() {
        // 2N + 1: 3, 5, 9, 25, 27, 29
        let expected = [(1, 1), (2, 2), (4, 2), (12, 3), (13, 3), (14, 4)];
        for (coins, budget) in expected {
            assert_eq!(turn_budget(coins, Mode::Unknown), budget, "{} coins", coins);
        }
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("known".parse::<Mode>(), Ok(Mode::Known));
        assert_eq!("UNKNOWN".parse::<Mode>(), Ok(Mode::Unknown));
        assert_eq!(
            "sideways".parse::<Mode>(),
            Err(ConfigError::UnknownMode("sideways".to_string()))
        );
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in [Mode::Known, Mode::Unknown] {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
    }

    #[test]
    fn test_config_serde() {
        let config = PuzzleConfig::new(12, Mode::Unknown).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"coin_count":12,"mode":"unknown"}"#);

        let deserialized: PuzzleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
