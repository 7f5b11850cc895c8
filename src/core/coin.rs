//! Coin identification.
//!
//! Coins are indexed from 0 internally. Players see 1-based labels, so
//! `Display` and `from_label` do the conversion in one place.

use serde::{Deserialize, Serialize};

/// Identifier of one coin in a puzzle.
///
/// ```
/// use counterfeit_coin::core::CoinId;
///
/// let coin = CoinId::new(3);
/// assert_eq!(coin.index(), 3);
/// assert_eq!(coin.to_string(), "4");
/// assert_eq!(CoinId::from_label(4, 8), Some(coin));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CoinId(pub u32);

impl CoinId {
    /// Create a coin ID from a 0-based index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the 1-based label shown to the player.
    #[must_use]
    pub const fn label(self) -> u64 {
        self.0 as u64 + 1
    }

    /// Convert a 1-based label into a coin, if it names one of `coin_count` coins.
    #[must_use]
    pub fn from_label(label: i64, coin_count: usize) -> Option<Self> {
        if label < 1 || label as u64 > coin_count as u64 {
            return None;
        }
        u32::try_from(label - 1).ok().map(Self)
    }

    /// Iterate over every coin of a puzzle with `coin_count` coins.
    ///
    /// Counts beyond `u32::MAX` stop at the last indexable coin.
    pub fn all(coin_count: usize) -> impl Iterator<Item = CoinId> {
        let end = u32::try_from(coin_count).unwrap_or(u32::MAX);
        (0..end).map(CoinId)
    }
}

impl std::fmt::Display for CoinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Join coin labels with single spaces, e.g. `"1 2 5"`.
pub fn join_labels<'a>(coins: impl IntoIterator<Item = &'a CoinId>) -> String {
    coins
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
