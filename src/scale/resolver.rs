//! Weighing resolution.
//!
//! Rules, in priority order:
//! 1. Pans holding different numbers of coins tip toward the fuller pan. A whole
//!    coin always outweighs the deviation of one counterfeit.
//! 2. Pans of equal size tip according to where the counterfeit sits and which
//!    way it deviates, or balance if it is on neither pan.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cmp::Ordering;

use crate::core::{CoinId, Counterfeit};

/// Coins on one pan. Most weighings use a handful of coins.
pub type Pan = SmallVec<[CoinId; 8]>;

/// Result of a weighing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Balanced,
    LeftHeavy,
    RightHeavy,
}

impl Outcome {
    /// Line shown to the player under the diagram.
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        match self {
            Outcome::Balanced => "Equal.",
            Outcome::LeftHeavy => "The left is heavier.",
            Outcome::RightHeavy => "The right is heavier.",
        }
    }

    /// Outcome when the heavier side is `left` (true) or right (false).
    const fn tipped(left: bool) -> Self {
        if left {
            Outcome::LeftHeavy
        } else {
            Outcome::RightHeavy
        }
    }
}

/// Two disjoint pans placed on the scale for one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weighing {
    pub left: Pan,
    pub right: Pan,
}

impl Weighing {
    /// Create a weighing from two pans.
    #[must_use]
    pub fn new(left: Pan, right: Pan) -> Self {
        debug_assert!(
            left.iter().all(|coin| !right.contains(coin)),
            "pans must be disjoint"
        );
        Self { left, right }
    }

    /// Create a weighing from 0-based coin indices.
    #[must_use]
    pub fn from_indices(left: &[u32], right: &[u32]) -> Self {
        Self::new(
            left.iter().copied().map(CoinId::new).collect(),
            right.iter().copied().map(CoinId::new).collect(),
        )
    }
}

/// Resolve a weighing against the hidden truth.
#[must_use]
pub fn resolve(counterfeit: &Counterfeit, weighing: &Weighing) -> Outcome {
    match weighing.left.len().cmp(&weighing.right.len()) {
        Ordering::Greater => return Outcome::LeftHeavy,
        Ordering::Less => return Outcome::RightHeavy,
        Ordering::Equal => {}
    }

    let heavier = counterfeit.deviation.is_heavier();
    if weighing.left.contains(&counterfeit.coin) {
        Outcome::tipped(heavier)
    } else if weighing.right.contains(&counterfeit.coin) {
        Outcome::tipped(!heavier)
    } else {
        Outcome::Balanced
    }
}
