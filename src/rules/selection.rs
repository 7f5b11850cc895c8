//! Validation of player input.
//!
//! Raw lines become either a validated pan or guess, or a typed rejection. The
//! engine never sees a malformed selection: it re-prompts on any error.

use rustc_hash::FxHashSet;

use crate::core::CoinId;
use crate::error::{GuessError, SelectionError};
use crate::scale::Pan;

/// Coins already placed on the scale in the current round.
#[derive(Clone, Debug, Default)]
pub struct Round {
    coin_count: usize,
    placed: FxHashSet<CoinId>,
}

impl Round {
    /// Start a round with every coin available.
    #[must_use]
    pub fn new(coin_count: usize) -> Self {
        Self {
            coin_count,
            placed: FxHashSet::default(),
        }
    }

    /// Is the coin still free to place?
    #[must_use]
    pub fn is_available(&self, coin: CoinId) -> bool {
        coin.index() < self.coin_count && !self.placed.contains(&coin)
    }

    /// Coins not yet on the scale, in order.
    pub fn available(&self) -> impl Iterator<Item = CoinId> + '_ {
        CoinId::all(self.coin_count).filter(|&coin| self.is_available(coin))
    }

    /// Parse a whitespace-separated list of 1-based coin numbers into a pan.
    ///
    /// Every token must name an existing coin that is not on the scale yet and
    /// not repeated in the same line. On success the coins are marked placed; on
    /// failure the round is unchanged. An empty line is an empty pan.
    pub fn select(&mut self, line: &str) -> Result<Pan, SelectionError> {
        let mut pan = Pan::new();

        for token in line.split_whitespace() {
            let label: i64 = token
                .parse()
                .map_err(|_| SelectionError::NotANumber(token.to_string()))?;
            let coin = CoinId::from_label(label, self.coin_count).ok_or(SelectionError::OutOfRange {
                coin: label,
                coin_count: self.coin_count,
            })?;
            if !self.is_available(coin) {
                return Err(SelectionError::AlreadyPlaced(coin));
            }
            if pan.contains(&coin) {
                return Err(SelectionError::Duplicate(coin));
            }
            pan.push(coin);
        }

        self.placed.extend(pan.iter().copied());
        Ok(pan)
    }
}

/// Does the answer to a yes/no prompt mean yes?
#[must_use]
pub fn is_yes(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Parse a 1-based coin number given as an answer.
pub fn parse_guess(line: &str, coin_count: usize) -> Result<CoinId, GuessError> {
    let token = line.trim();
    let guess: i64 = token
        .parse()
        .map_err(|_| GuessError::NotANumber(token.to_string()))?;
    CoinId::from_label(guess, coin_count).ok_or(GuessError::OutOfRange { guess, coin_count })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coins(indices: &[u32]) -> Vec<CoinId> {
        indices.iter().copied().map(CoinId::new).collect()
    }

    #[test]
    fn test_select_valid() {
        let mut round = Round::new(8);
        let pan = round.select(" 1  2 3 ").unwrap();

        assert_eq!(pan.to_vec(), coins(&[0, 1, 2]));
        assert!(!round.is_available(CoinId::new(0)));
        assert!(round.is_available(CoinId::new(3)));
        assert_eq!(round.available().collect::<Vec<_>>(), coins(&[3, 4, 5, 6, 7]));
    }

    #[test]
    fn test_available_at_coin_limit() {
        let mut round = Round::new(u32::MAX as usize);
        assert_eq!(round.available().take(10).count(), 10);

        round.select("1 2").unwrap();
        assert_eq!(round.available().take(3).collect::<Vec<_>>(), coins(&[2, 3, 4]));
        assert_eq!(round.select(&u32::MAX.to_string()).unwrap().to_vec(), coins(&[u32::MAX - 1]));
    }

    #[test]
    fn test_select_keeps_input_order() {
        let mut round = Round::new(8);
        let pan = round.select("5 1 3").unwrap();
        assert_eq!(pan.to_vec(), coins(&[4, 0, 2]));
    }

    #[test]
    fn test_select_empty_line() {
        let mut round = Round::new(8);
        assert!(round.select("").unwrap().is_empty());
        assert_eq!(round.available().count(), 8);
    }

    #[test]
    fn test_select_rejects_out_of_range() {
        let mut round = Round::new(8);
        assert_eq!(
            round.select("1 9"),
            Err(SelectionError::OutOfRange { coin: 9, coin_count: 8 })
        );
        assert_eq!(
            round.select("0"),
            Err(SelectionError::OutOfRange { coin: 0, coin_count: 8 })
        );
        assert_eq!(round.available().count(), 8);
    }

    #[test]
    fn test_select_rejects_garbage() {
        let mut round = Round::new(8);
        assert_eq!(
            round.select("1 two"),
            Err(SelectionError::NotANumber("two".to_string()))
        );
    }

    #[test]
    fn test_select_rejects_duplicate() {
        let mut round = Round::new(8);
        assert_eq!(round.select("2 2"), Err(SelectionError::Duplicate(CoinId::new(1))));
        assert!(round.is_available(CoinId::new(1)));
    }

    #[test]
    fn test_select_rejects_coin_on_other_pan() {
        let mut round = Round::new(8);
        round.select("1 2 3").unwrap();

        assert_eq!(
            round.select("3 4 5"),
            Err(SelectionError::AlreadyPlaced(CoinId::new(2)))
        );
        // The rejected line placed nothing.
        assert!(round.is_available(CoinId::new(3)));
        assert_eq!(round.select("4 5 6").unwrap().to_vec(), coins(&[3, 4, 5]));
    }

    #[test]
    fn test_is_yes() {
        for yes in ["y", "Y", "yes", " YES ", "Yes"] {
            assert!(is_yes(yes), "{yes:?}");
        }
        for no in ["n", "no", "", "yep", "y y"] {
            assert!(!is_yes(no), "{no:?}");
        }
    }

    #[test]
    fn test_parse_guess() {
        assert_eq!(parse_guess("4", 8), Ok(CoinId::new(3)));
        assert_eq!(parse_guess(" 8 ", 8), Ok(CoinId::new(7)));
        assert_eq!(parse_guess("9", 8), Err(GuessError::OutOfRange { guess: 9, coin_count: 8 }));
        assert_eq!(parse_guess("0", 8), Err(GuessError::OutOfRange { guess: 0, coin_count: 8 }));
        assert_eq!(parse_guess("four", 8), Err(GuessError::NotANumber("four".to_string())));
    }
}
