//! Property tests for the weighing rules and the turn budget.

use proptest::prelude::*;

use counterfeit_coin::core::join_labels;
use counterfeit_coin::{
    render, resolve, turn_budget, CoinId, Counterfeit, Deviation, Mode, Outcome, Round, ScaleTemplate, Weighing,
};

const MAX_COINS: usize = 40;

/// A coin count, a counterfeit, and two disjoint pans drawn from those coins.
fn puzzle_and_weighing() -> impl Strategy<Value = (usize, Counterfeit, Weighing)> {
    (1..=MAX_COINS).prop_flat_map(|coins| {
        (
            Just(coins),
            0..coins as u32,
            any::<bool>(),
            proptest::collection::vec(0..3u8, coins),
        )
            .prop_map(|(coins, odd, heavier, sides)| {
                let deviation = if heavier { Deviation::Heavier } else { Deviation::Lighter };
                let mut weighing = Weighing::default();
                for (index, side) in sides.into_iter().enumerate() {
                    match side {
                        1 => weighing.left.push(CoinId::new(index as u32)),
                        2 => weighing.right.push(CoinId::new(index as u32)),
                        _ => {}
                    }
                }
                (coins, Counterfeit::new(CoinId::new(odd), deviation), weighing)
            })
    })
}

fn mirror(weighing: &Weighing) -> Weighing {
    Weighing::new(weighing.right.clone(), weighing.left.clone())
}

/// Trim the fuller pan so both hold the same number of coins.
fn equalize(mut weighing: Weighing) -> Weighing {
    let len = weighing.left.len().min(weighing.right.len());
    weighing.left.truncate(len);
    weighing.right.truncate(len);
    weighing
}

fn flip(outcome: Outcome) -> Outcome {
    match outcome {
        Outcome::Balanced => Outcome::Balanced,
        Outcome::LeftHeavy => Outcome::RightHeavy,
        Outcome::RightHeavy => Outcome::LeftHeavy,
    }
}

proptest! {
    #[test]
    fn prop_fuller_pan_always_wins((_, counterfeit, weighing) in puzzle_and_weighing()) {
        let outcome = resolve(&counterfeit, &weighing);
        if weighing.left.len() > weighing.right.len() {
            prop_assert_eq!(outcome, Outcome::LeftHeavy);
        } else if weighing.left.len() < weighing.right.len() {
            prop_assert_eq!(outcome, Outcome::RightHeavy);
        }
    }

    #[test]
    fn prop_equal_pans_follow_counterfeit((_, counterfeit, weighing) in puzzle_and_weighing()) {
        let weighing = equalize(weighing);

        let outcome = resolve(&counterfeit, &weighing);
        let on_scale = weighing.left.contains(&counterfeit.coin) || weighing.right.contains(&counterfeit.coin);
        prop_assert_eq!(outcome == Outcome::Balanced, !on_scale);
    }

    #[test]
    fn prop_mirrored_weighing_mirrors_outcome((_, counterfeit, weighing) in puzzle_and_weighing()) {
        prop_assert_eq!(
            resolve(&counterfeit, &mirror(&weighing)),
            flip(resolve(&counterfeit, &weighing))
        );
    }

    #[test]
    fn prop_opposite_deviation_flips_tipped_outcome((_, counterfeit, weighing) in puzzle_and_weighing()) {
        let weighing = equalize(weighing);

        let opposite = Counterfeit::new(
            counterfeit.coin,
            match counterfeit.deviation {
                Deviation::Heavier => Deviation::Lighter,
                Deviation::Lighter => Deviation::Heavier,
            },
        );
        prop_assert_eq!(resolve(&opposite, &weighing), flip(resolve(&counterfeit, &weighing)));
    }

    #[test]
    fn prop_diagram_rows_share_left_padding((_, counterfeit, weighing) in puzzle_and_weighing()) {
        let outcome = resolve(&counterfeit, &weighing);
        let template = ScaleTemplate::for_outcome(outcome);
        let lines = render(outcome, &weighing);

        prop_assert_eq!(lines.len(), template.rows.len());
        let left = format!(" {} ", join_labels(&weighing.left));
        prop_assert!(lines[template.left_label_row].starts_with(&left));
        let width = left.len();
        for (i, line) in lines.iter().enumerate() {
            if i != template.left_label_row {
                prop_assert!(line[..width].chars().all(|c| c == ' '));
                prop_assert!(line[width..].starts_with(template.rows[i]));
            }
        }
    }

    #[test]
    fn prop_selected_pans_are_disjoint(coins in 1..=MAX_COINS, left in "[0-9 ]{0,20}", right in "[0-9 ]{0,20}") {
        let mut round = Round::new(coins);
        if let (Ok(l), Ok(r)) = (round.select(&left), round.select(&right)) {
            prop_assert!(l.iter().all(|coin| !r.contains(coin)));
            prop_assert!(l.iter().chain(r.iter()).all(|coin| coin.index() < coins));
        }
    }

    #[test]
    fn prop_budget_is_minimal(coins in 1usize..100_000) {
        for mode in [Mode::Known, Mode::Unknown] {
            let budget = turn_budget(coins, mode);
            let outcomes = match mode {
                Mode::Known => coins as u64,
                Mode::Unknown => 2 * coins as u64 + 1,
            };
            prop_assert!(budget >= 1);
            prop_assert!(3u64.pow(budget) >= outcomes);
            if budget > 1 {
                prop_assert!(3u64.pow(budget - 1) < outcomes);
            }
        }
    }
}
