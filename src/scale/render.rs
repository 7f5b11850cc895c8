//! ASCII scale diagrams.
//!
//! Each outcome has a fixed template. Rendering places the left pan's labels in
//! front of one row and the right pan's labels after another; every other row is
//! padded by the width of the left label so the beam stays aligned under it.
//!
//! ```text
//!       ┎─────◉─────┒
//!       ┆     ║     ┆
//!  1 2 ═╧═    ║    ═╧═ 3 4
//!              ║
//! ```

use super::resolver::{Outcome, Weighing};
use crate::core::join_labels;

/// Layout of one diagram: rows plus the rows that carry the pan labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleTemplate {
    /// Diagram rows, top to bottom.
    pub rows: &'static [&'static str],
    /// Row prefixed with the left pan's labels.
    pub left_label_row: usize,
    /// Row suffixed with the right pan's labels.
    pub right_label_row: usize,
}

/// Level beam; both pans on row 3.
pub const BALANCED: ScaleTemplate = ScaleTemplate {
    rows: &[
        "",
        " ┎─────◉─────┒",
        " ┆     ║     ┆",
        "═╧═    ║    ═╧═",
        "       ║   ",
        "       ║",
        "       ║",
        "       ║",
        "      ─╨─",
        "",
    ],
    left_label_row: 3,
    right_label_row: 3,
};

/// Beam tilted down to the left; left pan low, right pan high.
pub const LEFT_HEAVY: ScaleTemplate = ScaleTemplate {
    rows: &[
        "",
        "       ╱┊",
        "      ╱═╧═",
        "     ╱ ",
        "    ◉",
        "   ╱║",
        "  ╱ ║",
        " ╱  ║",
        " ┊  ║",
        "═╧═ ║",
        "    ║",
        "    ╨ ",
        "",
    ],
    left_label_row: 9,
    right_label_row: 2,
};

/// Beam tilted down to the right; left pan high, right pan low.
pub const RIGHT_HEAVY: ScaleTemplate = ScaleTemplate {
    rows: &[
        "",
        " ┊╲",
        "═╧═╲",
        "    ╲",
        "     ◉",
        "     ║╲",
        "     ║ ╲",
        "     ║  ╲",
        "     ║  ┊",
        "     ║ ═╧═",
        "     ║ ",
        "     ╨ ",
        "",
    ],
    left_label_row: 2,
    right_label_row: 9,
};

impl ScaleTemplate {
    /// Template for an outcome.
    #[must_use]
    pub fn for_outcome(outcome: Outcome) -> &'static ScaleTemplate {
        match outcome {
            Outcome::Balanced => &BALANCED,
            Outcome::LeftHeavy => &LEFT_HEAVY,
            Outcome::RightHeavy => &RIGHT_HEAVY,
        }
    }

    /// Fill the template with pan labels.
    #[must_use]
    pub fn fill(&self, left_labels: &str, right_labels: &str) -> Vec<String> {
        let left = format!(" {left_labels} ");
        let padding = " ".repeat(left.len());

        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let prefix = if i == self.left_label_row { &left } else { &padding };
                let mut line = format!("{prefix}{row}");
                if i == self.right_label_row {
                    line.push_str(&format!(" {right_labels} "));
                }
                line
            })
            .collect()
    }
}

/// Render the diagram for a weighing.
#[must_use]
pub fn render(outcome: Outcome, weighing: &Weighing) -> Vec<String> {
    ScaleTemplate::for_outcome(outcome).fill(&join_labels(&weighing.left), &join_labels(&weighing.right))
}
