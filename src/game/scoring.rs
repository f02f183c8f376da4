//! Scoring and validation of a selection of dice
//!
//! A selection is scored by:
//! - Summing the table value of every face group
//! - Lifting a straight or three pairs to the flat combo score when the
//!   table sum is lower
//!
//! Validation reports the faces that belong to no scoring group.

use super::combos::{is_combo, is_straight, is_three_pair, COMBO_SCORE};
use super::table::{scores, value_of};
use super::{tally, Face};

/// Whether everything staged is legally scoring as a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    /// Every staged die is part of a scoring group
    Valid,
    /// Nothing staged, or at least one staged die scores nothing
    Error,
}

impl LineStatus {
    /// Returns true if the line is valid
    pub fn is_valid(&self) -> bool {
        matches!(self, LineStatus::Valid)
    }

    /// Returns a short label for display
    pub fn message(&self) -> &'static str {
        match self {
            LineStatus::Valid => "All keepers score",
            LineStatus::Error => "Non-scoring dice kept",
        }
    }
}

fn table_sum(faces: &[Face]) -> u32 {
    tally(faces)
        .into_iter()
        .map(|(face, count)| value_of(face, count))
        .sum()
}

/// A straight, or three pairs the table alone values below the combo.
pub(crate) fn is_bonus_shape(faces: &[Face]) -> bool {
    is_straight(faces) || (is_three_pair(faces) && table_sum(faces) < COMBO_SCORE)
}

/// Points for a selection. Zero means nothing in it scores.
pub fn score(selection: &[Face]) -> u32 {
    let sum = table_sum(selection);
    if sum < COMBO_SCORE && is_combo(selection) {
        COMBO_SCORE
    } else {
        sum
    }
}

/// Distinct faces in the selection that are not part of any scoring
/// group, in order of first appearance. Empty when every die scores.
pub fn validate(selection: &[Face]) -> Vec<Face> {
    if is_bonus_shape(selection) {
        return Vec::new();
    }

    tally(selection)
        .into_iter()
        .filter(|&(face, count)| !scores(face, count))
        .map(|(face, _)| face)
        .collect()
}

/// Line status for a staged selection. An empty selection is never valid.
pub fn line_status(selection: &[Face]) -> LineStatus {
    if selection.is_empty() || !validate(selection).is_empty() {
        LineStatus::Error
    } else {
        LineStatus::Valid
    }
}
