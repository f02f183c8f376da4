//! Whole-roll combinations worth a flat bonus

use super::{Face, DICE_PER_TURN};

/// Points for a straight or three pairs
pub const COMBO_SCORE: u32 = 1_500;

fn sorted(faces: &[Face]) -> Vec<Face> {
    let mut sorted = faces.to_vec();
    sorted.sort_unstable();
    sorted
}

/// One of every face.
pub fn is_straight(faces: &[Face]) -> bool {
    faces.len() == DICE_PER_TURN && sorted(faces).into_iter().eq(Face::all())
}

/// Exactly three pairs of three different faces. Four of a kind plus a
/// pair, two triples and six of a kind are all rejected.
pub fn is_three_pair(faces: &[Face]) -> bool {
    if faces.len() != DICE_PER_TURN {
        return false;
    }
    let s = sorted(faces);
    s[0] == s[1] && s[2] == s[3] && s[4] == s[5] && s[0] != s[2] && s[2] != s[4] && s[0] != s[4]
}

/// Either whole-roll combination.
pub fn is_combo(faces: &[Face]) -> bool {
    is_straight(faces) || is_three_pair(faces)
}
