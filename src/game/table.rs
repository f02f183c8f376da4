//! Point values for N dice showing the same face

use super::Face;

/// Six of any face
pub const SIX_OF_A_KIND: u32 = 5_000;

/// `SCORING_TABLE[face - 1][count - 1]`: points for exactly `count` dice
/// showing `face`. Four and five of a kind double the triple each time.
const SCORING_TABLE: [[u32; 6]; 6] = [
    [100, 200, 1_000, 2_000, 4_000, SIX_OF_A_KIND],
    [0, 0, 200, 400, 800, SIX_OF_A_KIND],
    [0, 0, 300, 600, 1_200, SIX_OF_A_KIND],
    [0, 0, 400, 800, 1_600, SIX_OF_A_KIND],
    [50, 100, 500, 1_000, 2_000, SIX_OF_A_KIND],
    [0, 0, 600, 1_200, 2_400, SIX_OF_A_KIND],
];

/// Points for `count` dice all showing `face`. Zero for groups that never
/// score alone and for counts outside 1..=6.
pub fn value_of(face: Face, count: usize) -> u32 {
    match count {
        1..=6 => SCORING_TABLE[face.index()][count - 1],
        _ => 0,
    }
}

/// Whether a group of `count` dice showing `face` scores anything.
pub fn scores(face: Face, count: usize) -> bool {
    value_of(face, count) > 0
}
