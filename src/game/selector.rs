//! Which dice of a roll may be set aside as keepers

use super::scoring::is_bonus_shape;
use super::table::scores;
use super::{tally, Die, Face};

/// Faces whose groups score at their count in `faces`.
fn scoring_faces(faces: &[Face]) -> Vec<Face> {
    tally(faces)
        .into_iter()
        .filter(|&(face, count)| scores(face, count))
        .map(|(face, _)| face)
        .collect()
}

/// For each die in `faces`, whether it may be kept.
fn keep_mask(faces: &[Face]) -> Vec<bool> {
    if is_bonus_shape(faces) {
        return vec![true; faces.len()];
    }
    let keep = scoring_faces(faces);
    faces.iter().map(|f| keep.contains(f)).collect()
}

/// The largest legally scorable subset of a roll, in roll order.
pub fn choose(available: &[Die]) -> Vec<Die> {
    let faces: Vec<Face> = available.iter().map(|d| d.face).collect();
    available
        .iter()
        .zip(keep_mask(&faces))
        .filter_map(|(die, keep)| keep.then_some(*die))
        .collect()
}

/// Same as [`choose`] but on bare faces.
pub fn choosable(available: &[Face]) -> Vec<Face> {
    available
        .iter()
        .zip(keep_mask(available))
        .filter_map(|(face, keep)| keep.then_some(*face))
        .collect()
}

/// False means the roll is a farkle.
pub fn has_scoring_dice(available: &[Face]) -> bool {
    !choosable(available).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{face_values, faces_from, Roll};

    fn choosable_of(values: &[u8]) -> Vec<u8> {
        face_values(&choosable(&faces_from(values).unwrap()))
    }

    #[test]
    fn test_whole_roll_for_combos() {
        assert_eq!(choosable_of(&[6, 2, 4, 1, 3, 5]), vec![6, 2, 4, 1, 3, 5]);
        assert_eq!(choosable_of(&[2, 3, 2, 4, 3, 4]), vec![2, 3, 2, 4, 3, 4]);
    }

    #[test]
    fn test_singles_and_triples() {
        assert_eq!(choosable_of(&[1, 3, 5, 4, 4, 2]), vec![1, 5]);
        assert_eq!(choosable_of(&[3, 3, 3, 4, 4, 6]), vec![3, 3, 3]);
        assert_eq!(choosable_of(&[2, 5, 2, 2, 6]), vec![2, 5, 2, 2]);
    }

    #[test]
    fn test_pairs_of_low_faces_excluded() {
        assert_eq!(choosable_of(&[4, 4, 1]), vec![1]);
        assert_eq!(choosable_of(&[3]), Vec::<u8>::new());
    }

    #[test]
    fn test_farkle_roll() {
        let roll = faces_from(&[2, 3, 4, 6, 6, 2]).unwrap();
        assert!(!has_scoring_dice(&roll));
        assert!(has_scoring_dice(&faces_from(&[2, 5]).unwrap()));
        assert!(!has_scoring_dice(&[]));
    }

    #[test]
    fn test_choose_keeps_slots() {
        let roll = Roll::from_faces(&faces_from(&[4, 1, 6, 5, 2, 2]).unwrap());
        let chosen = choose(roll.dice());
        let slots: Vec<usize> = chosen.iter().map(|d| d.slot).collect();
        assert_eq!(slots, vec![1, 3]);
    }

    #[test]
    fn test_choose_whole_straight() {
        let roll = Roll::from_faces(&faces_from(&[3, 6, 1, 5, 2, 4]).unwrap());
        let slots: Vec<usize> = choose(roll.dice()).iter().map(|d| d.slot).collect();
        assert_eq!(slots, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_choose_matches_choosable() {
        let roll = Roll::from_faces(&faces_from(&[5, 5, 5, 1, 3, 3]).unwrap());
        let chosen: Vec<Face> = choose(roll.dice()).iter().map(|d| d.face).collect();
        assert_eq!(chosen, choosable(&roll.faces()));
    }
}
