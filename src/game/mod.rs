//! Game logic: dice, scoring table, combos, selection rules

pub mod combos;
pub mod scoring;
pub mod selector;
pub mod table;

use crate::error::{Error, Result};
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of dice in a full pool
pub const DICE_PER_TURN: usize = 6;

/// A die face, always in 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Face(u8);

impl Face {
    pub const ONE: Face = Face(1);
    pub const FIVE: Face = Face(5);

    /// Validate a raw value into a face.
    pub fn new(value: u8) -> Result<Self> {
        if (1..=6).contains(&value) {
            Ok(Face(value))
        } else {
            Err(Error::InvalidFace(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Index into per-face tables (0 for a one, 5 for a six)
    pub(crate) fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// All six faces in order.
    pub fn all() -> impl Iterator<Item = Face> {
        (1..=6).map(Face)
    }
}

impl TryFrom<u8> for Face {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Face::new(value)
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> u8 {
        face.0
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert raw values into faces, rejecting the first out-of-range value.
pub fn faces_from(values: &[u8]) -> Result<Vec<Face>> {
    values.iter().map(|&v| Face::new(v)).collect()
}

/// Raw values of a list of faces.
pub fn face_values(faces: &[Face]) -> Vec<u8> {
    faces.iter().map(|f| f.value()).collect()
}

/// Tally how many of each face appear, in order of first appearance.
pub(crate) fn tally(faces: &[Face]) -> Vec<(Face, usize)> {
    let mut counts: Vec<(Face, usize)> = Vec::with_capacity(DICE_PER_TURN);
    for &face in faces {
        match counts.iter_mut().find(|(f, _)| *f == face) {
            Some((_, count)) => *count += 1,
            None => counts.push((face, 1)),
        }
    }
    counts
}

/// One die of a roll. `slot` is its position in the roll so a front end
/// can map faces back to what it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    pub slot: usize,
    pub face: Face,
}

/// The dice thrown in one roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roll {
    dice: Vec<Die>,
}

impl Roll {
    /// Roll `count` dice (clamped to a full pool) with the thread RNG.
    pub fn generate(count: usize) -> Self {
        Self::generate_with_rng(count, &mut rand::rng())
    }

    /// Roll `count` dice using a specific RNG (for testing/seeding).
    pub fn generate_with_rng<R: Rng>(count: usize, rng: &mut R) -> Self {
        let dice = (0..count.min(DICE_PER_TURN))
            .map(|slot| Die {
                slot,
                face: Face(rng.random_range(1..=6)),
            })
            .collect();
        Self { dice }
    }

    /// Build a roll from known faces (replays and tests).
    pub fn from_faces(faces: &[Face]) -> Self {
        let dice = faces
            .iter()
            .enumerate()
            .map(|(slot, &face)| Die { slot, face })
            .collect();
        Self { dice }
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn faces(&self) -> Vec<Face> {
        self.dice.iter().map(|d| d.face).collect()
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Display the roll as a string of digits.
    pub fn as_string(&self) -> String {
        self.dice.iter().map(|d| d.face.to_string()).collect()
    }
}
