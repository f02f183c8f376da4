//! Ten Thousand - a dice game of pushing your luck
//!
//! Roll six dice, set aside the ones that score, and decide whether to
//! bank or roll the rest. The engine never rolls dice itself: callers pass
//! in faces (or an RNG for the automated actor) and get outcomes back.

pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod stats;

pub use app::{Challenge, Game, LockOutcome, Player, RollOutcome};
pub use config::{ChallengeConfig, Rules};
pub use error::{Error, Result};
pub use game::scoring::LineStatus;
pub use game::{Die, Face, Roll};

use game::{face_values, faces_from};

/// Start a game with the standard rules.
pub fn new_game<I, S>(names: I) -> Result<Game>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Game::new(names, Rules::default())
}

/// Score a selection of raw face values.
pub fn score(values: &[u8]) -> Result<u32> {
    Ok(game::scoring::score(&faces_from(values)?))
}

/// Faces in a selection that score nothing, in first-appearance order.
pub fn validate(values: &[u8]) -> Result<Vec<u8>> {
    Ok(face_values(&game::scoring::validate(&faces_from(values)?)))
}

/// Faces of a roll that may be kept, in roll order.
pub fn choosable(values: &[u8]) -> Result<Vec<u8>> {
    Ok(face_values(&game::selector::choosable(&faces_from(values)?)))
}
