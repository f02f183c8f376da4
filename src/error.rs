//! Errors for caller contract violations
//!
//! Game-state conditions (busts, non-scoring lines, discarded rounds) are
//! reported as data by the engine. Only misuse of the API ends up here.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A die face outside 1..=6
    #[error("invalid die face {0} (expected 1-6)")]
    InvalidFace(u8),
    /// A game needs at least one player
    #[error("a game needs at least one player")]
    NoPlayers,
    /// Rules that cannot produce a playable game
    #[error("invalid rules: {reason}")]
    InvalidRules { reason: String },
    /// The game has already finished
    #[error("game is over")]
    GameOver,
    /// Staging or locking in before the dice were rolled
    #[error("no dice have been rolled since the last lock-in")]
    NoRoll,
    /// Rolling again without locking in the keepers first
    #[error("dice already rolled; lock in keepers before rolling again")]
    AlreadyRolled,
    /// Roll size does not match the dice left in the pool
    #[error("expected a roll of {expected} dice, got {got}")]
    WrongDiceCount { expected: usize, got: usize },
    /// The current turn has already ended
    #[error("turn is over; advance to the next player")]
    TurnOver,
    /// More dice staged than remain in the pool
    #[error("staged {staged} dice but only {available} are in play")]
    TooManyDice { staged: usize, available: usize },
    /// Staged a face the current roll does not have (or not that many)
    #[error("staged a {0} that is not in the roll")]
    NotInRoll(u8),
    /// A human player's turn handed to the automated actor
    #[error("{0} is not a computer player")]
    NotComputer(String),
    /// An automated game ran past its turn cap
    #[error("game did not finish within {0} turns")]
    TurnLimitExceeded(u32),
}
