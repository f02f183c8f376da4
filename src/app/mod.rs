//! Players, turns, games and the automated actor

pub mod autoplay;
pub mod challenge;
pub mod game;
pub mod overlord;
pub mod player;
pub mod turn;

pub use autoplay::{play_game, play_turn, TurnReport, DEFAULT_TURN_CAP};
pub use challenge::{Challenge, ChallengeStatus, Difficulty};
pub use game::{EndTurnWarning, Game, TurnEnd};
pub use overlord::{should_continue, TurnSnapshot};
pub use player::{BankResult, Player};
pub use turn::{LockOutcome, RollOutcome, Turn};
