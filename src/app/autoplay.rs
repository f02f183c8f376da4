//! Drives whole turns and games with the overlord's decisions

use super::game::Game;
use super::overlord::should_continue;
use super::turn::{LockOutcome, RollOutcome};
use crate::error::{Error, Result};
use crate::game::Roll;
use crate::stats::Ranking;
use rand::Rng;
use tracing::{debug, warn};

/// Turn cap for [`play_game`] callers that have no better number.
pub const DEFAULT_TURN_CAP: u32 = 10_000;

/// Summary of one automated turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub player: String,
    /// Rolls thrown, including the last one
    pub rolls: u32,
    /// Every roll as digits, in order
    pub history: Vec<String>,
    pub outcome: LockOutcome,
    /// Player's total after the turn
    pub total_score: u32,
    /// Next player, or None if that was the last turn of the game
    pub next: Option<String>,
}

/// Play the current player's turn to the end and advance the rotation.
///
/// Every eligible die is kept after each roll; the overlord then decides
/// whether to roll the rest or bank. Only computer players are driven.
pub fn play_turn<R: Rng>(game: &mut Game, rng: &mut R) -> Result<TurnReport> {
    if game.is_over() {
        return Err(Error::GameOver);
    }
    let current = game.current_player();
    if !current.is_computer {
        return Err(Error::NotComputer(current.name.clone()));
    }

    let mut history = Vec::new();
    loop {
        let roll = Roll::generate_with_rng(game.dice_to_roll(), rng);
        history.push(roll.as_string());

        match game.record_roll(&roll.faces())? {
            RollOutcome::Farkle { .. } => break,
            RollOutcome::Scoring { keepers } => {
                game.stage(&keepers)?;
            }
        }

        let snapshot = game.snapshot();
        if !should_continue(&snapshot) {
            debug!(?snapshot, "overlord stops");
            break;
        }
        if game.roll_again()?.ends_turn() {
            break;
        }
    }

    let rolls = game.turn().rolls();
    let outcome = game.commit_turn()?;
    let player = game.current_player();
    let (name, total_score) = (player.name.clone(), player.total_score);
    let next = game.advance_player().map(|p| p.name.clone());

    Ok(TurnReport {
        player: name,
        rolls,
        history,
        outcome,
        total_score,
        next,
    })
}

/// Play turns until the game ends. Fails if it takes more than `max_turns`.
pub fn play_game<R: Rng>(game: &mut Game, rng: &mut R, max_turns: u32) -> Result<Ranking> {
    let mut turns = 0;
    while !game.is_over() {
        if turns >= max_turns {
            warn!(max_turns, "game hit the turn cap");
            return Err(Error::TurnLimitExceeded(max_turns));
        }
        play_turn(game, rng)?;
        turns += 1;
    }

    // an over game always has finished players
    game.winner_ranking().ok_or(Error::GameOver)
}
