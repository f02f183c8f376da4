//! State of a single turn: the basket of staged keepers, the line status,
//! and the dice locked in on earlier rolls.
//!
//! A turn moves through four phases:
//! - awaiting a roll (turn start, or after locking in to roll again)
//! - rolled (keepers may be staged)
//! - busted (farkle or error lock-in, round score already lost)
//! - ended (committed)

use super::player::{BankResult, Player};
use crate::error::{Error, Result};
use crate::game::scoring::{line_status, score, LineStatus};
use crate::game::selector::choosable;
use crate::game::{Face, DICE_PER_TURN};

/// Result of recording a fresh roll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollOutcome {
    /// At least one die can be kept
    Scoring { keepers: Vec<Face> },
    /// Nothing scores; the round score is gone and the turn is over
    Farkle { lost: u32 },
}

/// Result of locking in the basket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOutcome {
    /// Basket added to the round; roll `dice_to_roll` dice next
    Continue { dice_to_roll: usize, hot_dice: bool },
    /// Turn committed and the round banked
    Banked { points: u32 },
    /// Turn committed but the round fell short of qualifying
    Discarded { points: u32 },
    /// Turn lost to a farkle or a non-scoring lock-in
    Bust { lost: u32 },
}

impl LockOutcome {
    /// Whether this outcome ends the turn
    pub fn ends_turn(&self) -> bool {
        !matches!(self, LockOutcome::Continue { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    AwaitingRoll,
    Rolled,
    Busted { lost: u32 },
    Ended,
}

/// First face in `selection` with no unused match left in `roll`.
fn missing_from(roll: &[Face], selection: &[Face]) -> Option<Face> {
    let mut pool = roll.to_vec();
    for &face in selection {
        match pool.iter().position(|&f| f == face) {
            Some(i) => {
                pool.swap_remove(i);
            }
            None => return Some(face),
        }
    }
    None
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    phase: Phase,
    /// Provisional value of the staged keepers
    basket_score: u32,
    line: LineStatus,
    /// Keepers staged from the current roll
    staged: Vec<Face>,
    /// Dice locked in on earlier rolls since the pool was last full
    locked: usize,
    /// Faces of the current roll
    roll: Vec<Face>,
    rolls: u32,
}

impl Default for Turn {
    fn default() -> Self {
        Self::new()
    }
}

impl Turn {
    /// A fresh turn: nothing staged and a valid (empty) line.
    pub fn new() -> Self {
        Self {
            phase: Phase::AwaitingRoll,
            basket_score: 0,
            line: LineStatus::Valid,
            staged: Vec::new(),
            locked: 0,
            roll: Vec::new(),
            rolls: 0,
        }
    }

    pub fn basket_score(&self) -> u32 {
        self.basket_score
    }

    pub fn line(&self) -> LineStatus {
        self.line
    }

    pub fn staged(&self) -> &[Face] {
        &self.staged
    }

    /// Dice set aside this turn, locked plus staged
    pub fn kept(&self) -> usize {
        self.locked + self.staged.len()
    }

    /// Faces of the current roll, empty while awaiting one
    pub fn roll(&self) -> &[Face] {
        &self.roll
    }

    pub fn rolls(&self) -> u32 {
        self.rolls
    }

    pub fn is_awaiting_roll(&self) -> bool {
        self.phase == Phase::AwaitingRoll
    }

    pub fn is_busted(&self) -> bool {
        matches!(self.phase, Phase::Busted { .. })
    }

    pub fn is_ended(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Size of the next roll. Back to a full pool after hot dice.
    pub fn dice_to_roll(&self) -> usize {
        DICE_PER_TURN - self.locked
    }

    fn ensure_live(&self) -> Result<()> {
        match self.phase {
            Phase::Busted { .. } | Phase::Ended => Err(Error::TurnOver),
            _ => Ok(()),
        }
    }

    /// Record a fresh roll. A roll with no keepers busts the turn, whatever
    /// the round score was.
    pub fn record_roll(&mut self, player: &mut Player, faces: &[Face]) -> Result<RollOutcome> {
        self.ensure_live()?;
        if self.phase == Phase::Rolled {
            return Err(Error::AlreadyRolled);
        }
        if faces.len() != self.dice_to_roll() {
            return Err(Error::WrongDiceCount {
                expected: self.dice_to_roll(),
                got: faces.len(),
            });
        }

        self.rolls += 1;
        self.roll = faces.to_vec();
        self.staged.clear();
        self.basket_score = 0;
        // nothing from the new roll is staged yet
        self.line = LineStatus::Error;

        let keepers = choosable(faces);
        if keepers.is_empty() {
            let lost = player.bust();
            self.phase = Phase::Busted { lost };
            return Ok(RollOutcome::Farkle { lost });
        }

        self.phase = Phase::Rolled;
        Ok(RollOutcome::Scoring { keepers })
    }

    /// Replace the staged keepers and recompute the basket and line.
    pub fn stage(&mut self, selection: &[Face]) -> Result<LineStatus> {
        self.ensure_live()?;
        if self.phase == Phase::AwaitingRoll {
            return Err(Error::NoRoll);
        }
        if selection.len() > self.roll.len() {
            return Err(Error::TooManyDice {
                staged: selection.len(),
                available: self.roll.len(),
            });
        }
        if let Some(face) = missing_from(&self.roll, selection) {
            return Err(Error::NotInRoll(face.value()));
        }

        self.staged = selection.to_vec();
        self.basket_score = score(selection);
        self.line = line_status(selection);
        Ok(self.line)
    }

    /// Lock in the basket, either to roll again or to end the turn.
    ///
    /// A valid line adds the basket to the round score. An error line busts
    /// the turn. When `commit_as_final` is set the round is then banked
    /// subject to `qualifying_score`.
    pub fn lock_in(
        &mut self,
        player: &mut Player,
        commit_as_final: bool,
        qualifying_score: u32,
    ) -> Result<LockOutcome> {
        match self.phase {
            Phase::Ended => return Err(Error::TurnOver),
            Phase::Busted { lost } => {
                if !commit_as_final {
                    return Err(Error::TurnOver);
                }
                player.finish_turn();
                self.phase = Phase::Ended;
                return Ok(LockOutcome::Bust { lost });
            }
            Phase::AwaitingRoll if !commit_as_final => return Err(Error::NoRoll),
            _ => {}
        }

        if !self.line.is_valid() {
            let lost = player.bust();
            self.phase = if commit_as_final {
                player.finish_turn();
                Phase::Ended
            } else {
                Phase::Busted { lost }
            };
            return Ok(LockOutcome::Bust { lost });
        }

        player.round_score += std::mem::take(&mut self.basket_score);
        self.locked += self.staged.len();
        self.staged.clear();

        if commit_as_final {
            self.phase = Phase::Ended;
            return Ok(match player.bank(qualifying_score) {
                BankResult::Banked(points) => LockOutcome::Banked { points },
                BankResult::Discarded(points) => LockOutcome::Discarded { points },
            });
        }

        let hot_dice = self.locked >= DICE_PER_TURN;
        if hot_dice {
            self.locked = 0;
        }
        self.roll.clear();
        self.phase = Phase::AwaitingRoll;
        Ok(LockOutcome::Continue {
            dice_to_roll: self.dice_to_roll(),
            hot_dice,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::faces_from;

    fn faces(values: &[u8]) -> Vec<Face> {
        faces_from(values).unwrap()
    }

    #[test]
    fn test_fresh_turn() {
        let turn = Turn::new();
        assert!(turn.line().is_valid());
        assert_eq!(turn.basket_score(), 0);
        assert_eq!(turn.dice_to_roll(), 6);
        assert!(turn.is_awaiting_roll());
    }

    #[test]
    fn test_stage_scores_basket() {
        let mut player = Player::new("Alice");
        let mut turn = Turn::new();
        turn.record_roll(&mut player, &faces(&[1, 5, 2, 3, 4, 4])).unwrap();
        assert_eq!(turn.line(), LineStatus::Error);

        assert_eq!(turn.stage(&faces(&[1, 5])).unwrap(), LineStatus::Valid);
        assert_eq!(turn.basket_score(), 150);

        assert_eq!(turn.stage(&faces(&[1, 2])).unwrap(), LineStatus::Error);
        assert_eq!(turn.basket_score(), 100);

        assert_eq!(turn.stage(&[]).unwrap(), LineStatus::Error);
        assert_eq!(turn.basket_score(), 0);
    }

    #[test]
    fn test_roll_again_accumulates_round() {
        let mut player = Player::new("Alice");
        let mut turn = Turn::new();
        turn.record_roll(&mut player, &faces(&[1, 1, 1, 2, 3, 4])).unwrap();
        turn.stage(&faces(&[1, 1, 1])).unwrap();

        let outcome = turn.lock_in(&mut player, false, 500).unwrap();
        assert_eq!(
            outcome,
            LockOutcome::Continue {
                dice_to_roll: 3,
                hot_dice: false
            }
        );
        assert_eq!(player.round_score, 1_000);
        assert_eq!(turn.basket_score(), 0);
        assert_eq!(turn.kept(), 3);
    }

    #[test]
    fn test_final_lock_in_banks() {
        let mut player = Player::new("Alice");
        let mut turn = Turn::new();
        turn.record_roll(&mut player, &faces(&[5, 5, 5, 2, 3, 4])).unwrap();
        turn.stage(&faces(&[5, 5, 5])).unwrap();

        let outcome = turn.lock_in(&mut player, true, 500).unwrap();
        assert_eq!(outcome, LockOutcome::Banked { points: 500 });
        assert_eq!(player.total_score, 500);
        assert_eq!(player.round_score, 0);
        assert!(turn.is_ended());
    }

    #[test]
    fn test_final_lock_in_below_qualifying_discards() {
        let mut player = Player::new("Alice");
        let mut turn = Turn::new();
        turn.record_roll(&mut player, &faces(&[4, 4, 4, 2, 3, 6])).unwrap();
        turn.stage(&faces(&[4, 4, 4])).unwrap();

        let outcome = turn.lock_in(&mut player, true, 500).unwrap();
        assert_eq!(outcome, LockOutcome::Discarded { points: 400 });
        assert_eq!(player.total_score, 0);
        assert_eq!(player.round_score, 0);
    }

    #[test]
    fn test_error_line_busts() {
        let mut player = Player::new("Alice");
        player.total_score = 2_000;
        player.round_score = 700;
        let mut turn = Turn::new();
        turn.record_roll(&mut player, &faces(&[2, 3, 4, 1, 6, 6])).unwrap();
        turn.stage(&faces(&[2, 3, 4])).unwrap();

        let outcome = turn.lock_in(&mut player, false, 500).unwrap();
        assert_eq!(outcome, LockOutcome::Bust { lost: 700 });
        assert_eq!(player.round_score, 0);
        assert_eq!(player.total_score, 2_000);
        assert!(turn.is_busted());

        // the turn can only be committed now
        assert_eq!(turn.stage(&faces(&[1])), Err(Error::TurnOver));
        assert_eq!(
            turn.lock_in(&mut player, true, 500),
            Ok(LockOutcome::Bust { lost: 700 })
        );
        assert_eq!(player.total_score, 2_000);
    }

    #[test]
    fn test_farkle_discards_even_above_qualifying() {
        let mut player = Player::new("Alice");
        let mut turn = Turn::new();
        turn.record_roll(&mut player, &faces(&[1, 1, 1, 2, 3, 4])).unwrap();
        turn.stage(&faces(&[1, 1, 1])).unwrap();
        turn.lock_in(&mut player, false, 500).unwrap();
        assert_eq!(player.round_score, 1_000);

        let outcome = turn.record_roll(&mut player, &faces(&[2, 3, 4])).unwrap();
        assert_eq!(outcome, RollOutcome::Farkle { lost: 1_000 });
        assert_eq!(player.round_score, 0);
        // not counted until committed
        assert_eq!(player.turns_taken, 0);

        let outcome = turn.lock_in(&mut player, true, 500).unwrap();
        assert_eq!(outcome, LockOutcome::Bust { lost: 1_000 });
        assert_eq!(player.total_score, 0);
        assert_eq!(player.farkles, 1);
        assert_eq!(player.turns_taken, 1);
    }

    #[test]
    fn test_hot_dice_resets_pool() {
        let mut player = Player::new("Alice");
        let mut turn = Turn::new();
        turn.record_roll(&mut player, &faces(&[1, 1, 1, 5, 2, 3])).unwrap();
        turn.stage(&faces(&[1, 1, 1, 5])).unwrap();
        turn.lock_in(&mut player, false, 500).unwrap();
        assert_eq!(turn.dice_to_roll(), 2);

        turn.record_roll(&mut player, &faces(&[5, 1])).unwrap();
        turn.stage(&faces(&[5, 1])).unwrap();
        let outcome = turn.lock_in(&mut player, false, 500).unwrap();
        assert_eq!(
            outcome,
            LockOutcome::Continue {
                dice_to_roll: 6,
                hot_dice: true
            }
        );
        assert_eq!(player.round_score, 1_200);
        assert_eq!(turn.kept(), 0);
    }

    #[test]
    fn test_roll_order_enforced() {
        let mut player = Player::new("Alice");
        let mut turn = Turn::new();
        assert_eq!(turn.stage(&faces(&[1])), Err(Error::NoRoll));
        assert_eq!(turn.lock_in(&mut player, false, 500), Err(Error::NoRoll));

        assert_eq!(
            turn.record_roll(&mut player, &faces(&[1, 2])),
            Err(Error::WrongDiceCount {
                expected: 6,
                got: 2
            })
        );

        turn.record_roll(&mut player, &faces(&[1, 2, 3, 4, 6, 6])).unwrap();
        assert_eq!(
            turn.record_roll(&mut player, &faces(&[1, 2, 3, 4, 6, 6])),
            Err(Error::AlreadyRolled)
        );
    }

    #[test]
    fn test_cannot_stage_more_than_rolled() {
        let mut player = Player::new("Alice");
        let mut turn = Turn::new();
        turn.record_roll(&mut player, &faces(&[1, 1, 1, 2, 3, 4])).unwrap();
        turn.stage(&faces(&[1, 1, 1])).unwrap();
        turn.lock_in(&mut player, false, 500).unwrap();
        turn.record_roll(&mut player, &faces(&[5, 2, 3])).unwrap();

        assert_eq!(
            turn.stage(&faces(&[5, 5, 5, 5])),
            Err(Error::TooManyDice {
                staged: 4,
                available: 3
            })
        );
    }

    #[test]
    fn test_commit_before_first_roll_banks_nothing() {
        let mut player = Player::new("Alice");
        player.total_score = 800;
        let mut turn = Turn::new();
        let outcome = turn.lock_in(&mut player, true, 500).unwrap();
        assert_eq!(outcome, LockOutcome::Banked { points: 0 });
        assert_eq!(player.total_score, 800);
        assert_eq!(turn.lock_in(&mut player, true, 500), Err(Error::TurnOver));
    }

    #[test]
    fn test_stage_only_rolled_faces() {
        let mut player = Player::new("Alice");
        let mut turn = Turn::new();
        turn.record_roll(&mut player, &faces(&[1, 2, 3, 4, 6, 6])).unwrap();

        assert_eq!(
            turn.stage(&faces(&[5, 5, 5, 5, 5, 5])),
            Err(Error::NotInRoll(5))
        );
        // a face rolled once cannot be kept twice
        assert_eq!(turn.stage(&faces(&[1, 1])), Err(Error::NotInRoll(1)));
        assert_eq!(turn.basket_score(), 0);
        assert_eq!(turn.stage(&faces(&[6, 1, 6])).unwrap(), LineStatus::Error);

        assert_eq!(
            turn.lock_in(&mut player, true, 500),
            Ok(LockOutcome::Bust { lost: 0 })
        );
        assert_eq!(player.total_score, 0);
    }

    #[test]
    fn test_error_line_commit_counts_one_turn() {
        let mut player = Player::new("Alice");
        let mut turn = Turn::new();
        turn.record_roll(&mut player, &faces(&[2, 3, 4, 1, 6, 6])).unwrap();
        turn.stage(&faces(&[2, 3])).unwrap();
        turn.lock_in(&mut player, true, 500).unwrap();
        assert_eq!(player.turns_taken, 1);
        assert_eq!(player.farkles, 1);
    }
}
