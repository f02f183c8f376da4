//! The game aggregate: roster, turn rotation, and the active turn
//!
//! Turn order is a FIFO rotation fixed at creation. Once any player still
//! in the rotation reaches the win threshold, each player is moved to the
//! finished list as their turn ends instead of going back in the queue, so
//! everyone else gets exactly one more turn. The game is over when the
//! rotation runs dry.

use super::overlord::TurnSnapshot;
use super::player::Player;
use super::turn::{LockOutcome, RollOutcome, Turn};
use crate::config::Rules;
use crate::error::{Error, Result};
use crate::game::scoring::{validate, LineStatus};
use crate::game::selector::choosable;
use crate::game::Face;
use crate::stats::{rank_winners, Ranking};
use std::collections::VecDeque;
use tracing::{debug, info};

/// Reasons a player might not want to end the turn yet. Advisory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndTurnWarning {
    /// Not on the board yet and this round would be discarded
    BelowQualifying { needed: u32 },
    /// Scoring dice in the roll were left unstaged
    ScoringDiceLeft { count: usize },
    /// Staged dice that score nothing; ending now busts the turn
    NonScoringKept { faces: Vec<Face> },
}

impl EndTurnWarning {
    pub fn message(&self) -> String {
        match self {
            EndTurnWarning::BelowQualifying { needed } => {
                format!("Not on the board yet; {} more points needed to bank", needed)
            }
            EndTurnWarning::ScoringDiceLeft { count } => {
                format!("{} scoring dice still on the table", count)
            }
            EndTurnWarning::NonScoringKept { faces } => {
                let faces: Vec<String> = faces.iter().map(|f| f.to_string()).collect();
                format!("Non-scoring dice kept: {}", faces.join(", "))
            }
        }
    }
}

/// What ending a turn did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnEnd {
    pub player: String,
    pub outcome: LockOutcome,
    /// Next player up, or None if the game is over
    pub next: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Game {
    players: Vec<Player>,
    /// Indices into `players`; the current player sits at the back
    rotation: VecDeque<usize>,
    /// Players whose final turn is done, in finishing order
    finished: Vec<usize>,
    current: usize,
    turn: Turn,
    rules: Rules,
    turns_played: u32,
    over: bool,
}

impl Game {
    /// Create a game with one human player per name, in turn order.
    pub fn new<I, S>(names: I, rules: Rules) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_players(names.into_iter().map(Player::new).collect(), rules)
    }

    /// Create a game from prepared players (e.g. computer players).
    pub fn with_players(players: Vec<Player>, rules: Rules) -> Result<Self> {
        rules.validate()?;
        if players.is_empty() {
            return Err(Error::NoPlayers);
        }

        let mut rotation: VecDeque<usize> = (0..players.len()).collect();
        // first player is up and goes straight to the back
        rotation.rotate_left(1);

        info!(
            players = players.len(),
            win_threshold = rules.win_threshold,
            "new game"
        );

        Ok(Self {
            players,
            rotation,
            finished: Vec::new(),
            current: 0,
            turn: Turn::new(),
            rules,
            turns_played: 0,
            over: false,
        })
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// All players in roster order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Whether someone has reached the win threshold
    pub fn is_final_round(&self) -> bool {
        self.over || !self.finished.is_empty()
    }

    /// Players who have finished, in finishing order
    pub fn finished_players(&self) -> impl Iterator<Item = &Player> {
        self.finished.iter().map(|&i| &self.players[i])
    }

    /// Best total among finished players
    pub fn leader_score(&self) -> Option<u32> {
        self.finished_players().map(|p| p.total_score).max()
    }

    /// Final standings, once the game is over
    pub fn winner_ranking(&self) -> Option<Ranking> {
        if !self.over {
            return None;
        }
        rank_winners(self.finished_players())
    }

    /// Dice to throw for the next roll
    pub fn dice_to_roll(&self) -> usize {
        self.turn.dice_to_roll()
    }

    fn ensure_active(&self) -> Result<()> {
        if self.over {
            Err(Error::GameOver)
        } else {
            Ok(())
        }
    }

    /// Record the faces the driver rolled for the current player.
    pub fn record_roll(&mut self, faces: &[Face]) -> Result<RollOutcome> {
        self.ensure_active()?;
        let player = &mut self.players[self.current];
        let outcome = self.turn.record_roll(player, faces)?;

        match &outcome {
            RollOutcome::Scoring { keepers } => {
                debug!(player = %player.name, ?faces, keepers = keepers.len(), "roll");
            }
            RollOutcome::Farkle { lost } => {
                info!(player = %player.name, ?faces, lost, "farkle");
            }
        }
        Ok(outcome)
    }

    /// Stage keepers from the current roll.
    pub fn stage(&mut self, selection: &[Face]) -> Result<LineStatus> {
        self.ensure_active()?;
        let line = self.turn.stage(selection)?;
        debug!(
            player = %self.players[self.current].name,
            ?selection,
            basket = self.turn.basket_score(),
            ?line,
            "stage"
        );
        Ok(line)
    }

    /// Lock in the staged keepers and get ready to roll the rest.
    pub fn roll_again(&mut self) -> Result<LockOutcome> {
        self.ensure_active()?;
        let player = &mut self.players[self.current];
        let outcome = self.turn.lock_in(player, false, self.rules.qualifying_score)?;

        match outcome {
            LockOutcome::Continue { hot_dice: true, .. } => {
                info!(player = %player.name, round = player.round_score, "hot dice");
            }
            LockOutcome::Bust { lost } => {
                info!(player = %player.name, lost, "bust on non-scoring keepers");
            }
            _ => {}
        }
        Ok(outcome)
    }

    /// End the current player's turn, banking the round if it qualifies.
    pub fn commit_turn(&mut self) -> Result<LockOutcome> {
        self.ensure_active()?;
        let player = &mut self.players[self.current];
        let outcome = self.turn.lock_in(player, true, self.rules.qualifying_score)?;
        self.turns_played += 1;

        match outcome {
            LockOutcome::Banked { points } => {
                info!(player = %player.name, points, total = player.total_score, "banked");
            }
            LockOutcome::Discarded { points } => {
                info!(player = %player.name, points, "below qualifying score, discarded");
            }
            LockOutcome::Bust { lost } => {
                debug!(player = %player.name, lost, "turn ended in a bust");
            }
            LockOutcome::Continue { .. } => {}
        }
        Ok(outcome)
    }

    /// Move on to the next player. Returns the new current player, or None
    /// once the game is over. An uncommitted round score is dropped.
    pub fn advance_player(&mut self) -> Option<&Player> {
        if self.over {
            return None;
        }

        if !self.turn.is_ended() {
            let player = &mut self.players[self.current];
            if player.round_score > 0 {
                debug!(player = %player.name, dropped = player.round_score, "turn abandoned");
            }
            player.round_score = 0;
        }
        self.turn = Turn::new();

        let threshold = self.rules.win_threshold;
        let reached = !self.finished.is_empty()
            || self
                .rotation
                .iter()
                .any(|&i| self.players[i].total_score >= threshold);

        if reached {
            if self.finished.is_empty() {
                info!(player = %self.players[self.current].name, "final round");
            }
            // current player leaves the rotation for good
            self.rotation.pop_back();
            self.finished.push(self.current);
        }

        match self.rotation.pop_front() {
            Some(next) => {
                self.current = next;
                self.rotation.push_back(next);
                Some(&self.players[self.current])
            }
            None => {
                self.over = true;
                if let Some(ranking) = self.winner_ranking() {
                    info!(result = %ranking.message(), "game over");
                }
                None
            }
        }
    }

    /// Commit the turn and advance to the next player.
    pub fn end_turn(&mut self) -> Result<TurnEnd> {
        let outcome = self.commit_turn()?;
        let player = self.players[self.current].name.clone();
        let next = self.advance_player().map(|p| p.name.clone());
        Ok(TurnEnd {
            player,
            outcome,
            next,
        })
    }

    /// Check for reasons to reconsider ending the turn. `roll` is the
    /// current roll, not counting dice locked in earlier.
    pub fn end_turn_warning(&self, roll: &[Face]) -> Option<EndTurnWarning> {
        if self.over || self.turn.is_ended() || self.turn.is_busted() {
            return None;
        }
        let player = self.current_player();
        let turn = &self.turn;

        if turn.line().is_valid() {
            let at_stake = player.round_score + turn.basket_score();
            if !player.on_the_board() && at_stake < self.rules.qualifying_score {
                return Some(EndTurnWarning::BelowQualifying {
                    needed: self.rules.qualifying_score - at_stake,
                });
            }
            if turn.is_awaiting_roll() {
                return None;
            }
            let left = choosable(roll).len().saturating_sub(turn.staged().len());
            if left > 0 {
                return Some(EndTurnWarning::ScoringDiceLeft { count: left });
            }
            return None;
        }

        let faces = validate(turn.staged());
        if faces.is_empty() {
            None
        } else {
            Some(EndTurnWarning::NonScoringKept { faces })
        }
    }

    /// Inputs for the automated actor's roll-or-stop decision
    pub fn snapshot(&self) -> TurnSnapshot {
        let player = self.current_player();
        TurnSnapshot {
            total_score: player.total_score,
            round_score: player.round_score,
            basket_score: self.turn.basket_score(),
            kept: self.turn.kept(),
            leader_score: self.leader_score(),
            win_threshold: self.rules.win_threshold,
            qualifying_score: self.rules.qualifying_score,
        }
    }
}
