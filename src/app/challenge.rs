//! Solo challenge: reach a point goal within a turn limit

use super::autoplay::{self, TurnReport};
use super::game::Game;
use super::player::Player;
use super::turn::{LockOutcome, RollOutcome};
use crate::config::ChallengeConfig;
use crate::error::{Error, Result};
use crate::game::scoring::LineStatus;
use crate::game::Face;
use rand::Rng;
use std::fmt;
use tracing::info;

/// How hard a goal is, by the average points per turn it demands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    ReallyEasy,
    Easy,
    Medium,
    Hard,
    ReallyHard,
    /// Beyond what steady play can expect
    Possible,
}

impl Difficulty {
    pub fn rate(config: &ChallengeConfig) -> Self {
        match config.points_per_turn() {
            0..=125 => Difficulty::ReallyEasy,
            126..=175 => Difficulty::Easy,
            176..=250 => Difficulty::Medium,
            251..=500 => Difficulty::Hard,
            501..=750 => Difficulty::ReallyHard,
            _ => Difficulty::Possible,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::ReallyEasy => "Really Easy",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::ReallyHard => "Really Hard",
            Difficulty::Possible => "Possible",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a challenge stands after a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeStatus {
    InProgress { turns_left: u32 },
    /// Goal reached after `turns` turns
    Won { turns: u32 },
    /// Turn limit used up short of the goal
    OutOfTurns { score: u32 },
}

impl ChallengeStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, ChallengeStatus::InProgress { .. })
    }

    pub fn message(&self, config: &ChallengeConfig) -> String {
        match self {
            ChallengeStatus::InProgress { turns_left } => {
                format!("{} turns left to reach {} points", turns_left, config.point_goal)
            }
            ChallengeStatus::Won { turns } => format!(
                "You reached {} points in {} turns!",
                config.point_goal, turns
            ),
            ChallengeStatus::OutOfTurns { score } => {
                format!("You're out of turns and only got {} points.", score)
            }
        }
    }
}

/// A single-player game played against a goal and a turn limit
#[derive(Debug, Clone)]
pub struct Challenge {
    config: ChallengeConfig,
    game: Game,
}

impl Challenge {
    pub fn new(name: impl Into<String>, config: ChallengeConfig) -> Result<Self> {
        Self::with_player(Player::new(name), config)
    }

    pub fn with_player(player: Player, config: ChallengeConfig) -> Result<Self> {
        config.validate()?;
        let game = Game::with_players(vec![player], config.rules())?;
        info!(
            goal = config.point_goal,
            turns = config.turn_limit,
            difficulty = %Difficulty::rate(&config),
            "challenge started"
        );
        Ok(Self { config, game })
    }

    pub fn config(&self) -> &ChallengeConfig {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        Difficulty::rate(&self.config)
    }

    pub fn player(&self) -> &Player {
        &self.game.players()[0]
    }

    /// Standing based on committed turns only
    pub fn status(&self) -> ChallengeStatus {
        let player = self.player();
        if player.total_score >= self.config.point_goal {
            ChallengeStatus::Won {
                turns: player.turns_taken,
            }
        } else if player.turns_taken >= self.config.turn_limit {
            ChallengeStatus::OutOfTurns {
                score: player.total_score,
            }
        } else {
            ChallengeStatus::InProgress {
                turns_left: self.config.turn_limit - player.turns_taken,
            }
        }
    }

    fn ensure_active(&self) -> Result<()> {
        if self.status().is_finished() {
            Err(Error::GameOver)
        } else {
            Ok(())
        }
    }

    pub fn record_roll(&mut self, faces: &[Face]) -> Result<RollOutcome> {
        self.ensure_active()?;
        self.game.record_roll(faces)
    }

    pub fn stage(&mut self, selection: &[Face]) -> Result<LineStatus> {
        self.ensure_active()?;
        self.game.stage(selection)
    }

    pub fn roll_again(&mut self) -> Result<LockOutcome> {
        self.ensure_active()?;
        self.game.roll_again()
    }

    /// Commit the turn and report where the challenge stands.
    pub fn end_turn(&mut self) -> Result<ChallengeStatus> {
        self.ensure_active()?;
        self.game.end_turn()?;
        Ok(self.report())
    }

    /// Let the overlord play the next turn. The player must be a computer.
    pub fn play_turn<R: Rng>(&mut self, rng: &mut R) -> Result<(TurnReport, ChallengeStatus)> {
        self.ensure_active()?;
        let report = autoplay::play_turn(&mut self.game, rng)?;
        Ok((report, self.report()))
    }

    fn report(&self) -> ChallengeStatus {
        let status = self.status();
        if status.is_finished() {
            info!(result = %status.message(&self.config), "challenge over");
        }
        status
    }
}
