//! Game rules and challenge settings

use crate::error::{Error, Result};

/// Default points needed to trigger the final round
pub const DEFAULT_WIN_THRESHOLD: u32 = 10_000;

/// Points a player must bank in one turn before getting on the board
pub const QUALIFYING_SCORE: u32 = 500;

/// Point goals offered for a solo challenge
pub const POINT_GOALS: [u32; 5] = [2_500, 5_000, 7_500, 10_000, 15_000];

/// Turn limits offered for a solo challenge
pub const TURN_LIMITS: [u32; 5] = [5, 10, 15, 20, 30];

/// Rules in force for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Total score that ends the game (everyone else gets one more turn)
    pub win_threshold: u32,
    /// Minimum round score to bank while a player's total is still zero
    pub qualifying_score: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            win_threshold: DEFAULT_WIN_THRESHOLD,
            qualifying_score: QUALIFYING_SCORE,
        }
    }
}

impl Rules {
    /// Rules with a custom win threshold and the standard qualifying score.
    pub fn with_win_threshold(win_threshold: u32) -> Self {
        Self {
            win_threshold,
            ..Self::default()
        }
    }

    /// Check the rules describe a game that can end.
    pub fn validate(&self) -> Result<()> {
        if self.win_threshold == 0 {
            return Err(Error::InvalidRules {
                reason: "win threshold must be positive".to_string(),
            });
        }
        if self.qualifying_score > self.win_threshold {
            return Err(Error::InvalidRules {
                reason: format!(
                    "qualifying score {} exceeds win threshold {}",
                    self.qualifying_score, self.win_threshold
                ),
            });
        }
        Ok(())
    }
}

/// Settings for a solo challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeConfig {
    pub point_goal: u32,
    pub turn_limit: u32,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            point_goal: DEFAULT_WIN_THRESHOLD,
            turn_limit: 20,
        }
    }
}

impl ChallengeConfig {
    /// Any positive turn limit; the goal must reach the qualifying score.
    pub fn validate(&self) -> Result<()> {
        if self.turn_limit == 0 {
            return Err(Error::InvalidRules {
                reason: "turn limit must be positive".to_string(),
            });
        }
        self.rules().validate()
    }

    /// Rules for the single-player game backing the challenge.
    pub fn rules(&self) -> Rules {
        Rules::with_win_threshold(self.point_goal)
    }

    /// Average points per turn needed to reach the goal
    pub fn points_per_turn(&self) -> u32 {
        self.point_goal / self.turn_limit.max(1)
    }
}
