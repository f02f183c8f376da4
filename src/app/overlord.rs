//! Roll-or-stop decisions for computer players

use crate::game::DICE_PER_TURN;

/// What the automated actor sees when deciding whether to roll again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSnapshot {
    pub total_score: u32,
    pub round_score: u32,
    pub basket_score: u32,
    /// Dice set aside this turn, locked plus staged
    pub kept: usize,
    /// Best total among players who already finished the final round
    pub leader_score: Option<u32>,
    pub win_threshold: u32,
    pub qualifying_score: u32,
}

impl TurnSnapshot {
    /// Score if the turn were banked right now
    pub fn projected(&self) -> u32 {
        self.total_score + self.round_score + self.basket_score
    }

    fn at_risk(&self) -> u32 {
        self.round_score + self.basket_score
    }
}

/// True to roll again, false to end the turn.
pub fn should_continue(state: &TurnSnapshot) -> bool {
    // hot dice, a free full reroll
    if state.kept >= DICE_PER_TURN {
        return true;
    }

    if let Some(leader) = state.leader_score {
        // final round: only stopping ahead of the leader is worth anything
        return leader >= state.projected();
    }

    if state.projected() >= state.win_threshold {
        return false;
    }

    // decent haul with three or fewer dice left
    if state.at_risk() >= state.qualifying_score && state.kept >= 3 {
        return false;
    }

    true
}
