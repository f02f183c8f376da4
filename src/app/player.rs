//! Player state: banked total, current round, turn bookkeeping

/// What happened to a round score when the turn was committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankResult {
    /// Added to the player's total
    Banked(u32),
    /// Player not on the board yet and the round fell short
    Discarded(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    /// Points banked across turns
    pub total_score: u32,
    /// Points accumulated this turn, not yet banked
    pub round_score: u32,
    /// Driven by the automated actor instead of a person
    pub is_computer: bool,
    /// No turn completed yet
    pub first_turn: bool,
    pub turns_taken: u32,
    pub farkles: u32,
    /// Best single banked turn
    pub best_turn: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_score: 0,
            round_score: 0,
            is_computer: false,
            first_turn: true,
            turns_taken: 0,
            farkles: 0,
            best_turn: 0,
        }
    }

    /// A player driven by the automated actor.
    pub fn computer(name: impl Into<String>) -> Self {
        Self {
            is_computer: true,
            ..Self::new(name)
        }
    }

    /// Whether the player has banked anything yet
    pub fn on_the_board(&self) -> bool {
        self.total_score > 0
    }

    /// Move the round score into the total if it qualifies. The round score
    /// is cleared either way.
    pub fn bank(&mut self, qualifying_score: u32) -> BankResult {
        let points = std::mem::take(&mut self.round_score);
        self.finish_turn();

        if !self.on_the_board() && points < qualifying_score {
            return BankResult::Discarded(points);
        }

        self.total_score += points;
        self.best_turn = self.best_turn.max(points);
        BankResult::Banked(points)
    }

    /// Throw away the round score after a bust. Returns what was lost.
    /// The turn is counted when it is committed, not here.
    pub fn bust(&mut self) -> u32 {
        self.farkles += 1;
        std::mem::take(&mut self.round_score)
    }

    /// Count a completed turn.
    pub(crate) fn finish_turn(&mut self) {
        self.first_turn = false;
        self.turns_taken += 1;
    }
}
