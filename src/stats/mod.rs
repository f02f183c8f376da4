//! Final standings and session statistics
//!
//! This module provides:
//! - Ranking of finished players with tie detection
//! - A match result record (JSON via serde) for finished games
//! - Per-player statistics aggregated over many games

use crate::app::game::Game;
use crate::app::player::Player;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One player's final position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub total_score: u32,
}

/// Who won
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "players", rename_all = "snake_case")]
pub enum Outcome {
    /// A single player holds the strict maximum
    Winner(Standing),
    /// Every player sharing the maximum score
    Tie(Vec<Standing>),
}

/// Standings sorted by total score, highest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    pub standings: Vec<Standing>,
    pub outcome: Outcome,
}

impl Ranking {
    /// Names of the winning player(s)
    pub fn winner_names(&self) -> Vec<&str> {
        match &self.outcome {
            Outcome::Winner(standing) => vec![standing.name.as_str()],
            Outcome::Tie(standings) => standings.iter().map(|s| s.name.as_str()).collect(),
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self.outcome, Outcome::Tie(_))
    }

    /// Results line in the style of the end-of-game screen
    pub fn message(&self) -> String {
        match &self.outcome {
            Outcome::Winner(s) => format!("{} wins with {} points!", s.name, s.total_score),
            Outcome::Tie(tied) => {
                let names: Vec<&str> = tied.iter().map(|s| s.name.as_str()).collect();
                let points = tied.first().map(|s| s.total_score).unwrap_or(0);
                format!("It's a tie! {} win with {} points!", names.join(" and "), points)
            }
        }
    }
}

/// Rank players by total score. Players with equal scores keep their
/// input order. Returns None for an empty list.
pub fn rank_winners<'a, I>(players: I) -> Option<Ranking>
where
    I: IntoIterator<Item = &'a Player>,
{
    let mut standings: Vec<Standing> = players
        .into_iter()
        .map(|p| Standing {
            name: p.name.clone(),
            total_score: p.total_score,
        })
        .collect();
    // stable sort keeps roster order among equals
    standings.sort_by(|a, b| b.total_score.cmp(&a.total_score));

    let top = standings.first()?.total_score;
    let tied: Vec<Standing> = standings
        .iter()
        .take_while(|s| s.total_score == top)
        .cloned()
        .collect();

    let outcome = if tied.len() > 1 {
        Outcome::Tie(tied)
    } else {
        Outcome::Winner(standings[0].clone())
    };

    Some(Ranking { standings, outcome })
}

/// Record of one finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Sequence number of the game within a session
    pub match_id: u64,
    pub ranking: Ranking,
    /// Roster order
    pub players: Vec<PlayerLine>,
    pub turns: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLine {
    pub name: String,
    pub total_score: u32,
    pub turns_taken: u32,
    pub farkles: u32,
    pub best_turn: u32,
}

impl From<&Player> for PlayerLine {
    fn from(player: &Player) -> Self {
        PlayerLine {
            name: player.name.clone(),
            total_score: player.total_score,
            turns_taken: player.turns_taken,
            farkles: player.farkles,
            best_turn: player.best_turn,
        }
    }
}

impl MatchResult {
    /// Record a finished game. None while the game is still running.
    pub fn from_game(match_id: u64, game: &Game) -> Option<Self> {
        Some(MatchResult {
            match_id,
            ranking: game.winner_ranking()?,
            players: game.players().iter().map(PlayerLine::from).collect(),
            turns: game.turns_played(),
        })
    }

    /// Parse a match result from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Statistics for one player across a session of games
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub name: String,
    pub games_played: u32,
    /// Outright wins
    pub wins: u32,
    /// Shared first places
    pub ties: u32,
    pub total_points: u64,
    pub best_game: u32,
    pub best_turn: u32,
    pub turns: u32,
    pub farkles: u32,
}

impl PlayerStats {
    pub fn new(name: String) -> Self {
        PlayerStats {
            name,
            ..Default::default()
        }
    }

    /// Average final score per game
    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_points as f64 / self.games_played as f64
        }
    }

    /// Share of turns lost to a bust
    pub fn farkle_rate(&self) -> f64 {
        if self.turns == 0 {
            0.0
        } else {
            self.farkles as f64 / self.turns as f64
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.wins as f64 / self.games_played as f64
        }
    }
}

/// Aggregates match results for every player seen
#[derive(Debug, Default)]
pub struct StatsTracker {
    stats: HashMap<String, PlayerStats>,
    games: u32,
}

impl StatsTracker {
    pub fn new() -> Self {
        StatsTracker::default()
    }

    /// Get stats for a player (creates default if not exists)
    pub fn get_or_create(&mut self, name: &str) -> &mut PlayerStats {
        self.stats
            .entry(name.to_string())
            .or_insert_with(|| PlayerStats::new(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&PlayerStats> {
        self.stats.get(name)
    }

    pub fn games(&self) -> u32 {
        self.games
    }

    /// Fold a finished game into the running totals.
    ///
    /// Players are identified by name. Seats sharing a name count as one
    /// player for the match: one game played, the best seat's score, and
    /// the turns and farkles of every seat.
    pub fn process_match(&mut self, result: &MatchResult) {
        self.games += 1;

        let mut seen: HashSet<&str> = HashSet::new();
        for line in &result.players {
            let first_seat = seen.insert(line.name.as_str());
            let best_seat = result
                .players
                .iter()
                .filter(|l| l.name == line.name)
                .map(|l| l.total_score)
                .max()
                .unwrap_or(line.total_score);

            let stats = self.get_or_create(&line.name);
            if first_seat {
                stats.games_played += 1;
                stats.total_points += u64::from(best_seat);
                stats.best_game = stats.best_game.max(best_seat);
            }
            stats.best_turn = stats.best_turn.max(line.best_turn);
            stats.turns += line.turns_taken;
            stats.farkles += line.farkles;
        }

        let mut winners: Vec<&str> = result.ranking.winner_names();
        winners.sort_unstable();
        winners.dedup();
        match winners.as_slice() {
            [sole] => self.get_or_create(sole).wins += 1,
            tied => {
                for name in tied {
                    self.get_or_create(name).ties += 1;
                }
            }
        }
    }

    /// Stats for every player, most wins first
    pub fn leaderboard(&self) -> Vec<&PlayerStats> {
        let mut board: Vec<&PlayerStats> = self.stats.values().collect();
        board.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.name.cmp(&b.name)));
        board
    }
}
