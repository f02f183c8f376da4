//! Ten Thousand - push your luck, bank your points
//!
//! Score dice from the command line or watch the overlord play.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tenthousand::app::{play_game, play_turn, Challenge, DEFAULT_TURN_CAP};
use tenthousand::config::{ChallengeConfig, Rules, DEFAULT_WIN_THRESHOLD};
use tenthousand::stats::{MatchResult, StatsTracker};
use tenthousand::{Game, Player};
use tracing::{debug, Level};

/// Name used for the second seat when only one player is given
const OPPONENT: &str = "Overlord";

#[derive(Parser, Debug)]
#[command(author, version, about = "Ten Thousand dice game")]
struct Cli {
    /// Log every roll and decision
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a selection of dice
    Score {
        /// Face values, 1-6
        #[arg(required = true, num_args = 1..=6)]
        faces: Vec<u8>,
    },
    /// Play one game between computer players
    Play {
        /// Player name, repeat for more players
        #[arg(short, long = "player")]
        players: Vec<String>,

        #[arg(long, default_value_t = DEFAULT_WIN_THRESHOLD)]
        goal: u32,

        #[arg(long)]
        seed: Option<u64>,

        /// Print the match record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Let the overlord take on a solo challenge
    Challenge {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(long, default_value_t = DEFAULT_WIN_THRESHOLD)]
        goal: u32,

        #[arg(long, default_value_t = 20)]
        turns: u32,

        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play many games and report per-player statistics
    Simulate {
        #[arg(short, long = "player")]
        players: Vec<String>,

        #[arg(short, long, default_value_t = 100)]
        games: u32,

        #[arg(long, default_value_t = DEFAULT_WIN_THRESHOLD)]
        goal: u32,

        #[arg(long)]
        seed: Option<u64>,

        /// Print the leaderboard as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Score { faces } => score(&faces),
        Command::Play {
            players,
            goal,
            seed,
            json,
        } => play(players, goal, seed, json),
        Command::Challenge {
            name,
            goal,
            turns,
            seed,
        } => challenge(name, goal, turns, seed),
        Command::Simulate {
            players,
            games,
            goal,
            seed,
            json,
        } => simulate(players, games, goal, seed, json),
    }
}

/// Default handle from the environment, trimmed for display
fn default_handle() -> String {
    std::env::var("USER")
        .unwrap_or_else(|_| "Player".to_string())
        .chars()
        .take(12)
        .collect()
}

/// Fill in the roster: the local handle plus an opponent if too short.
fn roster(mut names: Vec<String>) -> Vec<String> {
    if names.is_empty() {
        names.push(default_handle());
    }
    if names.len() == 1 {
        names.push(OPPONENT.to_string());
    }
    names
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn computer_game(names: &[String], goal: u32) -> Result<Game> {
    let players = names.iter().map(|n| Player::computer(n.as_str())).collect();
    Game::with_players(players, Rules::with_win_threshold(goal)).context("Failed to set up game")
}

fn score(values: &[u8]) -> Result<()> {
    let points = tenthousand::score(values).context("Invalid dice")?;
    let offending = tenthousand::validate(values)?;
    let keepers = tenthousand::choosable(values)?;

    println!("Score: {}", points);
    if offending.is_empty() {
        println!("All keepers score");
    } else {
        println!("Non-scoring dice: {:?}", offending);
    }
    println!("Keepable: {:?}", keepers);
    Ok(())
}

fn play(players: Vec<String>, goal: u32, seed: Option<u64>, json: bool) -> Result<()> {
    let names = roster(players);
    let mut game = computer_game(&names, goal)?;
    let mut rng = rng_for(seed);

    while !game.is_over() {
        let report = play_turn(&mut game, &mut rng).context("Turn failed")?;
        if !json {
            println!(
                "{:<12} {:>2} rolls  {:<24} total {}",
                report.player,
                report.rolls,
                format!("{:?}", report.outcome),
                report.total_score
            );
        }
        if game.turns_played() >= DEFAULT_TURN_CAP {
            anyhow::bail!("Game did not finish within {} turns", DEFAULT_TURN_CAP);
        }
    }

    let result = MatchResult::from_game(1, &game).context("Game ended without a result")?;
    if json {
        println!("{}", result.to_json()?);
    } else {
        println!("{}", result.ranking.message());
    }
    Ok(())
}

fn challenge(name: Option<String>, goal: u32, turns: u32, seed: Option<u64>) -> Result<()> {
    let config = ChallengeConfig {
        point_goal: goal,
        turn_limit: turns,
    };
    let player = Player::computer(name.unwrap_or_else(default_handle));
    let mut challenge = Challenge::with_player(player, config).context("Invalid challenge")?;
    let mut rng = rng_for(seed);

    println!(
        "Goal {} in {} turns, difficulty: {}",
        goal,
        turns,
        challenge.difficulty()
    );

    let mut status = challenge.status();
    while !status.is_finished() {
        let (report, next) = challenge.play_turn(&mut rng)?;
        println!(
            "Turn {:>2}: {:?}, total {}",
            challenge.player().turns_taken,
            report.outcome,
            report.total_score
        );
        status = next;
    }

    println!("{}", status.message(challenge.config()));
    Ok(())
}

fn simulate(
    players: Vec<String>,
    games: u32,
    goal: u32,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let names = roster(players);
    let mut rng = rng_for(seed);
    let mut tracker = StatsTracker::new();

    for match_id in 1..=u64::from(games) {
        let mut game = computer_game(&names, goal)?;
        play_game(&mut game, &mut rng, DEFAULT_TURN_CAP)
            .with_context(|| format!("Game {} failed", match_id))?;
        let result = MatchResult::from_game(match_id, &game)
            .context("Game ended without a result")?;
        debug!(match_id, result = %result.ranking.message(), "simulated");
        tracker.process_match(&result);
    }

    let board = tracker.leaderboard();
    if json {
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    println!("{} games", tracker.games());
    println!(
        "{:<12} {:>5} {:>5} {:>9} {:>9} {:>8}",
        "Player", "Wins", "Ties", "Avg", "Best turn", "Farkles"
    );
    for stats in board {
        println!(
            "{:<12} {:>5} {:>5} {:>9.0} {:>9} {:>7.1}%",
            stats.name,
            stats.wins,
            stats.ties,
            stats.average_score(),
            stats.best_turn,
            stats.farkle_rate() * 100.0
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score() {
        let cli = Cli::try_parse_from(["tenthousand", "score", "1", "1", "5"]).unwrap();
        match cli.command {
            Command::Score { faces } => assert_eq!(faces, vec![1, 1, 5]),
            other => panic!("unexpected command {:?}", other),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_score_needs_faces() {
        assert!(Cli::try_parse_from(["tenthousand", "score"]).is_err());
        assert!(Cli::try_parse_from(["tenthousand", "score", "x"]).is_err());
    }

    #[test]
    fn test_parse_play() {
        let cli = Cli::try_parse_from([
            "tenthousand",
            "--verbose",
            "play",
            "-p",
            "Alice",
            "--player",
            "Bob",
            "--seed",
            "9",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Play {
                players,
                goal,
                seed,
                json,
            } => {
                assert_eq!(players, vec!["Alice", "Bob"]);
                assert_eq!(goal, 10_000);
                assert_eq!(seed, Some(9));
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_challenge_defaults() {
        let cli = Cli::try_parse_from(["tenthousand", "challenge", "--goal", "5000"]).unwrap();
        match cli.command {
            Command::Challenge {
                name, goal, turns, ..
            } => {
                assert_eq!(name, None);
                assert_eq!(goal, 5_000);
                assert_eq!(turns, 20);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_simulate() {
        let cli = Cli::try_parse_from(["tenthousand", "simulate", "-g", "10", "--json", "-v"])
            .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Simulate { games, json, .. } => {
                assert_eq!(games, 10);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_roster_fills_opponent() {
        let names = roster(vec!["Alice".to_string()]);
        assert_eq!(names, vec!["Alice", OPPONENT]);
        let names = roster(vec!["A".to_string(), "B".to_string(), "C".to_string()]);
        assert_eq!(names.len(), 3);
        assert_eq!(roster(Vec::new()).len(), 2);
    }
}
