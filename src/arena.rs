//! Batch play between two difficulty tiers

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    config::SessionConfig,
    session::{Scoreboard, Session},
    strategy::{Difficulty, Opponent},
    tictactoe::{GameOutcome, Symbol},
};

/// Arena configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Number of rounds
    pub games: usize,

    /// Random seed
    pub seed: Option<u64>,

    /// Tier playing the human seat
    pub challenger: Difficulty,

    /// Tier playing the computer seat
    pub defender: Difficulty,

    /// Swap symbols every round so both sides open equally often
    pub alternate_symbols: bool,
}

impl ArenaConfig {
    /// Reject settings that cannot produce a report
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(Error::InvalidConfiguration {
                message: "arena needs at least one game".to_string(),
            });
        }
        Ok(())
    }

    /// Read an arena configuration from a JSON file without validating it.
    ///
    /// Missing fields fall back to their defaults. Callers that override
    /// fields afterwards should call [`ArenaConfig::validate`] on the result.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open arena config {}", path.display()),
            source,
        })?;
        let config = serde_json::from_reader(file)?;
        Ok(config)
    }

    /// Load and validate an arena configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::from_file(path)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            challenger: Difficulty::Easy,
            defender: Difficulty::Hard,
            alternate_symbols: true,
        }
    }
}

/// Result of an arena run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaResult {
    pub challenger: Difficulty,
    pub defender: Difficulty,

    /// Total rounds played
    pub total_games: usize,

    pub challenger_wins: usize,
    pub defender_wins: usize,
    pub draws: usize,

    pub challenger_win_rate: f64,
    pub defender_win_rate: f64,
    pub draw_rate: f64,
}

impl ArenaResult {
    /// Build a result from a session's tally (human seat = challenger)
    pub fn new(challenger: Difficulty, defender: Difficulty, scores: &Scoreboard) -> Self {
        let challenger_wins = scores.human_wins as usize;
        let defender_wins = scores.computer_wins as usize;
        let draws = scores.draws as usize;
        let total_games = challenger_wins + defender_wins + draws;

        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            challenger,
            defender,
            total_games,
            challenger_wins,
            defender_wins,
            draws,
            challenger_win_rate: rate(challenger_wins),
            defender_win_rate: rate(defender_wins),
            draw_rate: rate(draws),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create arena result {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open arena result {}", path.display()),
            source,
        })?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Play the current round of `session` to the end, with `human` choosing
/// the human seat's moves
pub fn play_round(session: &mut Session, human: &mut dyn Opponent) -> Result<GameOutcome> {
    while !session.is_over() {
        if session.is_computer_turn() {
            session.play_computer()?;
        } else {
            let index = human.select_move(session.board(), session.human_symbol())?;
            session.play_human(index)?;
        }
    }
    Ok(session.outcome())
}

/// Runs rounds between a challenger and a defender tier
pub struct Arena {
    config: ArenaConfig,
}

impl Arena {
    pub fn new(config: ArenaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Play every round
    pub fn run(&self) -> Result<ArenaResult> {
        self.run_with(|_, _| {})
    }

    /// Play every round, calling `on_game` with the round number and its
    /// outcome after each one
    pub fn run_with<F>(&self, mut on_game: F) -> Result<ArenaResult>
    where
        F: FnMut(usize, GameOutcome),
    {
        let config = self.config;

        let mut session_config = SessionConfig::new(Symbol::X).with_difficulty(config.defender);
        if let Some(seed) = config.seed {
            session_config = session_config.with_seed(seed);
        }
        let mut session = Session::new(session_config);
        let mut challenger = config
            .challenger
            .into_boxed_opponent(config.seed.map(|seed| seed.wrapping_add(1)));

        info!(
            games = config.games,
            challenger = %config.challenger,
            defender = %config.defender,
            "arena started"
        );

        for game_num in 0..config.games {
            let human = if config.alternate_symbols && game_num % 2 == 1 {
                Symbol::O
            } else {
                Symbol::X
            };
            session.start_round(human);

            let outcome = play_round(&mut session, challenger.as_mut())?;
            debug!(game_num, ?outcome, "round played");
            on_game(game_num, outcome);
        }

        Ok(ArenaResult::new(
            config.challenger,
            config.defender,
            session.scores(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_has_zero_rates() {
        let result = Arena::new(ArenaConfig {
            games: 0,
            ..ArenaConfig::default()
        })
        .run()
        .unwrap();
        assert_eq!(result.total_games, 0);
        assert_eq!(result.draw_rate, 0.0);
    }

    #[test]
    fn zero_games_fail_validation() {
        let config = ArenaConfig {
            games: 0,
            ..ArenaConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
        assert!(ArenaConfig::default().validate().is_ok());
    }

    #[test]
    fn hard_mirror_always_draws() {
        let result = Arena::new(ArenaConfig {
            games: 4,
            seed: Some(5),
            challenger: Difficulty::Hard,
            defender: Difficulty::Hard,
            alternate_symbols: true,
        })
        .run()
        .unwrap();
        assert_eq!(result.draws, 4);
        assert_eq!(result.draw_rate, 1.0);
    }
}
