//! Difficulty tiers

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{HeuristicOpponent, MinimaxOpponent, Opponent, RandomOpponent};
use crate::Error;

/// Strength of the computer opponent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Creates a boxed opponent for this tier.
    ///
    /// With `seed` set, the opponent's random choices are reproducible;
    /// otherwise it is seeded from entropy.
    pub fn into_boxed_opponent(self, seed: Option<u64>) -> Box<dyn Opponent> {
        match self {
            Difficulty::Easy => Box::new(RandomOpponent::new(seed)),
            Difficulty::Normal => Box::new(HeuristicOpponent::new(seed)),
            Difficulty::Hard => Box::new(MinimaxOpponent::new()),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Error::InvalidDifficulty {
                input: s.to_string(),
            }),
        }
    }
}
