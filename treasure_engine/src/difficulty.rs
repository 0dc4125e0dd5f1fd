//! Difficulty modes and the session settings they fix.

use crate::item::Item;

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    /// Debug mode: rich and fully kitted out, with normal odds.
    Test,
    /// Normal odds with the samurai perk.
    Samurai,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized difficulty \"{0}\" (expected easy, normal, hard, samurai or test)")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "e" | "easy" => Ok(Difficulty::Easy),
            "n" | "normal" => Ok(Difficulty::Normal),
            "h" | "hard" => Ok(Difficulty::Hard),
            "s" | "samurai" => Ok(Difficulty::Samurai),
            "test" => Ok(Difficulty::Test),
            other => Err(UnknownDifficulty(other.to_string())),
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Test => "test",
            Difficulty::Samurai => "samurai",
        };
        write!(f, "{name}")
    }
}

impl Difficulty {
    /// Parse a mode, falling back to normal on anything unrecognized.
    pub fn parse_or_normal(input: &str) -> Difficulty {
        input.parse().unwrap_or_else(|err: UnknownDifficulty| {
            warn!("{err}; falling back to normal");
            Difficulty::Normal
        })
    }

    pub fn settings(self) -> Settings {
        let normal = Settings {
            difficulty: self,
            starting_gold: 20,
            starting_kit: Vec::new(),
            markdown: 0.5,
            toughness: 0.4,
            items_break: true,
            samurai: false,
        };
        match self {
            Difficulty::Normal => normal,
            Difficulty::Easy => Settings {
                starting_gold: 40,
                markdown: 1.0,
                toughness: 0.2,
                items_break: false,
                ..normal
            },
            Difficulty::Hard => Settings {
                markdown: 0.25,
                toughness: 0.75,
                ..normal
            },
            Difficulty::Test => Settings {
                starting_gold: 100,
                starting_kit: vec![
                    Item::Water,
                    Item::Rope,
                    Item::Machete,
                    Item::Horse,
                    Item::Boat,
                    Item::Boots,
                    Item::Shovel,
                ],
                ..normal
            },
            Difficulty::Samurai => Settings { samurai: true, ..normal },
        }
    }
}

/// Everything fixed for the whole session once a difficulty is chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub starting_gold: i32,
    pub starting_kit: Vec<Item>,
    /// Fraction of the base price the shop pays when buying an item back.
    pub markdown: f64,
    /// Probability that a newly generated town is tough.
    pub toughness: f64,
    /// Whether a crossing can break the item used.
    pub items_break: bool,
    pub samurai: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Difficulty::Normal.settings()
    }
}

impl Settings {
    /// Grant (or keep) the samurai perk on top of any difficulty.
    #[must_use]
    pub fn with_samurai(mut self, samurai: bool) -> Self {
        self.samurai |= samurai;
        self
    }
}
