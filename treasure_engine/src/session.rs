//! Session controller.
//!
//! A [`Session`] exclusively owns the hunter, the shop, the active town and the random
//! source. The shell hands it one [`Action`] at a time and gets a [`Report`] back; once
//! the hunter has won or lost, every further action is refused.

use crate::dice::GameRng;
use crate::difficulty::Settings;
use crate::error::Refusal;
use crate::hunter::Hunter;
use crate::item::Item;
use crate::shop::{Quote, Shop, TradeDirection};
use crate::terrain::TerrainKind;
use crate::town::Town;
use crate::treasure::Treasure;

use log::info;
use rand::Rng;
use serde::Serialize;
use std::fmt::Display;

/// Everything a hunter can do in a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Buy(Item),
    Sell(Item),
    Explore,
    CrossTerrain,
    Dig,
    Brawl,
    HuntTreasure,
    Status,
    Quit,
}

/// How an action turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// The action happened (whatever the dice said).
    Done,
    /// A precondition wasn't met; nothing changed.
    Refused,
    Won,
    Lost,
    Quit,
}

/// Plain result of one action, for the shell to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub message: String,
    pub outcome: Outcome,
}

impl Report {
    fn done(message: impl Into<String>) -> Report {
        Self {
            message: message.into(),
            outcome: Outcome::Done,
        }
    }

    fn refused(refusal: &Refusal) -> Report {
        Self {
            message: refusal.to_string(),
            outcome: Outcome::Refused,
        }
    }

    /// True if this report closes the session.
    pub fn ended(&self) -> bool {
        matches!(self.outcome, Outcome::Won | Outcome::Lost | Outcome::Quit)
    }
}

/// Where the hunter stands right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub name: String,
    pub gold: i32,
    pub kit: Vec<Item>,
    pub treasures: Vec<Treasure>,
    pub terrain: TerrainKind,
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kit = if self.kit.is_empty() {
            "nothing".to_string()
        } else {
            self.kit.iter().copied().map(Item::key).collect::<Vec<_>>().join(", ")
        };
        let treasures = if self.treasures.is_empty() {
            "none".to_string()
        } else {
            self.treasures.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
        };
        write!(
            f,
            "{} has {} gold. Kit: {kit}. Treasures found: {treasures}.\nThis nice little town is surrounded by {}.",
            self.name, self.gold, self.terrain
        )
    }
}

/// End-of-session snapshot, logged when the hunt wraps up.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary<'a> {
    pub hunter: &'a Hunter,
    pub settings: &'a Settings,
    pub towns_visited: usize,
    pub outcome: Option<Outcome>,
}

#[derive(Debug)]
pub struct Session<R: Rng = GameRng> {
    hunter: Hunter,
    shop: Shop,
    town: Town,
    settings: Settings,
    rng: R,
    towns_visited: usize,
    quit: bool,
    welcome: String,
}

impl<R: Rng> Session<R> {
    /// Start a session: the hunter is equipped per `settings` and arrives in a first town.
    pub fn new(name: &str, settings: Settings, mut rng: R) -> Session<R> {
        let hunter = Hunter::from_settings(name, &settings);
        let shop = Shop::for_settings(&settings);
        let town = Town::generate(settings.toughness, &mut rng);
        let welcome = town.hunter_arrives(&hunter);
        info!(
            "session started for {} on {} difficulty (samurai: {})",
            hunter.name(),
            settings.difficulty,
            settings.samurai
        );
        Self {
            hunter,
            shop,
            town,
            settings,
            rng,
            towns_visited: 1,
            quit: false,
            welcome,
        }
    }

    pub fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    pub fn town(&self) -> &Town {
        &self.town
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn towns_visited(&self) -> usize {
        self.towns_visited
    }

    /// Greeting from the town the hunter most recently arrived in.
    pub fn welcome(&self) -> &str {
        &self.welcome
    }

    /// True once the hunter has won or lost.
    pub fn is_over(&self) -> bool {
        self.hunter.is_finished()
    }

    pub fn has_quit(&self) -> bool {
        self.quit
    }

    /// Replace the active town with a freshly generated one and walk the hunter in.
    pub fn advance_town(&mut self) -> String {
        self.town = Town::generate(self.settings.toughness, &mut self.rng);
        self.towns_visited += 1;
        self.welcome = self.town.hunter_arrives(&self.hunter);
        self.welcome.clone()
    }

    /// Price a trade at the shop without doing it, so the shell can ask for confirmation.
    ///
    /// # Errors
    /// - the trade would be refused outright, or the session is over
    pub fn quote(&self, item: Item, direction: TradeDirection) -> Result<Quote, Refusal> {
        if self.is_over() {
            return Err(Refusal::SessionOver);
        }
        self.shop.quote(&self.hunter, item, direction)
    }

    /// Snapshot of the hunter's purse, kit and finds, and the town they're in.
    pub fn status(&self) -> Status {
        Status {
            name: self.hunter.name().to_string(),
            gold: self.hunter.gold(),
            kit: self.hunter.inventory().iter().copied().collect(),
            treasures: self.hunter.treasures().iter().copied().collect(),
            terrain: self.town.terrain().kind(),
        }
    }

    pub fn summary(&self) -> SessionSummary<'_> {
        let outcome = if self.hunter.has_won() {
            Some(Outcome::Won)
        } else if self.hunter.has_lost() {
            Some(Outcome::Lost)
        } else if self.quit {
            Some(Outcome::Quit)
        } else {
            None
        };
        SessionSummary {
            hunter: &self.hunter,
            settings: &self.settings,
            towns_visited: self.towns_visited,
            outcome,
        }
    }

    /// Resolve one action against the active town.
    pub fn perform(&mut self, action: Action) -> Report {
        if self.is_over() || self.quit {
            return Report::refused(&Refusal::SessionOver);
        }
        info!("{} performs {action:?}", self.hunter.name());
        let result = match action {
            Action::Buy(item) => self.town.buy(&self.shop, &mut self.hunter, item),
            Action::Sell(item) => self.town.sell(&self.shop, &mut self.hunter, item),
            Action::Explore => Ok(self.town.explore()),
            Action::Status => Ok(self.status().to_string()),
            Action::CrossTerrain => self.cross_terrain(),
            Action::Dig => self.town.dig(&mut self.hunter, &mut self.rng),
            Action::Brawl => Ok(self.town.look_for_trouble(&mut self.hunter, &mut self.rng)),
            Action::HuntTreasure => self.town.hunt_treasure(&mut self.hunter),
            Action::Quit => {
                self.quit = true;
                info!("{} gave up the hunt", self.hunter.name());
                return Report {
                    message: format!("Fare thee well, {}!", self.hunter.name()),
                    outcome: Outcome::Quit,
                };
            },
        };
        match result {
            Ok(message) => self.settle(message),
            Err(refusal) => Report::refused(&refusal),
        }
    }

    fn cross_terrain(&mut self) -> Result<String, Refusal> {
        let crossing = self
            .town
            .leave(&mut self.hunter, self.settings.items_break, &mut self.rng)?;
        let welcome = self.advance_town();
        Ok(format!("{crossing}\n\n{welcome}"))
    }

    /// Turn a completed action's message into a report, noticing any terminal transition.
    fn settle(&self, message: String) -> Report {
        if self.hunter.has_won() {
            info!("{} won the hunt", self.hunter.name());
            Report {
                message,
                outcome: Outcome::Won,
            }
        } else if self.hunter.has_lost() {
            info!("{} lost the hunt", self.hunter.name());
            Report {
                message,
                outcome: Outcome::Lost,
            }
        } else {
            Report::done(message)
        }
    }
}
