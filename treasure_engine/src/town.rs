//! Town -- where everything happens.
//!
//! A [`Town`] is generated once per visit and discarded when the hunter crosses the
//! surrounding terrain. Each action resolves exactly once against a borrowed [`Hunter`]
//! (and, for trades, the session's [`Shop`]), drawing from the caller's random source.
//! The treasure is chosen at generation time and never re-rolled; hunting only reveals it.

use crate::dice;
use crate::error::Refusal;
use crate::hunter::Hunter;
use crate::item::{Item, ItemHolder};
use crate::shop::Shop;
use crate::terrain::Terrain;
use crate::treasure::Treasure;

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Odds of an item breaking on a crossing.
const BREAK_CHANCE: f64 = 0.5;
/// A dig pays off when the draw lands at or above this.
const DIG_SUCCESS_AT: f64 = 0.5;
const MAX_DIG_REWARD: u32 = 20;
const MAX_BRAWL_STAKE: u32 = 10;
/// Brawl threshold in a tough town: trouble is found below it, and won above it.
const TOUGH_TROUBLE: f64 = 0.66;
const MILD_TROUBLE: f64 = 0.33;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Town {
    terrain: Terrain,
    treasure: Treasure,
    tough: bool,
    has_dug: bool,
    has_hunted: bool,
}

impl Town {
    pub fn new(terrain: Terrain, treasure: Treasure, tough: bool) -> Town {
        Self {
            terrain,
            treasure,
            tough,
            has_dug: false,
            has_hunted: false,
        }
    }

    /// Roll up a fresh town: terrain, then treasure, then toughness (with probability `toughness`).
    pub fn generate<R: Rng + ?Sized>(toughness: f64, rng: &mut R) -> Town {
        let terrain = Terrain::generate(rng);
        let treasure = Treasure::random(rng);
        let tough = dice::chance(rng, toughness);
        info!(
            "new town generated: {} (needs {}), tough: {tough}",
            terrain.kind(),
            terrain.required_item()
        );
        debug!("town treasure: {treasure}");
        Town::new(terrain, treasure, tough)
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    /// The buried treasure. Reading it does not count as a hunt.
    pub fn treasure(&self) -> Treasure {
        self.treasure
    }

    pub fn is_tough(&self) -> bool {
        self.tough
    }

    pub fn has_dug(&self) -> bool {
        self.has_dug
    }

    pub fn has_hunted(&self) -> bool {
        self.has_hunted
    }

    /// Greeting for a hunter walking in.
    pub fn hunter_arrives(&self, hunter: &Hunter) -> String {
        let mood = if self.tough {
            "It's pretty rough around here, so watch yourself."
        } else {
            "We're just a sleepy little town with mild mannered folk."
        };
        format!("Welcome to town, {}.\n{mood}", hunter.name())
    }

    pub fn explore(&self) -> String {
        self.terrain.info()
    }

    /// Cross the surrounding terrain. The crossing item may break (unless `items_break` is off).
    ///
    /// # Errors
    /// - the hunter lacks the item the terrain requires
    pub fn leave<R: Rng + ?Sized>(
        &self,
        hunter: &mut Hunter,
        items_break: bool,
        rng: &mut R,
    ) -> Result<String, Refusal> {
        let item = self.terrain.required_item();
        if !self.terrain.can_cross(&*hunter) {
            return Err(Refusal::MissingCrossingItem {
                name: hunter.name().to_string(),
                item,
            });
        }
        let mut message = format!("You used your {item} to cross the {}.", self.terrain.kind());
        if dice::chance(rng, BREAK_CHANCE) && items_break {
            hunter.remove_item(item);
            message.push_str(&format!("\nUnfortunately, you lost your {item}."));
            info!("{}'s {item} broke crossing the {}", hunter.name(), self.terrain.kind());
        }
        Ok(message)
    }

    /// Dig for gold. One attempt per town, hit or miss.
    ///
    /// # Errors
    /// - no shovel, or this town has already been dug
    pub fn dig<R: Rng + ?Sized>(&mut self, hunter: &mut Hunter, rng: &mut R) -> Result<String, Refusal> {
        if !hunter.contains_item(Item::Shovel) {
            return Err(Refusal::NoShovel);
        }
        if self.has_dug {
            return Err(Refusal::AlreadyDug);
        }
        self.has_dug = true;
        if dice::unit(rng) >= DIG_SUCCESS_AT {
            let reward = dice::roll_up_to(rng, MAX_DIG_REWARD);
            hunter.change_gold(reward);
            info!("{} dug up {reward} gold", hunter.name());
            Ok(format!("You dug up {reward} gold!\nYou can no longer dig in this town."))
        } else {
            Ok("You dug but only found dirt.\nYou can no longer dig in this town.".to_string())
        }
    }

    /// Go looking for a fight. Tough towns find trouble more often and are harder to beat.
    pub fn look_for_trouble<R: Rng + ?Sized>(&self, hunter: &mut Hunter, rng: &mut R) -> String {
        let threshold = if self.tough { TOUGH_TROUBLE } else { MILD_TROUBLE };
        if dice::unit(rng) > threshold {
            return "You couldn't find any trouble".to_string();
        }
        if hunter.contains_item(Item::Sword) {
            let tribute = dice::roll_up_to(rng, MAX_BRAWL_STAKE);
            hunter.change_gold(tribute);
            info!("{} intimidated a brawler out of {tribute} gold", hunter.name());
            return format!("IS THAT A WHOLE SWORD, PLEASE STRANGER JUST TAKE MY MONEY\nYou receive {tribute} gold.");
        }
        let stake = dice::roll_up_to(rng, MAX_BRAWL_STAKE);
        let mut message = "You want trouble, stranger!  You got it!\nOof! Umph! Ow!\n".to_string();
        if dice::unit(rng) > threshold {
            hunter.change_gold(stake);
            info!("{} won a brawl for {stake} gold", hunter.name());
            message.push_str(&format!(
                "Okay, stranger! You proved yer mettle. Here, take my gold.\nYou won the brawl and receive {stake} gold."
            ));
        } else {
            let broke = hunter.pay_penalty(stake);
            info!("{} lost a brawl and paid {stake} gold", hunter.name());
            message.push_str(&format!(
                "That'll teach you to go lookin' fer trouble in MY town! Now pay up!\nYou lost the brawl and pay {stake} gold."
            ));
            if broke {
                message.push_str("\nYou ran out of gold!");
            }
        }
        message
    }

    /// Search the town for its treasure. Only the first search counts.
    ///
    /// # Errors
    /// - the town has already been searched
    pub fn hunt_treasure(&mut self, hunter: &mut Hunter) -> Result<String, Refusal> {
        if self.has_hunted {
            return Err(Refusal::AlreadySearched);
        }
        self.has_hunted = true;
        let treasure = self.treasure;
        let mut message = format!("You found {treasure}!");
        if hunter.has_treasure(treasure) {
            message.push_str("\nYou have already found this item (will not be collected)");
        } else if hunter.add_treasure(treasure) {
            info!("{} collected {treasure}", hunter.name());
            if hunter.has_won() {
                message.push_str("\nCongratulations, you have found the last of the three treasures, you win!");
            }
        }
        Ok(message)
    }

    /// # Errors
    /// - see [`Shop::purchase`]
    pub fn buy(&self, shop: &Shop, hunter: &mut Hunter, item: Item) -> Result<String, Refusal> {
        shop.purchase(hunter, item).map(|receipt| receipt.to_string())
    }

    /// # Errors
    /// - see [`Shop::sell_back`]
    pub fn sell(&self, shop: &Shop, hunter: &mut Hunter, item: Item) -> Result<String, Refusal> {
        shop.sell_back(hunter, item).map(|receipt| receipt.to_string())
    }
}
