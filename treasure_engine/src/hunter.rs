//! Hunter -- the traveler whose gold, kit and treasures the game revolves around.
use crate::difficulty::Settings;
use crate::item::{Item, ItemHolder};
use crate::treasure::Treasure;

use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hunter {
    name: String,
    gold: i32,
    inventory: BTreeSet<Item>,
    treasures: BTreeSet<Treasure>,
    samurai: bool,
    won: bool,
    lost: bool,
}

impl Hunter {
    pub fn new(name: impl Into<String>, gold: i32) -> Hunter {
        Self {
            name: name.into(),
            gold,
            inventory: BTreeSet::new(),
            treasures: BTreeSet::new(),
            samurai: false,
            won: false,
            lost: false,
        }
    }

    /// Create a hunter equipped the way the session settings dictate.
    pub fn from_settings(name: impl Into<String>, settings: &Settings) -> Hunter {
        let mut hunter = Hunter::new(name, settings.starting_gold);
        settings.starting_kit.iter().for_each(|item| hunter.add_item(*item));
        if settings.samurai {
            hunter.make_samurai();
        }
        hunter
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    pub fn inventory(&self) -> &BTreeSet<Item> {
        &self.inventory
    }

    pub fn treasures(&self) -> &BTreeSet<Treasure> {
        &self.treasures
    }

    pub fn is_samurai(&self) -> bool {
        self.samurai
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn has_lost(&self) -> bool {
        self.lost
    }

    pub fn is_finished(&self) -> bool {
        self.won || self.lost
    }

    pub fn make_samurai(&mut self) {
        self.samurai = true;
    }

    /// Add (or with a negative amount, remove) gold without any loss check.
    pub fn change_gold(&mut self, amount: i32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Buy an item at `cost`. Fails without side effects if it's already owned or unaffordable.
    pub fn buy_item(&mut self, item: Item, cost: i32) -> bool {
        if self.contains_item(item) || self.gold < cost {
            return false;
        }
        self.gold -= cost;
        self.add_item(item);
        true
    }

    /// Sell an owned item for `price`. Fails if the item isn't in the kit.
    pub fn sell_item(&mut self, item: Item, price: i32) -> bool {
        if !self.contains_item(item) {
            return false;
        }
        self.remove_item(item);
        self.gold += price;
        true
    }

    /// Pay a brawl penalty. Paying more than the purse holds drives gold negative and loses the game.
    /// Returns true if this payment lost the game.
    pub fn pay_penalty(&mut self, amount: i32) -> bool {
        let broke = self.gold < amount;
        self.gold -= amount;
        if broke && !self.won {
            self.lost = true;
            info!("{} went broke ({} gold)", self.name, self.gold);
        }
        broke
    }

    pub fn has_treasure(&self, treasure: Treasure) -> bool {
        self.treasures.contains(&treasure)
    }

    /// Collect a named treasure. Dust and duplicates are ignored; returns true if newly collected.
    pub fn add_treasure(&mut self, treasure: Treasure) -> bool {
        if !treasure.is_named() || !self.treasures.insert(treasure) {
            return false;
        }
        if self.has_all_treasures() && !self.lost {
            self.won = true;
            info!("{} collected every treasure", self.name);
        }
        true
    }

    pub fn has_all_treasures(&self) -> bool {
        Treasure::NAMED.iter().all(|t| self.treasures.contains(t))
    }

    /// Comma-separated item keys in catalog order, or "nothing".
    pub fn kit_string(&self) -> String {
        if self.inventory.is_empty() {
            return "nothing".to_string();
        }
        self.inventory.iter().copied().map(Item::key).collect::<Vec<_>>().join(", ")
    }
}

impl ItemHolder for Hunter {
    fn add_item(&mut self, item: Item) {
        self.inventory.insert(item);
    }

    fn remove_item(&mut self, item: Item) {
        self.inventory.remove(&item);
    }

    fn contains_item(&self, item: Item) -> bool {
        self.inventory.contains(&item)
    }
}
