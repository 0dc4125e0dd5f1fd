//! Item catalog.
//!
//! Every piece of equipment the shop deals in is a variant of [`Item`]. Base prices
//! live in an exhaustive `match` so adding an item can't silently leave it unpriced.

use crate::error::Refusal;

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Equipment a hunter can own. Each item is held at most once.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Item {
    Water,
    Rope,
    Machete,
    Boots,
    Shovel,
    Horse,
    Boat,
    /// Only stocked for samurai. Waives purchase costs and brawl risk once owned.
    Sword,
}

impl Item {
    /// Every item, in shop listing order.
    pub const ALL: [Item; 8] = [
        Item::Water,
        Item::Rope,
        Item::Machete,
        Item::Boots,
        Item::Shovel,
        Item::Horse,
        Item::Boat,
        Item::Sword,
    ];

    /// Base cost in gold when bought from the shop.
    pub fn base_cost(self) -> i32 {
        match self {
            Item::Water => 2,
            Item::Rope => 4,
            Item::Machete => 6,
            Item::Boots | Item::Shovel => 8,
            Item::Horse => 12,
            Item::Boat => 20,
            Item::Sword => 0,
        }
    }

    /// Lowercase identifier used in input and messages.
    pub fn key(self) -> &'static str {
        match self {
            Item::Water => "water",
            Item::Rope => "rope",
            Item::Machete => "machete",
            Item::Boots => "boots",
            Item::Shovel => "shovel",
            Item::Horse => "horse",
            Item::Boat => "boat",
            Item::Sword => "sword",
        }
    }

    /// Capitalized name for listings.
    pub fn title(self) -> &'static str {
        match self {
            Item::Water => "Water",
            Item::Rope => "Rope",
            Item::Machete => "Machete",
            Item::Boots => "Boots",
            Item::Shovel => "Shovel",
            Item::Horse => "Horse",
            Item::Boat => "Boat",
            Item::Sword => "Sword",
        }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Item {
    type Err = Refusal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Item::ALL
            .into_iter()
            .find(|item| item.key() == wanted)
            .ok_or(Refusal::UnknownItem(wanted))
    }
}

/// Anything that keeps a kit of items.
pub trait ItemHolder {
    fn add_item(&mut self, item: Item);
    fn remove_item(&mut self, item: Item);
    fn contains_item(&self, item: Item) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitive_and_trimmed() {
        assert_eq!(" Rope\n".parse::<Item>(), Ok(Item::Rope));
        assert_eq!("MACHETE".parse::<Item>(), Ok(Item::Machete));
    }

    #[test]
    fn unknown_item_is_refused() {
        assert_eq!(
            "spoon".parse::<Item>(),
            Err(Refusal::UnknownItem("spoon".to_string()))
        );
    }

    #[test]
    fn only_the_sword_is_free() {
        for item in Item::ALL {
            assert_eq!(item.base_cost() == 0, item == Item::Sword, "{item}");
        }
    }

    #[test]
    fn keys_round_trip_through_parse() {
        for item in Item::ALL {
            assert_eq!(item.key().parse::<Item>(), Ok(item));
            assert_eq!(item.title().parse::<Item>(), Ok(item));
        }
    }
}
