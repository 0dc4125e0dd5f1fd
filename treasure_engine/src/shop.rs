//! Shop -- prices, quotes and trades.
//!
//! There is one shop per session. It never holds on to a customer: each trade borrows
//! the [`Hunter`] for the length of the call and returns a [`Receipt`] or a [`Refusal`].

use crate::difficulty::Settings;
use crate::error::Refusal;
use crate::hunter::Hunter;
use crate::item::{Item, ItemHolder};

use log::info;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};

/// Which way goods move across the counter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeDirection {
    /// Hunter buys from the shop.
    Buy,
    /// Shop buys back from the hunter.
    Sell,
}

/// What the shopkeeper says a trade would come to, before anything changes hands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub item: Item,
    pub direction: TradeDirection,
    pub price: i32,
    /// Whether the hunter should be asked to confirm before the trade goes through.
    pub needs_confirmation: bool,
    /// Shopkeeper patter shown with the quote.
    pub pitch: String,
}

/// A completed trade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Receipt {
    Bought { item: Item, price: i32, waived: bool },
    Sold { item: Item, price: i32 },
}

impl Display for Receipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Receipt::Bought { item, waived: true, .. } => {
                write!(f, "JUST TAKE IT AND DON'T DICE ME!!!\nYe' got yerself a {item}.")
            },
            Receipt::Bought { item, price: 0, .. } => {
                write!(f, "You like it huh? Just made it myself... wait\nYe' got yerself a {item}.")
            },
            Receipt::Bought { item, .. } => write!(f, "Ye' got yerself a {item}. Come again soon."),
            Receipt::Sold { item, price } => {
                write!(f, "Pleasure doin' business with you. ({price} gold for your {item})")
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    markdown: f64,
}

impl Shop {
    /// `markdown` is clamped into `(0, 1]`.
    pub fn new(markdown: f64) -> Shop {
        Self {
            markdown: markdown.clamp(f64::MIN_POSITIVE, 1.0),
        }
    }

    pub fn for_settings(settings: &Settings) -> Shop {
        Shop::new(settings.markdown)
    }

    pub fn markdown(&self) -> f64 {
        self.markdown
    }

    /// Whether `item` is on offer to this hunter. The sword is only sold to samurai.
    pub fn stocks(&self, hunter: &Hunter, item: Item) -> bool {
        item != Item::Sword || hunter.is_samurai()
    }

    /// List price in the given direction: base cost to buy, marked-down cost to sell.
    #[allow(clippy::cast_possible_truncation)]
    pub fn price_of(&self, item: Item, direction: TradeDirection) -> i32 {
        match direction {
            TradeDirection::Buy => item.base_cost(),
            TradeDirection::Sell => (f64::from(item.base_cost()) * self.markdown).floor() as i32,
        }
    }

    /// Price this hunter would actually pay. Sword owners pay nothing.
    pub fn effective_price(&self, hunter: &Hunter, item: Item) -> i32 {
        if hunter.contains_item(Item::Sword) {
            0
        } else {
            self.price_of(item, TradeDirection::Buy)
        }
    }

    /// Items on offer to this hunter with their list prices, in catalog order.
    pub fn offers(&self, hunter: &Hunter) -> Vec<(Item, i32)> {
        Item::ALL
            .into_iter()
            .filter(|item| self.stocks(hunter, *item))
            .map(|item| (item, self.price_of(item, TradeDirection::Buy)))
            .collect()
    }

    /// Plain listing of [`Shop::offers`], one item per line.
    pub fn catalog(&self, hunter: &Hunter) -> String {
        let mut listing = String::new();
        for (item, price) in self.offers(hunter) {
            let _ = writeln!(listing, "{}: {price} gold", item.title());
        }
        listing
    }

    /// Price a trade without performing it.
    ///
    /// # Errors
    /// - the same refusals the trade itself would produce, except insufficient funds
    pub fn quote(&self, hunter: &Hunter, item: Item, direction: TradeDirection) -> Result<Quote, Refusal> {
        match direction {
            TradeDirection::Buy => {
                if !self.stocks(hunter, item) {
                    return Err(Refusal::NotForSale(item));
                }
                if hunter.contains_item(item) {
                    return Err(Refusal::AlreadyOwned(item));
                }
                let waived = hunter.contains_item(Item::Sword);
                let price = self.effective_price(hunter, item);
                let pitch = if waived {
                    "JUST TAKE IT AND DON'T DICE ME!!!".to_string()
                } else if price == 0 {
                    "You like it huh? Just made it myself... wait".to_string()
                } else {
                    format!("It'll cost you {price} gold.")
                };
                Ok(Quote {
                    item,
                    direction,
                    price,
                    needs_confirmation: price > 0,
                    pitch,
                })
            },
            TradeDirection::Sell => {
                let price = self.price_of(item, TradeDirection::Sell);
                if price == 0 {
                    return Err(Refusal::Unwanted(item));
                }
                if !hunter.contains_item(item) {
                    return Err(Refusal::NotOwned(item));
                }
                Ok(Quote {
                    item,
                    direction,
                    price,
                    needs_confirmation: true,
                    pitch: format!("It'll get you {price} gold."),
                })
            },
        }
    }

    /// Sell `item` to the hunter.
    ///
    /// # Errors
    /// - item not stocked, already owned, or more than the hunter can afford
    pub fn purchase(&self, hunter: &mut Hunter, item: Item) -> Result<Receipt, Refusal> {
        if !self.stocks(hunter, item) {
            return Err(Refusal::NotForSale(item));
        }
        if hunter.contains_item(item) {
            return Err(Refusal::AlreadyOwned(item));
        }
        let waived = hunter.contains_item(Item::Sword);
        let price = self.effective_price(hunter, item);
        if !hunter.buy_item(item, price) {
            return Err(Refusal::InsufficientFunds {
                item,
                price,
                gold: hunter.gold(),
            });
        }
        info!("{} bought {item} for {price} gold", hunter.name());
        Ok(Receipt::Bought { item, price, waived })
    }

    /// Buy `item` back from the hunter at the marked-down price.
    ///
    /// # Errors
    /// - item worth nothing to the shop, or not owned
    pub fn sell_back(&self, hunter: &mut Hunter, item: Item) -> Result<Receipt, Refusal> {
        let price = self.price_of(item, TradeDirection::Sell);
        if price == 0 {
            return Err(Refusal::Unwanted(item));
        }
        if !hunter.sell_item(item, price) {
            return Err(Refusal::NotOwned(item));
        }
        info!("{} sold {item} for {price} gold", hunter.name());
        Ok(Receipt::Sold { item, price })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samurai(gold: i32) -> Hunter {
        let mut hunter = Hunter::new("Ivan", gold);
        hunter.make_samurai();
        hunter
    }

    #[test]
    fn sell_price_is_floored_markdown() {
        let shop = Shop::new(0.25);
        assert_eq!(shop.price_of(Item::Machete, TradeDirection::Buy), 6);
        assert_eq!(shop.price_of(Item::Machete, TradeDirection::Sell), 1);
        assert_eq!(shop.price_of(Item::Water, TradeDirection::Sell), 0);
    }

    #[test]
    fn buy_then_sell_never_profits() {
        for markdown in [0.25, 0.5, 1.0] {
            let shop = Shop::new(markdown);
            for item in Item::ALL {
                let buy = shop.price_of(item, TradeDirection::Buy);
                let sell = shop.price_of(item, TradeDirection::Sell);
                assert!(sell <= buy, "{item} at {markdown}");
                if markdown >= 1.0 {
                    assert_eq!(sell, buy);
                }
            }
        }
    }

    #[test]
    fn purchase_deducts_and_adds() {
        let shop = Shop::new(0.5);
        let mut hunter = Hunter::new("Ivan", 20);
        let receipt = shop.purchase(&mut hunter, Item::Water).unwrap();
        assert_eq!(
            receipt,
            Receipt::Bought {
                item: Item::Water,
                price: 2,
                waived: false
            }
        );
        assert_eq!(hunter.gold(), 18);
        assert!(hunter.contains_item(Item::Water));
    }

    #[test]
    fn purchase_of_owned_item_is_refused_without_change() {
        let shop = Shop::new(0.5);
        let mut hunter = Hunter::new("Ivan", 20);
        shop.purchase(&mut hunter, Item::Rope).unwrap();
        assert_eq!(shop.purchase(&mut hunter, Item::Rope), Err(Refusal::AlreadyOwned(Item::Rope)));
        assert_eq!(hunter.gold(), 16);
    }

    #[test]
    fn purchase_beyond_means_is_refused() {
        let shop = Shop::new(0.5);
        let mut hunter = Hunter::new("Ivan", 10);
        let refusal = shop.purchase(&mut hunter, Item::Boat).unwrap_err();
        assert_eq!(
            refusal,
            Refusal::InsufficientFunds {
                item: Item::Boat,
                price: 20,
                gold: 10
            }
        );
        assert_eq!(hunter.gold(), 10);
        assert!(hunter.inventory().is_empty());
    }

    #[test]
    fn sword_only_sold_to_samurai() {
        let shop = Shop::new(0.5);
        let mut hunter = Hunter::new("Ivan", 20);
        assert_eq!(shop.purchase(&mut hunter, Item::Sword), Err(Refusal::NotForSale(Item::Sword)));
        assert!(!shop.catalog(&hunter).contains("Sword"));
        assert_eq!(shop.offers(&hunter).len(), 7);

        hunter.make_samurai();
        assert!(shop.catalog(&hunter).contains("Sword: 0 gold"));
        assert_eq!(shop.offers(&hunter).last(), Some(&(Item::Sword, 0)));
        assert!(shop.purchase(&mut hunter, Item::Sword).is_ok());
    }

    #[test]
    fn sword_waives_every_price() {
        let shop = Shop::new(0.5);
        let mut hunter = samurai(0);
        let sword = shop.purchase(&mut hunter, Item::Sword).unwrap();
        assert!(sword.to_string().starts_with("You like it huh?"));
        let boat = shop.purchase(&mut hunter, Item::Boat).unwrap();
        assert_eq!(
            boat,
            Receipt::Bought {
                item: Item::Boat,
                price: 0,
                waived: true
            }
        );
        assert_eq!(hunter.gold(), 0);
    }

    #[test]
    fn quotes_flag_confirmation() {
        let shop = Shop::new(0.5);
        let mut hunter = samurai(20);
        let rope = shop.quote(&hunter, Item::Rope, TradeDirection::Buy).unwrap();
        assert!(rope.needs_confirmation);
        assert_eq!(rope.pitch, "It'll cost you 4 gold.");
        let sword = shop.quote(&hunter, Item::Sword, TradeDirection::Buy).unwrap();
        assert!(!sword.needs_confirmation);
        shop.purchase(&mut hunter, Item::Sword).unwrap();
        let horse = shop.quote(&hunter, Item::Horse, TradeDirection::Buy).unwrap();
        assert!(!horse.needs_confirmation);
        assert_eq!(horse.price, 0);
    }

    #[test]
    fn worthless_items_are_unwanted() {
        let shop = Shop::new(0.5);
        let mut hunter = samurai(0);
        hunter.add_item(Item::Sword);
        assert_eq!(shop.sell_back(&mut hunter, Item::Sword), Err(Refusal::Unwanted(Item::Sword)));
        assert!(hunter.contains_item(Item::Sword));
    }

    #[test]
    fn selling_unowned_item_is_refused() {
        let shop = Shop::new(0.5);
        let mut hunter = Hunter::new("Ivan", 0);
        assert_eq!(shop.sell_back(&mut hunter, Item::Horse), Err(Refusal::NotOwned(Item::Horse)));
        assert_eq!(
            shop.quote(&hunter, Item::Horse, TradeDirection::Sell),
            Err(Refusal::NotOwned(Item::Horse))
        );
    }

    #[test]
    fn sell_back_credits_marked_down_price() {
        let shop = Shop::new(0.5);
        let mut hunter = Hunter::new("Ivan", 0);
        hunter.add_item(Item::Horse);
        let receipt = shop.sell_back(&mut hunter, Item::Horse).unwrap();
        assert_eq!(receipt, Receipt::Sold { item: Item::Horse, price: 6 });
        assert_eq!(hunter.gold(), 6);
        assert!(!hunter.contains_item(Item::Horse));
    }
}
