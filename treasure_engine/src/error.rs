//! Refusals -- recoverable, user-facing reasons an action had no effect.
//!
//! Nothing in here ends a session. The `Display` text of each variant is the message
//! shown to the player.

use crate::item::Item;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Refusal {
    #[error("You can't leave town, {name}. You don't have a {item}.")]
    MissingCrossingItem { name: String, item: Item },
    #[error("You can't dig for gold without a shovel")]
    NoShovel,
    #[error("You already dug for gold in this town.")]
    AlreadyDug,
    #[error("You have already searched this town")]
    AlreadySearched,
    #[error("Hmm, you've already got yerself a {0}!")]
    AlreadyOwned(Item),
    #[error("Hmm, a {item} costs {price} gold and you've only got {gold}.")]
    InsufficientFunds { item: Item, price: i32, gold: i32 },
    #[error("We don't carry any {0} 'round here.")]
    NotForSale(Item),
    #[error("Stop stringin' me along! You don't have a {0}.")]
    NotOwned(Item),
    #[error("We don't want none of those.")]
    Unwanted(Item),
    #[error("Never heard of a \"{0}\".")]
    UnknownItem(String),
    #[error("Yikes! That's an invalid option! Try again.")]
    InvalidAction,
    #[error("The hunt is over.")]
    SessionOver,
}
