//! `repl::trade` module
//!
//! Contains repl loop handlers for buying and selling at the shop. Both ask for an
//! item if none was typed, get a quote from the session, and confirm with the
//! player when the quote calls for it.

use crate::item::Item;
use crate::session::{Action, Session};
use crate::shop::{Quote, TradeDirection};
use crate::style::GameStyle;
use crate::view::{View, ViewItem};

use anyhow::{Context, Result};
use log::info;
use rand::Rng;

use super::input::{InputEvent, InputManager};

/// Browse the shop's catalog and buy something.
///
/// # Errors
/// - stdin could not be read
pub fn buy_handler<R: Rng>(
    session: &mut Session<R>,
    view: &mut View,
    input: &mut InputManager,
    typed_item: Option<&str>,
) -> Result<()> {
    if typed_item.is_none() {
        let listing = session
            .shop()
            .offers(session.hunter())
            .into_iter()
            .map(|(item, price)| format!("{}: {}", item.title().item_style(), format!("{price} gold").gold_style()))
            .collect::<Vec<_>>()
            .join("\n");
        view.push(ViewItem::Catalog(format!(
            "Welcome to the shop! We have the finest wares in town.\nCurrently we have the following items:\n{listing}"
        )));
        view.flush();
    }
    let Some(item) = choose_item(view, input, typed_item, "What're you lookin' to buy? ")? else {
        return Ok(());
    };
    match session.quote(item, TradeDirection::Buy) {
        Ok(quote) => complete_trade(session, view, input, &quote, Action::Buy(item)),
        Err(refusal) => {
            view.push(ViewItem::Denied(refusal.to_string()));
            Ok(())
        },
    }
}

/// Offer one of the hunter's items to the shop.
///
/// # Errors
/// - stdin could not be read
pub fn sell_handler<R: Rng>(
    session: &mut Session<R>,
    view: &mut View,
    input: &mut InputManager,
    typed_item: Option<&str>,
) -> Result<()> {
    if typed_item.is_none() {
        view.push(ViewItem::Catalog(format!(
            "You currently have the following items: {}",
            session.hunter().kit_string().item_style()
        )));
        view.flush();
    }
    let Some(item) = choose_item(view, input, typed_item, "What're you lookin' to sell? ")? else {
        return Ok(());
    };
    match session.quote(item, TradeDirection::Sell) {
        Ok(quote) => complete_trade(session, view, input, &quote, Action::Sell(item)),
        Err(refusal) => {
            view.push(ViewItem::Denied(refusal.to_string()));
            Ok(())
        },
    }
}

/// Resolve the item named on the command line, or ask for one.
/// `Ok(None)` means there is nothing to trade (cancelled or unrecognized; feedback already queued).
fn choose_item(
    view: &mut View,
    input: &mut InputManager,
    typed_item: Option<&str>,
    prompt: &str,
) -> Result<Option<Item>> {
    let raw = if let Some(typed) = typed_item {
        typed.to_string()
    } else {
        match input.read_line(prompt).context("while reading an item name")? {
            InputEvent::Line(line) => line,
            InputEvent::Eof | InputEvent::Interrupted => {
                view.push(ViewItem::ActionResult("You left the shop".to_string()));
                return Ok(None);
            },
        }
    };
    match raw.parse::<Item>() {
        Ok(item) => Ok(Some(item)),
        Err(refusal) => {
            view.push(ViewItem::Denied(refusal.to_string()));
            Ok(None)
        },
    }
}

fn complete_trade<R: Rng>(
    session: &mut Session<R>,
    view: &mut View,
    input: &mut InputManager,
    quote: &Quote,
    action: Action,
) -> Result<()> {
    if quote.needs_confirmation {
        view.push(ViewItem::ShopPitch(quote.pitch.clone()));
        view.flush();
        let prompt = match quote.direction {
            TradeDirection::Buy => "Buy it (y/n)? ",
            TradeDirection::Sell => "Sell it (y/n)? ",
        };
        if !input.confirm(prompt).context("while confirming a trade")? {
            info!("{} walked away from a {:?} of {}", session.hunter().name(), quote.direction, quote.item);
            view.push(ViewItem::ActionResult("You left the shop".to_string()));
            return Ok(());
        }
    }
    view.push(ViewItem::from_report(session.perform(action)));
    Ok(())
}
