//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. Each pass reads one command, turns it
//! into a session [`Action`] and pushes the resulting report onto the [`View`].
//! The shop handlers live in [`trade`] because they need a quote and a confirmation
//! before anything changes hands.

pub mod input;
pub mod trade;

pub use trade::*;

use crate::command::{Command, parse_command};
use crate::error::Refusal;
use crate::session::{Action, Outcome, Session, Status};
use crate::style::GameStyle;
use crate::view::{View, ViewItem};

use anyhow::{Context, Result};
use log::info;
use rand::Rng;

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
pub enum ReplControl {
    Continue,
    Quit,
}

/// Run the main read–eval–print loop until the hunter wins, loses or quits.
///
/// # Errors
/// - stdin could not be read
pub fn run_repl<R: Rng>(session: &mut Session<R>, input: &mut InputManager) -> Result<()> {
    let mut view = View::new();
    view.push(ViewItem::TownNews(session.welcome().to_string()));
    view.push(ViewItem::Help);
    view.flush();

    let mut turn = 0usize;
    loop {
        turn += 1;
        info!("================> BEGIN TURN {turn} <================");
        let hunter = session.hunter();
        let prompt = format!(
            "[{}|Gold: {}|Treasures: {}/3]>> ",
            hunter.name(),
            hunter.gold(),
            hunter.treasures().len()
        )
        .prompt_style()
        .to_string();

        let line = match input.read_line(&prompt).context("while reading a command")? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                view.push(ViewItem::Error("Command canceled.".to_string()));
                view.flush();
                continue;
            },
        };

        let control = dispatch(session, &mut view, input, parse_command(&line))?;
        view.flush();
        if let ReplControl::Quit = control {
            break;
        }
    }
    Ok(())
}

/// Carry out one parsed command.
///
/// # Errors
/// - stdin could not be read while prompting for trade details
pub fn dispatch<R: Rng>(
    session: &mut Session<R>,
    view: &mut View,
    input: &mut InputManager,
    command: Command,
) -> Result<ReplControl> {
    let action = match command {
        Command::Buy(item) => return buy_handler(session, view, input, item.as_deref()).map(|()| end_check(session)),
        Command::Sell(item) => return sell_handler(session, view, input, item.as_deref()).map(|()| end_check(session)),
        Command::Help => {
            view.push(ViewItem::Help);
            return Ok(ReplControl::Continue);
        },
        Command::Unknown => {
            view.push(ViewItem::Denied(Refusal::InvalidAction.to_string()));
            return Ok(ReplControl::Continue);
        },
        Command::Explore => Action::Explore,
        Command::Move => Action::CrossTerrain,
        Command::Brawl => Action::Brawl,
        Command::Dig => Action::Dig,
        Command::Hunt => Action::HuntTreasure,
        Command::Status => Action::Status,
        Command::Quit => Action::Quit,
    };
    Ok(perform_handler(session, view, action))
}

/// Perform a non-trade action and queue its report.
pub fn perform_handler<R: Rng>(session: &mut Session<R>, view: &mut View, action: Action) -> ReplControl {
    let report = session.perform(action);
    let ended = report.ended();
    view.push(match action {
        Action::Status if report.outcome == Outcome::Done => ViewItem::Status(styled_status(&session.status())),
        _ => ViewItem::from_report(report),
    });
    if ended { ReplControl::Quit } else { ReplControl::Continue }
}

/// Status screen with gold, kit, finds and terrain picked out.
fn styled_status(status: &Status) -> String {
    let kit = if status.kit.is_empty() {
        "nothing".to_string()
    } else {
        status
            .kit
            .iter()
            .map(|item| item.key().item_style().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let treasures = if status.treasures.is_empty() {
        "none".to_string()
    } else {
        status
            .treasures
            .iter()
            .map(|treasure| treasure.to_string().treasure_style().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "{} has {}.\nKit: {kit}\nTreasures found: {treasures}\nThis nice little town is surrounded by {}.",
        status.name,
        format!("{} gold", status.gold).gold_style(),
        status.terrain.to_string().terrain_style()
    )
}

fn end_check<R: Rng>(session: &Session<R>) -> ReplControl {
    if session.is_over() || session.has_quit() {
        ReplControl::Quit
    } else {
        ReplControl::Continue
    }
}
