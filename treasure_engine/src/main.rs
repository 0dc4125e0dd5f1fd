#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Treasure Hunter **
//! Town-hopping trading game

use treasure_engine::dice;
use treasure_engine::repl::input::{InputEvent, InputManager};
use treasure_engine::style::GameStyle;
use treasure_engine::{Difficulty, HUNTER_VERSION, Session, run_repl};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::info;

#[derive(Parser, Debug)]
#[command(name = "treasure_hunter", version = HUNTER_VERSION, about = "Go hunting for the big treasure")]
struct Cli {
    /// Hunter's name (prompted for if omitted)
    #[arg(long)]
    name: Option<String>,
    /// Difficulty: easy, normal, hard, samurai or test (prompted for if omitted)
    #[arg(long)]
    mode: Option<Difficulty>,
    /// Grant the samurai perk regardless of difficulty
    #[arg(long)]
    samurai: bool,
    /// Seed the dice for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    info!("Start: treasure hunter v{HUNTER_VERSION}");

    println!("Welcome to {}!", "TREASURE HUNTER".title_style());
    println!("Going hunting for the big treasure, eh?");

    let mut input = InputManager::new();
    let name = match cli.name {
        Some(name) => name,
        None => ask(&mut input, "What's your name, Hunter? ")?.unwrap_or_else(|| "stranger".to_string()),
    };
    let difficulty = match cli.mode {
        Some(mode) => mode,
        None => {
            let answer = ask(&mut input, "Mode (e)asy, (n)ormal, or (h)ard? ")?.unwrap_or_default();
            answer.parse().unwrap_or_else(|_| {
                println!("{}", "Invalid input, difficulty set to normal.".error_style());
                Difficulty::parse_or_normal(&answer)
            })
        },
    };
    let settings = difficulty.settings().with_samurai(cli.samurai);

    let rng = cli.seed.map_or_else(dice::from_entropy, dice::seeded);
    let mut session = Session::new(name.trim(), settings, rng);
    run_repl(&mut session, &mut input)?;

    let summary = serde_json::to_string(&session.summary()).context("while summarizing the session")?;
    info!("session summary: {summary}");
    println!("{}", "Thanks for playing.".italic());
    Ok(())
}

/// Prompt for one line; `None` on end of input or ctrl-c.
fn ask(input: &mut InputManager, prompt: &str) -> Result<Option<String>> {
    Ok(match input.read_line(prompt).context("while reading setup answers")? {
        InputEvent::Line(line) if !line.trim().is_empty() => Some(line),
        _ => None,
    })
}
