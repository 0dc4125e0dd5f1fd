//! Command module
//!
//! Turns a line of player input into one of a closed set of commands.
use variantly::Variantly;

/// Commands the player can type at the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    /// Buy, optionally naming the item up front.
    Buy(Option<String>),
    Sell(Option<String>),
    Explore,
    Move,
    Brawl,
    Dig,
    Hunt,
    Status,
    Help,
    Quit,
    Unknown,
}

/// Parses an input string and returns a corresponding `Command` if recognized.
pub fn parse_command(input: &str) -> Command {
    let lowered = input.trim().to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    match words.as_slice() {
        ["b" | "buy"] => Command::Buy(None),
        ["b" | "buy", item] => Command::Buy(Some((*item).to_string())),
        ["s" | "sell"] => Command::Sell(None),
        ["s" | "sell", item] => Command::Sell(Some((*item).to_string())),
        ["e" | "explore"] | ["look", "around"] => Command::Explore,
        ["m" | "move" | "leave" | "cross"] | ["move", "on"] | ["leave", "town"] => Command::Move,
        ["l" | "brawl" | "fight"] | ["look", "for", "trouble"] => Command::Brawl,
        ["d" | "dig"] | ["dig", "for", "gold"] => Command::Dig,
        ["h" | "hunt"] | ["hunt", "for", "treasure"] => Command::Hunt,
        ["i" | "status" | "inventory" | "inv"] => Command::Status,
        ["?" | "help"] => Command::Help,
        ["x" | "quit" | "exit"] => Command::Quit,
        _ => Command::Unknown,
    }
}
