#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const HUNTER_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod dice;
pub mod difficulty;
pub mod error;
pub mod hunter;
pub mod item;
pub mod session;
pub mod shop;
pub mod terrain;
pub mod town;
pub mod treasure;

// Shell modules
pub mod command;
pub mod repl;
pub mod style;
pub mod view;

// Re-exports for convenience
pub use difficulty::{Difficulty, Settings};
pub use error::Refusal;
pub use hunter::Hunter;
pub use item::{Item, ItemHolder};
pub use repl::run_repl;
pub use session::{Action, Outcome, Report, Session, Status};
pub use shop::{Shop, TradeDirection};
pub use terrain::{Terrain, TerrainKind};
pub use town::Town;
pub use treasure::Treasure;
pub use view::{View, ViewItem};
