//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly. The core
//! never styles anything; only the shell does.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn title_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn gold_style(&self) -> ColoredString;
    fn terrain_style(&self) -> ColoredString;
    fn treasure_style(&self) -> ColoredString;
    fn news_style(&self) -> ColoredString;
    fn result_style(&self) -> ColoredString;
    fn pitch_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn victory_style(&self) -> ColoredString;
    fn defeat_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.bold().cyan()
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn gold_style(&self) -> ColoredString {
        self.bold().truecolor(240, 200, 30)
    }
    fn terrain_style(&self) -> ColoredString {
        self.cyan()
    }
    fn treasure_style(&self) -> ColoredString {
        self.yellow()
    }
    fn news_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn result_style(&self) -> ColoredString {
        self.normal()
    }
    fn pitch_style(&self) -> ColoredString {
        self.italic().truecolor(220, 180, 40)
    }
    fn denied_style(&self) -> ColoredString {
        self.italic().truecolor(230, 30, 30)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn victory_style(&self) -> ColoredString {
        self.bold().green()
    }
    fn defeat_style(&self) -> ColoredString {
        self.bold().red()
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{}]", self);
        bracketed.truecolor(75, 80, 75)
    }
}

impl GameStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn gold_style(&self) -> ColoredString {
        self.as_str().gold_style()
    }
    fn terrain_style(&self) -> ColoredString {
        self.as_str().terrain_style()
    }
    fn treasure_style(&self) -> ColoredString {
        self.as_str().treasure_style()
    }
    fn news_style(&self) -> ColoredString {
        self.as_str().news_style()
    }
    fn result_style(&self) -> ColoredString {
        self.as_str().result_style()
    }
    fn pitch_style(&self) -> ColoredString {
        self.as_str().pitch_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn victory_style(&self) -> ColoredString {
        self.as_str().victory_style()
    }
    fn defeat_style(&self) -> ColoredString {
        self.as_str().defeat_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
}
