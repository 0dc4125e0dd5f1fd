//! View module.
//! Rather than printing to the console from each handler, handlers push [`ViewItem`]s
//! which are organized, styled and displayed at the end of the turn.
use colored::Colorize;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::session::{Outcome, Report};
use crate::style::GameStyle;

/// Messages that can be queued for display during a turn.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    /// Greeting / news from the current town.
    TownNews(String),
    Status(String),
    Catalog(String),
    /// Shopkeeper patter attached to a quote.
    ShopPitch(String),
    ActionResult(String),
    Denied(String),
    Error(String),
    Victory(String),
    Defeat(String),
    Farewell(String),
    Help,
}

impl ViewItem {
    /// Wrap a session report in the matching view item.
    pub fn from_report(report: Report) -> ViewItem {
        match report.outcome {
            Outcome::Done => ViewItem::ActionResult(report.message),
            Outcome::Refused => ViewItem::Denied(report.message),
            Outcome::Won => ViewItem::Victory(report.message),
            Outcome::Lost => ViewItem::Defeat(report.message),
            Outcome::Quit => ViewItem::Farewell(report.message),
        }
    }

    fn section(&self) -> Section {
        match self {
            ViewItem::TownNews(_) | ViewItem::Status(_) => Section::Scene,
            ViewItem::Catalog(_)
            | ViewItem::ShopPitch(_)
            | ViewItem::ActionResult(_)
            | ViewItem::Denied(_)
            | ViewItem::Error(_) => Section::Results,
            ViewItem::Victory(_) | ViewItem::Defeat(_) | ViewItem::Farewell(_) | ViewItem::Help => Section::Game,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Scene,
    Results,
    Game,
}

const HELP_TEXT: &str = "\
(B)uy something at the shop.
(S)ell something at the shop.
(E)xplore surrounding terrain.
(M)ove on to a different town.
(L)ook for trouble!
(D)ig for gold.
(H)unt for treasure.
(I)nspect your status.
Give up the hunt and e(X)it.";

/// View aggregates messages for one turn and then displays them.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewItem>,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Display everything queued this turn, grouped by section, and clear the buffer.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();
        for (section, label) in [
            (Section::Scene, "town"),
            (Section::Results, "results"),
            (Section::Game, "game"),
        ] {
            let entries: Vec<&ViewItem> = self.items.iter().filter(|i| i.section() == section).collect();
            if entries.is_empty() {
                continue;
            }
            println!("{:.>width$}\n", label.section_style(), width = self.width);
            for entry in entries {
                println!("{}", self.render(entry));
            }
        }
        self.items.clear();
        println!();
    }

    fn render(&self, item: &ViewItem) -> String {
        let wrap = |text: &str| fill(text, self.width.saturating_sub(4).max(20));
        match item {
            ViewItem::TownNews(text) => wrap(text).news_style().to_string(),
            ViewItem::Status(text) | ViewItem::Catalog(text) => wrap(text),
            ViewItem::ShopPitch(text) => wrap(text).pitch_style().to_string(),
            ViewItem::ActionResult(text) => wrap(text).result_style().to_string(),
            ViewItem::Denied(text) => wrap(text).denied_style().to_string(),
            ViewItem::Error(text) => format!("{} {}", "!".bold().red(), wrap(text).error_style()),
            ViewItem::Victory(text) => format!("{}\n{}", wrap(text).victory_style(), "YOU WIN!".victory_style()),
            ViewItem::Defeat(text) => format!(
                "{}\n{}",
                wrap(text).defeat_style(),
                "YOU LOSE\nYOU RAN OUT OF GOLD".defeat_style()
            ),
            ViewItem::Farewell(text) => wrap(text).italic().to_string(),
            ViewItem::Help => HELP_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_map_to_view_items() {
        let refused = Report {
            message: "nope".into(),
            outcome: Outcome::Refused,
        };
        assert_eq!(ViewItem::from_report(refused), ViewItem::Denied("nope".into()));
        let lost = Report {
            message: "ouch".into(),
            outcome: Outcome::Lost,
        };
        assert!(ViewItem::from_report(lost).is_defeat());
    }

    #[test]
    fn flush_clears_the_buffer() {
        let mut view = View::new();
        view.push(ViewItem::Help);
        view.push(ViewItem::ActionResult("done".into()));
        view.flush();
        assert!(view.items.is_empty());
    }

    #[test]
    fn pitch_renders_wrapped_text() {
        colored::control::set_override(false);
        let view = View::new();
        let rendered = view.render(&ViewItem::ShopPitch("It'll cost you 4 gold.".into()));
        assert_eq!(rendered, "It'll cost you 4 gold.");
    }

    #[test]
    fn sections_group_items() {
        assert_eq!(ViewItem::Status(String::new()).section(), Section::Scene);
        assert_eq!(ViewItem::Denied(String::new()).section(), Section::Results);
        assert_eq!(ViewItem::ShopPitch(String::new()).section(), Section::Results);
        assert_eq!(ViewItem::Farewell(String::new()).section(), Section::Game);
    }
}
