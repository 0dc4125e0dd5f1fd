//! Terminal input handling for the Treasure Hunter REPL.
//!
//! Lines come from a [`LineSource`]: a rustyline editor completing command words and
//! item names when a terminal is attached, plain stdin lines otherwise, or a fixed
//! script of answers in tests.

use std::collections::VecDeque;
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use lazy_static::lazy_static;
use log::{debug, info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::item::Item;

/// Outcome of reading a line from the REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

const COMMAND_WORDS: &[&str] = &[
    "buy",
    "sell",
    "explore",
    "move",
    "leave",
    "cross",
    "look for trouble",
    "brawl",
    "fight",
    "dig",
    "hunt",
    "status",
    "inventory",
    "help",
    "quit",
    "exit",
];

lazy_static! {
    static ref COMPLETION_TERMS: Vec<String> = build_completion_terms();
}

fn build_completion_terms() -> Vec<String> {
    let mut terms: Vec<String> = COMMAND_WORDS.iter().map(|w| (*w).to_string()).collect();
    terms.extend(Item::ALL.iter().map(|item| item.key().to_string()));
    terms.sort_unstable();
    terms.dedup();
    terms
}

type ReplEditor = rustyline::Editor<HunterHelper, DefaultHistory>;

#[derive(Default)]
struct HunterHelper;

impl Helper for HunterHelper {}

impl Completer for HunterHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_word(line, pos);
        if prefix.is_empty() {
            return Ok((start, Vec::new()));
        }
        Ok((start, completions_for(&prefix)))
    }
}

impl Hinter for HunterHelper {
    type Hint = String;
}

impl Highlighter for HunterHelper {}

impl Validator for HunterHelper {}

/// Start offset and text of the word under the cursor.
fn current_word(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let start = slice.rfind(char::is_whitespace).map_or(0, |idx| idx + 1);
    (start, slice[start..].to_string())
}

fn completions_for(prefix: &str) -> Vec<Pair> {
    let lower = prefix.to_lowercase();
    COMPLETION_TERMS
        .iter()
        .filter(|term| term.starts_with(&lower))
        .map(|term| Pair {
            display: term.clone(),
            replacement: term.clone(),
        })
        .collect()
}

/// Anything the REPL can pull a line of input from.
pub trait LineSource {
    /// Show `prompt` and wait for the next line.
    ///
    /// # Errors
    /// - the underlying reader failed
    fn next_line(&mut self, prompt: &str) -> io::Result<InputEvent>;
}

/// Owns the active [`LineSource`] and drops to plain stdin if the editor breaks.
pub struct InputManager {
    source: Box<dyn LineSource>,
    editor_active: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    /// Use the line editor on a terminal, plain stdin everywhere else.
    pub fn new() -> Self {
        if !io::stdin().is_terminal() {
            info!("stdin is not a TTY; reading plain lines");
            return Self::plain();
        }
        match EditorLines::open(history_file_path()) {
            Ok(editor) => Self {
                source: Box::new(editor),
                editor_active: true,
            },
            Err(err) => {
                warn!("line editor unavailable ({err}); reading plain lines");
                Self::plain()
            },
        }
    }

    /// Input that answers prompts from `lines` in order, then reports end of input.
    pub fn scripted<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source: Box::new(ScriptedLines(lines.into_iter().map(Into::into).collect())),
            editor_active: false,
        }
    }

    fn plain() -> Self {
        Self {
            source: Box::new(StdinLines),
            editor_active: false,
        }
    }

    /// Read one line. A failing line editor is swapped for plain stdin and the read retried.
    ///
    /// # Errors
    /// - stdin could not be read at all
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.source.next_line(prompt) {
            Err(err) if self.editor_active => {
                warn!("line editor failed ({err}); switching to plain stdin");
                *self = Self::plain();
                self.source.next_line(prompt)
            },
            other => other,
        }
    }

    /// Ask a yes/no question. Anything but "y"/"yes" counts as no.
    ///
    /// # Errors
    /// - stdin could not be read at all
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(match self.read_line(prompt)? {
            InputEvent::Line(line) => is_yes(&line),
            InputEvent::Eof | InputEvent::Interrupted => false,
        })
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Rustyline editor with command completion. History is loaded on open and written back on drop.
struct EditorLines {
    editor: ReplEditor,
    history: Option<PathBuf>,
}

impl EditorLines {
    fn open(history: Option<PathBuf>) -> io::Result<Self> {
        let mut editor = ReplEditor::new().map_err(io::Error::other)?;
        editor.set_helper(Some(HunterHelper));
        if let Some(path) = &history {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            match editor.load_history(path) {
                Ok(()) => debug!("loaded command history from {}", path.display()),
                Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {},
                Err(err) => warn!("ignoring unreadable history at {}: {err}", path.display()),
            }
        }
        Ok(Self { editor, history })
    }
}

impl LineSource for EditorLines {
    fn next_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let line = match self.editor.readline(prompt) {
            Ok(line) => line,
            Err(err) => return readline_event(err),
        };
        if !line.trim().is_empty()
            && let Err(err) = self.editor.add_history_entry(line.as_str())
        {
            warn!("failed to record history entry: {err}");
        }
        Ok(InputEvent::Line(line))
    }
}

impl Drop for EditorLines {
    fn drop(&mut self) {
        if let Some(path) = &self.history
            && let Err(err) = self.editor.save_history(path)
        {
            warn!("failed to save history to {}: {err}", path.display());
        }
    }
}

struct StdinLines;

impl LineSource for StdinLines {
    fn next_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(InputEvent::Eof);
        }
        Ok(InputEvent::Line(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

struct ScriptedLines(VecDeque<String>);

impl LineSource for ScriptedLines {
    fn next_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        Ok(match self.0.pop_front() {
            Some(line) => {
                debug!("scripted answer to {prompt:?}: {line}");
                InputEvent::Line(line)
            },
            None => InputEvent::Eof,
        })
    }
}

fn readline_event(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(err) => Err(err),
        other => Err(io::Error::other(other)),
    }
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| base.join("treasure_hunter").join("history.txt"))
}
