//! Command registry
//!
//! The registry maps a command name to a zero-argument handler. It is built
//! once and never changes afterwards. Handlers never mutate anything
//! themselves: they return lines plus a list of [`Effect`]s that the
//! terminal applies after echoing the command.

use super::content;
use super::directive::DIRECTIVE_KEYWORDS;
use crate::config::{MatrixConfig, TerminalConfig};
use crate::model::line::StyledLine;
use crate::model::session::Session;
use crate::services::random::RandomSource;
use crate::services::time_source::TimeSource;
use std::collections::HashMap;

/// Side effects a command may request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Remove every line from the transcript (history is kept).
    ClearTranscript,
    /// Set the alternate-theme flag.
    SetTheme(bool),
    /// Open a file or URL in a new context.
    OpenDocument(String),
    /// Start the matrix rain overlay.
    StartMatrix,
    /// Bring a page anchor into view.
    Navigate(String),
}

/// Lines and effects produced by one handler invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub lines: Vec<StyledLine>,
    pub effects: Vec<Effect>,
}

impl CommandOutput {
    pub fn lines(lines: Vec<StyledLine>) -> Self {
        Self {
            lines,
            effects: Vec::new(),
        }
    }

    pub fn line(line: StyledLine) -> Self {
        Self::lines(vec![line])
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Read-only view handed to handlers.
pub struct CommandContext<'a> {
    pub session: &'a Session,
    pub clock: &'a dyn TimeSource,
    pub random: &'a dyn RandomSource,
    pub terminal: &'a TerminalConfig,
    pub matrix: &'a MatrixConfig,
    pub resume_path: &'a str,
    pub rickroll_url: &'a str,
}

pub type Handler = fn(&CommandContext<'_>) -> CommandOutput;

/// A named, zero-argument command.
#[derive(Clone, Copy)]
pub struct CommandEntry {
    pub name: &'static str,
    pub summary: &'static str,
    pub handler: Handler,
}

impl std::fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("summary", &self.summary)
            .finish()
    }
}

/// Registry construction errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateCommand(String),
    ShadowsDirective(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::DuplicateCommand(name) => {
                write!(f, "command '{name}' is registered twice")
            }
            RegistryError::ShadowsDirective(name) => {
                write!(f, "command '{name}' collides with a directive keyword")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Immutable table of commands, in registration order.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<CommandEntry>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    /// Build a registry, rejecting duplicate names.
    pub fn from_entries(entries: Vec<CommandEntry>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if DIRECTIVE_KEYWORDS.contains(&entry.name) {
                return Err(RegistryError::ShadowsDirective(entry.name.to_string()));
            }
            if index.insert(entry.name, i).is_some() {
                return Err(RegistryError::DuplicateCommand(entry.name.to_string()));
            }
        }
        Ok(Self { entries, index })
    }

    /// The portfolio's built-in command table.
    pub fn builtin() -> Self {
        Self::from_entries(content::builtin_entries())
            .unwrap_or_else(|e| panic!("built-in command table is invalid: {e}"))
    }

    /// Look up a command by exact (already lowercased) name.
    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Command names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every name Tab can complete to: registry keys followed by the
    /// directive keywords.
    pub fn autocomplete_candidates(&self) -> Vec<&'static str> {
        self.names()
            .chain(DIRECTIVE_KEYWORDS.iter().copied())
            .collect()
    }

    /// Candidates starting with `prefix`, in registration order.
    pub fn complete(&self, prefix: &str) -> Vec<&'static str> {
        if prefix.is_empty() {
            return Vec::new();
        }
        self.autocomplete_candidates()
            .into_iter()
            .filter(|name| name.starts_with(prefix))
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
