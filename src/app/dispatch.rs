//! Input resolution
//!
//! Resolution order on trimmed, lowercased input, first match wins:
//! `cat` directive, `goto` directive, exact registry key, "command not found".

use crate::commands::directive::{self, Directive};
use crate::commands::registry::{CommandContext, CommandOutput, Effect, Registry};
use crate::model::line::{StyledLine, Tone};

/// What a line resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchKind {
    Directive,
    Command(&'static str),
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub kind: DispatchKind,
    pub output: CommandOutput,
}

#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Resolve one normalized input line. Never touches the transcript;
    /// the caller applies `output.effects`.
    pub fn dispatch(&self, input: &str, ctx: &CommandContext<'_>) -> Dispatch {
        if let Some(parsed) = Directive::parse(input) {
            tracing::debug!("Dispatching directive {:?}", parsed);
            let output = match parsed {
                Directive::Cat(file) => directive::cat(file, ctx),
                Directive::Goto(Some(alias)) => {
                    CommandOutput::default().with_effect(Effect::Navigate(alias.to_string()))
                }
                Directive::Goto(None) => directive::goto_usage(),
            };
            return Dispatch {
                kind: DispatchKind::Directive,
                output,
            };
        }

        if let Some(entry) = self.registry.get(input) {
            tracing::debug!("Dispatching command {}", entry.name);
            return Dispatch {
                kind: DispatchKind::Command(entry.name),
                output: (entry.handler)(ctx),
            };
        }

        tracing::debug!("Unknown command {:?}", input);
        Dispatch {
            kind: DispatchKind::Unknown,
            output: CommandOutput::line(not_found_line(input)),
        }
    }
}

fn not_found_line(input: &str) -> StyledLine {
    StyledLine::new()
        .tone("  Command not found: ", Tone::Red)
        .plain(input)
        .plain(". Type ")
        .tone("\"help\"", Tone::Green)
        .plain(" for commands.")
}
