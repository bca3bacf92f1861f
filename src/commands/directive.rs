//! `cat` and `goto` directives
//!
//! Directives take one argument and are recognised by prefix before the
//! registry is consulted. Each has a fixed lookup table; an unknown argument
//! produces an error line, never an `Err`.

use super::registry::{CommandContext, CommandOutput, Effect};
use crate::model::line::{StyledLine, Tone};

/// Keywords that introduce a directive. These can never be registry names.
pub const DIRECTIVE_KEYWORDS: &[&str] = &["cat", "goto"];

/// Section aliases accepted by `goto`, mapped to page anchors.
pub const SECTION_ALIASES: &[(&str, &str)] = &[
    ("home", "hero"),
    ("about", "about"),
    ("experience", "experience"),
    ("projects", "projects"),
    ("skills", "skills"),
    ("education", "education"),
    ("terminal", "terminal"),
    ("contact", "contact"),
];

/// A parsed directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `cat <file>`; `None` when the argument is missing
    Cat(Option<&'a str>),
    /// `goto <section>`; `None` when the argument is missing
    Goto(Option<&'a str>),
}

impl<'a> Directive<'a> {
    /// Recognise a directive in trimmed, lowercased input.
    ///
    /// `cat readme.md` and bare `cat` both parse; `category` does not.
    pub fn parse(input: &'a str) -> Option<Self> {
        for keyword in DIRECTIVE_KEYWORDS {
            let Some(rest) = input.strip_prefix(keyword) else {
                continue;
            };
            if !rest.is_empty() && !rest.starts_with(' ') {
                continue;
            }
            let arg = rest.trim();
            let arg = (!arg.is_empty()).then_some(arg);
            return Some(match *keyword {
                "cat" => Directive::Cat(arg),
                _ => Directive::Goto(arg),
            });
        }
        None
    }
}

/// Resolve a `goto` alias to an anchor id. Unmapped aliases pass through.
pub fn resolve_section(alias: &str) -> &str {
    SECTION_ALIASES
        .iter()
        .find(|(name, _)| *name == alias)
        .map(|(_, anchor)| *anchor)
        .unwrap_or(alias)
}

/// Output of `cat <file>`.
pub fn cat(file: Option<&str>, ctx: &CommandContext<'_>) -> CommandOutput {
    let Some(file) = file else {
        return CommandOutput::lines(vec![
            StyledLine::new()
                .plain("  Usage: ")
                .tone("cat [filename]", Tone::Amber),
            StyledLine::from("  Try: cat readme.md"),
        ]);
    };

    match file {
        "readme.md" => CommandOutput::lines(vec![
            StyledLine::blank(),
            StyledLine::new().tone("  # Vineet Kishore \u{2014} Portfolio", Tone::Sky),
            StyledLine::blank(),
            StyledLine::from("  Welcome to my interactive command center."),
            StyledLine::from("  Built with Rust, ratatui, and crossterm."),
            StyledLine::blank(),
        ]),
        "resume.pdf" => CommandOutput::line(StyledLine::new().tone("  Opening resume...", Tone::Green))
            .with_effect(Effect::OpenDocument(ctx.resume_path.to_string())),
        missing => CommandOutput::line(
            StyledLine::new().tone(format!("  cat: {missing}: No such file"), Tone::Red),
        ),
    }
}

/// Output of a bare `goto`. Navigation itself is resolved by the terminal,
/// which owns the navigator.
pub fn goto_usage() -> CommandOutput {
    CommandOutput::lines(vec![
        StyledLine::new()
            .plain("  Usage: ")
            .tone("goto [section]", Tone::Amber),
        StyledLine::new().plain("  Sections: ").plain(
            SECTION_ALIASES
                .iter()
                .map(|(alias, _)| *alias)
                .collect::<Vec<_>>()
                .join(", "),
        ),
    ])
}

/// Line printed after a successful `goto`.
pub fn navigated_line(alias: &str) -> StyledLine {
    StyledLine::new()
        .plain("  Navigating to ")
        .tone(alias, Tone::Green)
        .plain("...")
}

/// Line printed when `goto` finds no anchor.
pub fn section_not_found_line(alias: &str) -> StyledLine {
    StyledLine::new()
        .tone(format!("  Section \"{alias}\" not found."), Tone::Red)
        .plain(" Try: ")
        .tone("ls", Tone::Amber)
}
