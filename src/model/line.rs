//! Display-tagged transcript lines
//!
//! Output is modelled as a list of fragments, each carrying an optional tone
//! and weight. The plain text of a line is always the concatenation of its
//! fragments, so tests can compare content without caring how it is drawn.

use serde::{Deserialize, Serialize};

/// The fixed palette used by the command tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Sky,
    Blue,
    Green,
    Amber,
    Violet,
    Slate,
    Gray,
    Silver,
    Red,
    Pink,
    Cyan,
    Snow,
}

impl Tone {
    /// Canonical `#rrggbb` value for the tone.
    pub fn hex(self) -> &'static str {
        match self {
            Tone::Sky => "#60a5fa",
            Tone::Blue => "#3b82f6",
            Tone::Green => "#4ade80",
            Tone::Amber => "#f59e0b",
            Tone::Violet => "#a78bfa",
            Tone::Slate => "#334155",
            Tone::Gray => "#64748b",
            Tone::Silver => "#94a3b8",
            Tone::Red => "#ef4444",
            Tone::Pink => "#ec4899",
            Tone::Cyan => "#06b6d4",
            Tone::Snow => "#e2e8f0",
        }
    }

    /// The tone as an `(r, g, b)` triple.
    pub fn rgb(self) -> (u8, u8, u8) {
        let hex = &self.hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }
}

/// Presentation hints attached to a fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentStyle {
    pub tone: Option<Tone>,
    pub bold: bool,
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub text: String,
    pub style: FragmentStyle,
}

impl Fragment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: FragmentStyle::default(),
        }
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            style: FragmentStyle {
                tone: Some(tone),
                bold: false,
            },
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: FragmentStyle {
                tone: None,
                bold: true,
            },
        }
    }
}

/// One line of produced output, built from styled fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledLine {
    pub fragments: Vec<Fragment>,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty spacer line.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn plain(mut self, text: impl Into<String>) -> Self {
        self.fragments.push(Fragment::plain(text));
        self
    }

    pub fn tone(mut self, text: impl Into<String>, tone: Tone) -> Self {
        self.fragments.push(Fragment::toned(text, tone));
        self
    }

    pub fn bold(mut self, text: impl Into<String>) -> Self {
        self.fragments.push(Fragment::bold(text));
        self
    }

    /// Plain text content with all display hints removed.
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.fragments.iter().all(|f| f.text.is_empty())
    }
}

impl From<&str> for StyledLine {
    fn from(text: &str) -> Self {
        StyledLine::new().plain(text)
    }
}

impl From<String> for StyledLine {
    fn from(text: String) -> Self {
        StyledLine::new().plain(text)
    }
}

/// A single unit of transcript content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputLine {
    /// An echoed submission, drawn after the prompt marker.
    Command(String),
    /// A line produced by a command, directive or the input controller.
    Text(StyledLine),
}

impl OutputLine {
    /// Textual content used for matching. Echoed commands return the command
    /// itself, without the prompt marker.
    pub fn text(&self) -> String {
        match self {
            OutputLine::Command(cmd) => cmd.clone(),
            OutputLine::Text(line) => line.text(),
        }
    }

    pub fn is_command(&self) -> bool {
        matches!(self, OutputLine::Command(_))
    }
}

impl From<StyledLine> for OutputLine {
    fn from(line: StyledLine) -> Self {
        OutputLine::Text(line)
    }
}
