//! Input row state machine
//!
//! Turns key presses on the single-line buffer into submissions, history
//! recall, completion hints or a clear-screen request.

use crate::commands::registry::Registry;
use crate::model::session::{Recall, Session};

/// Keys the input row understands, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalKey {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Enter,
    Up,
    Down,
    Tab,
    /// Ctrl+L / Cmd+L
    ClearScreen,
    /// Esc
    Blur,
    /// Ctrl+C
    Interrupt,
    Other,
}

/// Whether a key was handled by the focused widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Handled; must not reach page-level shortcuts
    Consumed,
    /// Not handled; the caller may interpret it
    Ignored,
}

/// What the terminal should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Dispatch this normalized (trimmed, lowercased) command
    Submit(String),
    /// Print these completion candidates
    Hint(Vec<&'static str>),
    ClearScreen,
    Blur,
    /// The buffer or cursor changed
    Edited,
    None,
}

/// Single-line text buffer with a character cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    chars: Vec<char>,
    cursor: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn insert(&mut self, c: char) {
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
        true
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.chars.remove(self.cursor);
        true
    }

    pub fn move_left(&mut self) -> bool {
        let moved = self.cursor > 0;
        self.cursor = self.cursor.saturating_sub(1);
        moved
    }

    pub fn move_right(&mut self) -> bool {
        let moved = self.cursor < self.chars.len();
        self.cursor = (self.cursor + 1).min(self.chars.len());
        moved
    }

    pub fn move_home(&mut self) -> bool {
        let moved = self.cursor != 0;
        self.cursor = 0;
        moved
    }

    pub fn move_end(&mut self) -> bool {
        let moved = self.cursor != self.chars.len();
        self.cursor = self.chars.len();
        moved
    }

    /// Replace the contents, leaving the cursor at the end.
    pub fn set(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.cursor = self.chars.len();
    }

    /// Take the contents, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.chars).into_iter().collect()
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[derive(Debug, Clone, Default)]
pub struct InputController {
    line: InputLine,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&self) -> &InputLine {
        &self.line
    }

    pub fn buffer(&self) -> String {
        self.line.text()
    }

    pub fn handle(
        &mut self,
        key: TerminalKey,
        registry: &Registry,
        session: &mut Session,
    ) -> InputAction {
        match key {
            TerminalKey::Enter => {
                let command = normalize(&self.line.text());
                if command.is_empty() {
                    return InputAction::None;
                }
                self.line.clear();
                InputAction::Submit(command)
            }
            TerminalKey::Up => match session.recall_previous() {
                Recall::Entry(cmd) => {
                    self.line.set(&cmd);
                    InputAction::Edited
                }
                Recall::Fresh | Recall::Unchanged => InputAction::None,
            },
            TerminalKey::Down => match session.recall_next() {
                Recall::Entry(cmd) => {
                    self.line.set(&cmd);
                    InputAction::Edited
                }
                Recall::Fresh => {
                    self.line.clear();
                    InputAction::Edited
                }
                Recall::Unchanged => InputAction::None,
            },
            TerminalKey::Tab => self.autocomplete(registry),
            TerminalKey::ClearScreen => InputAction::ClearScreen,
            TerminalKey::Blur => InputAction::Blur,
            TerminalKey::Char(c) => {
                self.line.insert(c);
                InputAction::Edited
            }
            TerminalKey::Backspace => edited(self.line.backspace()),
            TerminalKey::Delete => edited(self.line.delete()),
            TerminalKey::Left => edited(self.line.move_left()),
            TerminalKey::Right => edited(self.line.move_right()),
            TerminalKey::Home => edited(self.line.move_home()),
            TerminalKey::End => edited(self.line.move_end()),
            TerminalKey::Interrupt | TerminalKey::Other => InputAction::None,
        }
    }

    fn autocomplete(&mut self, registry: &Registry) -> InputAction {
        let prefix = normalize(&self.line.text());
        if prefix.is_empty() {
            return InputAction::None;
        }
        let matches = registry.complete(&prefix);
        match matches.as_slice() {
            [] => InputAction::None,
            [only] => {
                self.line.set(only);
                InputAction::Edited
            }
            _ => InputAction::Hint(matches),
        }
    }
}

fn edited(changed: bool) -> InputAction {
    if changed {
        InputAction::Edited
    } else {
        InputAction::None
    }
}
