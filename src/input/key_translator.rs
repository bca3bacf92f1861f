//! crossterm key events to [`TerminalKey`]
//!
//! Raw terminal events are first looked up in a small override table, for
//! terminals that send odd sequences (e.g. DEL for backspace), and then
//! mapped by code and modifiers.

use super::controller::TerminalKey;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct KeyTranslator {
    overrides: HashMap<(KeyCode, KeyModifiers), TerminalKey>,
}

impl Default for KeyTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyTranslator {
    /// Translator with the built-in overrides.
    pub fn new() -> Self {
        let mut translator = Self::empty();
        translator.add_override(
            KeyEvent::new(KeyCode::Char('\x7f'), KeyModifiers::NONE),
            TerminalKey::Backspace,
        );
        translator.add_override(
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL),
            TerminalKey::Backspace,
        );
        translator
    }

    pub fn empty() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    pub fn add_override(&mut self, raw: KeyEvent, key: TerminalKey) {
        self.overrides.insert((raw.code, raw.modifiers), key);
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Translate a key event. Release events yield `None`.
    pub fn translate(&self, event: KeyEvent) -> Option<TerminalKey> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        if let Some(key) = self.overrides.get(&(event.code, event.modifiers)) {
            return Some(*key);
        }

        let command = event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);
        let key = match event.code {
            KeyCode::Char('l') | KeyCode::Char('L') if command => TerminalKey::ClearScreen,
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                TerminalKey::Interrupt
            }
            KeyCode::Char(_) if command || event.modifiers.contains(KeyModifiers::ALT) => {
                TerminalKey::Other
            }
            KeyCode::Char(c) => TerminalKey::Char(c),
            KeyCode::Backspace => TerminalKey::Backspace,
            KeyCode::Delete => TerminalKey::Delete,
            KeyCode::Left => TerminalKey::Left,
            KeyCode::Right => TerminalKey::Right,
            KeyCode::Home => TerminalKey::Home,
            KeyCode::End => TerminalKey::End,
            KeyCode::Enter => TerminalKey::Enter,
            KeyCode::Up => TerminalKey::Up,
            KeyCode::Down => TerminalKey::Down,
            KeyCode::Tab => TerminalKey::Tab,
            KeyCode::Esc => TerminalKey::Blur,
            _ => TerminalKey::Other,
        };
        Some(key)
    }
}
