//! Page shell around the terminal
//!
//! Page shortcuts only apply while the terminal is blurred: `f` toggles the
//! flashlight, `q` quits, Enter, `i` or Tab focus the terminal again.
//! Ctrl+C always quits.

use super::terminal::Terminal;
use crate::input::{InputResult, TerminalKey};

pub struct Page {
    terminal: Terminal,
    flashlight: bool,
    should_quit: bool,
}

impl Page {
    pub fn new(terminal: Terminal) -> Self {
        Self {
            terminal,
            flashlight: false,
            should_quit: false,
        }
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal {
        &mut self.terminal
    }

    pub fn flashlight(&self) -> bool {
        self.flashlight
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn handle_key(&mut self, key: TerminalKey) {
        if key == TerminalKey::Interrupt {
            tracing::info!("Interrupt received, quitting");
            self.quit();
            return;
        }

        if self.terminal.handle_key(key) == InputResult::Consumed {
            return;
        }

        match key {
            TerminalKey::Char('f') | TerminalKey::Char('F') => {
                self.flashlight = !self.flashlight;
                tracing::debug!("Flashlight {}", if self.flashlight { "on" } else { "off" });
            }
            TerminalKey::Char('q') => self.quit(),
            TerminalKey::Enter | TerminalKey::Tab | TerminalKey::Char('i') => {
                self.terminal.focus()
            }
            _ => {}
        }
    }
}
