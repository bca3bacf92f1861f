//! Terminal mode management
//!
//! `TerminalModes` tracks which of raw mode, alternate screen and
//! keyboard enhancement were enabled, and restores them in `undo()`.

use anyhow::Result;
use crossterm::{
    cursor::{SetCursorStyle, Show},
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
    ExecutableCommand,
};
use std::io::{stdout, Write};

#[derive(Debug, Default)]
pub struct TerminalModes {
    raw_mode: bool,
    alternate_screen: bool,
    keyboard_enhancement: bool,
}

impl TerminalModes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable raw mode and the alternate screen.
    ///
    /// Keyboard enhancement is best effort: it lets Ctrl+L and Esc arrive
    /// unambiguously on terminals that support it. On error any partially
    /// enabled modes are undone.
    pub fn enable() -> Result<Self> {
        let mut modes = Self::new();

        if let Err(e) = enable_raw_mode() {
            tracing::error!("Failed to enable raw mode: {}", e);
            return Err(e.into());
        }
        modes.raw_mode = true;
        tracing::debug!("Enabled raw mode");

        match supports_keyboard_enhancement() {
            Ok(true) => {
                let flags = KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES;
                if let Err(e) = stdout().execute(PushKeyboardEnhancementFlags(flags)) {
                    tracing::warn!("Failed to enable keyboard enhancement: {}", e);
                } else {
                    modes.keyboard_enhancement = true;
                    tracing::debug!("Enabled keyboard enhancement flags: {:?}", flags);
                }
            }
            Ok(false) => tracing::info!("Keyboard enhancement not supported by terminal"),
            Err(e) => tracing::warn!("Failed to query keyboard enhancement support: {}", e),
        }

        if let Err(e) = stdout().execute(EnterAlternateScreen) {
            tracing::error!("Failed to enter alternate screen: {}", e);
            modes.undo();
            return Err(e.into());
        }
        modes.alternate_screen = true;
        tracing::debug!("Entered alternate screen");

        Ok(modes)
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn undo(&mut self) {
        let _ = stdout().execute(SetCursorStyle::DefaultUserShape);
        let _ = stdout().execute(Show);

        if self.keyboard_enhancement {
            let _ = stdout().execute(PopKeyboardEnhancementFlags);
            self.keyboard_enhancement = false;
            tracing::debug!("Popped keyboard enhancement flags");
        }

        if self.raw_mode {
            let _ = disable_raw_mode();
            self.raw_mode = false;
            tracing::debug!("Disabled raw mode");
        }

        if self.alternate_screen {
            let _ = stdout().execute(LeaveAlternateScreen);
            self.alternate_screen = false;
            tracing::debug!("Left alternate screen");
        }

        let _ = stdout().flush();
    }
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        self.undo();
    }
}

/// Unconditionally restore terminal state, for use in panic hooks.
pub fn emergency_cleanup() {
    let _ = stdout().execute(SetCursorStyle::DefaultUserShape);
    let _ = stdout().execute(Show);
    let _ = stdout().execute(PopKeyboardEnhancementFlags);
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = stdout().flush();
}
