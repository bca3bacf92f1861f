//! Per-terminal session state
//!
//! A `Session` holds everything that changes while the terminal is used:
//! the submitted command log, the recall cursor, the start instant for
//! `uptime`, and the theme flag. The command table itself lives elsewhere
//! and never changes.

use std::time::{Duration, Instant};

/// Result of moving the history cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recall {
    /// The cursor landed on an entry; the buffer should show it.
    Entry(String),
    /// The cursor is past the end; the buffer should be cleared.
    Fresh,
    /// Nothing to do (already at the oldest entry).
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct Session {
    /// Submitted commands in submission order, not deduplicated
    history: Vec<String>,
    /// Recall index in `0..=history.len()`; `history.len()` means fresh input
    history_cursor: usize,
    start_time: Instant,
    theme_active: bool,
}

impl Session {
    pub fn new(start_time: Instant) -> Self {
        Self {
            history: Vec::new(),
            history_cursor: 0,
            start_time,
            theme_active: false,
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    pub fn theme_active(&self) -> bool {
        self.theme_active
    }

    pub fn set_theme_active(&mut self, active: bool) {
        self.theme_active = active;
    }

    /// Append a submitted command and return the cursor to fresh input.
    pub fn record(&mut self, command: impl Into<String>) {
        self.history.push(command.into());
        self.history_cursor = self.history.len();
    }

    /// Time elapsed since the session started.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start_time)
    }

    /// Step back through history. Never moves below the oldest entry.
    pub fn recall_previous(&mut self) -> Recall {
        if self.history_cursor == 0 || self.history.is_empty() {
            return Recall::Unchanged;
        }
        self.history_cursor -= 1;
        Recall::Entry(self.history[self.history_cursor].clone())
    }

    /// Step forward through history. Past the newest entry the cursor parks
    /// at `history.len()` and the buffer returns to fresh input.
    pub fn recall_next(&mut self) -> Recall {
        if self.history_cursor + 1 < self.history.len() {
            self.history_cursor += 1;
            Recall::Entry(self.history[self.history_cursor].clone())
        } else {
            self.history_cursor = self.history.len();
            Recall::Fresh
        }
    }
}
