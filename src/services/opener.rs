//! Document-open collaborator
//!
//! `resume`, `cat resume.pdf` and `rickroll` hand a path or URL to a
//! `DocumentOpener`. Opening is fire-and-forget: the terminal prints its
//! line immediately and never waits for the result.

use std::sync::{Arc, Mutex};

pub trait DocumentOpener: std::fmt::Debug {
    fn open(&self, target: &str);
}

/// Opens documents with the platform handler (xdg-open, open, start).
#[cfg(feature = "runtime")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

#[cfg(feature = "runtime")]
impl DocumentOpener for SystemOpener {
    fn open(&self, target: &str) {
        tracing::info!("Opening {target}");
        if let Err(e) = open::that_detached(target) {
            tracing::warn!("Failed to open {target}: {e}");
        }
    }
}

/// Records requested targets without opening anything.
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().map(|o| o.clone()).unwrap_or_default()
    }
}

impl DocumentOpener for RecordingOpener {
    fn open(&self, target: &str) {
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(target.to_string());
        }
    }
}
