//! Section navigation collaborator
//!
//! `goto` resolves an alias to an anchor id and asks a `Navigator` to bring
//! that anchor into view. The terminal only learns whether the anchor
//! exists; how the page scrolls is up to the implementation.

use std::sync::{Arc, Mutex};

/// Anchors present on the portfolio page, in page order.
pub const PAGE_ANCHORS: &[&str] = &[
    "hero",
    "about",
    "experience",
    "projects",
    "skills",
    "education",
    "terminal",
    "contact",
];

pub trait Navigator: std::fmt::Debug {
    /// Scroll the anchor into view. Returns false when no such anchor exists.
    fn scroll_into_view(&mut self, anchor: &str) -> bool;

    /// The anchor most recently scrolled to, if any.
    fn current(&self) -> Option<&str> {
        None
    }
}

/// Navigator over a fixed list of page anchors.
#[derive(Debug, Clone)]
pub struct SectionNavigator {
    anchors: Vec<String>,
    current: Option<String>,
}

impl SectionNavigator {
    pub fn new<I, S>(anchors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            anchors: anchors.into_iter().map(Into::into).collect(),
            current: None,
        }
    }

    /// Navigator over [`PAGE_ANCHORS`].
    pub fn page() -> Self {
        Self::new(PAGE_ANCHORS.iter().copied())
    }
}

impl Default for SectionNavigator {
    fn default() -> Self {
        Self::page()
    }
}

impl Navigator for SectionNavigator {
    fn scroll_into_view(&mut self, anchor: &str) -> bool {
        if self.anchors.iter().any(|a| a == anchor) {
            tracing::debug!("Scrolling to section {anchor}");
            self.current = Some(anchor.to_string());
            true
        } else {
            false
        }
    }

    fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

/// Wraps a `SectionNavigator` and records every requested anchor.
///
/// Clones share the same log, so a test can keep one clone and hand the
/// other to the terminal.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    inner: SectionNavigator,
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn scroll_into_view(&mut self, anchor: &str) -> bool {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(anchor.to_string());
        }
        self.inner.scroll_into_view(anchor)
    }

    fn current(&self) -> Option<&str> {
        self.inner.current()
    }
}
