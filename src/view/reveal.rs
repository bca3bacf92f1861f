//! Staggered reveal of output lines
//!
//! A command's output is not shown all at once. [`RevealSchedule`] pairs
//! each line with a delay that grows with its index; [`RevealQueue`] turns
//! those delays into due instants and hands lines back as time passes.
//! Due instants in the queue never decrease, so lines come out in the
//! order they were scheduled.

use crate::model::line::OutputLine;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Lines paired with their delay relative to a common start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealSchedule {
    entries: Vec<(OutputLine, Duration)>,
}

impl RevealSchedule {
    /// Line `i` is delayed by `i * step`.
    pub fn stagger<I>(lines: I, step: Duration) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OutputLine>,
    {
        let entries = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| (line.into(), step.saturating_mul(i as u32)))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[(OutputLine, Duration)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Delay of the last line, or zero when empty.
    pub fn span(&self) -> Duration {
        self.entries.last().map(|(_, d)| *d).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RevealQueue {
    pending: VecDeque<(Instant, OutputLine)>,
}

impl RevealQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `schedule` relative to `start`.
    ///
    /// A line is never due before the last line already queued, so a burst
    /// that is still revealing finishes before the next one starts.
    pub fn schedule(&mut self, schedule: RevealSchedule, start: Instant) {
        let base = self.last_due().map_or(start, |last| last.max(start));
        for (line, delay) in schedule.entries {
            self.pending.push_back((base + delay, line));
        }
    }

    /// Pop every line due at or before `now`, in order.
    pub fn due(&mut self, now: Instant) -> Vec<OutputLine> {
        let mut ready = Vec::new();
        while let Some((due, _)) = self.pending.front() {
            if *due > now {
                break;
            }
            if let Some((_, line)) = self.pending.pop_front() {
                ready.push(line);
            }
        }
        ready
    }

    /// Pop every pending line regardless of time.
    pub fn drain_all(&mut self) -> Vec<OutputLine> {
        self.pending.drain(..).map(|(_, line)| line).collect()
    }

    /// Drop pending lines without revealing them.
    pub fn cancel(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// When the last queued line becomes due.
    pub fn last_due(&self) -> Option<Instant> {
        self.pending.back().map(|(due, _)| *due)
    }

    /// When the next queued line becomes due.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.front().map(|(due, _)| *due)
    }
}
