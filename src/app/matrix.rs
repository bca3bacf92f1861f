//! Matrix rain overlay
//!
//! A timed, self-terminating effect: one falling drop per column, each frame
//! writing a random glyph at the drop's head while older glyphs fade. The
//! effect expires after its configured duration no matter what the user
//! does. Only one instance exists at a time; launching again while active
//! restarts the deadline of the running one.

use crate::config::MatrixConfig;
use crate::services::random::RandomSource;
use std::time::{Duration, Instant};

pub const MATRIX_GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Drops start up to this many rows above the top edge.
const MAX_START_OFFSET: f64 = 100.0;
/// Chance per frame that a drop past the bottom edge restarts at the top.
const RESET_PROBABILITY: f64 = 0.02;
/// Brightness lost by every cell each frame.
const FADE_STEP: u8 = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixCell {
    pub glyph: char,
    /// 255 at the head of a drop, fading to 0
    pub brightness: u8,
}

#[derive(Debug, Clone)]
pub struct MatrixRain {
    columns: u16,
    rows: u16,
    /// Head row of each column's drop; negative while above the screen
    drops: Vec<i32>,
    cells: Vec<Option<MatrixCell>>,
    frame_interval: Duration,
    duration: Duration,
    deadline: Instant,
    next_frame: Instant,
    frames: u64,
}

impl MatrixRain {
    pub fn start(
        now: Instant,
        columns: u16,
        rows: u16,
        random: &dyn RandomSource,
        config: &MatrixConfig,
    ) -> Self {
        tracing::debug!("Starting matrix rain {}x{}", columns, rows);
        let drops = (0..columns)
            .map(|_| -(random.next_unit() * MAX_START_OFFSET) as i32)
            .collect();
        Self {
            columns,
            rows,
            drops,
            cells: vec![None; columns as usize * rows as usize],
            frame_interval: config.frame_interval(),
            duration: config.duration(),
            deadline: now + config.duration(),
            next_frame: now,
            frames: 0,
        }
    }

    /// Push the deadline out to a full duration from `now`.
    pub fn restart(&mut self, now: Instant) {
        tracing::debug!("Matrix rain relaunched while active, restarting deadline");
        self.deadline = now + self.duration;
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<MatrixCell> {
        if x >= self.columns || y >= self.rows {
            return None;
        }
        self.cells[y as usize * self.columns as usize + x as usize]
    }

    /// Run every frame due by `now`. Returns true if anything changed.
    pub fn tick(&mut self, now: Instant, random: &dyn RandomSource) -> bool {
        let mut advanced = false;
        let until = now.min(self.deadline);
        while self.next_frame <= until {
            self.frame(random);
            self.next_frame += self.frame_interval;
            advanced = true;
        }
        advanced
    }

    fn frame(&mut self, random: &dyn RandomSource) {
        self.frames += 1;
        for cell in self.cells.iter_mut() {
            if let Some(c) = cell {
                c.brightness = c.brightness.saturating_sub(FADE_STEP);
                if c.brightness == 0 {
                    *cell = None;
                }
            }
        }

        let rows = i32::from(self.rows);
        for x in 0..self.columns as usize {
            let head = self.drops[x];
            if (0..rows).contains(&head) {
                let glyph = MATRIX_GLYPHS[random.next_index(MATRIX_GLYPHS.len())] as char;
                self.cells[head as usize * self.columns as usize + x] = Some(MatrixCell {
                    glyph,
                    brightness: u8::MAX,
                });
            }
            if head > rows && random.next_unit() < RESET_PROBABILITY {
                self.drops[x] = 0;
            }
            self.drops[x] += 1;
        }
    }
}
