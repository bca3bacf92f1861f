//! Time source abstraction for testability.
//!
//! Production code reads the system clock through `RealTimeSource`; tests use
//! `TestTimeSource`, whose logical clock only moves when told to. The reveal
//! queue, the refocus timer, the matrix effect and the `uptime`/`date`
//! commands all read time through this trait.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Format used by the `date` command, e.g. `Wed Oct 14 2026 09:30:00 GMT+0200`.
pub const DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Abstraction over time-related operations.
pub trait TimeSource: Send + Sync + std::fmt::Debug {
    /// Get the current instant for measuring elapsed time.
    fn now(&self) -> Instant;

    /// Current wall-clock date and time, formatted with [`DATE_FORMAT`].
    fn local_timestamp(&self) -> String;

    /// Calculate elapsed time since an earlier instant.
    fn elapsed_since(&self, earlier: Instant) -> Duration {
        self.now().saturating_duration_since(earlier)
    }
}

/// Type alias for shared time source.
pub type SharedTimeSource = Arc<dyn TimeSource>;

/// Production implementation using actual system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeSource;

impl RealTimeSource {
    pub fn new() -> Self {
        Self
    }

    pub fn shared() -> SharedTimeSource {
        Arc::new(Self)
    }
}

impl TimeSource for RealTimeSource {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn local_timestamp(&self) -> String {
        Local::now().format(DATE_FORMAT).to_string()
    }
}

/// Test implementation with controllable time.
///
/// - `now()` returns a logical instant based on an internal counter
/// - `advance()` moves logical time forward
/// - `local_timestamp()` is `base_datetime` plus logical elapsed time, in UTC
///
/// # Example
///
/// ```
/// use command_center::services::time_source::{TimeSource, TestTimeSource};
/// use std::time::Duration;
///
/// let time = TestTimeSource::new();
/// let start = time.now();
///
/// time.advance(Duration::from_secs(5));
///
/// assert!(time.elapsed_since(start) >= Duration::from_secs(5));
/// ```
#[derive(Debug)]
pub struct TestTimeSource {
    /// Logical time in nanoseconds since creation.
    logical_nanos: AtomicU64,
    /// Real instant at creation, used for Instant arithmetic.
    base_instant: Instant,
    /// Wall-clock time corresponding to logical zero.
    base_datetime: DateTime<Utc>,
}

impl Default for TestTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTimeSource {
    /// Create a TestTimeSource whose wall clock starts at 2024-01-01 00:00:00 UTC.
    pub fn new() -> Self {
        let base_datetime = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        Self {
            logical_nanos: AtomicU64::new(0),
            base_instant: Instant::now(),
            base_datetime,
        }
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Advance logical time by the given duration.
    pub fn advance(&self, duration: Duration) {
        self.logical_nanos
            .fetch_add(duration.as_nanos() as u64, Ordering::SeqCst);
    }

    /// Get the logical elapsed time since creation.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.logical_nanos.load(Ordering::SeqCst))
    }

    pub fn reset(&self) {
        self.logical_nanos.store(0, Ordering::SeqCst);
    }
}

impl TimeSource for TestTimeSource {
    fn now(&self) -> Instant {
        self.base_instant + self.elapsed()
    }

    fn local_timestamp(&self) -> String {
        let elapsed = chrono::Duration::from_std(self.elapsed()).unwrap_or_default();
        (self.base_datetime + elapsed).format(DATE_FORMAT).to_string()
    }
}
