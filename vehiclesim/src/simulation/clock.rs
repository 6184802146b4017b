//! Simulation clock anchored to wall-clock time.
//!
//! The clock stores only the instant the simulation was (re)started. The
//! current waypoint index is never stored; it is derived on every read from
//! the time elapsed since that anchor, so any number of concurrent readers
//! always agree on the index for a given instant.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Mutex, RwLock};

/// Source of "now" for the simulation clock.
///
/// Production code uses [`SystemTimeSource`]; tests drive a
/// [`ManualTimeSource`] to land on exact step boundaries.
pub trait TimeSource: Send + Sync {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Monotonic system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Time source that only moves when told to.
#[derive(Debug)]
pub struct ManualTimeSource {
    base: Instant,
    offset: Mutex<Duration>,
}

impl Default for ManualTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualTimeSource {
    /// Create a time source frozen at the current instant.
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    /// Move time forward by `by`.
    pub fn advance(&self, by: Duration) {
        *self.offset.lock() += by;
    }

    /// Total time advanced since creation.
    pub fn offset(&self) -> Duration {
        *self.offset.lock()
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock()
    }
}

/// Start anchor and reset counter, always read and written together.
#[derive(Debug, Clone, Copy)]
struct ClockAnchor {
    started_at: Instant,
    resets: u64,
}

/// Point-in-time view of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    /// Time since the last start or reset.
    pub elapsed: Duration,
    /// Number of resets since the process started.
    pub resets: u64,
}

/// Simulation clock shared by position queries and resets.
pub struct SimulationClock {
    anchor: RwLock<ClockAnchor>,
    time_source: Arc<dyn TimeSource>,
}

impl std::fmt::Debug for SimulationClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationClock")
            .field("anchor", &*self.anchor.read())
            .finish_non_exhaustive()
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::system()
    }
}

impl SimulationClock {
    /// Create a clock started now, according to `time_source`.
    pub fn new(time_source: Arc<dyn TimeSource>) -> Self {
        let started_at = time_source.now();
        Self {
            anchor: RwLock::new(ClockAnchor {
                started_at,
                resets: 0,
            }),
            time_source,
        }
    }

    /// Create a clock driven by system time.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemTimeSource))
    }

    /// Elapsed time and reset count, read under one lock.
    pub fn snapshot(&self) -> ClockSnapshot {
        let anchor = *self.anchor.read();
        ClockSnapshot {
            elapsed: self
                .time_source
                .now()
                .saturating_duration_since(anchor.started_at),
            resets: anchor.resets,
        }
    }

    /// Time since the last start or reset.
    pub fn elapsed(&self) -> Duration {
        self.snapshot().elapsed
    }

    /// Number of whole `step` intervals elapsed since the last start or reset.
    ///
    /// A zero `step` is treated as one nanosecond.
    pub fn elapsed_steps(&self, step: Duration) -> u64 {
        let step_nanos = step.as_nanos().max(1);
        (self.elapsed().as_nanos() / step_nanos) as u64
    }

    /// Re-anchor the clock to now. Returns the new reset count.
    pub fn reset(&self) -> u64 {
        let now = self.time_source.now();
        let mut anchor = self.anchor.write();
        anchor.started_at = now;
        anchor.resets += 1;
        anchor.resets
    }
}
