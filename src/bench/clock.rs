//! Injected time source for build and search timing.
//!
//! Timing is measurement only: a [`Clock`] reports monotonic elapsed time, and
//! [`measure`] wraps one contiguous region with two readings. Tests substitute a
//! [`SteppingClock`] so that reported durations are exact.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock: Send + Sync {
    /// Time elapsed since an arbitrary, fixed origin.
    fn now(&self) -> Duration;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Runs `f` and returns its result with the elapsed time in fractional milliseconds.
pub fn measure<C, T, F>(clock: &C, f: F) -> (T, f64)
where
    C: Clock + ?Sized,
    F: FnOnce() -> T,
{
    let start = clock.now();
    let out = f();
    let elapsed = clock.now().saturating_sub(start);
    (out, elapsed.as_secs_f64() * 1000.0)
}

/// Wall-clock time backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        MonotonicClock {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock that advances by a fixed step on every reading.
///
/// With [`measure`], every timed region therefore lasts exactly one step.
#[derive(Debug)]
pub struct SteppingClock {
    step_nanos: u64,
    ticks: AtomicU64,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        SteppingClock {
            step_nanos: u64::try_from(step.as_nanos()).unwrap_or(u64::MAX),
            ticks: AtomicU64::new(0),
        }
    }

    /// Number of readings taken so far.
    pub fn readings(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Duration {
        let tick = self.ticks.fetch_add(1, Ordering::Relaxed);
        Duration::from_nanos(tick.saturating_mul(self.step_nanos))
    }
}
