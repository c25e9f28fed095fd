//! Wall-clock Timing
//!
//! Monotonic timing built on `std::time::Instant`, reported with nanosecond
//! resolution.

use std::time::{Duration, Instant};

/// Timer for measuring a single scan
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time since `start`
    #[inline(always)]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Run `f` and return its output together with the wall-clock time it took.
#[inline]
pub fn timed<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let timer = Timer::start();
    let out = std::hint::black_box(f());
    (out, timer.elapsed())
}
