//! Monotonic OS timer source.

use std::thread;
use std::time::Duration;

use nix::time::{clock_gettime, ClockId};
use tracing::debug;

use tickprobe_core::timer::{TimerSource, TIMER_UNAVAILABLE};

/// Ticks of [`MonotonicClock`] are nanoseconds.
const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Shortest sleep the interface can express. The kernel rounds the request
/// up to its wakeup granularity, which is exactly the quantity under
/// measurement.
const MIN_SLEEP: Duration = Duration::from_nanos(1);

/// Timer source backed by `clock_gettime(CLOCK_MONOTONIC)`.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    frequency: i64,
}

impl MonotonicClock {
    /// Probe the monotonic clock once and fix the frequency for the
    /// process lifetime.
    ///
    /// The tick unit is fixed at nanoseconds by the `clock_gettime`
    /// interface; a failed probe marks the whole timer unavailable.
    #[must_use]
    pub fn new() -> Self {
        let frequency = match clock_gettime(ClockId::CLOCK_MONOTONIC) {
            Ok(_) => NANOS_PER_SEC,
            Err(err) => {
                debug!(%err, "monotonic clock unavailable");
                TIMER_UNAVAILABLE
            }
        };
        Self { frequency }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerSource for MonotonicClock {
    fn frequency(&self) -> i64 {
        self.frequency
    }

    fn now(&self) -> i64 {
        match clock_gettime(ClockId::CLOCK_MONOTONIC) {
            Ok(ts) => i64::from(ts.tv_sec()) * NANOS_PER_SEC + i64::from(ts.tv_nsec()),
            Err(_) => TIMER_UNAVAILABLE,
        }
    }

    fn sleep_min(&self) {
        thread::sleep(MIN_SLEEP);
    }
}
