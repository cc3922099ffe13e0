//! Noise-reduced latency sampling.

use tracing::debug;

use crate::timer::{TimerSource, TIMER_UNAVAILABLE};

/// Raw sleep/wake probes folded into a single sample.
pub const PROBES_PER_SAMPLE: usize = 5;

/// Measure one sleep/wake latency sample, in timer ticks.
///
/// Takes five raw delta measurements (read counter, request minimal
/// sleep, read counter) and returns their median. A single probe is
/// dominated by scheduler jitter; the median rejects a preempted outlier
/// where a mean would drag it into the result.
///
/// A failed counter read leaves its sentinel in the delta, which can
/// corrupt the median. That degradation is accepted and logged at debug
/// level only; the sample is never rejected or clamped.
pub fn measure_interval<T: TimerSource + ?Sized>(timer: &T) -> i64 {
    let mut deltas = [0i64; PROBES_PER_SAMPLE];

    for delta in &mut deltas {
        let begin = timer.now();
        timer.sleep_min();
        let end = timer.now();

        if begin == TIMER_UNAVAILABLE || end == TIMER_UNAVAILABLE {
            debug!("timer query failed during probe");
        }

        *delta = end - begin;
    }

    deltas.sort_unstable();
    deltas[PROBES_PER_SAMPLE / 2]
}
