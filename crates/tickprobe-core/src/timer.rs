//! Timer source abstraction.
//!
//! The core treats the hardware timer as a black-box service with three
//! operations: query the counter frequency, read the counter, and request
//! the shortest sleep the OS will grant. The resolution and jitter of
//! these primitives are the quantity under measurement.

/// Sentinel returned when an underlying timer query fails.
///
/// Downstream stages do not distinguish this from a legitimate reading: a
/// failed probe flows through the median and the weighted average
/// unflagged, silently degrading the displayed value instead of halting
/// the program.
pub const TIMER_UNAVAILABLE: i64 = -1;

/// Access to the hardware timer under measurement.
///
/// The binary wraps the OS monotonic counter; tests substitute scripted
/// deterministic sequences.
pub trait TimerSource {
    /// Ticks per second of the counter, constant for the process lifetime.
    ///
    /// Returns [`TIMER_UNAVAILABLE`] when the counter cannot be queried.
    /// The value is deliberately never validated further downstream.
    fn frequency(&self) -> i64;

    /// Current counter value in ticks, monotonically non-decreasing.
    ///
    /// Returns [`TIMER_UNAVAILABLE`] on a failed query.
    fn now(&self) -> i64;

    /// Request the shortest sleep duration the OS will accept.
    ///
    /// Blocks only the calling thread. The wakeup latency of this call is
    /// what the sampler measures.
    fn sleep_min(&self);
}
