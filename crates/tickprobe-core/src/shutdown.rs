//! Cooperative shutdown token.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable cancellation token shared between the measurement loop and an
/// asynchronous notification context, typically a signal handler.
///
/// The flag is the only cross-context shared state in the program. Writes
/// and reads are atomic; the loop checks the token once per iteration
/// boundary, so cancellation is cooperative and never preemptive.
#[derive(Debug, Clone, Default)]
pub struct ShutdownToken {
    requested: Arc<AtomicBool>,
}

impl ShutdownToken {
    /// Create a token with no shutdown requested.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shutdown.
    ///
    /// Performs only an atomic store, so it is safe to call from any
    /// thread or from a signal handler.
    pub fn request_shutdown(&self) {
        self.requested.store(true, Ordering::Relaxed);
    }

    /// True once shutdown has been requested.
    #[inline]
    #[must_use]
    pub fn shutdown_requested(&self) -> bool {
        self.requested.load(Ordering::Relaxed)
    }
}
