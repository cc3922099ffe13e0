//! Configuration for the measurement loop.
//!
//! The window size and kernel shape are fixed design parameters of the
//! tool, not a tunable surface: there is no file, flag, or environment
//! variable that feeds this struct. It exists so the loop and its tests
//! share one validated description of the pipeline.

use crate::error::{MeterError, MeterResult};

/// Measurement loop configuration.
#[derive(Debug, Clone)]
pub struct MeterConfig {
    /// Number of samples in the smoothing window. Must be a positive odd
    /// value so the Gaussian kernel has a center sample.
    pub window_size: usize,

    /// Stop after this many samples; 0 runs until shutdown is requested.
    pub max_samples: u64,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            window_size: 11,
            max_samples: 0,
        }
    }
}

impl MeterConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MeterError::Config`] if the window size is zero or even.
    /// This is the one validated input in the system; it is checked before
    /// any measurement begins.
    pub fn validate(&self) -> MeterResult<()> {
        if self.window_size == 0 || self.window_size % 2 == 0 {
            return Err(MeterError::Config(format!(
                "window size must be a positive odd value, got {}",
                self.window_size
            )));
        }
        Ok(())
    }
}
