//! Gaussian smoothing filter.
//!
//! The window is treated as a discretized Gaussian kernel centered on the
//! middle sample. A truncated discrete kernel does not integrate to 1
//! analytically, so the weights are renormalized after generation.

use std::f64::consts::PI;

use crate::error::{MeterError, MeterResult};
use crate::window::SampleWindow;

/// Normalized Gaussian weight vector over the smoothing window.
///
/// Computed once at startup and immutable thereafter.
#[derive(Debug, Clone)]
pub struct GaussianWeights {
    weights: Vec<f64>,
}

impl GaussianWeights {
    /// Build the weight vector for a window of `size` samples.
    ///
    /// # Errors
    ///
    /// Returns [`MeterError::Config`] unless `size` is a positive odd
    /// value; an even kernel has no center sample.
    pub fn build(size: usize) -> MeterResult<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(MeterError::Config(format!(
                "filter size must be a positive odd value, got {size}"
            )));
        }

        // Heuristic sigma so the kernel's visible support matches the
        // window width.
        let sigma = ((size as f64 / 2.0) - 1.0) / 3.0 + (1.0 / 3.0);

        let offset = (size / 2) as i64;
        let c1 = 1.0 / (sigma * (2.0 * PI).sqrt());
        let c2 = 2.0 * sigma * sigma;

        let mut weights = Vec::with_capacity(size);
        for i in 0..size {
            let x = (i as i64 - offset) as f64;
            weights.push(c1 * (-(x * x) / c2).exp());
        }

        let total: f64 = weights.iter().sum();
        for weight in &mut weights {
            *weight /= total;
        }

        Ok(Self { weights })
    }

    /// Number of weights, equal to the window size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True only for an unbuilt vector; [`build`](Self::build) never
    /// produces one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weights oldest-to-newest, summing to 1.0.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Weighted average over a full window, converted to milliseconds.
    ///
    /// Pure function: pairs each sample positionally with its weight,
    /// divides the weighted tick sum by `frequency`, and scales to
    /// milliseconds. The window length must equal the weight count;
    /// anything else is a programming error, not a runtime condition.
    #[must_use]
    pub fn smoothed_interval_ms(&self, window: &SampleWindow, frequency: i64) -> f64 {
        debug_assert_eq!(
            window.len(),
            self.weights.len(),
            "aggregation requires a full window"
        );

        let total: f64 = window
            .iter()
            .zip(&self.weights)
            .map(|(&sample, weight)| sample as f64 * weight)
            .sum();

        total / frequency as f64 * 1000.0
    }

    #[cfg(test)]
    pub(crate) fn from_raw(weights: Vec<f64>) -> Self {
        Self { weights }
    }
}
