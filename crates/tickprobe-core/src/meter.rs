//! Main measurement control loop.
//!
//! Each iteration applies the best-effort priority hint, takes one
//! noise-reduced sample, feeds the sliding window, and once the window is
//! full recomputes the Gaussian-weighted aggregate and reports it together
//! with the current spinner phase.

use tracing::{debug, info};

use crate::config::MeterConfig;
use crate::error::MeterResult;
use crate::filter::GaussianWeights;
use crate::sampler;
use crate::shutdown::ShutdownToken;
use crate::state::MeterState;
use crate::timer::{TimerSource, TIMER_UNAVAILABLE};
use crate::window::SampleWindow;

/// Phases of the rotating status-line indicator.
pub const SPINNER_PHASES: usize = 4;

/// Best-effort scheduling priority hint, applied once per iteration.
///
/// Implementations try an ordered list of preferences and swallow every
/// failure: elevation is a performance hint, never a correctness
/// requirement, and it must not be escalated to an error.
pub trait PriorityHint {
    /// Attempt to elevate the scheduling priority of the calling thread.
    fn apply(&mut self);
}

/// No-op priority hint for tests and platforms without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPriority;

impl PriorityHint for NoPriority {
    fn apply(&mut self) {}
}

/// Consumer of lifecycle notices and smoothed results.
pub trait ResultSink {
    /// Called once as the meter starts initializing.
    fn initializing(&mut self);

    /// Called on every full-window iteration with the smoothed interval in
    /// milliseconds and the spinner phase in `0..SPINNER_PHASES`.
    fn report(&mut self, interval_ms: f64, spinner_phase: usize);

    /// Called exactly once when the loop shuts down cooperatively.
    fn shutdown(&mut self);
}

/// The measurement loop.
///
/// Owns all pipeline state; the only state shared with other execution
/// contexts is the [`ShutdownToken`] passed to [`run`](Self::run).
pub struct Meter<T, S> {
    config: MeterConfig,
    timer: T,
    sink: S,
    weights: GaussianWeights,
    window: SampleWindow,
    state: MeterState,
    spinner: usize,
    samples_taken: u64,
}

impl<T: TimerSource, S: ResultSink> Meter<T, S> {
    /// Create a meter, building the smoothing filter up front.
    ///
    /// # Errors
    ///
    /// Fails fast with [`crate::MeterError::Config`] if the window size is
    /// not a positive odd value. No measurement begins in that case.
    pub fn new(config: MeterConfig, timer: T, sink: S) -> MeterResult<Self> {
        config.validate()?;
        let weights = GaussianWeights::build(config.window_size)?;
        let window = SampleWindow::new(config.window_size);

        Ok(Self {
            config,
            timer,
            sink,
            weights,
            window,
            state: MeterState::Initializing,
            spinner: 0,
            samples_taken: 0,
        })
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> MeterState {
        self.state
    }

    /// Samples taken so far.
    #[must_use]
    pub fn samples_taken(&self) -> u64 {
        self.samples_taken
    }

    /// Run the loop until shutdown is requested, or until the configured
    /// sample cap is reached.
    ///
    /// The token is checked once per iteration boundary; a request arriving
    /// mid-iteration lets the iteration finish, so at most one further full
    /// iteration runs after the flag is set. Sampling failures are never
    /// retried; a corrupted sample degrades the reported value silently.
    ///
    /// # Errors
    ///
    /// Only lifecycle bookkeeping can fail, and an invalid transition is a
    /// programming error surfaced as [`crate::MeterError`].
    pub fn run(
        &mut self,
        token: &ShutdownToken,
        priority: &mut dyn PriorityHint,
    ) -> MeterResult<()> {
        self.sink.initializing();

        // Queried once; constant for the process lifetime. -1 (timer
        // unavailable) deliberately flows through unvalidated.
        let frequency = self.timer.frequency();
        if frequency == TIMER_UNAVAILABLE {
            debug!("timer frequency unavailable, reported intervals will be meaningless");
        }
        info!(
            frequency,
            window_size = self.config.window_size,
            "meter initialized"
        );

        self.state.transition_to(MeterState::Running)?;

        while !token.shutdown_requested() {
            priority.apply();

            self.window.push(sampler::measure_interval(&self.timer));
            self.samples_taken += 1;

            if self.window.is_full() {
                let interval_ms = self.weights.smoothed_interval_ms(&self.window, frequency);
                self.sink.report(interval_ms, self.spinner);
                self.spinner = (self.spinner + 1) % SPINNER_PHASES;
            }

            // Periodic progress record (kept below the default log level).
            if self.samples_taken % 10_000 == 0 {
                debug!(samples = self.samples_taken, "measurement progress");
            }

            if self.config.max_samples > 0 && self.samples_taken >= self.config.max_samples {
                debug!(samples = self.samples_taken, "sample cap reached");
                break;
            }
        }

        self.state.transition_to(MeterState::ShuttingDown)?;
        self.sink.shutdown();
        info!(samples = self.samples_taken, "meter stopped");
        self.state.transition_to(MeterState::Terminated)?;

        Ok(())
    }
}
