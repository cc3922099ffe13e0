//! Measurement core for the tickprobe timer interval monitor.
//!
//! Composes three stages into a continuous loop: a median-of-5 sampler
//! over an injected [`timer::TimerSource`], a fixed-capacity
//! [`window::SampleWindow`] of the most recent samples, and a
//! Gaussian-weighted aggregate ([`filter::GaussianWeights`]) converted to
//! milliseconds. All OS collaborators (timer, priority hint, output sink)
//! enter through traits, so the whole pipeline runs deterministically
//! under test.

pub mod config;
pub mod error;
pub mod filter;
pub mod meter;
pub mod sampler;
pub mod shutdown;
pub mod state;
pub mod timer;
pub mod window;

pub use config::MeterConfig;
pub use error::{MeterError, MeterResult};
pub use filter::GaussianWeights;
pub use meter::{Meter, NoPriority, PriorityHint, ResultSink};
pub use sampler::measure_interval;
pub use shutdown::ShutdownToken;
pub use state::MeterState;
pub use timer::{TimerSource, TIMER_UNAVAILABLE};
pub use window::SampleWindow;
