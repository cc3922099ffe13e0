//! Shared test doubles for the acceptance tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tickprobe_core::{ResultSink, ShutdownToken, TimerSource};

/// Deterministic timer source.
///
/// Replays a cycle of probe deltas and can optionally trip a shutdown
/// token after a fixed number of probes, simulating an interrupt arriving
/// mid-iteration.
pub struct FakeTimer {
    frequency: i64,
    deltas: Vec<i64>,
    now: Cell<i64>,
    probes: Cell<u64>,
    trip: Option<(u64, ShutdownToken)>,
}

impl FakeTimer {
    pub fn constant(frequency: i64, delta: i64) -> Self {
        Self::cycling(frequency, vec![delta])
    }

    pub fn cycling(frequency: i64, deltas: Vec<i64>) -> Self {
        assert!(!deltas.is_empty());
        Self {
            frequency,
            deltas,
            now: Cell::new(0),
            probes: Cell::new(0),
            trip: None,
        }
    }

    /// Request shutdown on `token` once `probes` probes have completed.
    pub fn trip_after_probes(mut self, probes: u64, token: ShutdownToken) -> Self {
        self.trip = Some((probes, token));
        self
    }
}

impl TimerSource for FakeTimer {
    fn frequency(&self) -> i64 {
        self.frequency
    }

    fn now(&self) -> i64 {
        self.now.get()
    }

    fn sleep_min(&self) {
        let probe = self.probes.get();
        let delta = self.deltas[(probe as usize) % self.deltas.len()];
        self.now.set(self.now.get() + delta);
        self.probes.set(probe + 1);

        if let Some((after, token)) = &self.trip {
            if self.probes.get() >= *after {
                token.request_shutdown();
            }
        }
    }
}

/// What a sink observed over a run.
#[derive(Default)]
pub struct Observed {
    pub init_calls: usize,
    pub reports: Vec<(f64, usize)>,
    pub shutdown_calls: usize,
}

/// Cloneable sink handle recording every callback.
#[derive(Clone, Default)]
pub struct CollectingSink(pub Rc<RefCell<Observed>>);

impl ResultSink for CollectingSink {
    fn initializing(&mut self) {
        self.0.borrow_mut().init_calls += 1;
    }

    fn report(&mut self, interval_ms: f64, spinner_phase: usize) {
        self.0.borrow_mut().reports.push((interval_ms, spinner_phase));
    }

    fn shutdown(&mut self) {
        self.0.borrow_mut().shutdown_calls += 1;
    }
}
