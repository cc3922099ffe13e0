//! End-to-end measurement pipeline scenarios.

use tickprobe_core::{Meter, MeterConfig, NoPriority, ShutdownToken};

use super::common::{CollectingSink, FakeTimer};

fn config(max_samples: u64) -> MeterConfig {
    MeterConfig {
        max_samples,
        ..MeterConfig::default()
    }
}

#[test]
fn test_constant_delta_displays_exact_interval() {
    // Constant 1000-tick deltas at 1 MHz: after the 11th sample fills the
    // window the displayed result must be exactly 1.0 ms, because the
    // weights sum to 1 and every sample is equal.
    let sink = CollectingSink::default();
    let timer = FakeTimer::constant(1_000_000, 1000);
    let mut meter = Meter::new(config(11), timer, sink.clone()).unwrap();

    meter.run(&ShutdownToken::new(), &mut NoPriority).unwrap();

    let observed = sink.0.borrow();
    assert_eq!(observed.init_calls, 1);
    assert_eq!(observed.reports.len(), 1);
    let (interval_ms, _) = observed.reports[0];
    assert!((interval_ms - 1.0).abs() < 1e-9, "got {interval_ms}");
    assert_eq!(observed.shutdown_calls, 1);
}

#[test]
fn test_report_every_iteration_once_window_full() {
    let sink = CollectingSink::default();
    let timer = FakeTimer::constant(1_000_000, 1000);
    let mut meter = Meter::new(config(30), timer, sink.clone()).unwrap();

    meter.run(&ShutdownToken::new(), &mut NoPriority).unwrap();
    assert_eq!(meter.samples_taken(), 30);

    let observed = sink.0.borrow();
    // Samples 1-10 produce nothing; samples 11-30 each produce a report.
    assert_eq!(observed.reports.len(), 20);

    // Spinner advances one phase per report, cycling through four phases.
    for (i, &(_, phase)) in observed.reports.iter().enumerate() {
        assert_eq!(phase, i % 4);
    }
}

#[test]
fn test_smoothed_result_stays_within_sample_range() {
    // Alternating 900/1100-tick probes: whatever the kernel does, a
    // weighted average with weights summing to 1 must stay inside the
    // observed sample range.
    let sink = CollectingSink::default();
    let timer = FakeTimer::cycling(1_000_000, vec![900, 1100]);
    let mut meter = Meter::new(config(40), timer, sink.clone()).unwrap();

    meter.run(&ShutdownToken::new(), &mut NoPriority).unwrap();

    let observed = sink.0.borrow();
    assert!(!observed.reports.is_empty());
    for &(interval_ms, _) in &observed.reports {
        assert!(
            (0.9..=1.1).contains(&interval_ms),
            "smoothed {interval_ms} left the sample range"
        );
    }
}

#[test]
fn test_unavailable_timer_degrades_silently() {
    // A frequency of -1 is the "timer unavailable" sentinel. The design
    // forwards it unvalidated: the loop must keep running and reporting
    // (meaningless) numbers rather than fail.
    let sink = CollectingSink::default();
    let timer = FakeTimer::constant(-1, 1000);
    let mut meter = Meter::new(config(12), timer, sink.clone()).unwrap();

    meter.run(&ShutdownToken::new(), &mut NoPriority).unwrap();

    let observed = sink.0.borrow();
    assert_eq!(observed.reports.len(), 2);
    assert_eq!(observed.shutdown_calls, 1);
}
