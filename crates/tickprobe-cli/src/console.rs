//! Console rendering for the status line.
//!
//! All meter output goes to stdout as a single line redrawn in place with
//! a carriage return; log records go to stderr so the two never collide.

use std::io::{self, Write};

use tickprobe_core::meter::{ResultSink, SPINNER_PHASES};

/// Spinner glyphs cycled on the status line.
const SPINNER: [char; SPINNER_PHASES] = ['/', '-', '\\', '|'];

/// Renders meter output on stdout. Write failures are swallowed; losing a
/// redraw is preferable to killing the measurement loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Create a console sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn format_status(interval_ms: f64, spinner_phase: usize) -> String {
    format!(
        "\rCurrent Timer Interval: {interval_ms:4.1} ms [{}]",
        SPINNER[spinner_phase % SPINNER_PHASES]
    )
}

impl ResultSink for ConsoleSink {
    fn initializing(&mut self) {
        let mut out = io::stdout();
        // No newline after the last line: the first status redraw
        // overwrites it in place.
        let _ = write!(
            out,
            "tickprobe - Timer Interval Monitor [v{}]\n\nInitializing...",
            env!("CARGO_PKG_VERSION")
        );
        let _ = out.flush();
    }

    fn report(&mut self, interval_ms: f64, spinner_phase: usize) {
        let mut out = io::stdout();
        let _ = out.write_all(format_status(interval_ms, spinner_phase).as_bytes());
        let _ = out.flush();
    }

    fn shutdown(&mut self) {
        let mut out = io::stdout();
        let _ = write!(out, "\n\nInterrupt received: exiting now...\n\n");
        let _ = out.flush();
    }
}
