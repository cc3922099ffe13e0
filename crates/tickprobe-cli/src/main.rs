//! tickprobe entry point.
//!
//! Wires the measurement core to the OS: monotonic clock, signal-driven
//! shutdown, best-effort priority elevation, console rendering, and a
//! last-resort fault supervisor. The program takes no arguments; the only
//! supported input is an interrupt signal.

mod clock;
mod console;
mod priority;
mod signals;

use std::process;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{error, info};

use tickprobe_core::{Meter, MeterConfig, ShutdownToken};

use crate::clock::MonotonicClock;
use crate::console::ConsoleSink;
use crate::priority::OsPriority;

/// Exit code for unrecoverable internal faults (EX_SOFTWARE).
const EXIT_FATAL: i32 = 70;

fn main() {
    init_logging();
    install_fault_supervisor();

    if let Err(err) = run() {
        error!("{err:#}");
        eprintln!("tickprobe: {err:#}");
        process::exit(1);
    }
}

/// Initialize logging to stderr, leaving stdout to the status line.
///
/// Honors `RUST_LOG` when set; defaults to `info`.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Convert any escaped panic into an abrupt fatal exit.
///
/// The hook prints a short notice and terminates the process immediately
/// with a distinct status: no unwinding, no recovery, no rerun, and none
/// of the normal shutdown messaging.
fn install_fault_supervisor() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("\ntickprobe: unhandled fault: {panic_info}");
        process::exit(EXIT_FATAL);
    }));
}

fn run() -> Result<()> {
    info!(version = env!("CARGO_PKG_VERSION"), "starting tickprobe");
    let started = Instant::now();

    let token = ShutdownToken::new();
    signals::register(&token).context("failed to set up signal handlers")?;

    let mut meter = Meter::new(MeterConfig::default(), MonotonicClock::new(), ConsoleSink::new())
        .context("invalid measurement configuration")?;

    let mut priority = OsPriority;
    meter
        .run(&token, &mut priority)
        .context("measurement loop failed")?;

    info!(
        samples = meter.samples_taken(),
        uptime = %humantime::format_duration(Duration::from_secs(started.elapsed().as_secs())),
        "tickprobe stopped"
    );

    Ok(())
}
