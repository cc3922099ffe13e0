//! Unix signal handling for cooperative shutdown.
//!
//! SIGINT and SIGTERM trip the shutdown token; the handler body is
//! async-signal-safe because it performs nothing beyond an atomic store
//! into the token's flag. The main loop observes the flag at its next
//! iteration boundary.

use std::io;
use std::sync::OnceLock;

use tracing::debug;

use tickprobe_core::ShutdownToken;

static SHUTDOWN_TOKEN: OnceLock<ShutdownToken> = OnceLock::new();

/// Register SIGINT and SIGTERM handlers that trip `token`.
///
/// # Errors
///
/// Fails if handlers were already registered or cannot be installed.
pub fn register(token: &ShutdownToken) -> io::Result<()> {
    SHUTDOWN_TOKEN.set(token.clone()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            "shutdown signal handlers already registered",
        )
    })?;

    #[cfg(unix)]
    register_unix()?;

    Ok(())
}

#[cfg(unix)]
fn register_unix() -> io::Result<()> {
    use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

    extern "C" fn handle_shutdown(_: libc::c_int) {
        if let Some(token) = SHUTDOWN_TOKEN.get() {
            token.request_shutdown();
        }
    }

    let action = SigAction::new(
        SigHandler::Handler(handle_shutdown),
        SaFlags::empty(),
        SigSet::empty(),
    );

    for signal in [Signal::SIGINT, Signal::SIGTERM] {
        // SAFETY: the handler only performs an atomic store.
        let installed = unsafe { sigaction(signal, &action) };
        installed.map_err(io::Error::from)?;
    }

    debug!("shutdown signal handlers registered");
    Ok(())
}
