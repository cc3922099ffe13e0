//! Best-effort scheduling priority elevation.
//!
//! Two ordered tiers tried once per loop iteration: real-time `SCHED_FIFO`
//! scheduling first, then the highest conventional nice level. Both
//! commonly fail without CAP_SYS_NICE or root; failure is logged once and
//! otherwise swallowed, never escalated to an error.

use std::sync::Once;

use tracing::warn;

use tickprobe_core::meter::PriorityHint;

/// FIFO priority requested for the measurement thread. Modest on purpose:
/// the loop spends nearly all of its time asleep.
#[cfg(target_os = "linux")]
const RT_PRIORITY: libc::c_int = 10;

/// Nice level for the fallback tier.
#[cfg(unix)]
const NICE_HIGHEST: libc::c_int = -20;

static PRIORITY_WARNING: Once = Once::new();

/// Two-tier best-effort priority hint over the OS scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsPriority;

impl PriorityHint for OsPriority {
    fn apply(&mut self) {
        if try_realtime() || try_nice() {
            return;
        }
        PRIORITY_WARNING.call_once(|| {
            warn!("could not elevate scheduling priority, continuing at normal priority");
        });
    }
}

#[cfg(target_os = "linux")]
fn try_realtime() -> bool {
    let param = libc::sched_param {
        sched_priority: RT_PRIORITY,
    };

    // SAFETY: syscall on the current process with a valid param struct.
    let rc = unsafe { libc::sched_setscheduler(0, libc::SCHED_FIFO, &param) };
    rc == 0
}

#[cfg(not(target_os = "linux"))]
fn try_realtime() -> bool {
    false
}

#[cfg(unix)]
fn try_nice() -> bool {
    // SAFETY: syscall on the current process.
    let rc = unsafe { libc::setpriority(libc::PRIO_PROCESS as _, 0, NICE_HIGHEST) };
    rc == 0
}

#[cfg(not(unix))]
fn try_nice() -> bool {
    false
}
