//! Lifecycle state machine for the measurement loop.
//!
//! Transitions follow a strict forward progression:
//! INITIALIZING → RUNNING → SHUTTING_DOWN → TERMINATED

use std::fmt;

use crate::error::{MeterError, MeterResult};

/// Lifecycle states of the measurement loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeterState {
    /// Startup: frequency query, filter construction, signal registration.
    #[default]
    Initializing,
    /// Continuous measure/smooth/report iterations.
    Running,
    /// Cooperative shutdown observed; exit notice pending.
    ShuttingDown,
    /// Loop exited; nothing further will run.
    Terminated,
}

impl fmt::Display for MeterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initializing => write!(f, "INITIALIZING"),
            Self::Running => write!(f, "RUNNING"),
            Self::ShuttingDown => write!(f, "SHUTTING_DOWN"),
            Self::Terminated => write!(f, "TERMINATED"),
        }
    }
}

impl MeterState {
    /// Check if a transition to `target` is valid from the current state.
    #[must_use]
    pub fn can_transition_to(self, target: MeterState) -> bool {
        use MeterState::{Initializing, Running, ShuttingDown, Terminated};

        matches!(
            (self, target),
            (Initializing, Running)
                // a shutdown request observed during startup skips the run phase
                | (Initializing, ShuttingDown)
                | (Running, ShuttingDown)
                | (ShuttingDown, Terminated)
        )
    }

    /// Attempt to transition to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`MeterError::InvalidStateTransition`] if the transition is
    /// not in the table; this indicates a programming error, never a
    /// runtime condition.
    pub fn transition_to(&mut self, target: MeterState) -> MeterResult<()> {
        if self.can_transition_to(target) {
            *self = target;
            Ok(())
        } else {
            Err(MeterError::InvalidStateTransition {
                from: self.to_string(),
                to: target.to_string(),
            })
        }
    }
}
