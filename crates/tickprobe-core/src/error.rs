use thiserror::Error;

/// Meter error types covering configuration and lifecycle faults.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeterError {
    /// Configuration or initialization error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid lifecycle state transition attempted.
    #[error("invalid state transition from {from} to {to}")]
    InvalidStateTransition {
        /// Source state.
        from: String,
        /// Attempted target state.
        to: String,
    },
}

/// Convenience type alias for meter operations.
pub type MeterResult<T> = Result<T, MeterError>;
