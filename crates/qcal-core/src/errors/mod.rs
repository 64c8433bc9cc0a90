mod config_error;

pub use config_error::ConfigError;

/// Top-level error for every fallible engine operation.
#[derive(Debug, thiserror::Error)]
pub enum QcalError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("invalid distribution: {reason}")]
    InvalidDistribution { reason: String },

    #[error("session {session_id} is already completed")]
    SessionCompleted { session_id: String },

    #[error("session {session_id} has no measurements")]
    EmptySession { session_id: String },

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type QcalResult<T> = Result<T, QcalError>;
