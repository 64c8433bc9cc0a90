/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {reason}")]
    Parse { reason: String },

    #[error("tank threshold {tank} exceeds ocean threshold {ocean}")]
    ThresholdOrder { tank: f64, ocean: f64 },

    #[error("{field} out of range: {value}")]
    OutOfRange { field: String, value: f64 },

    #[error("session interval must be at least one second")]
    ZeroInterval,
}
