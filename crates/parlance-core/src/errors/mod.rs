mod config_error;

pub use config_error::ConfigError;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum ParlanceError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("observability setup failed: {reason}")]
    Observability { reason: String },
}

pub type ParlanceResult<T> = Result<T, ParlanceError>;
