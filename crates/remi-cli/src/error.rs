use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] remi_core::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No reminder title provided")]
    EmptyTitle,
    #[error("Unrecognized due time: {0}")]
    InvalidDueTime(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
