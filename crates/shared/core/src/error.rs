use thiserror::Error;

/// Validation errors raised before any session executes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Malformed caller input (too few parties, wrong list shape).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A session configuration failed validation.
    #[error("invalid session config: {0}")]
    InvalidConfig(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
