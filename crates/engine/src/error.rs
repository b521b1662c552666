use parley_core::ConfigError;
use parley_ports::ResolveError;
use thiserror::Error;

/// Errors that abort a run before or between sessions.
///
/// Per-session runner failures never surface here; the executor adapter
/// converts them into ERROR outcomes instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
