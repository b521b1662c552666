use thiserror::Error;

/// Failures raised by the external protocol runner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A party reference could not be connected to an implementation.
    #[error("party connection failed: {0}")]
    Connection(String),

    /// The protocol loop failed before the session could finish.
    #[error("protocol failure: {0}")]
    Protocol(String),
}

pub type RunnerResult<T> = std::result::Result<T, SessionError>;

/// A profile resource could not be turned into a utility space.
///
/// Not recoverable locally: without utilities nothing can be scored, so
/// this error always propagates to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("profile not found: {0}")]
    NotFound(String),

    #[error("malformed profile {resource}: {reason}")]
    Malformed { resource: String, reason: String },
}

pub type ResolveResult<T> = std::result::Result<T, ResolveError>;
