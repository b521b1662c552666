//! Parley Core Domain
//!
//! Pure domain types for the Parley negotiation pipeline.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod action;
pub mod bid;
pub mod error;
pub mod outcome;
pub mod party;
pub mod profile;
pub mod session;
pub mod trace;

// Re-export commonly used types at crate root
pub use action::Action;
pub use bid::Bid;
pub use error::{ConfigError, ConfigResult};
pub use outcome::{OutcomeRecord, PartyScore, SessionResult};
pub use party::{PartyId, PartyRef, Position};
pub use profile::ProfileRef;
pub use session::{Deadline, Participant, ROUND_DURATION_MS, SessionConfig};
pub use trace::{ScoredAction, ScoredTrace, SessionId, SessionTrace};
