//! Parley Engine
//!
//! Tournament orchestration and outcome aggregation for two-party
//! negotiation experiments:
//!
//! - **Pairing enumeration**: every ordered pairing of distinct parties
//! - **Session config building**: validated, seat-bound session settings
//! - **Session execution**: boundary adapter over the external protocol runner
//! - **Outcome reduction**: folds a raw trace into a structured outcome
//! - **Tournament driving**: profile sets x pairings, run sequentially
//!
//! ## Data flow
//!
//! ```text
//! TournamentDriver
//!     │  per profile set, per ordered pairing
//!     ▼
//! build_session_config ──▶ execute_session ──▶ reduce
//!                              (runner port)      │
//!                                                 ▼
//!                                     (SessionConfig, OutcomeRecord)
//! ```
//!
//! Strategy implementations, the protocol state machine and profile parsing
//! live behind the `parley-ports` traits; this crate only orchestrates and
//! aggregates.

pub mod builder;
pub mod error;
pub mod executor;
pub mod pairing;
pub mod reducer;
pub mod session;
pub mod tournament;

// Re-export main types
pub use builder::{SessionSettings, build_session_config};
pub use error::{EngineError, EngineResult};
pub use executor::execute_session;
pub use pairing::ordered_pairs;
pub use reducer::reduce;
pub use session::{SessionReport, run_session};
pub use tournament::{
    TournamentDriver, TournamentEntry, TournamentResult, TournamentSettings, TournamentSummary,
};
