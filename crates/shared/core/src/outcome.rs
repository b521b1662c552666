use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::party::Position;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionResult {
    /// The last recorded step was an accept: a deal closed.
    Agreement,
    /// The round budget ran out with an offer still on the table.
    NoAgreement,
    /// The session terminated without recording a single offer.
    Error,
}

/// Per-party line of an outcome summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyScore {
    /// Display name of the party implementation.
    pub agent: String,
    /// Utility credited to this party for the session.
    pub utility: Decimal,
}

/// Summary of one session, folded from its trace.
///
/// Created exactly once per session by the outcome reducer and immutable
/// thereafter. `nash_product` and `social_welfare` are always numerically
/// defined, zero whenever no deal closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    /// Count of offers and accepts in the trace. Omitted when the session
    /// terminated before producing any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_offers: Option<usize>,
    /// Scores keyed by negotiating seat.
    pub agents: BTreeMap<Position, PartyScore>,
    /// Product of both parties' credited utilities.
    pub nash_product: Decimal,
    /// Sum of both parties' credited utilities.
    pub social_welfare: Decimal,
    pub result: SessionResult,
}

impl OutcomeRecord {
    pub fn is_agreement(&self) -> bool {
        self.result == SessionResult::Agreement
    }

    pub fn score(&self, position: Position) -> Option<&PartyScore> {
        self.agents.get(&position)
    }
}
