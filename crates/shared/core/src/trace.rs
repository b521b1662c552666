use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::action::Action;
use crate::party::PartyId;
use crate::session::Participant;

/// Unique identifier for an executed session.
pub type SessionId = Uuid;

/// Immutable snapshot of one executed negotiation session.
///
/// Built by the protocol runner once the session has terminated; the
/// reduction stage only ever sees finalized values, never live protocol
/// state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTrace {
    pub session_id: SessionId,
    /// Protocol steps in execution order. Empty when the session terminated
    /// before any party acted.
    pub actions: Vec<Action>,
    /// Connection metadata for every party that joined the session.
    pub connections: BTreeMap<PartyId, Participant>,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
}

impl SessionTrace {
    pub fn new(
        actions: Vec<Action>,
        connections: BTreeMap<PartyId, Participant>,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
    ) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            actions,
            connections,
            started_at,
            ended_at,
        }
    }

    /// Snapshot for a session that terminated before recording any action.
    pub fn aborted(connections: BTreeMap<PartyId, Participant>, at: DateTime<Utc>) -> Self {
        Self::new(Vec::new(), connections, at, at)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Action annotated with every connected party's utility for its bid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredAction {
    pub action: Action,
    /// Utility of the carried bid per party; empty for actions without a
    /// bid.
    pub utilities: BTreeMap<PartyId, Decimal>,
}

/// Session trace with utilities attached to every offer and accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredTrace {
    pub session_id: SessionId,
    pub actions: Vec<ScoredAction>,
}

impl ScoredTrace {
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
