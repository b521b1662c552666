use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::party::{PartyId, PartyRef, Position};
use crate::profile::ProfileRef;

/// Default per-round duration, in milliseconds.
pub const ROUND_DURATION_MS: u64 = 999;

/// One side of a negotiation: a party bound to its preference profile and
/// its seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub party: PartyRef,
    pub profile: ProfileRef,
    pub position: Position,
}

impl Participant {
    pub fn new(party: PartyRef, profile: ProfileRef, position: Position) -> Self {
        Self {
            party,
            profile,
            position,
        }
    }

    /// Session-local identifier of this participant's connection.
    pub fn id(&self) -> PartyId {
        PartyId::for_position(self.position)
    }
}

/// Round budget for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deadline {
    /// Maximum number of offer/accept exchanges before the session is cut
    /// off without agreement.
    pub rounds: u32,
    /// Wall-clock allowance per round, in milliseconds.
    pub round_duration_ms: u64,
}

impl Deadline {
    pub fn rounds(rounds: u32) -> Self {
        Self {
            rounds,
            round_duration_ms: ROUND_DURATION_MS,
        }
    }
}

/// Fully-specified settings for one negotiation session.
///
/// Holds exactly two participants by construction. Consumed once by the
/// protocol runner and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub participants: [Participant; 2],
    pub deadline: Deadline,
}

impl SessionConfig {
    pub fn new(participants: [Participant; 2], deadline: Deadline) -> Self {
        Self {
            participants,
            deadline,
        }
    }

    pub fn participant(&self, position: Position) -> &Participant {
        &self.participants[position.index()]
    }

    /// Connection metadata: session-local party id to participant.
    pub fn connections(&self) -> BTreeMap<PartyId, Participant> {
        self.participants
            .iter()
            .map(|participant| (participant.id(), participant.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SessionConfig {
        SessionConfig::new(
            [
                Participant::new(
                    PartyRef::new("parties.Hardliner"),
                    ProfileRef::new("profiles/buyer.json"),
                    Position::One,
                ),
                Participant::new(
                    PartyRef::new("parties.Pushover"),
                    ProfileRef::new("profiles/seller.json"),
                    Position::Two,
                ),
            ],
            Deadline::rounds(10),
        )
    }

    #[test]
    fn connections_are_keyed_by_seat() {
        let connections = config().connections();

        assert_eq!(connections.len(), 2);
        assert_eq!(
            connections[&PartyId::new("party_1")].party.class_name(),
            "Hardliner"
        );
        assert_eq!(
            connections[&PartyId::new("party_2")].position,
            Position::Two
        );
    }

    #[test]
    fn deadline_uses_default_round_duration() {
        assert_eq!(config().deadline.round_duration_ms, ROUND_DURATION_MS);
        assert_eq!(config().deadline.rounds, 10);
    }
}
