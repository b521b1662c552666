//! Alternating-offers protocol loop
//!
//! Simulated stand-in for an external negotiation engine. The opening seat
//! acts first, parties alternate one action per round up to the deadline,
//! and an accept closes the session. The finished session is returned as an
//! immutable trace snapshot; a party fault ends the session early with
//! whatever actions were recorded up to that point.

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use parley_core::{Action, Bid, PartyId, SessionConfig, SessionTrace};
use parley_ports::{RunnerResult, SessionError, SessionRunner};
use std::sync::Arc;

use crate::party::{Party, PartyAction};
use crate::profile::ProfileSource;
use crate::registry::PartyRegistry;

pub struct AlternatingOffersRunner {
    registry: PartyRegistry,
    profiles: Arc<dyn ProfileSource>,
}

impl AlternatingOffersRunner {
    pub fn new(registry: PartyRegistry, profiles: Arc<dyn ProfileSource>) -> Self {
        Self { registry, profiles }
    }

    /// Connects every participant: profile first, then the party bound to
    /// it. Any failure here means the session cannot start at all.
    fn connect(&self, config: &SessionConfig) -> RunnerResult<Vec<(PartyId, Box<dyn Party>)>> {
        let mut parties = Vec::with_capacity(config.participants.len());
        for participant in &config.participants {
            let space = self
                .profiles
                .load(&participant.profile)
                .map_err(|err| SessionError::Connection(err.to_string()))?;
            let party = self.registry.connect(&participant.party, space)?;
            parties.push((participant.id(), party));
        }
        Ok(parties)
    }
}

#[async_trait]
impl SessionRunner for AlternatingOffersRunner {
    async fn execute(&self, config: &SessionConfig) -> RunnerResult<SessionTrace> {
        let started_at = Utc::now();
        let mut parties = self.connect(config)?;

        let rounds = config.deadline.rounds as usize;
        let mut actions: Vec<Action> = Vec::new();
        let mut standing: Option<Bid> = None;

        for turn in 0..rounds {
            let progress = turn as f64 / rounds as f64;
            let (actor, party) = &mut parties[turn % 2];

            match party.choose(standing.as_ref(), progress) {
                Ok(PartyAction::Offer(bid)) => {
                    debug!("[{actor}] offers {bid}");
                    standing = Some(bid.clone());
                    actions.push(Action::Offer {
                        actor: actor.clone(),
                        bid,
                    });
                }
                Ok(PartyAction::Accept) => match standing.clone() {
                    Some(bid) => {
                        debug!("[{actor}] accepts {bid}");
                        actions.push(Action::Accept {
                            actor: actor.clone(),
                            bid,
                        });
                        break;
                    }
                    // Accepting with nothing on the table violates the
                    // protocol; the party is treated as walking away.
                    None => {
                        debug!("[{actor}] accepted an empty table");
                        actions.push(Action::EndNegotiation {
                            actor: actor.clone(),
                        });
                        break;
                    }
                },
                Err(fault) => {
                    debug!("[{actor}] failed: {fault}");
                    break;
                }
            }
        }

        Ok(SessionTrace::new(
            actions,
            config.connections(),
            started_at,
            Utc::now(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::{BUYER_PROFILE, SELLER_PROFILE, standard_resolver};
    use crate::registry::{BOULWARE_REF, CONCEDER_REF, FAULTY_REF};
    use parley_core::{Deadline, Participant, PartyRef, Position, ProfileRef, SessionConfig};

    fn runner() -> AlternatingOffersRunner {
        AlternatingOffersRunner::new(PartyRegistry::standard(), Arc::new(standard_resolver()))
    }

    fn config(first: &str, second: &str, rounds: u32) -> SessionConfig {
        SessionConfig::new(
            [
                Participant::new(
                    PartyRef::new(first),
                    ProfileRef::new(BUYER_PROFILE),
                    Position::One,
                ),
                Participant::new(
                    PartyRef::new(second),
                    ProfileRef::new(SELLER_PROFILE),
                    Position::Two,
                ),
            ],
            Deadline::rounds(rounds),
        )
    }

    #[tokio::test]
    async fn conceders_reach_agreement_before_the_deadline() {
        let trace = runner()
            .execute(&config(CONCEDER_REF, CONCEDER_REF, 40))
            .await
            .unwrap();

        assert!(trace.actions.len() <= 40);
        assert!(
            matches!(trace.actions.last(), Some(Action::Accept { .. })),
            "expected a closing accept, got {:?}",
            trace.actions.last()
        );
    }

    #[tokio::test]
    async fn boulware_pair_exhausts_a_short_budget() {
        let trace = runner()
            .execute(&config(BOULWARE_REF, BOULWARE_REF, 8))
            .await
            .unwrap();

        assert_eq!(trace.actions.len(), 8);
        assert!(trace.actions.iter().all(Action::is_offer));
    }

    #[tokio::test]
    async fn faulty_opener_leaves_an_empty_trace() {
        let trace = runner()
            .execute(&config(FAULTY_REF, CONCEDER_REF, 10))
            .await
            .unwrap();

        assert!(trace.is_empty());
        assert_eq!(trace.connections.len(), 2);
    }

    #[tokio::test]
    async fn faulty_responder_leaves_the_opening_offer() {
        let trace = runner()
            .execute(&config(CONCEDER_REF, FAULTY_REF, 10))
            .await
            .unwrap();

        assert_eq!(trace.actions.len(), 1);
        assert!(trace.actions[0].is_offer());
    }

    #[tokio::test]
    async fn unknown_party_reference_is_a_connection_failure() {
        let result = runner()
            .execute(&config("parley_sim.parties.Unknown", CONCEDER_REF, 10))
            .await;

        assert!(matches!(result, Err(SessionError::Connection(_))));
    }

    #[tokio::test]
    async fn sessions_are_deterministic() {
        let config = config(BOULWARE_REF, CONCEDER_REF, 30);
        let first = runner().execute(&config).await.unwrap();
        let second = runner().execute(&config).await.unwrap();

        assert_eq!(first.actions, second.actions);
    }
}
