//! Outcome Reduction
//!
//! Walks a finalized session trace, attaches both parties' utilities to
//! every offer and accept, and folds the whole trace into a single
//! `OutcomeRecord`: who was seated where, at what utility, whether a deal
//! closed.

use parley_core::{
    OutcomeRecord, PartyId, PartyScore, Position, ScoredAction, ScoredTrace, SessionResult,
    SessionTrace,
};
use parley_ports::UtilitySpace;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Utilities of one bid as valued by every connected party.
type BidUtilities = BTreeMap<PartyId, Decimal>;

/// Reduces a trace into a scored trace and an outcome summary.
///
/// Pure and deterministic: the same trace and utility spaces always produce
/// the same record. `spaces` is keyed by session-local party id; a party
/// missing from it scores zero.
///
/// A trace without a single offer or accept reduces to an ERROR outcome:
/// every connected party is scored zero and `num_offers` stays unset.
pub fn reduce(
    trace: &SessionTrace,
    spaces: &BTreeMap<PartyId, Arc<dyn UtilitySpace>>,
) -> (ScoredTrace, OutcomeRecord) {
    let mut scored = Vec::with_capacity(trace.actions.len());
    let mut num_offers = 0usize;
    let mut last_processed: Option<(bool, BidUtilities)> = None;

    for action in &trace.actions {
        let utilities = match action.bid() {
            Some(bid) => {
                // Both parties value the same proposed outcome, whoever
                // proposed it.
                let utilities: BidUtilities = trace
                    .connections
                    .keys()
                    .map(|id| {
                        let utility = spaces
                            .get(id)
                            .map(|space| space.utility(bid))
                            .unwrap_or(Decimal::ZERO);
                        (id.clone(), utility)
                    })
                    .collect();

                num_offers += 1;
                last_processed = Some((action.is_accept(), utilities.clone()));
                utilities
            }
            // Entries without a bid are skipped: not scored, not counted.
            None => BidUtilities::new(),
        };

        scored.push(ScoredAction {
            action: action.clone(),
            utilities,
        });
    }

    let outcome = match last_processed {
        Some((accepted, utilities)) => closed(trace, num_offers, accepted, &utilities),
        None => crashed(trace),
    };

    let scored_trace = ScoredTrace {
        session_id: trace.session_id,
        actions: scored,
    };
    (scored_trace, outcome)
}

/// Summary for a session whose trace ended in an offer or accept.
///
/// When the last entry is an unaccepted offer the deal never closed:
/// nobody is credited the offered utility.
fn closed(
    trace: &SessionTrace,
    num_offers: usize,
    accepted: bool,
    utilities: &BidUtilities,
) -> OutcomeRecord {
    let mut agents = BTreeMap::new();
    for (id, participant) in &trace.connections {
        let utility = if accepted {
            utilities.get(id).copied().unwrap_or(Decimal::ZERO)
        } else {
            Decimal::ZERO
        };
        agents.insert(
            participant.position,
            PartyScore {
                agent: participant.party.class_name().to_string(),
                utility,
            },
        );
    }

    let (nash_product, social_welfare) = fold_scores(&agents);

    OutcomeRecord {
        num_offers: Some(num_offers),
        agents,
        nash_product,
        social_welfare,
        result: if accepted {
            SessionResult::Agreement
        } else {
            SessionResult::NoAgreement
        },
    }
}

/// Summary for a session that recorded no offers at all.
fn crashed(trace: &SessionTrace) -> OutcomeRecord {
    let agents = trace
        .connections
        .values()
        .map(|participant| {
            (
                participant.position,
                PartyScore {
                    agent: participant.party.class_name().to_string(),
                    utility: Decimal::ZERO,
                },
            )
        })
        .collect();

    OutcomeRecord {
        num_offers: None,
        agents,
        nash_product: Decimal::ZERO,
        social_welfare: Decimal::ZERO,
        result: SessionResult::Error,
    }
}

fn fold_scores(agents: &BTreeMap<Position, PartyScore>) -> (Decimal, Decimal) {
    if agents.is_empty() {
        return (Decimal::ZERO, Decimal::ZERO);
    }
    agents.values().fold(
        (Decimal::ONE, Decimal::ZERO),
        |(product, sum), score| (product * score.utility, sum + score.utility),
    )
}
