//! Scripted negotiating parties
//!
//! Deterministic strategy scripts for driving experiments:
//!
//! - `TimeConcedingParty`: concedes along a time-dependent target curve
//! - `RandomWalkerParty`: seeded random offers with a fixed accept threshold
//! - `FaultyParty`: fails on its first turn

use parley_core::Bid;
use parley_ports::UtilitySpace;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal_macros::dec;
use std::sync::Arc;
use thiserror::Error;

use crate::profile::LinearAdditiveUtilitySpace;

/// Decision returned by a party on its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartyAction {
    /// Put a bid on the table.
    Offer(Bid),
    /// Accept the opponent's standing offer.
    Accept,
}

/// A party implementation failed; the protocol loop ends the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("party fault: {0}")]
pub struct PartyFault(pub String);

/// A negotiation strategy plugged into the simulated protocol loop.
pub trait Party: Send {
    /// Display name of the strategy.
    fn name(&self) -> &str;

    /// Called on this party's turn. `last_offer` is the opponent's standing
    /// offer, if any; `progress` runs from 0 at the first round towards 1
    /// at the deadline.
    fn choose(
        &mut self,
        last_offer: Option<&Bid>,
        progress: f64,
    ) -> Result<PartyAction, PartyFault>;
}

/// Time-dependent concession over the bid space ranked by own utility.
///
/// The target utility follows `reserve + span * (1 - progress^(1/e))`:
/// e < 1 holds out and concedes late (boulware), e > 1 concedes early
/// (conceder). The party accepts any standing offer at or above its current
/// target and otherwise offers the least attractive own bid still above it.
pub struct TimeConcedingParty {
    name: String,
    space: Arc<LinearAdditiveUtilitySpace>,
    /// Bids sorted by descending own utility.
    ranked: Vec<(Bid, Decimal)>,
    exponent: f64,
    /// Floor below which the party never concedes.
    reserve: Decimal,
}

impl TimeConcedingParty {
    pub fn new(
        name: impl Into<String>,
        space: Arc<LinearAdditiveUtilitySpace>,
        exponent: f64,
        reserve: Decimal,
    ) -> Self {
        let mut ranked: Vec<(Bid, Decimal)> = space
            .domain()
            .bids()
            .into_iter()
            .map(|bid| {
                let utility = space.utility(&bid);
                (bid, utility)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            name: name.into(),
            space,
            ranked,
            exponent,
            reserve,
        }
    }

    pub fn boulware(space: Arc<LinearAdditiveUtilitySpace>) -> Self {
        Self::new("Boulware", space, 0.2, dec!(0.55))
    }

    pub fn conceder(space: Arc<LinearAdditiveUtilitySpace>) -> Self {
        Self::new("Conceder", space, 2.0, dec!(0.3))
    }

    fn target(&self, progress: f64) -> Decimal {
        let best = self
            .ranked
            .first()
            .map(|(_, utility)| *utility)
            .unwrap_or(Decimal::ZERO);
        let span = (best - self.reserve).max(Decimal::ZERO);
        let held = 1.0 - progress.clamp(0.0, 1.0).powf(1.0 / self.exponent);
        self.reserve + span * Decimal::from_f64(held).unwrap_or(Decimal::ZERO)
    }
}

impl Party for TimeConcedingParty {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose(
        &mut self,
        last_offer: Option<&Bid>,
        progress: f64,
    ) -> Result<PartyAction, PartyFault> {
        let target = self.target(progress);

        if let Some(offer) = last_offer {
            if self.space.utility(offer) >= target {
                return Ok(PartyAction::Accept);
            }
        }

        // Least attractive own bid still at or above the target; the best
        // bid when the target is out of reach.
        let chosen = self
            .ranked
            .iter()
            .take_while(|(_, utility)| *utility >= target)
            .last()
            .or_else(|| self.ranked.first());

        match chosen {
            Some((bid, _)) => Ok(PartyAction::Offer(bid.clone())),
            None => Err(PartyFault(format!("{} has an empty bid domain", self.name))),
        }
    }
}

/// Seeded random offers with a fixed accept threshold.
pub struct RandomWalkerParty {
    name: String,
    space: Arc<LinearAdditiveUtilitySpace>,
    bids: Vec<Bid>,
    rng: rand::rngs::StdRng,
    accept_threshold: Decimal,
}

impl RandomWalkerParty {
    pub fn new(space: Arc<LinearAdditiveUtilitySpace>, seed: u64, accept_threshold: Decimal) -> Self {
        use rand::SeedableRng;

        let bids = space.domain().bids();
        Self {
            name: "RandomWalker".to_string(),
            space,
            bids,
            rng: rand::rngs::StdRng::seed_from_u64(seed),
            accept_threshold,
        }
    }
}

impl Party for RandomWalkerParty {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose(
        &mut self,
        last_offer: Option<&Bid>,
        _progress: f64,
    ) -> Result<PartyAction, PartyFault> {
        use rand::Rng;

        if let Some(offer) = last_offer {
            if self.space.utility(offer) >= self.accept_threshold {
                return Ok(PartyAction::Accept);
            }
        }

        if self.bids.is_empty() {
            return Err(PartyFault("empty bid domain".to_string()));
        }
        let index = self.rng.gen_range(0..self.bids.len());
        Ok(PartyAction::Offer(self.bids[index].clone()))
    }
}

/// Fails on its first turn; sessions it opens record no actions at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct FaultyParty;

impl Party for FaultyParty {
    fn name(&self) -> &str {
        "Faulty"
    }

    fn choose(
        &mut self,
        _last_offer: Option<&Bid>,
        _progress: f64,
    ) -> Result<PartyAction, PartyFault> {
        Err(PartyFault("scripted failure".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::{buyer_profile, seller_profile};
    use rust_decimal_macros::dec;

    fn buyer() -> Arc<LinearAdditiveUtilitySpace> {
        Arc::new(buyer_profile())
    }

    #[test]
    fn opens_with_the_best_own_bid() {
        let mut party = TimeConcedingParty::conceder(buyer());

        match party.choose(None, 0.0) {
            Ok(PartyAction::Offer(bid)) => {
                assert_eq!(bid.value("price"), Some("low"));
                assert_eq!(bid.value("warranty"), Some("full"));
            }
            other => panic!("expected an opening offer, got {other:?}"),
        }
    }

    #[test]
    fn conceder_accepts_what_boulware_rejects() {
        // Buyer utility 0.4: price high, warranty full.
        let offer = Bid::from_pairs([("price", "high"), ("warranty", "full")]);

        let mut conceder = TimeConcedingParty::conceder(buyer());
        assert_eq!(
            conceder.choose(Some(&offer), 0.9).unwrap(),
            PartyAction::Accept
        );

        let mut boulware = TimeConcedingParty::boulware(buyer());
        match boulware.choose(Some(&offer), 0.9).unwrap() {
            PartyAction::Offer(_) => {}
            other => panic!("boulware should keep offering, got {other:?}"),
        }
    }

    #[test]
    fn concession_lowers_the_offered_utility_over_time() {
        let space = buyer();
        let mut party = TimeConcedingParty::conceder(space.clone());

        let early = match party.choose(None, 0.1).unwrap() {
            PartyAction::Offer(bid) => space.utility(&bid),
            other => panic!("expected an offer, got {other:?}"),
        };
        let late = match party.choose(None, 0.95).unwrap() {
            PartyAction::Offer(bid) => space.utility(&bid),
            other => panic!("expected an offer, got {other:?}"),
        };

        assert!(late < early, "late offer {late} should be below {early}");
        assert!(late >= dec!(0.3), "never concedes below the reserve");
    }

    #[test]
    fn random_walker_is_deterministic_per_seed() {
        let space = Arc::new(seller_profile());
        let mut first = RandomWalkerParty::new(space.clone(), 7, dec!(0.8));
        let mut second = RandomWalkerParty::new(space, 7, dec!(0.8));

        for _ in 0..5 {
            assert_eq!(
                first.choose(None, 0.5).unwrap(),
                second.choose(None, 0.5).unwrap()
            );
        }
    }

    #[test]
    fn faulty_party_always_fails() {
        let mut party = FaultyParty;
        assert!(party.choose(None, 0.0).is_err());
        assert_eq!(party.name(), "Faulty");
    }
}
