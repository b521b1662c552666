//! Party registry
//!
//! Maps party references to constructors, standing in for a connection
//! factory that loads strategy implementations by reference. An unknown
//! reference is a connection failure, not a protocol one.

use parley_core::PartyRef;
use parley_ports::{RunnerResult, SessionError};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::party::{FaultyParty, Party, TimeConcedingParty};
use crate::profile::LinearAdditiveUtilitySpace;

/// Reference of the built-in boulware party.
pub const BOULWARE_REF: &str = "parley_sim.parties.Boulware";
/// Reference of the built-in conceder party.
pub const CONCEDER_REF: &str = "parley_sim.parties.Conceder";
/// Reference of the built-in always-failing party.
pub const FAULTY_REF: &str = "parley_sim.parties.Faulty";

type PartyFactory = Box<dyn Fn(Arc<LinearAdditiveUtilitySpace>) -> Box<dyn Party> + Send + Sync>;

#[derive(Default)]
pub struct PartyRegistry {
    factories: BTreeMap<String, PartyFactory>,
}

impl PartyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-loaded with the built-in scripted parties.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(BOULWARE_REF, |space| {
            Box::new(TimeConcedingParty::boulware(space))
        });
        registry.register(CONCEDER_REF, |space| {
            Box::new(TimeConcedingParty::conceder(space))
        });
        registry.register(FAULTY_REF, |_space| Box::new(FaultyParty));
        registry
    }

    pub fn register<F>(&mut self, reference: impl Into<String>, factory: F)
    where
        F: Fn(Arc<LinearAdditiveUtilitySpace>) -> Box<dyn Party> + Send + Sync + 'static,
    {
        self.factories.insert(reference.into(), Box::new(factory));
    }

    pub fn is_registered(&self, party: &PartyRef) -> bool {
        self.factories.contains_key(party.as_str())
    }

    /// Instantiates the party behind a reference, bound to its utility
    /// space.
    pub fn connect(
        &self,
        party: &PartyRef,
        space: Arc<LinearAdditiveUtilitySpace>,
    ) -> RunnerResult<Box<dyn Party>> {
        match self.factories.get(party.as_str()) {
            Some(factory) => Ok(factory(space)),
            None => Err(SessionError::Connection(format!(
                "no party registered for {party}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::buyer_profile;

    #[test]
    fn connects_registered_parties() {
        let registry = PartyRegistry::standard();
        assert!(registry.is_registered(&PartyRef::new(BOULWARE_REF)));

        let party = registry
            .connect(&PartyRef::new(CONCEDER_REF), Arc::new(buyer_profile()))
            .unwrap();
        assert_eq!(party.name(), "Conceder");
    }

    #[test]
    fn unknown_references_fail_to_connect() {
        let registry = PartyRegistry::standard();
        let result = registry.connect(
            &PartyRef::new("parley_sim.parties.Unknown"),
            Arc::new(buyer_profile()),
        );

        assert!(matches!(result, Err(SessionError::Connection(_))));
    }
}
