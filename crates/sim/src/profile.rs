//! Linear-additive preference profiles
//!
//! The standard additive preference model: each issue carries a weight, each
//! of its values a valuation in `[0, 1]`, and the utility of a bid is the
//! weighted sum over issues. Profiles are JSON resources; resolvers turn
//! profile references into validated utility spaces.

use parley_core::{Bid, ProfileRef};
use parley_ports::{ProfileResolver, ResolveError, ResolveResult, UtilitySpace};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// The space of negotiable issues and their discrete values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDomain {
    issues: BTreeMap<String, Vec<String>>,
}

impl IssueDomain {
    pub fn new(issues: BTreeMap<String, Vec<String>>) -> Self {
        Self { issues }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            issues: pairs
                .into_iter()
                .map(|(issue, values)| {
                    (
                        issue.into(),
                        values.into_iter().map(Into::into).collect(),
                    )
                })
                .collect(),
        }
    }

    pub fn issues(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.issues
            .iter()
            .map(|(issue, values)| (issue.as_str(), values.as_slice()))
    }

    /// Number of distinct bids in the domain.
    pub fn size(&self) -> usize {
        self.issues.values().map(Vec::len).product()
    }

    /// Every bid in the domain: the cartesian product of issue values.
    pub fn bids(&self) -> Vec<Bid> {
        let mut partials: Vec<BTreeMap<String, String>> = vec![BTreeMap::new()];
        for (issue, values) in &self.issues {
            let mut extended = Vec::with_capacity(partials.len() * values.len());
            for partial in &partials {
                for value in values {
                    let mut next = partial.clone();
                    next.insert(issue.clone(), value.clone());
                    extended.push(next);
                }
            }
            partials = extended;
        }
        partials.into_iter().map(Bid::new).collect()
    }
}

/// Weighted sum of per-issue valuations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearAdditiveUtilitySpace {
    pub name: String,
    pub domain: IssueDomain,
    /// Issue weights; must cover the domain and sum to 1.
    pub weights: BTreeMap<String, Decimal>,
    /// Valuation of each value per issue, in `[0, 1]`.
    pub values: BTreeMap<String, BTreeMap<String, Decimal>>,
}

impl LinearAdditiveUtilitySpace {
    pub fn new(
        name: impl Into<String>,
        domain: IssueDomain,
        weights: BTreeMap<String, Decimal>,
        values: BTreeMap<String, BTreeMap<String, Decimal>>,
    ) -> ResolveResult<Self> {
        let space = Self {
            name: name.into(),
            domain,
            weights,
            values,
        };
        space.validate()?;
        Ok(space)
    }

    /// Parses and validates a JSON profile resource.
    pub fn from_json(resource: &str, raw: &str) -> ResolveResult<Self> {
        let space: Self = serde_json::from_str(raw).map_err(|err| ResolveError::Malformed {
            resource: resource.to_string(),
            reason: err.to_string(),
        })?;
        space.validate()?;
        Ok(space)
    }

    pub fn domain(&self) -> &IssueDomain {
        &self.domain
    }

    fn validate(&self) -> ResolveResult<()> {
        let malformed = |reason: String| ResolveError::Malformed {
            resource: self.name.clone(),
            reason,
        };

        for (issue, values) in self.domain.issues() {
            if !self.weights.contains_key(issue) {
                return Err(malformed(format!("issue {issue} has no weight")));
            }
            let valuations = self
                .values
                .get(issue)
                .ok_or_else(|| malformed(format!("issue {issue} has no valuations")))?;
            for value in values {
                let valuation = valuations
                    .get(value)
                    .ok_or_else(|| malformed(format!("value {issue}={value} has no valuation")))?;
                if *valuation < Decimal::ZERO || *valuation > Decimal::ONE {
                    return Err(malformed(format!(
                        "valuation of {issue}={value} is {valuation}, outside [0, 1]"
                    )));
                }
            }
        }

        for issue in self.weights.keys() {
            if !self.domain.issues.contains_key(issue) {
                return Err(malformed(format!("weight for unknown issue {issue}")));
            }
        }

        let total: Decimal = self.weights.values().copied().sum();
        if total != Decimal::ONE {
            return Err(malformed(format!("issue weights sum to {total}, expected 1")));
        }

        Ok(())
    }
}

impl UtilitySpace for LinearAdditiveUtilitySpace {
    fn utility(&self, bid: &Bid) -> Decimal {
        let mut total = Decimal::ZERO;
        for (issue, _) in self.domain.issues() {
            let Some(weight) = self.weights.get(issue) else {
                continue;
            };
            let Some(chosen) = bid.value(issue) else {
                continue;
            };
            let valuation = self
                .values
                .get(issue)
                .and_then(|valuations| valuations.get(chosen))
                .copied()
                .unwrap_or(Decimal::ZERO);
            total += *weight * valuation;
        }
        total
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Source of concrete utility spaces for the simulated runner.
///
/// The engine sees the same resolvers through the `ProfileResolver` port;
/// the runner needs the concrete spaces so parties can enumerate their bid
/// domains.
pub trait ProfileSource: Send + Sync {
    fn load(&self, profile: &ProfileRef) -> ResolveResult<Arc<LinearAdditiveUtilitySpace>>;
}

/// In-memory profile registry keyed by reference string.
#[derive(Debug, Clone, Default)]
pub struct StaticProfileResolver {
    spaces: BTreeMap<String, Arc<LinearAdditiveUtilitySpace>>,
}

impl StaticProfileResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, profile: impl Into<String>, space: LinearAdditiveUtilitySpace) {
        self.spaces.insert(profile.into(), Arc::new(space));
    }
}

impl ProfileSource for StaticProfileResolver {
    fn load(&self, profile: &ProfileRef) -> ResolveResult<Arc<LinearAdditiveUtilitySpace>> {
        self.spaces
            .get(profile.as_str())
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(profile.uri()))
    }
}

impl ProfileResolver for StaticProfileResolver {
    fn resolve(&self, profile: &ProfileRef) -> ResolveResult<Arc<dyn UtilitySpace>> {
        let space = self.load(profile)?;
        Ok(space)
    }
}

/// Loads `file:` URIs and bare paths from disk as JSON profiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileProfileResolver;

impl FileProfileResolver {
    pub fn new() -> Self {
        Self
    }
}

impl ProfileSource for FileProfileResolver {
    fn load(&self, profile: &ProfileRef) -> ResolveResult<Arc<LinearAdditiveUtilitySpace>> {
        let path = profile.path().ok_or_else(|| {
            ResolveError::NotFound(format!("unsupported scheme: {}", profile.uri()))
        })?;
        let raw = std::fs::read_to_string(path)
            .map_err(|err| ResolveError::NotFound(format!("{}: {err}", profile.uri())))?;
        let space = LinearAdditiveUtilitySpace::from_json(&profile.uri(), &raw)?;
        Ok(Arc::new(space))
    }
}

impl ProfileResolver for FileProfileResolver {
    fn resolve(&self, profile: &ProfileRef) -> ResolveResult<Arc<dyn UtilitySpace>> {
        let space = self.load(profile)?;
        Ok(space)
    }
}
