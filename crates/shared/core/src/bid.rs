use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A proposed negotiation outcome: one chosen value per issue.
///
/// Bids are opaque to the orchestration pipeline; only a utility space can
/// put a number on one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Bid {
    values: BTreeMap<String, String>,
}

impl Bid {
    pub fn new(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(issue, value)| (issue.into(), value.into()))
                .collect(),
        }
    }

    /// The chosen value for an issue, if the bid covers it.
    pub fn value(&self, issue: &str) -> Option<&str> {
        self.values.get(issue).map(String::as_str)
    }

    pub fn issues(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Display for Bid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (issue, value) in &self.values {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{issue}={value}")?;
            first = false;
        }
        Ok(())
    }
}
