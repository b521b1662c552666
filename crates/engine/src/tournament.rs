//! Tournament Driving
//!
//! Iterates profile sets against the ordered party pairings, running one
//! session per combination and accumulating (config, outcome) entries in
//! execution order.

use parley_core::{
    ConfigError, ConfigResult, OutcomeRecord, PartyRef, ProfileRef, SessionConfig, SessionResult,
};
use parley_ports::{ProfileResolver, Reporter, SessionRunner};
use serde::Deserialize;

use crate::builder::SessionSettings;
use crate::error::EngineResult;
use crate::pairing::ordered_pairs;
use crate::session::run_session;

/// Caller input for a round-robin tournament.
#[derive(Debug, Clone, Deserialize)]
pub struct TournamentSettings {
    /// At least two party references.
    pub agents: Vec<PartyRef>,
    /// Profile pairs, each exactly two references; outer loop, in order.
    pub profile_sets: Vec<Vec<ProfileRef>>,
    /// Round budget shared by every session.
    pub deadline_rounds: u32,
}

/// One executed session, with the ordering metadata needed to reconstruct
/// deterministic output order.
#[derive(Debug, Clone)]
pub struct TournamentEntry {
    pub profile_set_index: usize,
    pub pairing_index: usize,
    pub config: SessionConfig,
    pub outcome: OutcomeRecord,
}

/// All sessions of a tournament run, in execution order.
#[derive(Debug, Clone, Default)]
pub struct TournamentResult {
    entries: Vec<TournamentEntry>,
}

impl TournamentResult {
    pub fn entries(&self) -> &[TournamentEntry] {
        &self.entries
    }

    /// Session configurations in execution order.
    pub fn configs(&self) -> Vec<&SessionConfig> {
        self.entries.iter().map(|entry| &entry.config).collect()
    }

    /// Outcome summaries, index-aligned with `configs`.
    pub fn outcomes(&self) -> Vec<&OutcomeRecord> {
        self.entries.iter().map(|entry| &entry.outcome).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tally of how the sessions ended.
    pub fn summary(&self) -> TournamentSummary {
        let mut summary = TournamentSummary {
            sessions: self.entries.len(),
            ..Default::default()
        };
        for entry in &self.entries {
            match entry.outcome.result {
                SessionResult::Agreement => summary.agreements += 1,
                SessionResult::NoAgreement => summary.no_agreements += 1,
                SessionResult::Error => summary.errors += 1,
            }
        }
        summary
    }

    fn push(&mut self, entry: TournamentEntry) {
        self.entries.push(entry);
    }
}

/// Aggregate counts over a tournament run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TournamentSummary {
    pub sessions: usize,
    pub agreements: usize,
    pub no_agreements: usize,
    pub errors: usize,
}

/// Drives a full round-robin tournament, one session at a time.
///
/// Total sessions run = |profile sets| x N x (N-1).
pub struct TournamentDriver {
    settings: TournamentSettings,
}

impl TournamentDriver {
    /// Validates the settings up front; nothing executes on failure.
    pub fn new(settings: TournamentSettings) -> ConfigResult<Self> {
        if settings.agents.len() < 2 {
            return Err(ConfigError::InvalidInput(format!(
                "a tournament needs at least 2 agents, got {}",
                settings.agents.len()
            )));
        }
        for (index, profiles) in settings.profile_sets.iter().enumerate() {
            if profiles.len() != 2 {
                return Err(ConfigError::InvalidInput(format!(
                    "profile set {index} has {} profiles, expected 2",
                    profiles.len()
                )));
            }
        }
        if settings.deadline_rounds == 0 {
            return Err(ConfigError::InvalidInput(
                "deadline_rounds must be positive".to_string(),
            ));
        }
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &TournamentSettings {
        &self.settings
    }

    /// Runs every profile set against every ordered pairing, sequentially:
    /// each session completes and reduces before the next begins.
    ///
    /// A session that crashes lands in the result as an ERROR outcome; a
    /// profile that cannot be resolved aborts the whole run.
    pub async fn run(
        &self,
        runner: &dyn SessionRunner,
        resolver: &dyn ProfileResolver,
        reporter: &dyn Reporter,
    ) -> EngineResult<TournamentResult> {
        let mut result = TournamentResult::default();

        for (profile_set_index, profiles) in self.settings.profile_sets.iter().enumerate() {
            // Recomputed fresh for every profile set, so each set plays the
            // full round-robin.
            let pairings = ordered_pairs(&self.settings.agents)?;

            for (pairing_index, (first, second)) in pairings.into_iter().enumerate() {
                let session = SessionSettings::new(
                    vec![first, second],
                    profiles.clone(),
                    self.settings.deadline_rounds,
                );

                let report = run_session(&session, runner, resolver, reporter).await?;
                reporter.info(&format!(
                    "set {profile_set_index} pairing {pairing_index}: {:?}",
                    report.outcome.result
                ));

                result.push(TournamentEntry {
                    profile_set_index,
                    pairing_index,
                    config: report.config,
                    outcome: report.outcome,
                });
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> TournamentSettings {
        TournamentSettings {
            agents: vec![PartyRef::new("parties.A"), PartyRef::new("parties.B")],
            profile_sets: vec![vec![
                ProfileRef::new("buyer.json"),
                ProfileRef::new("seller.json"),
            ]],
            deadline_rounds: 10,
        }
    }

    #[test]
    fn accepts_valid_settings() {
        assert!(TournamentDriver::new(settings()).is_ok());
    }

    #[test]
    fn rejects_single_agent() {
        let mut bad = settings();
        bad.agents.truncate(1);
        assert!(matches!(
            TournamentDriver::new(bad),
            Err(ConfigError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_malformed_profile_set() {
        let mut bad = settings();
        bad.profile_sets.push(vec![ProfileRef::new("only-one.json")]);
        assert!(matches!(
            TournamentDriver::new(bad),
            Err(ConfigError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_zero_rounds() {
        let mut bad = settings();
        bad.deadline_rounds = 0;
        assert!(matches!(
            TournamentDriver::new(bad),
            Err(ConfigError::InvalidInput(_))
        ));
    }
}
