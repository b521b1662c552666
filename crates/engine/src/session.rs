//! Single-session pipeline: build, resolve, execute, reduce.

use parley_core::{OutcomeRecord, PartyId, ScoredTrace, SessionConfig};
use parley_ports::{ProfileResolver, Reporter, SessionRunner, UtilitySpace};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::builder::{SessionSettings, build_session_config};
use crate::error::EngineResult;
use crate::executor::execute_session;
use crate::reducer::reduce;

/// Everything produced by one session run: the configuration that ran, the
/// scored trace, and the outcome summary.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub config: SessionConfig,
    pub trace: ScoredTrace,
    pub outcome: OutcomeRecord,
}

/// Runs one session end to end.
///
/// Validation and profile resolution fail fast, before anything executes;
/// runner failures instead land in the outcome as an ERROR record.
pub async fn run_session(
    settings: &SessionSettings,
    runner: &dyn SessionRunner,
    resolver: &dyn ProfileResolver,
    reporter: &dyn Reporter,
) -> EngineResult<SessionReport> {
    let config = build_session_config(settings)?;
    let spaces = resolve_spaces(&config, resolver)?;

    reporter.debug(&format!(
        "running session: {} vs {}",
        config.participants[0].party, config.participants[1].party
    ));

    let trace = execute_session(runner, &config, reporter).await;
    let (scored, outcome) = reduce(&trace, &spaces);

    Ok(SessionReport {
        config,
        trace: scored,
        outcome,
    })
}

/// Resolves the utility space of every participant, keyed by session-local
/// party id.
fn resolve_spaces(
    config: &SessionConfig,
    resolver: &dyn ProfileResolver,
) -> EngineResult<BTreeMap<PartyId, Arc<dyn UtilitySpace>>> {
    let mut spaces = BTreeMap::new();
    for participant in &config.participants {
        let space = resolver.resolve(&participant.profile)?;
        spaces.insert(participant.id(), space);
    }
    Ok(spaces)
}
