//! Session Execution
//!
//! Boundary adapter over the external protocol runner. Runner failures are
//! absorbed here: a session that cannot run surfaces as an empty-action
//! trace, which the reducer classifies as an ERROR outcome, so a single
//! crashed session never aborts the caller.

use chrono::Utc;
use parley_core::{SessionConfig, SessionTrace};
use parley_ports::{Reporter, SessionRunner};

/// Executes one session to completion.
///
/// Always yields a trace. On runner failure the trace has no actions and
/// carries the connection metadata derived from the config, so the parties
/// still appear in the reduced outcome.
pub async fn execute_session(
    runner: &dyn SessionRunner,
    config: &SessionConfig,
    reporter: &dyn Reporter,
) -> SessionTrace {
    match runner.execute(config).await {
        Ok(trace) => trace,
        Err(err) => {
            reporter.warn(&format!("session aborted: {err}"));
            SessionTrace::aborted(config.connections(), Utc::now())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use log::Level;
    use parley_core::{
        Action, Bid, Deadline, Participant, PartyId, PartyRef, Position, ProfileRef,
    };
    use parley_ports::{RecordingReporter, RunnerResult, SessionError};

    struct FailingRunner;

    #[async_trait]
    impl SessionRunner for FailingRunner {
        async fn execute(&self, _config: &SessionConfig) -> RunnerResult<SessionTrace> {
            Err(SessionError::Connection("no such party".to_string()))
        }
    }

    struct EchoRunner;

    #[async_trait]
    impl SessionRunner for EchoRunner {
        async fn execute(&self, config: &SessionConfig) -> RunnerResult<SessionTrace> {
            let now = Utc::now();
            let actions = vec![Action::Offer {
                actor: PartyId::for_position(Position::One),
                bid: Bid::from_pairs([("price", "low")]),
            }];
            Ok(SessionTrace::new(actions, config.connections(), now, now))
        }
    }

    fn config() -> SessionConfig {
        SessionConfig::new(
            [
                Participant::new(
                    PartyRef::new("parties.Left"),
                    ProfileRef::new("left.json"),
                    Position::One,
                ),
                Participant::new(
                    PartyRef::new("parties.Right"),
                    ProfileRef::new("right.json"),
                    Position::Two,
                ),
            ],
            Deadline::rounds(5),
        )
    }

    #[tokio::test]
    async fn passes_successful_traces_through() {
        let reporter = RecordingReporter::new();
        let trace = execute_session(&EchoRunner, &config(), &reporter).await;

        assert_eq!(trace.actions.len(), 1);
        assert!(reporter.messages_at(Level::Warn).is_empty());
    }

    #[tokio::test]
    async fn converts_runner_failure_into_empty_trace() {
        let reporter = RecordingReporter::new();
        let trace = execute_session(&FailingRunner, &config(), &reporter).await;

        assert!(trace.is_empty());
        assert_eq!(trace.connections.len(), 2);
        assert!(
            trace
                .connections
                .contains_key(&PartyId::for_position(Position::Two))
        );

        let warnings = reporter.messages_at(Level::Warn);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("no such party"));
    }
}
