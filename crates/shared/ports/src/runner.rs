use async_trait::async_trait;
use parley_core::{SessionConfig, SessionTrace};

use crate::error::RunnerResult;

/// Port for the negotiation protocol engine.
///
/// Executes one session to completion, bounded by the configured round
/// budget, and returns a finalized trace snapshot. The trace may hold fewer
/// actions than the budget allows, including none at all, when the session
/// ended abnormally.
#[async_trait]
pub trait SessionRunner: Send + Sync {
    async fn execute(&self, config: &SessionConfig) -> RunnerResult<SessionTrace>;
}
