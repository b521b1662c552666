//! Single negotiation session with a scored trace printout

use parley_core::{PartyRef, ProfileRef};
use parley_engine::{SessionSettings, run_session};
use parley_ports::LogReporter;
use parley_sim::bootstrap::{BUYER_PROFILE, SELLER_PROFILE, standard_resolver};
use parley_sim::{AlternatingOffersRunner, BOULWARE_REF, CONCEDER_REF, PartyRegistry};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let settings = SessionSettings::new(
        vec![PartyRef::new(BOULWARE_REF), PartyRef::new(CONCEDER_REF)],
        vec![
            ProfileRef::new(BUYER_PROFILE),
            ProfileRef::new(SELLER_PROFILE),
        ],
        40,
    );

    let resolver = Arc::new(standard_resolver());
    let runner = AlternatingOffersRunner::new(PartyRegistry::standard(), resolver.clone());

    let report = run_session(&settings, &runner, resolver.as_ref(), &LogReporter).await?;

    println!("=== Trace ===");
    for scored in &report.trace.actions {
        let utilities: Vec<String> = scored
            .utilities
            .iter()
            .map(|(id, utility)| format!("{id}={utility}"))
            .collect();
        println!("  {:?}  [{}]", scored.action, utilities.join(", "));
    }

    println!("\n=== Summary ===");
    println!("{}", serde_json::to_string_pretty(&report.outcome)?);

    Ok(())
}
