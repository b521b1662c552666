//! Round-robin tournament demo against the simulated protocol runner

use parley_core::{PartyRef, Position, ProfileRef};
use parley_engine::{TournamentDriver, TournamentSettings};
use parley_ports::LogReporter;
use parley_sim::bootstrap::{BUYER_PROFILE, SELLER_PROFILE, standard_resolver};
use parley_sim::{AlternatingOffersRunner, BOULWARE_REF, CONCEDER_REF, FAULTY_REF, PartyRegistry};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Parley Tournament Demo ===\n");

    let settings = TournamentSettings {
        agents: vec![
            PartyRef::new(BOULWARE_REF),
            PartyRef::new(CONCEDER_REF),
            PartyRef::new(FAULTY_REF),
        ],
        profile_sets: vec![vec![
            ProfileRef::new(BUYER_PROFILE),
            ProfileRef::new(SELLER_PROFILE),
        ]],
        deadline_rounds: 40,
    };

    println!("Agents:");
    for agent in &settings.agents {
        println!("  - {}", agent.class_name());
    }
    println!();

    let resolver = Arc::new(standard_resolver());
    let runner = AlternatingOffersRunner::new(PartyRegistry::standard(), resolver.clone());
    let driver = TournamentDriver::new(settings)?;

    let result = driver.run(&runner, resolver.as_ref(), &LogReporter).await?;

    println!("=== Results ===");
    for entry in result.entries() {
        let opener = entry.config.participant(Position::One).party.class_name();
        let responder = entry.config.participant(Position::Two).party.class_name();
        println!(
            "  {:>9} vs {:<9} {:?}  nash={}  welfare={}",
            opener,
            responder,
            entry.outcome.result,
            entry.outcome.nash_product,
            entry.outcome.social_welfare,
        );
    }

    let summary = result.summary();
    println!();
    println!("Sessions:      {}", summary.sessions);
    println!("Agreements:    {}", summary.agreements);
    println!("No agreement:  {}", summary.no_agreements);
    println!("Errors:        {}", summary.errors);

    Ok(())
}
