//! Pairing Enumeration
//!
//! Produces every ordered pairing of distinct parties so each party plays
//! both the opening and the responding seat against every other party.

use parley_core::{ConfigError, ConfigResult, PartyRef};

/// All N x (N-1) ordered pairs over the input, in input order with the
/// opening party varying slowest. No party is paired with itself.
pub fn ordered_pairs(parties: &[PartyRef]) -> ConfigResult<Vec<(PartyRef, PartyRef)>> {
    if parties.len() < 2 {
        return Err(ConfigError::InvalidInput(format!(
            "pairing needs at least 2 parties, got {}",
            parties.len()
        )));
    }

    let mut pairs = Vec::with_capacity(parties.len() * (parties.len() - 1));
    for (i, first) in parties.iter().enumerate() {
        for (j, second) in parties.iter().enumerate() {
            if i != j {
                pairs.push((first.clone(), second.clone()));
            }
        }
    }
    Ok(pairs)
}
