//! Session Config Building
//!
//! Turns caller-supplied session settings into a validated, fully-specified
//! `SessionConfig`, binding each party to the profile at the same index.

use parley_core::{
    ConfigError, ConfigResult, Deadline, Participant, PartyRef, Position, ProfileRef,
    SessionConfig,
};
use serde::Deserialize;

/// Caller input for one negotiation session.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    /// Exactly two party references; index 0 opens the negotiation.
    pub agents: Vec<PartyRef>,
    /// Exactly two profile references, bound to the party at the same index.
    pub profiles: Vec<ProfileRef>,
    /// Round budget; must be positive.
    pub deadline_rounds: u32,
}

impl SessionSettings {
    pub fn new(agents: Vec<PartyRef>, profiles: Vec<ProfileRef>, deadline_rounds: u32) -> Self {
        Self {
            agents,
            profiles,
            deadline_rounds,
        }
    }
}

/// Validates the settings and produces the session configuration.
///
/// Seat assignment is fixed here: `agents[i]` negotiates with `profiles[i]`
/// from seat i+1, and that binding travels on each participant rather than
/// being re-derived downstream. The per-round duration is a fixed default,
/// not caller-configurable.
pub fn build_session_config(settings: &SessionSettings) -> ConfigResult<SessionConfig> {
    if settings.agents.len() != 2 {
        return Err(ConfigError::InvalidConfig(format!(
            "a session takes exactly 2 agents, got {}",
            settings.agents.len()
        )));
    }
    if settings.profiles.len() != 2 {
        return Err(ConfigError::InvalidConfig(format!(
            "a session takes exactly 2 profiles, got {}",
            settings.profiles.len()
        )));
    }
    if settings.deadline_rounds == 0 {
        return Err(ConfigError::InvalidConfig(
            "deadline_rounds must be positive".to_string(),
        ));
    }

    let participants = [
        Participant::new(
            settings.agents[0].clone(),
            settings.profiles[0].clone(),
            Position::One,
        ),
        Participant::new(
            settings.agents[1].clone(),
            settings.profiles[1].clone(),
            Position::Two,
        ),
    ];

    Ok(SessionConfig::new(
        participants,
        Deadline::rounds(settings.deadline_rounds),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_core::ROUND_DURATION_MS;

    fn settings() -> SessionSettings {
        SessionSettings::new(
            vec![PartyRef::new("parties.First"), PartyRef::new("parties.Second")],
            vec![
                ProfileRef::new("profiles/buyer.json"),
                ProfileRef::new("profiles/seller.json"),
            ],
            30,
        )
    }

    #[test]
    fn binds_agents_to_profiles_by_index() {
        let config = build_session_config(&settings()).unwrap();

        let first = config.participant(Position::One);
        assert_eq!(first.party.as_str(), "parties.First");
        assert_eq!(first.profile.as_str(), "profiles/buyer.json");

        let second = config.participant(Position::Two);
        assert_eq!(second.party.as_str(), "parties.Second");
        assert_eq!(second.profile.as_str(), "profiles/seller.json");
    }

    #[test]
    fn fixes_the_round_duration() {
        let config = build_session_config(&settings()).unwrap();
        assert_eq!(config.deadline.rounds, 30);
        assert_eq!(config.deadline.round_duration_ms, ROUND_DURATION_MS);
    }

    #[test]
    fn rejects_wrong_agent_count() {
        let mut bad = settings();
        bad.agents.push(PartyRef::new("parties.Third"));
        assert!(matches!(
            build_session_config(&bad),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_wrong_profile_count() {
        let mut bad = settings();
        bad.profiles.truncate(1);
        assert!(matches!(
            build_session_config(&bad),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_zero_rounds() {
        let mut bad = settings();
        bad.deadline_rounds = 0;
        assert!(matches!(
            build_session_config(&bad),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn deserializes_from_caller_input() {
        let raw = r#"{
            "agents": ["parties.First", "parties.Second"],
            "profiles": ["profiles/buyer.json", "profiles/seller.json"],
            "deadline_rounds": 10
        }"#;

        let parsed: SessionSettings = serde_json::from_str(raw).unwrap();
        let config = build_session_config(&parsed).unwrap();
        assert_eq!(config.deadline.rounds, 10);
    }
}
