use serde::{Deserialize, Serialize};

/// Reference to a loadable negotiating strategy implementation.
///
/// The reference is an opaque dotted path, e.g. `parley_sim.parties.Boulware`.
/// Only the trailing segment is ever interpreted, as the display name of the
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyRef(String);

impl PartyRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display name of the implementation: the last dotted segment.
    pub fn class_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl std::fmt::Display for PartyRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of the two negotiating seats a party occupies in a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Position {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
}

impl Position {
    pub const BOTH: [Position; 2] = [Position::One, Position::Two];

    /// Numeric label used in summaries ("1" or "2").
    pub fn label(&self) -> &'static str {
        match self {
            Position::One => "1",
            Position::Two => "2",
        }
    }

    /// Zero-based participant index.
    pub fn index(&self) -> usize {
        match self {
            Position::One => 0,
            Position::Two => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Position> {
        match index {
            0 => Some(Position::One),
            1 => Some(Position::Two),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Identifier of a connected party within a single session, e.g. `party_1`.
///
/// Derived from the seat at configuration time and carried through traces
/// and connection metadata; never parsed back into a position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyId(String);

impl PartyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn for_position(position: Position) -> Self {
        Self(format!("party_{}", position.label()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PartyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
