use serde::{Deserialize, Serialize};

use crate::bid::Bid;
use crate::party::PartyId;

/// A single protocol step recorded in a session trace.
///
/// Serialized externally tagged (`{"Offer": {...}}`), the shape the
/// protocol engine emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// A party puts a bid on the table.
    Offer { actor: PartyId, bid: Bid },
    /// A party accepts the standing bid, closing the session.
    Accept { actor: PartyId, bid: Bid },
    /// A party walks away without agreement.
    EndNegotiation { actor: PartyId },
}

impl Action {
    pub fn actor(&self) -> &PartyId {
        match self {
            Action::Offer { actor, .. }
            | Action::Accept { actor, .. }
            | Action::EndNegotiation { actor } => actor,
        }
    }

    /// The bid this action carries, if any.
    pub fn bid(&self) -> Option<&Bid> {
        match self {
            Action::Offer { bid, .. } | Action::Accept { bid, .. } => Some(bid),
            Action::EndNegotiation { .. } => None,
        }
    }

    pub fn is_offer(&self) -> bool {
        matches!(self, Action::Offer { .. })
    }

    pub fn is_accept(&self) -> bool {
        matches!(self, Action::Accept { .. })
    }
}
