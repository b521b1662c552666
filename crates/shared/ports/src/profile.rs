use parley_core::{Bid, ProfileRef};
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::error::ResolveResult;

/// Port for valuing bids against one party's preferences.
///
/// One utility space per party per session, bound to that party's profile.
pub trait UtilitySpace: Send + Sync {
    /// Utility of a bid, in `[0, 1]`.
    fn utility(&self, bid: &Bid) -> Decimal;

    /// Name of the profile backing this space.
    fn name(&self) -> &str;
}

/// Port for resolving profile references into utility spaces.
pub trait ProfileResolver: Send + Sync {
    fn resolve(&self, profile: &ProfileRef) -> ResolveResult<Arc<dyn UtilitySpace>>;
}
