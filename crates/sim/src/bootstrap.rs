//! Canned negotiation material
//!
//! A small trade domain with two mirrored profiles, enough to run demos and
//! exercise the pipeline without external resources. The buyer and seller
//! preferences are exactly opposed: every bid's utilities sum to 1.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

use crate::profile::{IssueDomain, LinearAdditiveUtilitySpace, StaticProfileResolver};

/// Profile reference served by [`standard_resolver`] for the buyer side.
pub const BUYER_PROFILE: &str = "profiles/buyer.json";
/// Profile reference served by [`standard_resolver`] for the seller side.
pub const SELLER_PROFILE: &str = "profiles/seller.json";

/// Two issues, three values each: nine distinct bids.
pub fn trade_domain() -> IssueDomain {
    IssueDomain::from_pairs([
        ("price", vec!["low", "mid", "high"]),
        ("warranty", vec!["none", "basic", "full"]),
    ])
}

fn scale(low: Decimal, mid: Decimal, high: Decimal) -> BTreeMap<String, Decimal> {
    [
        ("low".to_string(), low),
        ("mid".to_string(), mid),
        ("high".to_string(), high),
    ]
    .into()
}

fn warranty_scale(none: Decimal, basic: Decimal, full: Decimal) -> BTreeMap<String, Decimal> {
    [
        ("none".to_string(), none),
        ("basic".to_string(), basic),
        ("full".to_string(), full),
    ]
    .into()
}

fn profile(
    name: &str,
    price: BTreeMap<String, Decimal>,
    warranty: BTreeMap<String, Decimal>,
) -> LinearAdditiveUtilitySpace {
    let weights = [
        ("price".to_string(), dec!(0.6)),
        ("warranty".to_string(), dec!(0.4)),
    ]
    .into();
    let values = [
        ("price".to_string(), price),
        ("warranty".to_string(), warranty),
    ]
    .into();

    LinearAdditiveUtilitySpace {
        name: name.to_string(),
        domain: trade_domain(),
        weights,
        values,
    }
}

/// Buyer preferences: low price, full warranty.
pub fn buyer_profile() -> LinearAdditiveUtilitySpace {
    profile(
        "buyer",
        scale(dec!(1.0), dec!(0.5), dec!(0.0)),
        warranty_scale(dec!(0.0), dec!(0.5), dec!(1.0)),
    )
}

/// Seller preferences: high price, no warranty. Mirror of the buyer.
pub fn seller_profile() -> LinearAdditiveUtilitySpace {
    profile(
        "seller",
        scale(dec!(0.0), dec!(0.5), dec!(1.0)),
        warranty_scale(dec!(1.0), dec!(0.5), dec!(0.0)),
    )
}

/// Resolver pre-loaded with the buyer and seller profiles.
pub fn standard_resolver() -> StaticProfileResolver {
    let mut resolver = StaticProfileResolver::new();
    resolver.insert(BUYER_PROFILE, buyer_profile());
    resolver.insert(SELLER_PROFILE, seller_profile());
    resolver
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_core::Bid;
    use parley_ports::UtilitySpace;

    #[test]
    fn buyer_and_seller_are_mirrored() {
        let buyer = buyer_profile();
        let seller = seller_profile();

        for bid in trade_domain().bids() {
            assert_eq!(buyer.utility(&bid) + seller.utility(&bid), dec!(1.0));
        }
    }

    #[test]
    fn canned_profiles_pass_validation() {
        for space in [buyer_profile(), seller_profile()] {
            let raw = serde_json::to_string(&space).unwrap();
            let parsed = LinearAdditiveUtilitySpace::from_json(&space.name, &raw).unwrap();
            assert_eq!(parsed, space);
        }
    }

    #[test]
    fn best_bids_oppose() {
        let buyer = buyer_profile();
        let bid = Bid::from_pairs([("price", "low"), ("warranty", "full")]);
        assert_eq!(buyer.utility(&bid), dec!(1.0));
        assert_eq!(seller_profile().utility(&bid), dec!(0.0));
    }
}
