//! Valuation engine: pure, deterministic metrics over actor state.
//!
//! The market valuation of an actor blends four components:
//! - **substance**: sector-weighted asset values plus periodic cash flow
//!   valued at 4x as a one-time add-on
//! - **cash-flow value**: margin-adjusted operating result times a bounded
//!   earnings multiple
//! - **sentiment**: mean sector multiplier across the asset collection
//! - **debt risk**: accumulated debt at a 5% penalty
//!
//! Every total that represents currency is materialized as [`Cash`], which
//! rounds to 2 decimals; given the same actor state the result is exactly
//! reproducible. Valuation is never negative.

use crate::Actor;
use types::{Cash, Sector, SectorTable};

/// Sector-weighted asset values plus 4x periodic cash flow.
pub fn substance_value(actor: &Actor, sectors: &SectorTable) -> Cash {
    let direct: f64 = actor
        .assets()
        .iter()
        .map(|a| a.value.to_float() * sectors.multiplier(a.sector))
        .sum();
    let discounted_flow = actor.periodic_cash_flow().to_float() * 4.0;
    Cash::from_float(direct + discounted_flow)
}

/// Bounded earnings multiple: growth expectation raises it, risk premium
/// lowers it, floor of 2.0.
pub fn cash_flow_multiple(actor: &Actor) -> f64 {
    let base = 3.0 + actor.growth_expectation() * 18.0;
    let risk_adjustment = (1.0 - actor.risk_premium()).max(0.55);
    (base * risk_adjustment).max(2.0)
}

/// Cash-flow-weighted average of per-asset sector margins.
///
/// When the actor has no periodic cash flow at all, the Property margin is
/// used as the default.
pub fn operating_margin(actor: &Actor, sectors: &SectorTable) -> f64 {
    let total = actor.periodic_cash_flow();
    if total.is_zero() {
        return sectors.margin(Sector::Property);
    }
    let total = total.to_float();
    actor
        .assets()
        .iter()
        .map(|a| (a.cash_flow_per_period.to_float() / total) * sectors.margin(a.sector))
        .sum()
}

/// Periodic operating result: total cash flow times the operating margin.
pub fn operating_result(actor: &Actor, sectors: &SectorTable) -> Cash {
    Cash::from_float(actor.periodic_cash_flow().to_float() * operating_margin(actor, sectors))
}

/// Mean sector multiplier across assets; 1.0 for an empty collection.
pub fn sentiment(actor: &Actor, sectors: &SectorTable) -> f64 {
    let assets = actor.assets();
    if assets.is_empty() {
        return 1.0;
    }
    assets
        .iter()
        .map(|a| sectors.multiplier(a.sector))
        .sum::<f64>()
        / assets.len() as f64
}

/// The actor's market valuation. Deterministic and never negative.
pub fn valuation(actor: &Actor, sectors: &SectorTable) -> Cash {
    let substance = substance_value(actor, sectors);
    let cash_flow_value =
        Cash::from_float(operating_result(actor, sectors).to_float() * cash_flow_multiple(actor));
    let debt_risk = actor.debt().to_float() * 1.05;
    let value = (substance + cash_flow_value).to_float() * sentiment(actor, sectors) - debt_risk;
    Cash::from_float(value.max(0.0))
}
