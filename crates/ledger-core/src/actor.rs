//! The unified player/company actor and its display snapshot.
//!
//! Actors carry liquid cash, debt, a collection of sector-tagged assets,
//! the fractional-ownership map for themselves as a company, and the mirror
//! map of stakes they hold in other actors. Valuation tuning parameters are
//! clamped on every update.

use crate::ownership::{SHARE_EPSILON, SHARE_SUM};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use types::{ActorName, Asset, Cash, Sector};

/// Allowed range for `growth_expectation`, clamped on every update.
pub const GROWTH_EXPECTATION_RANGE: (f64, f64) = (-0.05, 0.25);

/// Allowed range for `risk_premium`, clamped on every update.
pub const RISK_PREMIUM_RANGE: (f64, f64) = (0.02, 0.40);

/// A player or company: the single ledger-bearing entity type.
///
/// Created once via the registry and never deleted; divestment reduces
/// shares to zero but the entity persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    name: ActorName,
    balance: Cash,
    growth_expectation: f64,
    risk_premium: f64,
    debt: Cash,
    assets: Vec<Asset>,
    /// owner name → percentage stake; sums to 100 whenever non-empty.
    ownership_shares: BTreeMap<ActorName, f64>,
    /// target actor name → percentage this actor owns in the target.
    /// Mirror of the targets' `ownership_shares` entries for this actor.
    holdings: BTreeMap<ActorName, f64>,
    /// Append-only valuation snapshots, one per recorded period.
    valuation_history: Vec<Cash>,
}

impl Actor {
    /// Create an actor with the given starting balance.
    ///
    /// When `owner` is `None` the actor seeds its own ownership:
    /// `ownership_shares = {self: 100}`.
    pub fn new(name: impl Into<ActorName>, balance: Cash, owner: Option<&str>) -> Self {
        let name = name.into();
        let main_owner = owner.unwrap_or(&name).to_string();
        let mut ownership_shares = BTreeMap::new();
        ownership_shares.insert(main_owner, SHARE_SUM);
        Self {
            name,
            balance,
            growth_expectation: 0.02,
            risk_premium: 0.08,
            debt: Cash::ZERO,
            assets: Vec::new(),
            ownership_shares,
            holdings: BTreeMap::new(),
            valuation_history: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Cash {
        self.balance
    }

    /// Apply a signed delta to the balance. No floor is enforced at this
    /// layer; overdraft policy belongs to the caller.
    pub fn adjust_balance(&mut self, delta: Cash) {
        self.balance += delta;
    }

    pub fn growth_expectation(&self) -> f64 {
        self.growth_expectation
    }

    /// Update the growth expectation, clamped to [`GROWTH_EXPECTATION_RANGE`].
    pub fn set_growth_expectation(&mut self, value: f64) {
        let (lo, hi) = GROWTH_EXPECTATION_RANGE;
        self.growth_expectation = value.clamp(lo, hi);
    }

    pub fn risk_premium(&self) -> f64 {
        self.risk_premium
    }

    /// Update the risk premium, clamped to [`RISK_PREMIUM_RANGE`].
    pub fn set_risk_premium(&mut self, value: f64) {
        let (lo, hi) = RISK_PREMIUM_RANGE;
        self.risk_premium = value.clamp(lo, hi);
    }

    pub fn debt(&self) -> Cash {
        self.debt
    }

    /// Update accumulated debt, floored at zero.
    pub fn set_debt(&mut self, value: Cash) {
        self.debt = value.max(Cash::ZERO);
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub(crate) fn assets_mut(&mut self) -> &mut Vec<Asset> {
        &mut self.assets
    }

    /// Total cash flow across all assets for one period.
    pub fn periodic_cash_flow(&self) -> Cash {
        self.assets.iter().map(|a| a.cash_flow_per_period).sum()
    }

    /// Current stake an owner holds in this actor; 0.0 when absent.
    pub fn share_for(&self, owner: &str) -> f64 {
        self.ownership_shares.get(owner).copied().unwrap_or(0.0)
    }

    pub fn ownership_shares(&self) -> &BTreeMap<ActorName, f64> {
        &self.ownership_shares
    }

    pub(crate) fn ownership_shares_mut(&mut self) -> &mut BTreeMap<ActorName, f64> {
        &mut self.ownership_shares
    }

    /// Stake this actor holds in the named target; 0.0 when absent.
    pub fn holding_in(&self, target: &str) -> f64 {
        self.holdings.get(target).copied().unwrap_or(0.0)
    }

    pub fn holdings(&self) -> &BTreeMap<ActorName, f64> {
        &self.holdings
    }

    pub(crate) fn holdings_mut(&mut self) -> &mut BTreeMap<ActorName, f64> {
        &mut self.holdings
    }

    /// Sum of all ownership stakes in this actor.
    pub fn ownership_total(&self) -> f64 {
        self.ownership_shares.values().sum()
    }

    /// Whether the ownership map is empty or sums to 100 within tolerance.
    pub fn ownership_is_consistent(&self) -> bool {
        self.ownership_shares.is_empty()
            || (self.ownership_total() - SHARE_SUM).abs() <= SHARE_EPSILON
    }

    pub fn valuation_history(&self) -> &[Cash] {
        &self.valuation_history
    }

    pub(crate) fn record_valuation(&mut self, value: Cash) {
        self.valuation_history.push(value);
    }

    /// The most common sector among this actor's assets, if any.
    pub fn dominant_sector(&self) -> Option<Sector> {
        let mut counts: BTreeMap<Sector, usize> = BTreeMap::new();
        for asset in &self.assets {
            *counts.entry(asset.sector).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .max_by_key(|&(_, count)| count)
            .map(|(sector, _)| sector)
    }
}

/// Structured display snapshot of an actor. For rendering only; not a
/// contract surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorSummary {
    pub name: ActorName,
    pub balance: Cash,
    pub assets: Vec<Asset>,
    pub ownership_shares: BTreeMap<ActorName, f64>,
    pub holdings: BTreeMap<ActorName, f64>,
    pub valuation: Cash,
    pub periodic_cash_flow: Cash,
    pub dominant_sector: Option<Sector>,
}

impl fmt::Display for ActorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assets = if self.assets.is_empty() {
            "None".to_string()
        } else {
            self.assets
                .iter()
                .map(Asset::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let ownership = self
            .ownership_shares
            .iter()
            .map(|(name, share)| format!("{}: {:.1}%", name, share))
            .collect::<Vec<_>>()
            .join(", ");
        let external = if self.holdings.is_empty() {
            "None".to_string()
        } else {
            self.holdings
                .iter()
                .map(|(name, share)| format!("{}: {:.1}%", name, share))
                .collect::<Vec<_>>()
                .join(", ")
        };
        writeln!(f, "Balance: {:.0} kr", self.balance.to_float())?;
        writeln!(f, "Assets: {}", assets)?;
        writeln!(f, "Ownership (this company): {}", ownership)?;
        writeln!(f, "Holdings in others: {}", external)?;
        writeln!(f, "Valuation: {:.0} kr", self.valuation.to_float())?;
        write!(
            f,
            "Periodic cash flow: {:.0} kr",
            self.periodic_cash_flow.to_float()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::AssetId;

    #[test]
    fn test_new_actor_seeds_self_ownership() {
        let actor = Actor::new("Alva", Cash::from_float(1_000.0), None);
        assert_eq!(actor.share_for("Alva"), 100.0);
        assert_eq!(actor.ownership_total(), 100.0);
        assert!(actor.ownership_is_consistent());
        assert!(actor.holdings().is_empty());
    }

    #[test]
    fn test_new_actor_with_explicit_owner() {
        let actor = Actor::new("Elverket AB", Cash::ZERO, Some("Bertil"));
        assert_eq!(actor.share_for("Bertil"), 100.0);
        assert_eq!(actor.share_for("Elverket AB"), 0.0);
    }

    #[test]
    fn test_default_tuning_parameters() {
        let actor = Actor::new("Alva", Cash::ZERO, None);
        assert_eq!(actor.growth_expectation(), 0.02);
        assert_eq!(actor.risk_premium(), 0.08);
        assert_eq!(actor.debt(), Cash::ZERO);
    }

    #[test]
    fn test_growth_expectation_clamped() {
        let mut actor = Actor::new("Alva", Cash::ZERO, None);
        actor.set_growth_expectation(0.50);
        assert_eq!(actor.growth_expectation(), 0.25);
        actor.set_growth_expectation(-1.0);
        assert_eq!(actor.growth_expectation(), -0.05);
        actor.set_growth_expectation(0.10);
        assert_eq!(actor.growth_expectation(), 0.10);
    }

    #[test]
    fn test_risk_premium_clamped() {
        let mut actor = Actor::new("Alva", Cash::ZERO, None);
        actor.set_risk_premium(0.0);
        assert_eq!(actor.risk_premium(), 0.02);
        actor.set_risk_premium(0.99);
        assert_eq!(actor.risk_premium(), 0.40);
    }

    #[test]
    fn test_debt_floored_at_zero() {
        let mut actor = Actor::new("Alva", Cash::ZERO, None);
        actor.set_debt(Cash::from_float(-500.0));
        assert_eq!(actor.debt(), Cash::ZERO);
        actor.set_debt(Cash::from_float(500.0));
        assert_eq!(actor.debt(), Cash::from_float(500.0));
    }

    #[test]
    fn test_periodic_cash_flow_sums_assets() {
        let mut actor = Actor::new("Alva", Cash::ZERO, None);
        actor.assets_mut().push(Asset::new(
            AssetId(1),
            "A",
            Cash::from_float(1_000.0),
            Sector::Property,
            Cash::from_float(40.0),
        ));
        actor.assets_mut().push(Asset::new(
            AssetId(2),
            "B",
            Cash::from_float(2_000.0),
            Sector::Railroad,
            Cash::from_float(60.0),
        ));
        assert_eq!(actor.periodic_cash_flow(), Cash::from_float(100.0));
    }

    #[test]
    fn test_dominant_sector() {
        let mut actor = Actor::new("Alva", Cash::ZERO, None);
        assert_eq!(actor.dominant_sector(), None);
        for (id, sector) in [
            (1, Sector::Railroad),
            (2, Sector::Railroad),
            (3, Sector::Property),
        ] {
            actor.assets_mut().push(Asset::new(
                AssetId(id),
                format!("asset-{}", id),
                Cash::from_float(100.0),
                sector,
                Cash::ZERO,
            ));
        }
        assert_eq!(actor.dominant_sector(), Some(Sector::Railroad));
    }

    #[test]
    fn test_adjust_balance_allows_overdraft() {
        let mut actor = Actor::new("Alva", Cash::from_float(100.0), None);
        actor.adjust_balance(Cash::from_float(-250.0));
        assert_eq!(actor.balance(), Cash::from_float(-150.0));
    }
}
