//! Registry owning the actor collection, turn order and snapshots.
//!
//! The registry replaces any ambient/global state: every operation goes
//! through an explicit `Registry` value held by the caller. It owns the
//! `name -> Actor` map, the circular turn order, the arena counter handing
//! out stable asset ids, and the injected [`LedgerConfig`].

use crate::actor::{Actor, ActorSummary};
use crate::config::LedgerConfig;
use crate::error::{LedgerError, Result};
use crate::ownership::SHARE_SUM;
use crate::valuation;
use std::collections::HashMap;
use types::{ActorName, Asset, AssetId, Cash, Sector, SectorTable};

/// Container for actors, turn order and valuation snapshots.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    config: LedgerConfig,
    actors: HashMap<ActorName, Actor>,
    order: Vec<ActorName>,
    current_index: usize,
    cycles_completed: u64,
    next_asset_id: u64,
}

impl Registry {
    /// Create a registry with the given configuration.
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn sectors(&self) -> &SectorTable {
        &self.config.sectors
    }

    /// Number of registered actors.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Actor names in turn order.
    pub fn actor_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Completed full cycles through the turn order ("years").
    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    /// Look up an actor by name.
    pub fn get(&self, name: &str) -> Result<&Actor> {
        self.actors.get(name).ok_or_else(|| LedgerError::UnknownActor {
            name: name.to_string(),
        })
    }

    /// Look up an actor by name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Actor> {
        self.actors
            .get_mut(name)
            .ok_or_else(|| LedgerError::UnknownActor {
                name: name.to_string(),
            })
    }

    // -------------------------------------------------------------------------
    // Creation
    // -------------------------------------------------------------------------

    /// Register a new self-owned actor. Balance defaults to the configured
    /// starting balance.
    pub fn add_actor(&mut self, name: impl Into<ActorName>, balance: Option<Cash>) -> Result<&Actor> {
        self.insert_actor(name.into(), balance, None)
    }

    /// Register a new actor whose initial 100% owner is another actor
    /// (e.g. a company founded by a player).
    pub fn add_actor_owned_by(
        &mut self,
        name: impl Into<ActorName>,
        balance: Option<Cash>,
        owner: &str,
    ) -> Result<&Actor> {
        self.insert_actor(name.into(), balance, Some(owner.to_string()))
    }

    fn insert_actor(
        &mut self,
        name: ActorName,
        balance: Option<Cash>,
        owner: Option<ActorName>,
    ) -> Result<&Actor> {
        if self.actors.contains_key(&name) {
            return Err(LedgerError::DuplicateActor { name });
        }
        let balance = balance.unwrap_or(self.config.start_balance);
        let actor = Actor::new(name.clone(), balance, owner.as_deref());
        // Keep the founding owner's holdings mirror in sync from the start.
        if let Some(owner_name) = owner.as_deref() {
            if owner_name != name {
                if let Some(founder) = self.actors.get_mut(owner_name) {
                    founder.holdings_mut().insert(name.clone(), SHARE_SUM);
                }
            }
        }
        self.order.push(name.clone());
        self.actors.insert(name.clone(), actor);
        self.get(&name)
    }

    /// Create an asset attached to an actor, assigning the next stable id.
    /// Unrecognized sector names fall back to Property.
    pub fn add_asset(
        &mut self,
        actor: &str,
        name: impl Into<String>,
        value: Cash,
        sector: &str,
        cash_flow_per_period: Cash,
    ) -> Result<&Asset> {
        self.get(actor)?;
        let id = AssetId(self.next_asset_id);
        self.next_asset_id += 1;
        let asset = Asset::new(id, name, value, Sector::from_name(sector), cash_flow_per_period);
        let owner = self.get_mut(actor)?;
        owner.assets_mut().push(asset);
        let idx = owner.assets().len() - 1;
        Ok(&owner.assets()[idx])
    }

    // -------------------------------------------------------------------------
    // Balance and tuning parameters
    // -------------------------------------------------------------------------

    /// Apply a signed delta to an actor's balance.
    pub fn adjust_balance(&mut self, actor: &str, delta: Cash) -> Result<()> {
        self.get_mut(actor)?.adjust_balance(delta);
        Ok(())
    }

    /// Set an actor's accumulated debt (floored at zero).
    pub fn set_debt(&mut self, actor: &str, debt: Cash) -> Result<()> {
        self.get_mut(actor)?.set_debt(debt);
        Ok(())
    }

    /// Set an actor's growth expectation (clamped).
    pub fn set_growth_expectation(&mut self, actor: &str, value: f64) -> Result<()> {
        self.get_mut(actor)?.set_growth_expectation(value);
        Ok(())
    }

    /// Set an actor's risk premium (clamped).
    pub fn set_risk_premium(&mut self, actor: &str, value: f64) -> Result<()> {
        self.get_mut(actor)?.set_risk_premium(value);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Current market valuation of an actor.
    pub fn valuation(&self, actor: &str) -> Result<Cash> {
        Ok(valuation::valuation(self.get(actor)?, &self.config.sectors))
    }

    /// Display snapshot of an actor.
    pub fn summary(&self, actor: &str) -> Result<ActorSummary> {
        let a = self.get(actor)?;
        Ok(ActorSummary {
            name: a.name().to_string(),
            balance: a.balance(),
            assets: a.assets().to_vec(),
            ownership_shares: a.ownership_shares().clone(),
            holdings: a.holdings().clone(),
            valuation: valuation::valuation(a, &self.config.sectors),
            periodic_cash_flow: a.periodic_cash_flow(),
            dominant_sector: a.dominant_sector(),
        })
    }

    /// Linear scan for an asset by name across all actors, in turn order.
    pub fn find_asset(&self, name: &str) -> Result<(&Actor, &Asset)> {
        for actor_name in &self.order {
            if let Some(actor) = self.actors.get(actor_name) {
                if let Some(asset) = actor.assets().iter().find(|a| a.name == name) {
                    return Ok((actor, asset));
                }
            }
        }
        Err(LedgerError::AssetNotFound {
            name: name.to_string(),
        })
    }

    // -------------------------------------------------------------------------
    // Turn sequencing and snapshots
    // -------------------------------------------------------------------------

    /// Advance the circular turn pointer and return the actor whose turn it
    /// is. Completing a pass through all actors counts one cycle.
    pub fn next_actor(&mut self) -> Result<&Actor> {
        if self.order.is_empty() {
            return Err(LedgerError::EmptyRegistry);
        }
        let name = self.order[self.current_index].clone();
        self.current_index = (self.current_index + 1) % self.order.len();
        if self.current_index == 0 {
            self.cycles_completed += 1;
        }
        self.get(&name)
    }

    /// Append each actor's current valuation to its history. No other side
    /// effects.
    pub fn record_all_valuations(&mut self) {
        let snapshots: Vec<(ActorName, Cash)> = self
            .order
            .iter()
            .filter_map(|name| {
                self.actors
                    .get(name)
                    .map(|a| (name.clone(), valuation::valuation(a, &self.config.sectors)))
            })
            .collect();
        for (name, value) in snapshots {
            if let Some(actor) = self.actors.get_mut(&name) {
                actor.record_valuation(value);
            }
        }
    }

    /// Credit an actor's balance with its total periodic cash flow and
    /// return the amount applied. Cadence is the caller's decision.
    pub fn apply_periodic_cash_flow(&mut self, actor: &str) -> Result<Cash> {
        let flow = self.get(actor)?.periodic_cash_flow();
        self.get_mut(actor)?.adjust_balance(flow);
        Ok(flow)
    }
}
