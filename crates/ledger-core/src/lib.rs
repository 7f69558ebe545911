//! Ledger-core: valuation and ownership mechanics for the tycoon ledger.
//!
//! This crate provides the invariant-bearing core:
//! - Actors (players/companies) holding cash, debt, assets and cross-ownership
//! - A pure, deterministic valuation engine over actor state
//! - A registry owning the actor collection and turn order
//! - Fractional share transfers that keep the dual ownership maps consistent
//! - Atomic money and asset transfers (validate fully, then commit)
//!
//! # Atomicity
//!
//! Every mutating operation validates against pre-transaction state before
//! touching anything; a failed validation returns a [`LedgerError`] and
//! leaves all actors untouched. Operations take the registry by `&mut self`,
//! so the borrow checker rules out re-entrant observation of half-applied
//! state in this single-threaded design.
//!
//! The core performs no logging and no retries; every failure is a
//! recoverable domain error carrying the context needed to render a message.

mod actor;
mod config;
mod error;
mod ownership;
mod registry;
mod transactions;
mod valuation;

pub use actor::{Actor, ActorSummary, GROWTH_EXPECTATION_RANGE, RISK_PREMIUM_RANGE};
pub use config::LedgerConfig;
pub use error::{LedgerError, Result};
pub use ownership::{SHARE_EPSILON, SHARE_SUM};
pub use registry::Registry;
pub use valuation::{
    cash_flow_multiple, operating_margin, operating_result, sentiment, substance_value, valuation,
};
