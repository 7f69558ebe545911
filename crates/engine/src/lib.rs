//! Engine: turn sequencing over the ledger registry.
//!
//! The ledger core executes individual operations; this crate drives them
//! through a game loop. Each step advances the circular turn order, rolls
//! the dice, applies periodic cash flow at the configured cadence, and
//! records valuation snapshots when a full cycle ("year") completes.
//!
//! The engine logs applied cash flow and cycle boundaries via `tracing`;
//! the ledger core itself stays silent.

mod config;
mod error;
mod runner;

pub use config::{CashFlowCadence, GameConfig};
pub use error::{GameError, Result};
pub use runner::{Game, GameStats, TurnReport};
