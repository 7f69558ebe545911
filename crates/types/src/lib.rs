//! Core types for the tycoon ledger.
//!
//! This crate provides the shared data types used across the ledger and
//! engine crates: fixed-point monetary values, sector classification with
//! injected multiplier/margin tables, and sector-tagged assets.

mod asset;
mod money;
mod sector;

pub use asset::{Asset, AssetId};
pub use money::{Cash, CASH_SCALE};
pub use sector::{Sector, SectorProfile, SectorTable};

// =============================================================================
// Common Aliases
// =============================================================================

/// Actor name, the unique key into the registry (e.g. "Alva", "Elverket AB").
pub type ActorName = String;

/// Turn counter (one `next_actor` advance = one turn).
pub type Turn = u64;
