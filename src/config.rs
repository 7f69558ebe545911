//! Central configuration for the demo scenario.
//!
//! All demo parameters are defined here for easy tuning.

use engine::CashFlowCadence;
use types::Cash;

/// Player names used by the demo, in seating order.
pub const PLAYER_NAMES: [&str; 6] = ["Alva", "Bertil", "Cornelia", "Disa", "Egon", "Freja"];

/// Master configuration for the demo run.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Run Control
    // ─────────────────────────────────────────────────────────────────────────
    /// Total turns to play.
    pub turns: u64,
    /// Number of players seated (companies are added on top).
    pub players: usize,
    /// Dice seed; `None` rolls from entropy.
    pub seed: Option<u64>,
    /// When recurring cash flow is credited.
    pub cadence: CashFlowCadence,

    // ─────────────────────────────────────────────────────────────────────────
    // Ledger Parameters
    // ─────────────────────────────────────────────────────────────────────────
    /// Starting balance for every actor.
    pub start_balance: Cash,

    // ─────────────────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────────────────
    /// Dump final summaries as JSON instead of text.
    pub json: bool,
    /// Log every turn.
    pub verbose: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            turns: 24,
            players: 3,
            seed: None,
            cadence: CashFlowCadence::EveryTurn,
            start_balance: Cash::from_float(15_000.0),
            json: false,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_demo_config() {
        let config = DemoConfig::default();
        assert_eq!(config.turns, 24);
        assert_eq!(config.players, 3);
        assert!(config.players <= PLAYER_NAMES.len());
    }
}
