//! Injected configuration for the ledger registry.

use serde::{Deserialize, Serialize};
use types::{Cash, SectorTable};

/// Configuration consumed, not computed, by the ledger core: the sector
/// multiplier/margin tables and the default starting balance for new actors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Balance assigned to actors created without an explicit one.
    pub start_balance: Cash,
    /// Sector valuation profiles.
    pub sectors: SectorTable,
}

impl LedgerConfig {
    /// Set the default starting balance.
    pub fn with_start_balance(mut self, balance: Cash) -> Self {
        self.start_balance = balance;
        self
    }

    /// Replace the sector table.
    pub fn with_sectors(mut self, sectors: SectorTable) -> Self {
        self.sectors = sectors;
        self
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            start_balance: Cash::from_float(15_000.0),
            sectors: SectorTable::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::Sector;

    #[test]
    fn test_default_config() {
        let config = LedgerConfig::default();
        assert_eq!(config.start_balance, Cash::from_float(15_000.0));
        assert_eq!(config.sectors.multiplier(Sector::Property), 1.08);
    }

    #[test]
    fn test_builders() {
        let config = LedgerConfig::default()
            .with_start_balance(Cash::from_float(2_000.0))
            .with_sectors(SectorTable::empty().with_profile(Sector::Property, 1.0, 0.5));
        assert_eq!(config.start_balance, Cash::from_float(2_000.0));
        assert_eq!(config.sectors.margin(Sector::Property), 0.5);
    }
}
