//! Sector-tagged assets with periodic cash flow.

use crate::{Cash, Sector};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for an asset, assigned once at creation.
///
/// Ownership transfer moves the id-stable record between actor
/// collections; the id never changes, so references held by callers stay
/// valid across transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct AssetId(pub u64);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Asset({})", self.0)
    }
}

/// A valued holding generating periodic cash flow, owned by exactly one
/// actor at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Stable identity assigned by the registry.
    pub id: AssetId,
    /// Display name, unique within the owner's collection by convention.
    pub name: String,
    /// Book value.
    pub value: Cash,
    /// Sector classification.
    pub sector: Sector,
    /// Cash generated per period (one full turn cycle).
    pub cash_flow_per_period: Cash,
}

impl Asset {
    /// Create a new asset.
    pub fn new(
        id: AssetId,
        name: impl Into<String>,
        value: Cash,
        sector: Sector,
        cash_flow_per_period: Cash,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            value,
            sector,
            cash_flow_per_period,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.0}, {})",
            self.name,
            self.value.to_float(),
            self.sector
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_display() {
        let asset = Asset::new(
            AssetId(1),
            "Västerlånggatan",
            Cash::from_float(1_200.0),
            Sector::Property,
            Cash::from_float(40.0),
        );
        assert_eq!(asset.to_string(), "Västerlånggatan (1200, Property)");
    }
}
