//! Sector classification and the injected multiplier/margin tables.
//!
//! Sector multipliers and operating margins are configuration consumed by
//! the valuation engine, not business logic baked into it. The default
//! table carries the canonical values; callers can override any sector via
//! the builder methods.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Classification of an asset, driving its valuation multiplier and margin.
///
/// Board data uses Swedish group names for two of the sectors, so
/// [`Sector::from_name`] accepts those as aliases. Anything unrecognized
/// falls back to `Property`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Sector {
    #[default]
    Property,
    Railroad,
    Utility,
}

impl Sector {
    /// All sectors, in display order.
    pub const ALL: [Sector; 3] = [Sector::Property, Sector::Railroad, Sector::Utility];

    /// Parse a sector name, accepting the Swedish board aliases.
    /// Unrecognized names default to `Property`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Property" => Sector::Property,
            "Railroad" | "Tåg" => Sector::Railroad,
            "Utility" | "Statligt" => Sector::Utility,
            _ => Sector::Property,
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sector::Property => write!(f, "Property"),
            Sector::Railroad => write!(f, "Railroad"),
            Sector::Utility => write!(f, "Utility"),
        }
    }
}

/// Valuation parameters for one sector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorProfile {
    /// Substance/sentiment multiplier applied to asset values.
    pub multiplier: f64,
    /// Operating margin applied to periodic cash flow.
    pub margin: f64,
}

impl SectorProfile {
    pub fn new(multiplier: f64, margin: f64) -> Self {
        Self { multiplier, margin }
    }
}

/// Fallback profile when neither the requested sector nor Property is
/// present in a (customized) table.
const PROPERTY_PROFILE: SectorProfile = SectorProfile {
    multiplier: 1.08,
    margin: 0.30,
};

/// Injected lookup table mapping each sector to its valuation profile.
///
/// Lookups for sectors missing from the table fall back to the Property
/// profile, mirroring the parse-time fallback in [`Sector::from_name`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorTable {
    profiles: BTreeMap<Sector, SectorProfile>,
}

impl SectorTable {
    /// Create an empty table. All lookups fall back to the Property profile.
    pub fn empty() -> Self {
        Self {
            profiles: BTreeMap::new(),
        }
    }

    /// Override the profile for a sector.
    pub fn with_profile(mut self, sector: Sector, multiplier: f64, margin: f64) -> Self {
        self.profiles
            .insert(sector, SectorProfile::new(multiplier, margin));
        self
    }

    /// Get the profile for a sector, falling back to Property.
    pub fn profile(&self, sector: Sector) -> SectorProfile {
        self.profiles
            .get(&sector)
            .or_else(|| self.profiles.get(&Sector::Property))
            .copied()
            .unwrap_or(PROPERTY_PROFILE)
    }

    /// Get the substance/sentiment multiplier for a sector.
    pub fn multiplier(&self, sector: Sector) -> f64 {
        self.profile(sector).multiplier
    }

    /// Get the operating margin for a sector.
    pub fn margin(&self, sector: Sector) -> f64 {
        self.profile(sector).margin
    }
}

impl Default for SectorTable {
    /// The canonical table: Property {1.08, 0.30}, Railroad {0.95, 0.22},
    /// Utility {1.00, 0.18}.
    fn default() -> Self {
        Self::empty()
            .with_profile(Sector::Property, 1.08, 0.30)
            .with_profile(Sector::Railroad, 0.95, 0.22)
            .with_profile(Sector::Utility, 1.00, 0.18)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_english() {
        assert_eq!(Sector::from_name("Property"), Sector::Property);
        assert_eq!(Sector::from_name("Railroad"), Sector::Railroad);
        assert_eq!(Sector::from_name("Utility"), Sector::Utility);
    }

    #[test]
    fn test_from_name_swedish_aliases() {
        assert_eq!(Sector::from_name("Tåg"), Sector::Railroad);
        assert_eq!(Sector::from_name("Statligt"), Sector::Utility);
    }

    #[test]
    fn test_from_name_unknown_defaults_to_property() {
        assert_eq!(Sector::from_name("Spaceport"), Sector::Property);
        assert_eq!(Sector::from_name(""), Sector::Property);
    }

    #[test]
    fn test_default_table_values() {
        let table = SectorTable::default();
        assert_eq!(table.multiplier(Sector::Property), 1.08);
        assert_eq!(table.margin(Sector::Property), 0.30);
        assert_eq!(table.multiplier(Sector::Railroad), 0.95);
        assert_eq!(table.margin(Sector::Railroad), 0.22);
        assert_eq!(table.multiplier(Sector::Utility), 1.00);
        assert_eq!(table.margin(Sector::Utility), 0.18);
    }

    #[test]
    fn test_profile_override() {
        let table = SectorTable::default().with_profile(Sector::Railroad, 1.10, 0.25);
        assert_eq!(table.multiplier(Sector::Railroad), 1.10);
        assert_eq!(table.margin(Sector::Railroad), 0.25);
        // Other sectors untouched.
        assert_eq!(table.multiplier(Sector::Property), 1.08);
    }

    #[test]
    fn test_missing_sector_falls_back_to_property() {
        let table = SectorTable::empty().with_profile(Sector::Property, 1.05, 0.28);
        assert_eq!(table.multiplier(Sector::Utility), 1.05);
        assert_eq!(table.margin(Sector::Railroad), 0.28);
    }

    #[test]
    fn test_empty_table_uses_builtin_property_profile() {
        let table = SectorTable::empty();
        assert_eq!(table.multiplier(Sector::Property), 1.08);
        assert_eq!(table.margin(Sector::Utility), 0.30);
    }
}
