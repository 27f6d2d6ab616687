//! Deterministic adjustment rule table.
//!
//! Location multipliers, flat amenity bonuses, and the linear age
//! depreciation rate. The table is read-only: loaded once at startup
//! (built-in defaults, optionally overridden from a JSON file) and shared
//! for the life of the process.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::property::{Amenity, Location};

/// Errors while loading a rule override file.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed rules file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The business rules applied on top of a learned base price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentRules {
    pub city_center_multiplier: Decimal,
    pub suburb_multiplier: Decimal,
    pub outskirts_multiplier: Decimal,
    pub parking_bonus: Decimal,
    pub garden_bonus: Decimal,
    pub near_metro_bonus: Decimal,
    /// Linear depreciation per year of property age.
    pub depreciation_rate_per_year: Decimal,
}

impl Default for AdjustmentRules {
    fn default() -> Self {
        Self {
            city_center_multiplier: dec!(1.3),
            suburb_multiplier: dec!(1.1),
            outskirts_multiplier: dec!(0.9),
            parking_bonus: dec!(500000),
            garden_bonus: dec!(300000),
            near_metro_bonus: dec!(400000),
            depreciation_rate_per_year: dec!(0.005),
        }
    }
}

impl AdjustmentRules {
    /// Load rule overrides from a JSON file. Missing fields keep their
    /// built-in defaults.
    pub fn load(path: &Path) -> Result<Self, RulesError> {
        let raw = fs::read_to_string(path)?;
        let rules: AdjustmentRules = serde_json::from_str(&raw)?;
        info!(path = %path.display(), "loaded adjustment rule overrides");
        Ok(rules)
    }

    /// Multiplier applied to the base price for a location.
    pub fn multiplier(&self, location: Location) -> Decimal {
        match location {
            Location::CityCenter => self.city_center_multiplier,
            Location::Suburb => self.suburb_multiplier,
            Location::Outskirts => self.outskirts_multiplier,
        }
    }

    /// Flat bonus added for an amenity.
    pub fn amenity_bonus(&self, amenity: Amenity) -> Decimal {
        match amenity {
            Amenity::Parking => self.parking_bonus,
            Amenity::Garden => self.garden_bonus,
            Amenity::NearMetro => self.near_metro_bonus,
        }
    }
}
