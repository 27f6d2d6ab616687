//! Historical dataset statistics for contextual reporting.
//!
//! Aggregates over past listing records feed sidebar-style context next
//! to an estimate. Nothing here participates in price computation.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::property::Location;

/// Errors while loading the historical dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One historical listing row. Location membership arrives as one
/// boolean-like column per category, matching the training data layout.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingRecord {
    pub area: f64,
    pub price: f64,
    #[serde(default)]
    pub location_city_center: u8,
    #[serde(default)]
    pub location_suburb: u8,
    #[serde(default)]
    pub location_outskirts: u8,
}

impl ListingRecord {
    /// The location flagged on this record, if exactly one is set.
    pub fn location(&self) -> Option<Location> {
        match (
            self.location_city_center,
            self.location_suburb,
            self.location_outskirts,
        ) {
            (1, 0, 0) => Some(Location::CityCenter),
            (0, 1, 0) => Some(Location::Suburb),
            (0, 0, 1) => Some(Location::Outskirts),
            _ => None,
        }
    }
}

/// Aggregate statistics over the historical dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetSummary {
    pub total_listings: u64,
    pub avg_price: f64,
    pub avg_area: f64,
    pub city_center_listings: u64,
    pub suburb_listings: u64,
    pub outskirts_listings: u64,
}

impl DatasetSummary {
    /// Load records from a JSON array file and summarize them.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let raw = fs::read_to_string(path)?;
        let records: Vec<ListingRecord> = serde_json::from_str(&raw)?;
        info!(path = %path.display(), records = records.len(), "loaded historical dataset");
        Ok(Self::from_records(&records))
    }

    pub fn from_records(records: &[ListingRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let total = records.len() as u64;
        let mut summary = Self {
            total_listings: total,
            avg_price: records.iter().map(|r| r.price).sum::<f64>() / total as f64,
            avg_area: records.iter().map(|r| r.area).sum::<f64>() / total as f64,
            ..Self::default()
        };

        for record in records {
            match record.location() {
                Some(Location::CityCenter) => summary.city_center_listings += 1,
                Some(Location::Suburb) => summary.suburb_listings += 1,
                Some(Location::Outskirts) => summary.outskirts_listings += 1,
                None => {}
            }
        }
        summary
    }

    pub fn listings_for(&self, location: Location) -> u64 {
        match location {
            Location::CityCenter => self.city_center_listings,
            Location::Suburb => self.suburb_listings,
            Location::Outskirts => self.outskirts_listings,
        }
    }
}
