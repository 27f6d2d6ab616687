//! Feature schema candidates for model reconciliation.
//!
//! A persisted model's expected column names are not guaranteed to match
//! the current application schema. Rather than inventing naming schemes at
//! runtime, the known conventions form a closed candidate set, tried in a
//! fixed priority order: richest schema first, minimal fallback last.

use serde::{Deserialize, Serialize};

use crate::model::FeatureRow;
use crate::property::{Amenity, Location, PropertyDescription};

/// A naming convention for the model's input schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaCandidate {
    /// Full feature set with underscore-separated names
    /// (`location_city_center`, `has_parking`, ...).
    FullNamed,
    /// Full feature set with compact, separator-free names
    /// (`locationcitycenter`, `hasparking`, ...).
    Compact,
    /// Minimal 3-feature form: area, bedrooms, bathrooms.
    Minimal,
}

impl SchemaCandidate {
    /// Candidate priority order. Richer schemas are preferred; the first
    /// one the model accepts wins.
    pub const PRIORITY: [SchemaCandidate; 3] = [
        SchemaCandidate::FullNamed,
        SchemaCandidate::Compact,
        SchemaCandidate::Minimal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaCandidate::FullNamed => "full_named",
            SchemaCandidate::Compact => "compact",
            SchemaCandidate::Minimal => "minimal",
        }
    }

    /// Build the feature row for this candidate from a property.
    pub fn feature_row(&self, property: &PropertyDescription) -> FeatureRow {
        let mut row = FeatureRow::new();
        row.push("area", f64::from(property.area_sqft()));
        row.push("bedrooms", f64::from(property.bedrooms()));
        row.push("bathrooms", f64::from(property.bathrooms()));

        if *self == SchemaCandidate::Minimal {
            return row;
        }

        let compact = *self == SchemaCandidate::Compact;
        for location in Location::all() {
            row.push(
                location_column(*location, compact),
                one_hot(property.location() == *location),
            );
        }
        for amenity in Amenity::all() {
            row.push(
                amenity_column(*amenity, compact),
                one_hot(property.amenities().has(*amenity)),
            );
        }
        row.push(
            if compact { "propertyage" } else { "property_age" },
            f64::from(property.age_years()),
        );
        row
    }
}

fn one_hot(set: bool) -> f64 {
    if set { 1.0 } else { 0.0 }
}

fn location_column(location: Location, compact: bool) -> &'static str {
    match (location, compact) {
        (Location::CityCenter, false) => "location_city_center",
        (Location::CityCenter, true) => "locationcitycenter",
        (Location::Suburb, false) => "location_suburb",
        (Location::Suburb, true) => "locationsuburb",
        (Location::Outskirts, false) => "location_outskirts",
        (Location::Outskirts, true) => "locationoutskirts",
    }
}

fn amenity_column(amenity: Amenity, compact: bool) -> &'static str {
    match (amenity, compact) {
        (Amenity::Parking, false) => "has_parking",
        (Amenity::Parking, true) => "hasparking",
        (Amenity::Garden, false) => "has_garden",
        (Amenity::Garden, true) => "hasgarden",
        (Amenity::NearMetro, false) => "near_metro",
        (Amenity::NearMetro, true) => "nearmetro",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::property::Amenities;

    fn property() -> PropertyDescription {
        PropertyDescription::new(
            1500,
            3,
            2,
            Location::CityCenter,
            Amenities {
                parking: true,
                garden: false,
                near_metro: true,
            },
            10,
        )
        .unwrap()
    }

    #[test]
    fn test_full_named_row() {
        let row = SchemaCandidate::FullNamed.feature_row(&property());
        let names: Vec<&str> = row.names().collect();

        assert_eq!(
            names,
            vec![
                "area",
                "bedrooms",
                "bathrooms",
                "location_city_center",
                "location_suburb",
                "location_outskirts",
                "has_parking",
                "has_garden",
                "near_metro",
                "property_age",
            ]
        );
        assert_eq!(row.get("location_city_center"), Some(1.0));
        assert_eq!(row.get("location_suburb"), Some(0.0));
        assert_eq!(row.get("has_garden"), Some(0.0));
        assert_eq!(row.get("near_metro"), Some(1.0));
        assert_eq!(row.get("property_age"), Some(10.0));
    }

    #[test]
    fn test_compact_row_has_no_separators() {
        let row = SchemaCandidate::Compact.feature_row(&property());
        assert_eq!(row.len(), 10);
        assert!(row.names().skip(3).all(|n| !n.contains('_')));
        assert_eq!(row.get("locationcitycenter"), Some(1.0));
        assert_eq!(row.get("hasparking"), Some(1.0));
    }

    #[test]
    fn test_minimal_row() {
        let row = SchemaCandidate::Minimal.feature_row(&property());
        let names: Vec<&str> = row.names().collect();
        assert_eq!(names, vec!["area", "bedrooms", "bathrooms"]);
        assert_eq!(row.get("area"), Some(1500.0));
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(
            SchemaCandidate::PRIORITY,
            [
                SchemaCandidate::FullNamed,
                SchemaCandidate::Compact,
                SchemaCandidate::Minimal,
            ]
        );
    }
}
