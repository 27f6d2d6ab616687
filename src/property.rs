//! Property description value object.
//!
//! A [`PropertyDescription`] is built once per estimation request and is
//! immutable afterwards. Construction validates the same input ranges the
//! intake form enforces, so anything downstream can rely on the bounds.

use serde::{Deserialize, Serialize};

/// Allowed area range in square feet.
pub const AREA_SQFT_RANGE: (u32, u32) = (500, 10_000);
/// Allowed bedroom/bathroom count range.
pub const ROOM_RANGE: (u32, u32) = (1, 10);
/// Allowed property age range in years.
pub const AGE_YEARS_RANGE: (u32, u32) = (0, 50);

/// Where the property sits relative to the city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    CityCenter,
    Suburb,
    Outskirts,
}

impl Location {
    /// All locations, in display order.
    pub fn all() -> &'static [Location] {
        &[Location::CityCenter, Location::Suburb, Location::Outskirts]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::CityCenter => "city_center",
            Location::Suburb => "suburb",
            Location::Outskirts => "outskirts",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Location::CityCenter => "City Center",
            Location::Suburb => "Suburb",
            Location::Outskirts => "Outskirts",
        }
    }
}

/// A boolean property feature carrying a flat price bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Amenity {
    Parking,
    Garden,
    NearMetro,
}

impl Amenity {
    pub fn all() -> &'static [Amenity] {
        &[Amenity::Parking, Amenity::Garden, Amenity::NearMetro]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Amenity::Parking => "parking",
            Amenity::Garden => "garden",
            Amenity::NearMetro => "near_metro",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Amenity::Parking => "Parking",
            Amenity::Garden => "Garden",
            Amenity::NearMetro => "Near Metro",
        }
    }
}

/// Amenity flags for a property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenities {
    pub parking: bool,
    pub garden: bool,
    pub near_metro: bool,
}

impl Amenities {
    /// No amenities at all.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn has(&self, amenity: Amenity) -> bool {
        match amenity {
            Amenity::Parking => self.parking,
            Amenity::Garden => self.garden,
            Amenity::NearMetro => self.near_metro,
        }
    }

    /// Amenities that are set, in fixed order.
    pub fn active(&self) -> impl Iterator<Item = Amenity> + '_ {
        Amenity::all().iter().copied().filter(|a| self.has(*a))
    }
}

/// A validation failure for a property field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} out of range: {value} (expected {min}..={max})")]
pub struct PropertyError {
    pub field: &'static str,
    pub value: u32,
    pub min: u32,
    pub max: u32,
}

/// Validated description of a single property.
///
/// Only constructible through [`PropertyDescription::new`], so holders can
/// rely on the field bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyDescription {
    area_sqft: u32,
    bedrooms: u32,
    bathrooms: u32,
    location: Location,
    amenities: Amenities,
    age_years: u32,
}

impl PropertyDescription {
    /// Build a property description, validating every bounded field.
    pub fn new(
        area_sqft: u32,
        bedrooms: u32,
        bathrooms: u32,
        location: Location,
        amenities: Amenities,
        age_years: u32,
    ) -> Result<Self, PropertyError> {
        check_range("area_sqft", area_sqft, AREA_SQFT_RANGE)?;
        check_range("bedrooms", bedrooms, ROOM_RANGE)?;
        check_range("bathrooms", bathrooms, ROOM_RANGE)?;
        check_range("age_years", age_years, AGE_YEARS_RANGE)?;

        Ok(Self {
            area_sqft,
            bedrooms,
            bathrooms,
            location,
            amenities,
            age_years,
        })
    }

    pub fn area_sqft(&self) -> u32 {
        self.area_sqft
    }

    pub fn bedrooms(&self) -> u32 {
        self.bedrooms
    }

    pub fn bathrooms(&self) -> u32 {
        self.bathrooms
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn amenities(&self) -> &Amenities {
        &self.amenities
    }

    pub fn age_years(&self) -> u32 {
        self.age_years
    }
}

fn check_range(field: &'static str, value: u32, (min, max): (u32, u32)) -> Result<(), PropertyError> {
    if value < min || value > max {
        return Err(PropertyError {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> PropertyDescription {
        PropertyDescription::new(1200, 3, 2, Location::Suburb, Amenities::none(), 5).unwrap()
    }

    #[test]
    fn test_valid_property() {
        let p = valid();
        assert_eq!(p.area_sqft(), 1200);
        assert_eq!(p.location(), Location::Suburb);
    }

    #[test]
    fn test_area_out_of_range() {
        let err = PropertyDescription::new(100, 3, 2, Location::Suburb, Amenities::none(), 5)
            .unwrap_err();
        assert_eq!(err.field, "area_sqft");
        assert_eq!(err.min, 500);
    }

    #[test]
    fn test_age_out_of_range() {
        let err = PropertyDescription::new(1200, 3, 2, Location::Suburb, Amenities::none(), 51)
            .unwrap_err();
        assert_eq!(err.field, "age_years");
    }

    #[test]
    fn test_boundary_values_accepted() {
        assert!(PropertyDescription::new(500, 1, 1, Location::Outskirts, Amenities::none(), 0).is_ok());
        assert!(
            PropertyDescription::new(10_000, 10, 10, Location::CityCenter, Amenities::none(), 50)
                .is_ok()
        );
    }

    #[test]
    fn test_active_amenities_order() {
        let amenities = Amenities {
            parking: true,
            garden: false,
            near_metro: true,
        };
        let active: Vec<Amenity> = amenities.active().collect();
        assert_eq!(active, vec![Amenity::Parking, Amenity::NearMetro]);
    }
}
