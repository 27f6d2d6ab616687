//! Hybrid pricing: a learned base price plus rule adjustments.
//!
//! The adjustment order is fixed and load-bearing: location multiplier
//! first, then flat amenity additions, then age depreciation applied to
//! the sum, so amenity value depreciates with the rest of the property.
//! Swapping the order changes numeric outcomes.

use rust_decimal::Decimal;

use crate::error::EstimationError;
use crate::property::{Amenity, PropertyDescription};
use crate::rules::AdjustmentRules;

/// One itemized amenity line in a breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmenityAddition {
    pub amenity: Amenity,
    pub value: Decimal,
}

/// Every intermediate value of a price computation, retained for display.
/// No rounding happens here; presentation rounds at the edge.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    pub base_price: Decimal,
    pub location_adjusted_price: Decimal,
    pub amenity_additions: Vec<AmenityAddition>,
    pub age_depreciation_factor: Decimal,
    pub final_price: Decimal,
}

impl PriceBreakdown {
    /// Sum of all amenity line items.
    pub fn amenity_total(&self) -> Decimal {
        self.amenity_additions.iter().map(|a| a.value).sum()
    }

    /// Wrap a raw model price as a breakdown with identity adjustments
    /// (pure-model mode: a single "model" line, no rules applied).
    pub(crate) fn model_only(price: Decimal) -> Self {
        Self {
            base_price: price,
            location_adjusted_price: price,
            amenity_additions: Vec::new(),
            age_depreciation_factor: Decimal::ONE,
            final_price: price,
        }
    }
}

/// Apply the rule table to a learned base price.
///
/// The base must be a finite, non-negative number; anything else is an
/// [`EstimationError::InvalidBasePrice`] contract violation.
pub fn price_with_adjustments(
    base_price: f64,
    property: &PropertyDescription,
    rules: &AdjustmentRules,
) -> Result<PriceBreakdown, EstimationError> {
    if !base_price.is_finite() || base_price < 0.0 {
        return Err(EstimationError::InvalidBasePrice { value: base_price });
    }
    let base = Decimal::try_from(base_price)
        .map_err(|_| EstimationError::InvalidBasePrice { value: base_price })?;

    let location_adjusted = base * rules.multiplier(property.location());

    let amenity_additions: Vec<AmenityAddition> = property
        .amenities()
        .active()
        .map(|amenity| AmenityAddition {
            amenity,
            value: rules.amenity_bonus(amenity),
        })
        .collect();
    let amenity_total: Decimal = amenity_additions.iter().map(|a| a.value).sum();

    // Input bounds keep age <= 50 (factor >= 0.75); the zero floor is
    // still enforced so no rule table can drive the price negative.
    let age_factor = (Decimal::ONE
        - rules.depreciation_rate_per_year * Decimal::from(property.age_years()))
    .max(Decimal::ZERO);

    let final_price = (location_adjusted + amenity_total) * age_factor;

    Ok(PriceBreakdown {
        base_price: base,
        location_adjusted_price: location_adjusted,
        amenity_additions,
        age_depreciation_factor: age_factor,
        final_price,
    })
}
