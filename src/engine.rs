//! Price estimation facade.
//!
//! The single entry point the presentation layer talks to. Stateless per
//! call: the model and rule table are loaded once and shared read-only, so
//! repeated calls with the same property are idempotent.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EstimationError;
use crate::model::PredictorModel;
use crate::pricing::{self, PriceBreakdown};
use crate::property::PropertyDescription;
use crate::reconcile;
use crate::rules::AdjustmentRules;
use crate::schema::SchemaCandidate;

/// How a price estimate is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingMode {
    /// Model-only: full schema reconciliation, raw prediction, no rule
    /// adjustments.
    PureModel,
    /// One minimal-feature model call blended with rule adjustments.
    Hybrid,
}

impl PricingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingMode::PureModel => "pure_model",
            PricingMode::Hybrid => "hybrid",
        }
    }
}

/// A completed estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub mode: PricingMode,
    /// Which candidate schema the model accepted (pure-model mode only).
    pub candidate: Option<SchemaCandidate>,
    pub breakdown: PriceBreakdown,
}

/// The price estimation engine.
pub struct PriceEngine {
    model: Arc<dyn PredictorModel>,
    rules: AdjustmentRules,
}

impl PriceEngine {
    pub fn new(model: Arc<dyn PredictorModel>, rules: AdjustmentRules) -> Self {
        Self { model, rules }
    }

    pub fn rules(&self) -> &AdjustmentRules {
        &self.rules
    }

    /// Estimate a price for a property in the given mode.
    pub fn estimate(
        &self,
        property: &PropertyDescription,
        mode: PricingMode,
    ) -> Result<Estimate, EstimationError> {
        debug!(mode = mode.as_str(), "estimating price");
        match mode {
            PricingMode::PureModel => self.estimate_pure(property),
            PricingMode::Hybrid => self.estimate_hybrid(property),
        }
    }

    fn estimate_pure(
        &self,
        property: &PropertyDescription,
    ) -> Result<Estimate, EstimationError> {
        let reconciled =
            reconcile::reconcile(property, &SchemaCandidate::PRIORITY, self.model.as_ref())?;
        // Same contract as the hybrid path: a non-finite or negative raw
        // prediction is surfaced, never wrapped into a breakdown.
        if !reconciled.price.is_finite() || reconciled.price < 0.0 {
            return Err(EstimationError::InvalidBasePrice {
                value: reconciled.price,
            });
        }
        let price = Decimal::try_from(reconciled.price).map_err(|_| {
            EstimationError::InvalidBasePrice {
                value: reconciled.price,
            }
        })?;

        Ok(Estimate {
            mode: PricingMode::PureModel,
            candidate: Some(reconciled.candidate),
            breakdown: PriceBreakdown::model_only(price),
        })
    }

    fn estimate_hybrid(
        &self,
        property: &PropertyDescription,
    ) -> Result<Estimate, EstimationError> {
        // Hybrid always uses the minimal 3-feature form, never the full
        // set: the schema is fixed and small, so no reconciliation needed.
        let row = SchemaCandidate::Minimal.feature_row(property);
        let base = self.model.predict(&row)?;
        let breakdown = pricing::price_with_adjustments(base, property, &self.rules)?;

        Ok(Estimate {
            mode: PricingMode::Hybrid,
            candidate: None,
            breakdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::model::{FeatureRow, ModelError};
    use crate::property::{Amenities, Location};

    /// Stub model returning a fixed price for any 3-feature row, and
    /// rejecting everything else.
    struct MinimalOnly {
        price: f64,
    }

    impl PredictorModel for MinimalOnly {
        fn predict(&self, row: &FeatureRow) -> Result<f64, ModelError> {
            if row.len() == 3 {
                Ok(self.price)
            } else {
                Err(ModelError::SchemaMismatch {
                    expected: vec!["area".into(), "bedrooms".into(), "bathrooms".into()],
                    supplied: row.names().map(String::from).collect(),
                })
            }
        }
    }

    /// Stub model that records the widest row it ever saw.
    struct ArityRecorder {
        max_seen: std::sync::Mutex<usize>,
    }

    impl PredictorModel for ArityRecorder {
        fn predict(&self, row: &FeatureRow) -> Result<f64, ModelError> {
            let mut max = self.max_seen.lock().unwrap();
            *max = (*max).max(row.len());
            Ok(500_000.0)
        }
    }

    struct RejectAll;

    impl PredictorModel for RejectAll {
        fn predict(&self, row: &FeatureRow) -> Result<f64, ModelError> {
            Err(ModelError::SchemaMismatch {
                expected: vec![],
                supplied: row.names().map(String::from).collect(),
            })
        }
    }

    fn engine(model: impl PredictorModel + 'static) -> PriceEngine {
        PriceEngine::new(Arc::new(model), AdjustmentRules::default())
    }

    fn property() -> PropertyDescription {
        PropertyDescription::new(
            1500,
            3,
            2,
            Location::CityCenter,
            Amenities {
                parking: true,
                garden: false,
                near_metro: false,
            },
            10,
        )
        .unwrap()
    }

    #[test]
    fn test_hybrid_applies_rules() {
        let engine = engine(MinimalOnly { price: 1_000_000.0 });
        let estimate = engine.estimate(&property(), PricingMode::Hybrid).unwrap();

        assert_eq!(estimate.mode, PricingMode::Hybrid);
        assert_eq!(estimate.candidate, None);
        assert_eq!(estimate.breakdown.final_price, dec!(1710000.0));
    }

    #[test]
    fn test_hybrid_never_sends_full_schema() {
        let model = Arc::new(ArityRecorder {
            max_seen: std::sync::Mutex::new(0),
        });
        let engine = PriceEngine::new(model.clone(), AdjustmentRules::default());

        engine.estimate(&property(), PricingMode::Hybrid).unwrap();
        assert_eq!(*model.max_seen.lock().unwrap(), 3);
    }

    #[test]
    fn test_pure_mode_wraps_raw_price() {
        let engine = engine(MinimalOnly { price: 950_000.0 });
        let estimate = engine.estimate(&property(), PricingMode::PureModel).unwrap();

        // MinimalOnly rejects the two rich schemas, so reconciliation
        // lands on the minimal candidate; no adjustments applied.
        assert_eq!(estimate.candidate, Some(SchemaCandidate::Minimal));
        assert_eq!(estimate.breakdown.base_price, dec!(950000));
        assert_eq!(estimate.breakdown.final_price, dec!(950000));
        assert!(estimate.breakdown.amenity_additions.is_empty());
        assert_eq!(estimate.breakdown.age_depreciation_factor, Decimal::ONE);
    }

    #[test]
    fn test_pure_mode_exhaustion() {
        let engine = engine(RejectAll);
        let err = engine
            .estimate(&property(), PricingMode::PureModel)
            .unwrap_err();
        assert_eq!(err.attempted_schemas().unwrap().len(), 3);
    }

    #[test]
    fn test_pure_mode_negative_prediction_rejected() {
        let engine = engine(MinimalOnly { price: -250_000.0 });
        let err = engine
            .estimate(&property(), PricingMode::PureModel)
            .unwrap_err();
        assert!(matches!(
            err,
            EstimationError::InvalidBasePrice { value } if value == -250_000.0
        ));
    }

    #[test]
    fn test_hybrid_negative_base_is_contract_violation() {
        let engine = engine(MinimalOnly { price: -250_000.0 });
        let err = engine.estimate(&property(), PricingMode::Hybrid).unwrap_err();
        assert!(matches!(err, EstimationError::InvalidBasePrice { .. }));
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let engine = engine(MinimalOnly { price: 1_000_000.0 });
        let p = property();

        let first = engine.estimate(&p, PricingMode::Hybrid).unwrap();
        let second = engine.estimate(&p, PricingMode::Hybrid).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_hybrid_final_price_non_negative_across_inputs() {
        let engine = engine(MinimalOnly { price: 0.0 });

        for location in Location::all() {
            for age in [0, 25, 50] {
                let p = PropertyDescription::new(
                    500,
                    1,
                    1,
                    *location,
                    Amenities::none(),
                    age,
                )
                .unwrap();
                let estimate = engine.estimate(&p, PricingMode::Hybrid).unwrap();
                assert!(estimate.breakdown.final_price >= Decimal::ZERO);
            }
        }
    }
}
