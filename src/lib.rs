//! Homeworth: property price estimation with schema-drift tolerance.
//!
//! Turns a validated property description into a monetary estimate with an
//! auditable breakdown. Two pricing modes:
//!
//! - **Pure model**: the trained model's own prediction, reached by trying
//!   candidate feature schemas in priority order until one is accepted
//!   (the persisted model's columns may not match the live schema).
//! - **Hybrid**: one minimal-feature model call blended with deterministic
//!   business rules (location multiplier, flat amenity bonuses, linear
//!   age depreciation), every intermediate retained for display.
//!
//! The model and rule table load once at startup and are read-only
//! afterwards; each estimation call is independent and deterministic.

pub mod engine;
pub mod error;
pub mod model;
pub mod pricing;
pub mod property;
pub mod reconcile;
pub mod rules;
pub mod schema;
pub mod settings;
pub mod stats;

pub use engine::{Estimate, PriceEngine, PricingMode};
pub use error::EstimationError;
pub use model::{FeatureRow, LinearModel, ModelError, PredictorModel};
pub use pricing::{AmenityAddition, PriceBreakdown};
pub use property::{Amenities, Amenity, Location, PropertyDescription, PropertyError};
pub use reconcile::Reconciled;
pub use rules::AdjustmentRules;
pub use schema::SchemaCandidate;
