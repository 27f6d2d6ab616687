//! Predictor model boundary.
//!
//! The engine treats the trained model as an opaque capability: it accepts
//! a named feature row and returns a scalar price, or rejects the row when
//! the names/arity do not match what it was trained on. Introspection of
//! the expected feature list exists for diagnostics only; reconciliation
//! never branches on it.

mod linear;

pub use linear::{ArtifactError, LinearModel};

/// An ordered row of named feature values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureRow {
    columns: Vec<(String, f64)>,
}

impl FeatureRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named value. Order is preserved and significant.
    pub fn push(&mut self, name: impl Into<String>, value: f64) {
        self.columns.push((name.into(), value));
    }

    pub fn from_pairs<N: Into<String>>(pairs: impl IntoIterator<Item = (N, f64)>) -> Self {
        Self {
            columns: pairs.into_iter().map(|(n, v)| (n.into(), v)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.columns.iter().map(|(_, v)| *v)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }
}

/// Errors from a model invocation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// The supplied feature names/arity do not match the training schema.
    #[error(
        "schema mismatch: model expects [{}], got [{}]",
        .expected.join(", "),
        .supplied.join(", ")
    )]
    SchemaMismatch {
        expected: Vec<String>,
        supplied: Vec<String>,
    },

    /// The model produced a non-finite value.
    #[error("prediction produced a non-finite value")]
    NonFinitePrediction,
}

/// An opaque, pre-trained price predictor.
///
/// Implementations must be deterministic and side-effect free: the same
/// row always yields the same price.
pub trait PredictorModel: Send + Sync {
    /// Predict a price for the given feature row.
    fn predict(&self, row: &FeatureRow) -> Result<f64, ModelError>;

    /// The feature names this model was trained on, if introspectable.
    fn expected_features(&self) -> Option<&[String]> {
        None
    }
}
