//! Artifact-backed linear regression model.
//!
//! The persisted artifact is a JSON record of feature names, coefficients,
//! and an intercept, produced by an offline training job. It is loaded
//! once at process start; a load failure is fatal to the engine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::{FeatureRow, ModelError, PredictorModel};

/// On-disk shape of a trained model artifact.
#[derive(Debug, Serialize, Deserialize)]
struct ModelArtifact {
    features: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

/// Errors while loading a model artifact.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed model artifact: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("artifact declares {features} features but {coefficients} coefficients")]
    ShapeMismatch {
        features: usize,
        coefficients: usize,
    },
}

/// A linear model with a fixed, named input schema.
///
/// `predict` requires the supplied row to match the training schema
/// exactly (same names, same order, same arity); anything else is a
/// [`ModelError::SchemaMismatch`].
#[derive(Debug)]
pub struct LinearModel {
    features: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    /// Build a model from parts, checking shape consistency.
    pub fn new(
        features: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self, ArtifactError> {
        if features.len() != coefficients.len() {
            return Err(ArtifactError::ShapeMismatch {
                features: features.len(),
                coefficients: coefficients.len(),
            });
        }
        Ok(Self {
            features,
            coefficients,
            intercept,
        })
    }

    /// Load a model from a persisted JSON artifact.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let raw = fs::read_to_string(path)?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)?;
        let model = Self::new(artifact.features, artifact.coefficients, artifact.intercept)?;
        info!(
            path = %path.display(),
            features = model.features.len(),
            "loaded model artifact"
        );
        Ok(model)
    }
}

impl PredictorModel for LinearModel {
    fn predict(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        let supplied: Vec<&str> = row.names().collect();
        if supplied.len() != self.features.len()
            || supplied
                .iter()
                .zip(self.features.iter())
                .any(|(s, e)| *s != e.as_str())
        {
            return Err(ModelError::SchemaMismatch {
                expected: self.features.clone(),
                supplied: supplied.into_iter().map(String::from).collect(),
            });
        }

        let prediction = self.intercept
            + row
                .values()
                .zip(self.coefficients.iter())
                .map(|(v, c)| v * c)
                .sum::<f64>();

        if !prediction.is_finite() {
            return Err(ModelError::NonFinitePrediction);
        }
        Ok(prediction)
    }

    fn expected_features(&self) -> Option<&[String]> {
        Some(&self.features)
    }
}
