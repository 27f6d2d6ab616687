//! Estimation error taxonomy.
//!
//! Expected, local variability (a single candidate schema being rejected)
//! is absorbed inside the reconciler. Everything surfaced here indicates a
//! broken contract or an exhausted recovery path and carries enough
//! context to reproduce it.

use crate::model::ModelError;
use crate::schema::SchemaCandidate;

/// A failed estimation request.
#[derive(Debug, thiserror::Error)]
pub enum EstimationError {
    /// Every candidate schema was rejected by the model. Carries each
    /// attempted candidate with its underlying rejection.
    #[error("all {} candidate schemas rejected by the model", .attempts.len())]
    AllCandidatesExhausted {
        attempts: Vec<(SchemaCandidate, ModelError)>,
    },

    /// A non-finite or negative base price reached the adjustment engine.
    /// This is a contract violation, never silently clamped.
    #[error("invalid base price from model: {value}")]
    InvalidBasePrice { value: f64 },

    /// The model rejected a direct (non-reconciled) invocation.
    #[error("model invocation failed: {0}")]
    Model(#[from] ModelError),
}

impl EstimationError {
    /// The attempted schemas for an exhaustion failure, for diagnostics.
    pub fn attempted_schemas(&self) -> Option<&[(SchemaCandidate, ModelError)]> {
        match self {
            EstimationError::AllCandidatesExhausted { attempts } => Some(attempts),
            _ => None,
        }
    }
}
