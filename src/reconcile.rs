//! Schema reconciliation against a persisted model.
//!
//! Optimistic degrade: try the richest candidate schema first, fall back
//! only on demonstrated incompatibility, short-circuit on the first
//! success. Failures are recorded per candidate and aggregated, never
//! averaged or silently dropped.

use tracing::{debug, warn};

use crate::error::EstimationError;
use crate::model::PredictorModel;
use crate::property::PropertyDescription;
use crate::schema::SchemaCandidate;

/// A successful reconciliation: the raw price and which candidate schema
/// the model accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reconciled {
    pub price: f64,
    pub candidate: SchemaCandidate,
}

/// Try each candidate schema in order and return the first prediction the
/// model accepts.
///
/// Exactly one candidate is selected per request: the first success, not
/// the best score. Exhausting the list yields
/// [`EstimationError::AllCandidatesExhausted`] with every attempt.
pub fn reconcile(
    property: &PropertyDescription,
    candidates: &[SchemaCandidate],
    model: &dyn PredictorModel,
) -> Result<Reconciled, EstimationError> {
    let mut attempts = Vec::with_capacity(candidates.len());

    for &candidate in candidates {
        let row = candidate.feature_row(property);
        debug!(
            candidate = candidate.as_str(),
            features = row.len(),
            "trying candidate schema"
        );

        match model.predict(&row) {
            Ok(price) => {
                debug!(candidate = candidate.as_str(), price, "candidate schema accepted");
                return Ok(Reconciled { price, candidate });
            }
            Err(err) => {
                warn!(candidate = candidate.as_str(), %err, "candidate schema rejected");
                attempts.push((candidate, err));
            }
        }
    }

    Err(EstimationError::AllCandidatesExhausted { attempts })
}
