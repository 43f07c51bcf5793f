//! Lifeboat fallback scorer — fixed-weight logistic regression with narrative bands.

pub mod bands;
pub mod model;
pub mod types;
pub mod weights;

pub use bands::{survival_chance, Band};
pub use model::{logit, sigmoid};
pub use types::*;
pub use weights::STANDARD_WEIGHTS;

use lb_core::FeatureVector;

/// Provenance tag carried by every locally computed result.
pub const FALLBACK_MODEL_TYPE: &str = "fallback";

/// Probability above which a passenger is predicted to survive.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Score a feature vector against a weight table.
///
/// Pure and total: NaN features yield a NaN probability and `survived: false`.
pub fn score(features: &FeatureVector, weights: &WeightTable) -> FallbackScore {
    let logit = logit(features, weights);
    let probability = sigmoid(logit);
    let survived = probability > DECISION_THRESHOLD;
    let band = Band::classify(survived, probability);
    tracing::debug!(logit, probability, survived, ?band, "fallback score");
    FallbackScore { logit, probability, survived, band }
}

#[cfg(test)]
mod tests;
