//! Uniform outward response, whichever source produced the score.

use lb_delegate::RemotePrediction;
use lb_scorer::{survival_chance, Band, FallbackScore, FALLBACK_MODEL_TYPE};
use serde::Serialize;

/// Where a score came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreSource {
    Remote {
        model_type: String,
        survival_chance: String,
        model_accuracy: Option<f64>,
    },
    Fallback {
        band: Band,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub survived: bool,
    pub probability: f64,
    pub source: ScoreSource,
}

impl ScoreResult {
    pub fn remote(prediction: RemotePrediction) -> Self {
        Self {
            survived: prediction.survived,
            probability: prediction.probability,
            source: ScoreSource::Remote {
                model_type: prediction.model_type,
                survival_chance: prediction.survival_chance,
                model_accuracy: prediction.model_accuracy,
            },
        }
    }

    pub fn fallback(score: FallbackScore) -> Self {
        Self {
            survived: score.survived,
            probability: score.probability,
            source: ScoreSource::Fallback { band: score.band },
        }
    }

    /// `remote:<model>` or `fallback`.
    pub fn provenance(&self) -> String {
        match &self.source {
            ScoreSource::Remote { model_type, .. } => format!("remote:{model_type}"),
            ScoreSource::Fallback { .. } => FALLBACK_MODEL_TYPE.to_string(),
        }
    }

    pub fn model_accuracy(&self) -> Option<f64> {
        match &self.source {
            ScoreSource::Remote { model_accuracy, .. } => *model_accuracy,
            ScoreSource::Fallback { .. } => None,
        }
    }
}

/// Final payload. A NaN probability serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResponse {
    pub survived: bool,
    pub probability: f64,
    pub message: String,
    pub model_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_accuracy: Option<f64>,
    pub survival_chance: String,
}

pub fn compose(result: &ScoreResult) -> PredictionResponse {
    let (message, chance) = match &result.source {
        ScoreSource::Remote { survival_chance, .. } => (
            remote_message(result.survived, survival_chance, result.probability),
            survival_chance.clone(),
        ),
        ScoreSource::Fallback { band } => (
            band.message().to_string(),
            survival_chance(result.probability).to_string(),
        ),
    };

    PredictionResponse {
        survived: result.survived,
        probability: result.probability,
        message,
        model_type: result.provenance(),
        model_accuracy: result.model_accuracy(),
        survival_chance: chance,
    }
}

/// Sentence for a remote verdict, e.g.
/// `Tus probabilidades de supervivencia son moderadas: 73.0%`.
pub fn remote_message(survived: bool, chance: &str, probability: f64) -> String {
    let verb = if survived { "son" } else { "eran" };
    format!(
        "Tus probabilidades de supervivencia {verb} {}: {:.1}%",
        chance.to_lowercase(),
        percent_one_decimal(probability)
    )
}

/// Percentage rounded to one decimal, ties away from zero (`6.25` → `6.3`).
/// `{:.1}` alone would round ties to even.
fn percent_one_decimal(probability: f64) -> f64 {
    (probability * 100.0 * 10.0).round() / 10.0
}
