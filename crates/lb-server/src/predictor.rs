//! One resolution pass: normalize, validate, delegate, fall back, compose.

use std::sync::Arc;

use lb_core::{normalize, validate, PassengerInput, Result, ServiceConfig, ValidationMode};
use lb_delegate::{Classifier, DelegateOutcome, NoDelegate, RemoteClassifier};
use lb_scorer::{score, WeightTable};
use tracing::debug;

use crate::compose::{compose, PredictionResponse, ScoreResult};

#[derive(Clone)]
pub struct Predictor {
    classifier: Arc<dyn Classifier>,
    weights: WeightTable,
    validation: ValidationMode,
}

impl Predictor {
    pub fn new(classifier: Arc<dyn Classifier>, weights: WeightTable, validation: ValidationMode) -> Self {
        Self { classifier, weights, validation }
    }

    /// Remote classifier when enabled, otherwise fallback only.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let classifier: Arc<dyn Classifier> = if config.delegate.enabled {
            Arc::new(RemoteClassifier::new(&config.delegate)?)
        } else {
            Arc::new(NoDelegate)
        };
        Ok(Self::new(classifier, WeightTable::standard(), config.validation))
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    pub fn has_remote(&self) -> bool {
        self.classifier.is_remote()
    }

    /// Produce a score. Only strict validation can fail here; delegate
    /// failures always end in the fallback model.
    pub async fn resolve(&self, input: &PassengerInput) -> Result<ScoreResult> {
        validate(input, self.validation)?;
        let features = normalize(input);

        match self.classifier.classify(input).await {
            DelegateOutcome::Success(prediction) => Ok(ScoreResult::remote(prediction)),
            DelegateOutcome::Unavailable(reason) => {
                debug!(%reason, "scoring with fallback model");
                Ok(ScoreResult::fallback(score(&features, &self.weights)))
            }
        }
    }

    pub async fn predict(&self, input: &PassengerInput) -> Result<PredictionResponse> {
        let result = self.resolve(input).await?;
        Ok(compose(&result))
    }
}
