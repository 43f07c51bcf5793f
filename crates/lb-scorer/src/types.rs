use serde::{Deserialize, Serialize};

use crate::bands::Band;

/// Coefficients of the fallback logistic model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    pub intercept: f64,
    pub pclass: f64,
    pub sex: f64,
    pub age: f64,
    pub sibsp: f64,
    pub parch: f64,
    pub fare: f64,
    pub embarked_s: f64,
    pub embarked_c: f64,
    pub embarked_q: f64,
    pub family_size: f64,
    pub is_alone: f64,
}

/// Result of the fallback model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackScore {
    pub logit: f64,
    pub probability: f64,
    pub survived: bool,
    pub band: Band,
}
