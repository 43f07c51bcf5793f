//! Logistic model evaluation.

use lb_core::FeatureVector;

use crate::types::WeightTable;

/// Linear combination of features and weights, before the sigmoid.
///
/// Terms are summed in a fixed order so results are bit-reproducible.
pub fn logit(f: &FeatureVector, w: &WeightTable) -> f64 {
    w.intercept
        + w.pclass * f.pclass
        + w.sex * f.sex_is_male
        + w.age * f.age
        + w.sibsp * f.sibsp
        + w.parch * f.parch
        + w.fare * f.fare
        + w.embarked_s * f.embarked_s
        + w.embarked_c * f.embarked_c
        + w.embarked_q * f.embarked_q
        + w.family_size * f.family_size
        + w.is_alone * f.is_alone
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
