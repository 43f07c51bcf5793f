//! Probability bands and their narrative messages.

use serde::{Deserialize, Serialize};

/// Six fixed bands, three per predicted outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    StrongPositive,
    ModeratePositive,
    MarginalPositive,
    StrongNegative,
    ModerateNegative,
    MarginalNegative,
}

impl Band {
    pub const ALL: [Band; 6] = [
        Band::StrongPositive,
        Band::ModeratePositive,
        Band::MarginalPositive,
        Band::StrongNegative,
        Band::ModerateNegative,
        Band::MarginalNegative,
    ];

    /// Pick the band for an outcome. Comparisons are strict, so a value sitting
    /// exactly on a boundary lands in the less confident band. NaN lands in
    /// `MarginalNegative`.
    pub fn classify(survived: bool, probability: f64) -> Band {
        if survived {
            if probability > 0.8 {
                Band::StrongPositive
            } else if probability > 0.65 {
                Band::ModeratePositive
            } else {
                Band::MarginalPositive
            }
        } else if probability < 0.2 {
            Band::StrongNegative
        } else if probability < 0.35 {
            Band::ModerateNegative
        } else {
            Band::MarginalNegative
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Band::StrongPositive => "Tus características te daban excelentes probabilidades de supervivencia.",
            Band::ModeratePositive => "Tenías buenas probabilidades de conseguir un lugar en un bote salvavidas.",
            Band::MarginalPositive => "Tus probabilidades eran moderadas, pero habrías tenido una oportunidad.",
            Band::StrongNegative => {
                "Desafortunadamente, tus características indicaban muy bajas probabilidades de supervivencia."
            }
            Band::ModerateNegative => {
                "Las probabilidades estaban en tu contra, pero algunos con características similares sobrevivieron."
            }
            Band::MarginalNegative => "Era una situación difícil con probabilidades casi iguales.",
        }
    }

    pub fn is_positive(self) -> bool {
        matches!(self, Band::StrongPositive | Band::ModeratePositive | Band::MarginalPositive)
    }
}

/// Qualitative label on the same scale the remote classifier reports.
pub fn survival_chance(probability: f64) -> &'static str {
    if probability.is_nan() {
        "Unknown"
    } else if probability < 0.3 {
        "Low"
    } else if probability < 0.6 {
        "Medium"
    } else {
        "High"
    }
}
