//! Request and response bodies of the remote classification service.

use lb_core::features::{coerce_int, coerce_real};
use lb_core::PassengerInput;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outbound payload. Unparseable numbers are sent as `null`; the remote side
/// rejects them and the caller falls back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelegateRequest {
    pub pclass: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Value>,
    pub age: Option<f64>,
    pub sibsp: Option<i64>,
    pub parch: Option<i64>,
    pub fare: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embarked: Option<Value>,
    pub name: String,
    pub ticket: String,
    pub cabin: String,
}

impl DelegateRequest {
    pub fn from_input(input: &PassengerInput) -> Self {
        Self {
            pclass: whole(coerce_int(input.pclass.as_ref())),
            sex: input.sex.clone(),
            age: finite(coerce_real(input.age.as_ref())),
            sibsp: whole(coerce_int(input.sibsp.as_ref())),
            parch: whole(coerce_int(input.parch.as_ref())),
            fare: finite(coerce_real(input.fare.as_ref())),
            embarked: input.embarked.clone(),
            name: input.name_text(),
            ticket: input.ticket_text(),
            cabin: input.cabin_text(),
        }
    }
}

fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

fn whole(v: f64) -> Option<i64> {
    finite(v).map(|v| v as i64)
}

/// Success body returned by the remote classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemotePrediction {
    pub survived: bool,
    pub probability: f64,
    pub survival_chance: String,
    pub model_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_accuracy: Option<f64>,
}
