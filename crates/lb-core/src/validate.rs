//! Strict input checks, applied only under [`ValidationMode::Strict`].
//!
//! Bounds mirror what the remote classifier accepts.

use serde_json::Value;

use crate::config::ValidationMode;
use crate::error::{LbError, Result};
use crate::passenger::PassengerInput;

pub const MAX_AGE: f64 = 100.0;

/// Check a passenger against the configured validation mode.
///
/// Permissive mode accepts everything. Strict mode reads the raw values
/// (no leading-number coercion) and reports the first offending field.
pub fn validate(input: &PassengerInput, mode: ValidationMode) -> Result<()> {
    if mode == ValidationMode::Permissive {
        return Ok(());
    }

    let pclass = whole_number("pclass", input.pclass.as_ref())?;
    if !(1..=3).contains(&pclass) {
        return Err(LbError::validation("pclass", "must be 1, 2 or 3"));
    }
    if !matches!(input.sex_str(), Some("male") | Some("female")) {
        return Err(LbError::validation("sex", "must be \"male\" or \"female\""));
    }
    let age = real_number("age", input.age.as_ref())?;
    if !(0.0..=MAX_AGE).contains(&age) {
        return Err(LbError::validation("age", format!("must be a number between 0 and {MAX_AGE}")));
    }
    if whole_number("sibsp", input.sibsp.as_ref())? < 0 {
        return Err(LbError::validation("sibsp", "must not be negative"));
    }
    if whole_number("parch", input.parch.as_ref())? < 0 {
        return Err(LbError::validation("parch", "must not be negative"));
    }
    if real_number("fare", input.fare.as_ref())? < 0.0 {
        return Err(LbError::validation("fare", "must not be negative"));
    }
    if !matches!(input.embarked_str(), Some("S") | Some("C") | Some("Q")) {
        return Err(LbError::validation("embarked", "must be \"S\", \"C\" or \"Q\""));
    }
    Ok(())
}

/// Whole number: an integral JSON number or a string that parses completely.
/// `2.0` is accepted, `1.9` and `"2abc"` are not.
fn whole_number(field: &'static str, value: Option<&Value>) -> Result<i64> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    };
    parsed.ok_or_else(|| LbError::validation(field, "must be a whole number"))
}

fn integral(v: f64) -> Option<i64> {
    (v.is_finite() && v.fract() == 0.0).then_some(v as i64)
}

/// Finite real: a JSON number or a string that parses completely.
fn real_number(field: &'static str, value: Option<&Value>) -> Result<f64> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| LbError::validation(field, "must be a number"))
}
