//! Feature normalization: loosely-typed input → numeric feature vector.
//!
//! Coercion never fails. A value that does not parse becomes NaN and keeps
//! propagating through any arithmetic built on it.

use serde::Serialize;
use serde_json::Value;

use crate::passenger::PassengerInput;

/// Numeric features consumed by the fallback model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    pub pclass: f64,
    pub sex_is_male: f64,
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

impl FeatureVector {
    /// True when every feature is a finite real number.
    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|v| v.is_finite())
    }

    pub fn as_array(&self) -> [f64; 11] {
        [
            self.pclass,
            self.sex_is_male,
            self.age,
            self.sibsp,
            self.parch,
            self.fare,
            self.embarked_s,
            self.embarked_c,
            self.embarked_q,
            self.family_size,
            self.is_alone,
        ]
    }
}

/// Build the feature vector for a passenger.
pub fn normalize(input: &PassengerInput) -> FeatureVector {
    let sibsp = coerce_int(input.sibsp.as_ref());
    let parch = coerce_int(input.parch.as_ref());
    let family_size = sibsp + parch + 1.0;
    let embarked = input.embarked_str();

    FeatureVector {
        pclass: coerce_int(input.pclass.as_ref()),
        sex_is_male: indicator(input.sex_str() == Some("male")),
        age: coerce_real(input.age.as_ref()),
        sibsp,
        parch,
        fare: coerce_real(input.fare.as_ref()),
        embarked_s: indicator(embarked == Some("S")),
        embarked_c: indicator(embarked == Some("C")),
        embarked_q: indicator(embarked == Some("Q")),
        family_size,
        is_alone: indicator(family_size == 1.0),
    }
}

fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

/// Integer coercion. Numbers truncate toward zero, strings keep their
/// leading run of digits, everything else is NaN.
pub fn coerce_int(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().map(f64::trunc).unwrap_or(f64::NAN),
        Some(Value::String(s)) => leading_int(s),
        _ => f64::NAN,
    }
}

/// Real coercion. Strings keep their longest leading decimal literal.
pub fn coerce_real(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => leading_real(s),
        _ => f64::NAN,
    }
}

fn sign_len(bytes: &[u8]) -> usize {
    match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    }
}

fn digits_from(bytes: &[u8], start: usize) -> usize {
    bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
}

/// `"  42abc"` → 42, `"-3"` → -3, `"abc"` → NaN.
pub fn leading_int(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let sign = sign_len(bytes);
    let digits = digits_from(bytes, sign);
    if digits == 0 {
        return f64::NAN;
    }
    s[..sign + digits].parse().unwrap_or(f64::NAN)
}

/// `"3.5kg"` → 3.5, `".5"` → 0.5, `"1e3x"` → 1000, `"abc"` → NaN.
pub fn leading_real(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let sign = sign_len(bytes);

    if s[sign..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_digits = digits_from(bytes, sign);
    let mut end = sign + int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(bytes, end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let exp_sign = sign_len(&bytes[end + 1..]);
        let exp_digits = digits_from(bytes, end + 1 + exp_sign);
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}
