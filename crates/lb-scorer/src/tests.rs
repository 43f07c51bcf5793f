use crate::*;
use lb_core::{normalize, FeatureVector, PassengerInput};
use serde_json::json;

fn features(value: serde_json::Value) -> FeatureVector {
    normalize(&PassengerInput::from_value(value).unwrap())
}

fn golden() -> FeatureVector {
    features(json!({
        "pclass": 1, "sex": "female", "age": "29", "sibsp": "0",
        "parch": "0", "fare": "100", "embarked": "S"
    }))
}

// ========== Weight Table ==========

#[test]
fn test_standard_weights() {
    let w = WeightTable::default();
    assert_eq!(w, STANDARD_WEIGHTS);
    assert_eq!(w.intercept, 0.5);
    assert_eq!(w.pclass, -1.2);
    assert_eq!(w.sex, -2.5);
    assert_eq!(w.age, -0.01);
    assert_eq!(w.sibsp, -0.3);
    assert_eq!(w.parch, -0.1);
    assert_eq!(w.fare, 0.002);
    assert_eq!(w.embarked_s, -0.3);
    assert_eq!(w.embarked_c, 0.5);
    assert_eq!(w.embarked_q, -0.2);
    assert_eq!(w.family_size, -0.2);
    assert_eq!(w.is_alone, 0.1);
}

#[test]
fn test_swapped_weights() {
    let zero = WeightTable {
        intercept: 0.0, pclass: 0.0, sex: 0.0, age: 0.0, sibsp: 0.0, parch: 0.0,
        fare: 0.0, embarked_s: 0.0, embarked_c: 0.0, embarked_q: 0.0,
        family_size: 0.0, is_alone: 0.0,
    };
    let s = score(&golden(), &zero);
    assert_eq!(s.logit, 0.0);
    assert_eq!(s.probability, 0.5);
    assert!(!s.survived);
    assert_eq!(s.band, Band::MarginalNegative);
}

// ========== Golden Regression ==========

#[test]
fn test_golden_logit() {
    let f = golden();
    assert_eq!(f.family_size, 1.0);
    assert_eq!(f.is_alone, 1.0);

    let expected = 0.5 + (-1.2) * 1.0 + (-2.5) * 0.0 + (-0.01) * 29.0 + (-0.3) * 0.0 + (-0.1) * 0.0
        + 0.002 * 100.0 + (-0.3) * 1.0 + 0.5 * 0.0 + (-0.2) * 0.0 + (-0.2) * 1.0 + 0.1 * 1.0;
    let s = score(&f, &STANDARD_WEIGHTS);
    assert_eq!(s.logit, expected);
    assert!((s.logit - (-1.19)).abs() < 1e-12);
    assert!((s.probability - 0.233_258_935_771_457).abs() < 1e-12);
    assert!(!s.survived);
    assert_eq!(s.band, Band::ModerateNegative);
}

#[test]
fn test_third_class_male() {
    let s = score(
        &features(json!({
            "pclass": "3", "sex": "male", "age": "22", "sibsp": "1",
            "parch": "0", "fare": "7.25", "embarked": "S"
        })),
        &STANDARD_WEIGHTS,
    );
    assert!((s.logit - (-6.8055)).abs() < 1e-9);
    assert!(!s.survived);
    assert_eq!(s.band, Band::StrongNegative);
}

#[test]
fn test_first_class_cherbourg_child_survives() {
    let s = score(
        &features(json!({
            "pclass": 1, "sex": "female", "age": 4, "sibsp": 0,
            "parch": 0, "fare": 500, "embarked": "C"
        })),
        &STANDARD_WEIGHTS,
    );
    assert!(s.survived);
    assert_eq!(s.survived, s.probability > 0.5);
}

// ========== NaN Propagation ==========

#[test]
fn test_nan_age_propagates() {
    let s = score(
        &features(json!({
            "pclass": 1, "sex": "female", "age": "abc", "sibsp": "0",
            "parch": "0", "fare": "100", "embarked": "S"
        })),
        &STANDARD_WEIGHTS,
    );
    assert!(s.logit.is_nan());
    assert!(s.probability.is_nan());
    assert!(!s.survived);
    assert_eq!(s.band, Band::MarginalNegative);
}

#[test]
fn test_empty_input_is_nan() {
    let s = score(&features(json!({})), &STANDARD_WEIGHTS);
    assert!(s.probability.is_nan());
    assert!(!s.survived);
}

// ========== Properties ==========

#[test]
fn test_probability_in_open_interval() {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    for _ in 0..2000 {
        let f = features(json!({
            "pclass": rng.gen_range(1..=3),
            "sex": if rng.gen_bool(0.5) { "male" } else { "female" },
            "age": rng.gen_range(0.0..100.0),
            "sibsp": rng.gen_range(0..9),
            "parch": rng.gen_range(0..7),
            "fare": rng.gen_range(0.0..520.0),
            "embarked": (["S", "C", "Q"][rng.gen_range(0..3)]),
        }));
        let s = score(&f, &STANDARD_WEIGHTS);
        assert!(s.probability > 0.0 && s.probability < 1.0, "{s:?}");
        assert_eq!(s.survived, s.probability > 0.5);
        assert_eq!(s.band.is_positive(), s.survived);
    }
}

#[test]
fn test_idempotent() {
    let f = golden();
    let a = score(&f, &STANDARD_WEIGHTS);
    let b = score(&f, &STANDARD_WEIGHTS);
    assert_eq!(a.probability.to_bits(), b.probability.to_bits());
    assert_eq!(a.band.message(), b.band.message());
}

#[test]
fn test_sigmoid() {
    assert_eq!(sigmoid(0.0), 0.5);
    assert!(sigmoid(10.0) > 0.9999);
    assert!(sigmoid(-10.0) < 0.0001);
    assert!(sigmoid(f64::NAN).is_nan());
}

// ========== Bands ==========

#[test]
fn test_band_boundaries_go_to_lower_confidence() {
    assert_eq!(Band::classify(true, 0.8), Band::ModeratePositive);
    assert_eq!(Band::classify(true, 0.65), Band::MarginalPositive);
    assert_eq!(Band::classify(false, 0.2), Band::ModerateNegative);
    assert_eq!(Band::classify(false, 0.35), Band::MarginalNegative);
    assert_eq!(Band::classify(false, 0.5), Band::MarginalNegative);
}

#[test]
fn test_band_interiors() {
    assert_eq!(Band::classify(true, 0.95), Band::StrongPositive);
    assert_eq!(Band::classify(true, 0.7), Band::ModeratePositive);
    assert_eq!(Band::classify(true, 0.55), Band::MarginalPositive);
    assert_eq!(Band::classify(false, 0.05), Band::StrongNegative);
    assert_eq!(Band::classify(false, 0.3), Band::ModerateNegative);
    assert_eq!(Band::classify(false, 0.45), Band::MarginalNegative);
}

#[test]
fn test_bands_exhaustive_and_exclusive() {
    for i in 0..=1000 {
        let p = i as f64 / 1000.0;
        let survived = p > 0.5;
        let band = Band::classify(survived, p);
        assert_eq!(band.is_positive(), survived);
        let matching = Band::ALL.iter().filter(|b| b.message() == band.message()).count();
        assert_eq!(matching, 1);
    }
}

#[test]
fn test_band_messages_distinct() {
    let mut msgs: Vec<_> = Band::ALL.iter().map(|b| b.message()).collect();
    msgs.sort();
    msgs.dedup();
    assert_eq!(msgs.len(), 6);
}

#[test]
fn test_survival_chance_labels() {
    assert_eq!(survival_chance(0.1), "Low");
    assert_eq!(survival_chance(0.3), "Medium");
    assert_eq!(survival_chance(0.59), "Medium");
    assert_eq!(survival_chance(0.6), "High");
    assert_eq!(survival_chance(f64::NAN), "Unknown");
}
