use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lb_core::PassengerInput;
use lb_delegate::{DelegateRequest, RemotePrediction};
use serde_json::json;

fn bench_wire(c: &mut Criterion) {
    let input = PassengerInput::from_value(json!({
        "pclass": "3", "sex": "male", "age": "22", "sibsp": "1", "parch": "0",
        "fare": "7.25", "embarked": "S", "name": "Braund, Mr. Owen Harris",
        "ticket": "A/5 21171", "cabin": ""
    }))
    .unwrap();

    c.bench_function("delegate_request_encode_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                let req = DelegateRequest::from_input(&input);
                black_box(serde_json::to_vec(&req).unwrap());
            }
        })
    });

    let body = br#"{"survived":false,"probability":0.11,"survival_chance":"Low","model_type":"Random Forest (Basic)","model_accuracy":0.82,"features_used":["Pclass","Sex"]}"#;
    c.bench_function("remote_prediction_decode_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(serde_json::from_slice::<RemotePrediction>(body).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_wire);
criterion_main!(benches);
