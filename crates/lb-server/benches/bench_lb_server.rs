use criterion::{black_box, criterion_group, criterion_main, Criterion};
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;
use lb_core::{ServiceConfig, ValidationMode};
use lb_server::{app_with_state, state::AppState};
use tokio::runtime::Runtime;

fn fallback_state() -> AppState {
    let mut config = ServiceConfig::default();
    config.delegate.enabled = false;
    config.validation = ValidationMode::Permissive;
    AppState::from_config(config).unwrap()
}

fn bench_http_health(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let state = fallback_state();
    c.bench_function("http_health_1000", |b| {
        b.iter(|| {
            rt.block_on(async {
                for _ in 0..1000 {
                    let app = app_with_state(state.clone());
                    let req = Request::builder()
                        .uri("/health")
                        .body(Body::empty())
                        .unwrap();
                    let resp = app.oneshot(req).await.unwrap();
                    black_box(resp.status());
                }
            })
        })
    });
}

fn bench_http_predict_fallback(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let state = fallback_state();
    let body = serde_json::to_vec(&serde_json::json!({
        "pclass": "2", "sex": "male", "age": "35", "sibsp": "0",
        "parch": "0", "fare": "26", "embarked": "S"
    }))
    .unwrap();

    c.bench_function("http_predict_fallback_1000", |b| {
        b.iter(|| {
            rt.block_on(async {
                for _ in 0..1000 {
                    let app = app_with_state(state.clone());
                    let req = Request::builder()
                        .method("POST")
                        .uri("/api/predict")
                        .header("content-type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap();
                    let resp = app.oneshot(req).await.unwrap();
                    black_box(resp.status());
                }
            })
        })
    });
}

criterion_group!(benches, bench_http_health, bench_http_predict_fallback);
criterion_main!(benches);
