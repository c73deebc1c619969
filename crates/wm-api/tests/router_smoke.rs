use axum::{body::Body, http::Request, http::StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::atomic::Ordering;
use tower::ServiceExt;

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn livez_healthy_and_seed_data_is_served() {
    let app = wm_api::create_router(wm_api::test_state());

    let livez = app
        .clone()
        .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(livez.status(), StatusCode::OK);

    let workers = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/workers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(workers.status(), StatusCode::OK);
    let body = json_body(workers).await;
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie", "Diana", "Eve"]);

    let task_types = app
        .oneshot(
            Request::builder()
                .uri("/api/task_types")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        json_body(task_types).await,
        serde_json::json!(["Translation", "Review", "Marketing", "Design", "Testing"])
    );
}

#[tokio::test]
async fn readyz_returns_service_unavailable_when_not_ready() {
    let state = wm_api::test_state();
    state.readiness.store(false, Ordering::SeqCst);
    let app = wm_api::create_router(state);

    let response = app
        .oneshot(Request::builder().uri("/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json_body(response).await["code"], "service_unavailable");
}

#[tokio::test]
async fn propagates_caller_request_id() {
    let app = wm_api::create_router(wm_api::test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/workers/999")
                .header("x-request-id", "req-abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()["x-request-id"], "req-abc");
    let body = json_body(response).await;
    assert_eq!(body["request_id"], "req-abc");
    assert_eq!(body["code"], "not_found");
}
