use axum::{Json, extract::State};
use serde_json::json;
use std::sync::atomic::Ordering;

use crate::SharedState;
use crate::error::ApiError;

pub async fn livez() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn readyz(State(state): State<SharedState>) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.readiness.load(Ordering::SeqCst) {
        return Err(ApiError::ServiceUnavailable("shutting_down".into()));
    }

    let workers = state.store.read().await.len();

    Ok(Json(json!({
        "status": "ok",
        "workers": workers,
        "application": env!("CARGO_PKG_NAME"),
    })))
}
