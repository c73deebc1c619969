use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use wm_common::api::task_type_request::TaskTypeRequest;
use wm_common::store::TaskTypeCatalog;

use crate::SharedState;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};

pub async fn list_task_types(State(state): State<SharedState>) -> Json<Vec<String>> {
    Json(state.store.read().await.task_types())
}

/// 201 when the name is new, 200 when it was already registered.
pub async fn add_task_type(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<TaskTypeRequest>,
) -> Result<(StatusCode, Json<Vec<String>>), ApiError> {
    let mut store = state.store.write().await;
    let added = store.add_task_type(&request.task_type)?;
    let status = if added {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(store.task_types())))
}

pub async fn remove_task_type(
    State(state): State<SharedState>,
    ApiPath(task_type): ApiPath<String>,
) -> Result<StatusCode, ApiError> {
    state.store.write().await.remove_task_type(&task_type)?;
    Ok(StatusCode::NO_CONTENT)
}
