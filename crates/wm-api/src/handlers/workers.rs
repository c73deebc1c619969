use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use wm_common::Worker;
use wm_common::api::task_type_request::TaskTypeRequest;
use wm_common::store::{StoredWorker, WorkerStore};

use crate::SharedState;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};

pub async fn list_workers(State(state): State<SharedState>) -> Json<Vec<StoredWorker>> {
    Json(state.store.read().await.list())
}

pub async fn get_worker(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<u64>,
) -> Result<Json<StoredWorker>, ApiError> {
    let stored = state.store.read().await.get(id)?;
    Ok(Json(stored))
}

pub async fn create_worker(
    State(state): State<SharedState>,
    ApiJson(worker): ApiJson<Worker>,
) -> Result<(StatusCode, Json<StoredWorker>), ApiError> {
    let stored = state.store.write().await.create(worker)?;
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn update_worker(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(worker): ApiJson<Worker>,
) -> Result<Json<StoredWorker>, ApiError> {
    let stored = state.store.write().await.update(id, worker)?;
    Ok(Json(stored))
}

pub async fn delete_worker(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<u64>,
) -> Result<StatusCode, ApiError> {
    state.store.write().await.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_worker_task_type(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(request): ApiJson<TaskTypeRequest>,
) -> Result<Json<StoredWorker>, ApiError> {
    let stored = state
        .store
        .write()
        .await
        .add_task_type_to_worker(id, &request.task_type)?;
    Ok(Json(stored))
}

pub async fn remove_worker_task_type(
    State(state): State<SharedState>,
    ApiPath((id, task_type)): ApiPath<(u64, String)>,
) -> Result<Json<StoredWorker>, ApiError> {
    let stored = state
        .store
        .write()
        .await
        .remove_task_type_from_worker(id, &task_type)?;
    Ok(Json(stored))
}
