use axum::{Json, extract::State};
use tracing::info;
use wm_common::WeekDay;
use wm_common::api::assign_request::AssignTaskRequest;
use wm_common::api::recommendation::Recommendation;
use wm_common::matching::find_best_worker_for;
use wm_common::store::WorkerStore;

use crate::SharedState;
use crate::error::ApiError;
use crate::extract::ApiJson;

/// Run the matcher over a snapshot of the store.
///
/// Invalid days are a 400; "no worker fits" is a normal 200 with `matched: false`.
pub async fn assign_task(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<AssignTaskRequest>,
) -> Result<Json<Recommendation>, ApiError> {
    let task = request.resolve(WeekDay::today_local)?;
    let workers = state.store.read().await.snapshot();

    let outcome = find_best_worker_for(&workers, &task);
    let recommendation = Recommendation::from_outcome(&outcome, &task);

    info!(
        task_type = %task.task_type,
        required_hours = task.required_hours,
        today = %task.today_day,
        deadline = %task.deadline_day,
        matched = recommendation.matched,
        worker = recommendation.worker_name.as_deref().unwrap_or(""),
        "assign_task evaluated"
    );

    Ok(Json(recommendation))
}
