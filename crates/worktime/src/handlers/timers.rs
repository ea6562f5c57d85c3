//! Timer CRUD handlers.
//!
//! Each handler performs request validation, exactly one table operation via
//! the injected repository, and shapes the outcome into the response
//! envelope. Handlers hold no state of their own; every suspension point is
//! an awaited store call.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    handlers::ApiError,
    models::{ApiResponse, CreateTimer, UpdateTimer},
    state::AppState,
};

const EMPLOYEE_ID_REQUIRED: &str = "The Request must have a employee identification";
const WORK_TIME_FORMAT: &str = "The indicated request must comply with the following format in order to make the change, YYYY-MM-DD:HH:MM:SS";
const TYPE_INVALID: &str = "The data entered is not valid in the Type field.";
const WORKING_NOT_FOUND: &str = "Working not found.";

/// Create a new timer (POST /timers).
///
/// No read-before-write is performed: every call inserts a fresh row, so an
/// employee may accumulate any number of entries across calls.
pub async fn create_timer(
    State(state): State<AppState>,
    body: Result<Json<CreateTimer>, JsonRejection>,
) -> Result<Json<ApiResponse>, ApiError> {
    let Json(payload) = body
        .map_err(|e| ApiError::Validation(format!("Failed to parse request body: {e}")))?;

    tracing::debug!(payload = ?payload, "Received create timer request");

    let record = payload
        .into_record()
        .ok_or_else(|| ApiError::Validation(EMPLOYEE_ID_REQUIRED.to_string()))?;

    state.timer_repo.insert_timer(&record).await?;

    tracing::info!(
        row_key = %record.row_key,
        employee_id = record.employee_id,
        "Registered new work-time entry"
    );

    Ok(Json(
        ApiResponse::new("The information has been successfully registered")
            .with_employee_id(record.employee_id)
            .with_work_time(record.work_time),
    ))
}

/// Update an existing timer (PUT /timers/{rowKey}).
///
/// The path value is the record's row key under the fixed partition, not an
/// employee id; a timer cannot be addressed by employee id on this route.
/// Only `workTime` and `type` change; the replace is unconditional beyond
/// the existence check, so concurrent updates are last-write-wins.
pub async fn update_timer(
    State(state): State<AppState>,
    Path(row_key): Path<String>,
    body: Result<Json<UpdateTimer>, JsonRejection>,
) -> Result<Json<ApiResponse>, ApiError> {
    let Json(payload) = body
        .map_err(|e| ApiError::Validation(format!("Failed to parse request body: {e}")))?;

    tracing::debug!(%row_key, payload = ?payload, "Received update timer request");

    let not_found = || {
        ApiError::NotFound(format!(
            "The employee identified with the identification number: {row_key}, was not found."
        ))
    };

    // Row keys are UUIDs by construction, so no record can exist at a
    // non-UUID path value.
    let key = Uuid::parse_str(&row_key).map_err(|_| not_found())?;

    let mut record = state
        .timer_repo
        .get_timer(key)
        .await?
        .ok_or_else(not_found)?;

    let work_time = payload
        .work_time
        .ok_or_else(|| ApiError::Validation(WORK_TIME_FORMAT.to_string()))?;
    let kind = payload
        .kind
        .ok_or_else(|| ApiError::Validation(TYPE_INVALID.to_string()))?;

    record.work_time = work_time;
    record.kind = kind;

    state.timer_repo.replace_timer(&record).await?;

    tracing::info!(%row_key, "Updated work-time entry");

    Ok(Json(
        ApiResponse::new("The information has been successfully updated")
            .with_employee_id(record.employee_id),
    ))
}

/// List all timers (GET /timers).
///
/// Returns the first segment of the partition scan; the continuation token
/// is not followed, so callers see at most one store segment.
pub async fn list_timers(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse>, ApiError> {
    let page = state.timer_repo.scan_timers(None).await?;

    tracing::info!(count = page.timers.len(), "Retrieved all workings");

    Ok(Json(
        ApiResponse::new("Retrieved all workings").with_timers(page.timers),
    ))
}

/// Get a single timer by row key (GET /timers/{rowKey}).
pub async fn get_timer(
    State(state): State<AppState>,
    Path(row_key): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    tracing::debug!(%row_key, "Received get timer request");

    let key = Uuid::parse_str(&row_key)
        .map_err(|_| ApiError::NotFound(WORKING_NOT_FOUND.to_string()))?;

    let timer = state
        .timer_repo
        .get_timer(key)
        .await?
        .ok_or_else(|| ApiError::NotFound(WORKING_NOT_FOUND.to_string()))?;

    tracing::info!(%row_key, "Retrieved working");

    Ok(Json(ApiResponse::new("Retrieved working").with_timer(timer)))
}

/// Delete a timer by row key (DELETE /timers/{rowKey}).
///
/// The record is resolved first and echoed back after the delete; the delete
/// itself is unconditional (match-any semantics).
pub async fn delete_timer(
    State(state): State<AppState>,
    Path(row_key): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    tracing::debug!(%row_key, "Received delete timer request");

    let key = Uuid::parse_str(&row_key)
        .map_err(|_| ApiError::NotFound(WORKING_NOT_FOUND.to_string()))?;

    let timer = state
        .timer_repo
        .get_timer(key)
        .await?
        .ok_or_else(|| ApiError::NotFound(WORKING_NOT_FOUND.to_string()))?;

    state.timer_repo.delete_timer(key).await?;

    tracing::info!(%row_key, "Deleted working");

    Ok(Json(ApiResponse::new("Deleted working").with_timer(timer)))
}
