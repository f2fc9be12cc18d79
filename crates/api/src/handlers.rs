// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP handlers, one per endpoint in spec §6's table. Each handler's
//! preconditions are ordinary `if` checks on a freshly re-read
//! `TaskState` — no decorator layer, per SPEC_FULL.md §9
//! ("Runtime-introspected dependencies → explicit wiring").

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use bytes::Bytes;
use gst_core::{ErrorKind, TaskId, TaskState, TaskStatus, TaskType, UserId};
use serde::Deserialize;
use tracing::warn;

use crate::error::ApiError;
use crate::launcher;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateParams {
    task_type: String,
    user_id: String,
}

#[derive(Deserialize)]
pub struct TaskIdParam {
    task_id: String,
}

pub async fn ping() -> &'static str {
    "pong"
}

pub async fn create(
    State(app): State<AppState>,
    Query(params): Query<CreateParams>,
) -> Result<Json<String>, ApiError> {
    let type_: TaskType = params
        .task_type
        .parse()
        .map_err(|e: gst_core::InvalidTaskType| ApiError::new(ErrorKind::Precondition, e.to_string()))?;
    let user_id = UserId::new(params.user_id);

    let existing = app.store.get_user_task_ids(&user_id).await?.len();
    if existing + 1 > app.per_user_task_cap {
        return Err(ApiError::rate_limited());
    }

    let state = TaskState::new(user_id, type_, 0);
    let task_id = state.task_id.clone();
    app.store.add_task(&state).await?;
    Ok(Json(task_id.as_str().to_string()))
}

pub async fn get_state(
    State(app): State<AppState>,
    Query(params): Query<TaskIdParam>,
) -> Result<Json<TaskState>, ApiError> {
    let task_id = TaskId::new(params.task_id);
    let state = app.store.get_task_state(&task_id).await?;
    Ok(Json(state))
}

pub async fn load_args(
    State(app): State<AppState>,
    Query(params): Query<TaskIdParam>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    if body.len() > app.upload_cap_bytes {
        return Err(ApiError::new(ErrorKind::PayloadTooLarge, "request body exceeds the configured upload cap"));
    }

    let task_id = TaskId::new(params.task_id);
    let state = app.store.get_task_state(&task_id).await?;
    if state.status != TaskStatus::New {
        return Err(ApiError::new(ErrorKind::Precondition, "task is not in status new"));
    }

    app.files.save_binary_data(&state.input_args_filename, &body)?;
    app.store.add_log_message(&task_id, "Arguments were loaded").await?;

    if let Some(script) = launcher::render(state.type_, task_id.as_str()) {
        app.files.save_binary_data(&state.script_filename, script.as_bytes())?;
        make_executable(&app, &state.script_filename);
    }

    Ok(StatusCode::OK)
}

#[cfg(unix)]
fn make_executable(app: &AppState, filename: &str) {
    use std::os::unix::fs::PermissionsExt;
    let path = app.files.root().join(filename);
    if let Err(err) = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)) {
        warn!(error = %err, filename, "load_args: failed to mark launcher script executable");
    }
}

#[cfg(not(unix))]
fn make_executable(_app: &AppState, _filename: &str) {}

pub async fn run(State(app): State<AppState>, Query(params): Query<TaskIdParam>) -> Result<StatusCode, ApiError> {
    let task_id = TaskId::new(params.task_id);
    let mut state = app.store.get_task_state(&task_id).await?;

    if state.status != TaskStatus::New {
        return Err(ApiError::new(ErrorKind::Precondition, "task is not in status new"));
    }
    let input_present = app.files.is_file_exist(&state.input_args_filename)?;
    let script_present = app.files.is_file_exist(&state.script_filename)?;
    if !input_present || !script_present {
        return Err(ApiError::new(ErrorKind::Precondition, "input or script file missing"));
    }

    state.status = TaskStatus::Ready;
    app.store.update_task_state(&task_id, &state).await?;
    Ok(StatusCode::OK)
}

pub async fn kill(State(app): State<AppState>, Query(params): Query<TaskIdParam>) -> Result<StatusCode, ApiError> {
    let task_id = TaskId::new(params.task_id);
    let mut state = app.store.get_task_state(&task_id).await?;
    state.is_need_kill = true;
    app.store.update_task_state(&task_id, &state).await?;
    Ok(StatusCode::OK)
}

pub async fn accept(State(app): State<AppState>, Query(params): Query<TaskIdParam>) -> Result<StatusCode, ApiError> {
    let task_id = TaskId::new(params.task_id);
    let mut state = app.store.get_task_state(&task_id).await?;

    if !state.status.is_terminal() {
        return Err(ApiError::new(ErrorKind::Precondition, "task is not in a terminal status"));
    }
    if !app.files.is_file_exist(&state.output_args_filename)? {
        return Err(ApiError::new(ErrorKind::Precondition, "result file is not present"));
    }

    state.is_accepted = true;
    app.store.update_task_state(&task_id, &state).await?;
    Ok(StatusCode::OK)
}

pub async fn log(State(app): State<AppState>, Query(params): Query<TaskIdParam>) -> Result<String, ApiError> {
    let task_id = TaskId::new(params.task_id);
    Ok(app.store.get_log(&task_id).await?)
}

pub async fn result(
    State(app): State<AppState>,
    Query(params): Query<TaskIdParam>,
) -> Result<impl IntoResponse, ApiError> {
    let task_id = TaskId::new(params.task_id);
    let state = app.store.get_task_state(&task_id).await?;

    if state.status != TaskStatus::Finished {
        return Err(ApiError::new(ErrorKind::Precondition, "task has not finished"));
    }
    if !app.files.is_file_exist(&state.output_args_filename)? {
        return Err(ApiError::new(ErrorKind::Precondition, "result file is not present"));
    }

    let bytes = app.files.get_binary_data_from_file(&state.output_args_filename)?;
    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], bytes))
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
