//! Group CRUD handlers: list, read, create, update, delete.

use crate::error::{AppError, Operation};
use crate::model::GroupPayload;
use crate::response::{created, message, ok};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid group id".into()))
}

fn parse_body(body: Result<Json<GroupPayload>, JsonRejection>) -> Result<GroupPayload, AppError> {
    match body {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::debug!(error = %rejection, "request body over limit");
            Err(AppError::PayloadTooLarge)
        }
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected request body");
            Err(AppError::BadRequest("Invalid request body".into()))
        }
    }
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let groups = state
        .store
        .find_all()
        .await
        .map_err(|e| AppError::failed(Operation::List, e))?;
    Ok(ok(groups))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let group = state
        .store
        .find_by_id(id)
        .await
        .map_err(|e| AppError::failed(Operation::Read, e))?
        .ok_or(AppError::NotFound)?;
    Ok(ok(group))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<GroupPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let new = parse_body(body)?.validate()?;
    let group = state
        .store
        .create(&new)
        .await
        .map_err(|e| AppError::failed(Operation::Create, e))?;
    tracing::info!(id = group.id, "group created");
    Ok(created(group))
}

/// Full overwrite. A missing id is reported as a failed update, not 404.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<GroupPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let new = parse_body(body)?.validate()?;
    let group = state
        .store
        .update(id, &new)
        .await
        .map_err(|e| AppError::failed(Operation::Update, e))?
        .ok_or_else(|| AppError::failed_missing(Operation::Update))?;
    Ok(ok(group))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let deleted = state
        .store
        .delete(id)
        .await
        .map_err(|e| AppError::failed(Operation::Delete, e))?;
    if !deleted {
        return Err(AppError::failed_missing(Operation::Delete));
    }
    tracing::info!(id, "group deleted");
    Ok(message("Group deleted"))
}
