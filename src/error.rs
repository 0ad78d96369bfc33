//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Failure raised by a [`crate::store::GroupStore`] implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("datastore unavailable")]
    Unavailable,
}

/// The five group operations. Each has its own fixed failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Read,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch groups",
            Operation::Read => "Failed to fetch group",
            Operation::Create => "Failed to create group",
            Operation::Update => "Failed to update group",
            Operation::Delete => "Failed to delete group",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Read => "read",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Group not found")]
    NotFound,
    #[error("{}", .operation.failure_message())]
    OperationFailed {
        operation: Operation,
        #[source]
        source: Option<StoreError>,
    },
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("Request body too large")]
    PayloadTooLarge,
}

impl AppError {
    pub fn failed(operation: Operation, source: StoreError) -> Self {
        AppError::OperationFailed {
            operation,
            source: Some(source),
        }
    }

    /// Operation failed without an underlying datastore error (e.g. target row absent).
    pub fn failed_missing(operation: Operation) -> Self {
        AppError::OperationFailed {
            operation,
            source: None,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::OperationFailed { operation, source } => {
                match source {
                    Some(e) => tracing::error!(operation = %operation, error = %e, "group operation failed"),
                    None => tracing::error!(operation = %operation, "group operation failed: no such row"),
                }
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
