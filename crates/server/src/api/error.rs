//! Error responses for JSON endpoints.

use academics_api_types::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::repository::StoreError;
use crate::workflow::WorkflowError;

#[derive(Debug)]
pub struct AppError {
    message: String,
    code: &'static str,
    status: StatusCode,
}

impl AppError {
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        Self {
            message: format!("{entity} {id} not found"),
            code: "NOT_FOUND",
            status: StatusCode::NOT_FOUND,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "VALIDATION_FAILED",
            status: StatusCode::BAD_REQUEST,
        }
    }
}

impl From<WorkflowError> for AppError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::MissingPrerequisite => AppError {
                message: err.to_string(),
                code: "MISSING_PREREQUISITE",
                status: StatusCode::CONFLICT,
            },
            WorkflowError::DuplicateIdentifier(field) => AppError {
                message: field.to_string(),
                code: "DUPLICATE_IDENTIFIER",
                status: StatusCode::CONFLICT,
            },
            WorkflowError::Validation(form) => AppError::bad_request(form.to_string()),
            WorkflowError::RecordNotFound { entity, id } => AppError::not_found(entity, id),
            WorkflowError::UnknownReference(_) => AppError {
                message: err.to_string(),
                code: "UNKNOWN_REFERENCE",
                status: StatusCode::UNPROCESSABLE_ENTITY,
            },
            WorkflowError::Store(store) => {
                error!(error = %store, "store failure");
                AppError {
                    message: "internal error".to_string(),
                    code: "INTERNAL_ERROR",
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                }
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        WorkflowError::from(err).into()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            code: self.code.to_string(),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<academics_core::forms::FormError> for AppError {
    fn from(err: academics_core::forms::FormError) -> Self {
        AppError::bad_request(err.to_string())
    }
}
