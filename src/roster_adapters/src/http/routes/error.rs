use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_application::AccountServiceError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AccountApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    NotFound(String),

    #[error("request cancelled")]
    Cancelled,

    #[error("deadline exceeded")]
    DeadlineExceeded,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Non-standard "client closed request".
fn client_closed_request() -> StatusCode {
    StatusCode::from_u16(499).unwrap_or(StatusCode::REQUEST_TIMEOUT)
}

impl IntoResponse for AccountApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AccountApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),

            AccountApiError::AlreadyExists(_) => (StatusCode::CONFLICT, self.to_string()),

            AccountApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),

            AccountApiError::Cancelled => (client_closed_request(), self.to_string()),

            AccountApiError::DeadlineExceeded => (StatusCode::GATEWAY_TIMEOUT, self.to_string()),

            AccountApiError::UnexpectedError(detail) => {
                tracing::error!(error = %detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<AccountServiceError> for AccountApiError {
    fn from(error: AccountServiceError) -> Self {
        match error {
            AccountServiceError::InvalidArgument(e) => AccountApiError::InvalidInput(e),
            AccountServiceError::AlreadyExists(e) => AccountApiError::AlreadyExists(e),
            AccountServiceError::NotFound(e) => AccountApiError::NotFound(e),
            AccountServiceError::Internal(e) => AccountApiError::UnexpectedError(e),
            AccountServiceError::Cancelled => AccountApiError::Cancelled,
            AccountServiceError::DeadlineExceeded => AccountApiError::DeadlineExceeded,
        }
    }
}

impl From<JsonRejection> for AccountApiError {
    fn from(rejection: JsonRejection) -> Self {
        AccountApiError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for AccountApiError {
    fn from(rejection: QueryRejection) -> Self {
        AccountApiError::InvalidInput(rejection.body_text())
    }
}
