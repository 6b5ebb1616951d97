//! HTTP error mapping.
//!
//! Every domain error family converges here so UI callers get a stable
//! `{error_code, message}` body and a status they can branch on.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::AppError;
use crate::domain::access::AccessError;
use crate::domain::entitlement::EntitlementError;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::proposal::ProposalError;

/// JSON error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

/// Newtype turning [`AppError`] into an HTTP response.
#[derive(Debug)]
pub struct ApiError(AppError);

impl ApiError {
    /// The underlying application error.
    pub fn inner(&self) -> &AppError {
        &self.0
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<AccessError> for ApiError {
    fn from(err: AccessError) -> Self {
        Self(AppError::from(err))
    }
}

impl From<EntitlementError> for ApiError {
    fn from(err: EntitlementError) -> Self {
        Self(AppError::from(err))
    }
}

impl From<ProposalError> for ApiError {
    fn from(err: ProposalError) -> Self {
        Self(AppError::from(err))
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(AppError::from(err))
    }
}

/// HTTP status for each wire code.
fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::QuotaExhausted => StatusCode::PAYMENT_REQUIRED,
        ErrorCode::AlreadyPremium => StatusCode::CONFLICT,
        ErrorCode::ProfileNotFound | ErrorCode::ProposalNotFound => StatusCode::NOT_FOUND,
        ErrorCode::ValidationFailed | ErrorCode::EmptyField => StatusCode::BAD_REQUEST,
        ErrorCode::StorageError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let code = self.0.code();
        let body = ErrorResponse::new(code.to_string(), self.0.to_string());
        (status_for(code), Json(body)).into_response()
    }
}
