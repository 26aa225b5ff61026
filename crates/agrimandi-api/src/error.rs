//! API error taxonomy and its HTTP mapping.
//!
//! Every handler maps its failures to one of these kinds; nothing is
//! retried, and all failures surface to the caller as `{"error": string}`
//! JSON bodies with the matching status code.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use agrimandi_auth::AuthError;
use agrimandi_store::StorageError;

/// Result alias for handler bodies.
pub type ApiResult<T> = Result<T, ApiError>;

/// The five failure kinds the API exposes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid bearer token → 401
    #[error("Unauthorized")]
    Unauthenticated,

    /// Authenticated but not allowed to touch this resource → 403
    #[error("{0}")]
    Forbidden(String),

    /// Missing or malformed required fields → 400
    #[error("{0}")]
    Validation(String),

    /// Referenced entity absent → 404
    #[error("{0}")]
    NotFound(String),

    /// Unexpected storage or handler failure → 500
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

impl From<AuthError> for ApiError {
    fn from(_: AuthError) -> Self {
        ApiError::Unauthenticated
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(msg) = self {
            log::error!("internal error: {}", msg);
        }
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
