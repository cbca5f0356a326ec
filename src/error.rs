use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{ErrorResponse, FacetCategory, SearchDomain};

/// Errors surfaced by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Session {0} not found")]
    SessionNotFound(Uuid),

    #[error("{0}")]
    UnknownDomain(String),

    #[error("{0}")]
    UnknownInterest(String),

    #[error("{domain} cannot be filtered by {category}")]
    CategoryNotOffered {
        domain: SearchDomain,
        category: FacetCategory,
    },

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Query must not be blank")]
    BlankQuery,

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::SessionNotFound(_) => "session_not_found",
            ApiError::UnknownDomain(_) => "unknown_domain",
            ApiError::UnknownInterest(_) => "unknown_interest",
            ApiError::CategoryNotOffered { .. } => "category_not_offered",
            ApiError::Validation(_) | ApiError::BlankQuery => "validation_failed",
            ApiError::InvalidJson(_) => "invalid_json",
            ApiError::InvalidPath(_) => "invalid_path",
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}

/// Handle path extraction errors (e.g. a malformed session id)
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    ApiError::InvalidPath(err.to_string()).into()
}
