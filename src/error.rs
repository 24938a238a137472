use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by the search gateway, resolver and relay.
///
/// Validation failures are raised before any upstream call is made; the
/// remaining variants carry the upstream error text for diagnostics.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("search upstream unavailable: {detail}")]
    UpstreamUnavailable { detail: String },
    #[error("media URL resolution failed: {detail}")]
    ResolutionFailed { detail: String },
    #[error("media fetch failed: {detail}")]
    UpstreamStreamError { detail: String },
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamUnavailable { .. }
            | Self::ResolutionFailed { .. }
            | Self::UpstreamStreamError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::InvalidRequest(detail) => json!({ "error": detail }),
            Self::UpstreamUnavailable { detail } => json!({
                "error": "Failed to search YouTube",
                "details": detail,
            }),
            Self::ResolutionFailed { detail } => json!({
                "error": "Failed to get download URL",
                "details": detail,
            }),
            Self::UpstreamStreamError { detail } => json!({
                "error": "Failed to proxy download",
                "details": detail,
            }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
