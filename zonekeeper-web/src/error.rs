//! HTTP error mapping for `CoreError`.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use zonekeeper_core::error::CoreError;

/// Wrapper that maps a `CoreError` onto an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub CoreError);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            CoreError::Unauthorized => StatusCode::UNAUTHORIZED,
            CoreError::Forbidden(_) => StatusCode::FORBIDDEN,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::NotConfigured => StatusCode::PRECONDITION_FAILED,
            CoreError::Conflict(_) | CoreError::QuotaExceeded { .. } => StatusCode::CONFLICT,
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::Upstream(_) => StatusCode::BAD_GATEWAY,
            CoreError::Storage(_) | CoreError::PartiallyApplied(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.0.is_expected() {
            tracing::debug!("request failed: {}", self.0);
        } else {
            tracing::error!("request failed: {}", self.0);
        }

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.0,
            "message": self.0.to_string(),
        }))
    }
}
