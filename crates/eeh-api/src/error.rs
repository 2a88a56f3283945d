//! HTTP mapping of core errors
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use eeh_core::EehError;
use serde_json::json;
use thiserror::Error;

pub const NOT_FOUND_DETAIL: &str = "Assessment not found";
const INTERNAL_DETAIL: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] EehError),

    #[error("METRICS/{0}")]
    Metrics(#[from] prometheus::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(EehError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Core(EehError::MalformedInput(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Core(EehError::TokenCollision(_) | EehError::Serialize(_))
            | ApiError::Metrics(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message; internal failures never leak details
    pub fn detail(&self) -> String {
        match self {
            ApiError::Core(EehError::NotFound(_)) => NOT_FOUND_DETAIL.to_string(),
            ApiError::Core(EehError::MalformedInput(reason)) => reason.clone(),
            _ => INTERNAL_DETAIL.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}
