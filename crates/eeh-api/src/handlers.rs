//! API Handlers
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use eeh_core::{parse_submission, EehError};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::AppState;

pub async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Accepts a Form 34 body; replies with the token the form redirects to
pub async fn assess(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let submission = parse_submission(&body)?;
    let receipt = state.service.submit(submission)?;

    state.metrics.submitted.inc();
    state.metrics.stored.set(state.service.stored_count() as i64);

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "token": receipt.token
        })),
    ))
}

pub async fn get_result(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Response, ApiError> {
    let stored = match state.service.fetch(&token) {
        Ok(stored) => stored,
        Err(e) => {
            if matches!(e, EehError::NotFound(_)) {
                state.metrics.not_found.inc();
            }
            return Err(e.into());
        }
    };
    state.metrics.served.inc();

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::ETAG, format!("\"{}\"", stored.digest)),
        ],
        stored.body.clone(),
    )
        .into_response())
}

pub async fn metrics(State(state): State<AppState>) -> Result<Response, ApiError> {
    let text = state.metrics.encode()?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        text,
    )
        .into_response())
}
