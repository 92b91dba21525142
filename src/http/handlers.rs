//! HTTP request handlers
//!
//! Implements the /extract endpoint for GET and POST plus the 404 fallback.
//! Both methods feed the same validation-and-invocation routine; they differ
//! only in how the target path is sourced (query parameter vs. JSON body).

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::extractor::{run_script, ExtractionResult};
use crate::state::AppState;

/// HTTP error type
#[derive(Debug)]
pub enum HttpError {
    MissingPath,
    PathNotFound(String),
    InvalidJson,
    ScriptFailed {
        path: String,
        stdout: String,
        stderr: String,
    },
    Unexpected(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            HttpError::MissingPath => (
                StatusCode::BAD_REQUEST,
                "Error: 'path' parameter is required in the URL query or JSON body.".to_string(),
            ),
            HttpError::PathNotFound(path) => (
                StatusCode::BAD_REQUEST,
                format!(
                    "Error: The specified path does not exist inside the container: '{}'",
                    path
                ),
            ),
            HttpError::InvalidJson => (
                StatusCode::BAD_REQUEST,
                "Error: Invalid JSON in request body.".to_string(),
            ),
            HttpError::ScriptFailed {
                path,
                stdout,
                stderr,
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!(
                    "Script failed to process '{}'.\n\n--- SCRIPT ERROR ---\n{}\n\n--- SCRIPT OUTPUT ---\n{}",
                    path, stderr, stdout
                ),
            ),
            HttpError::Unexpected(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An unexpected server error occurred: {}", msg),
            ),
        };

        (status, body).into_response()
    }
}

/// Query parameters accepted by GET /extract
#[derive(Debug, Deserialize)]
pub struct ExtractQuery {
    path: Option<String>,
}

/// Extraction endpoint (GET)
/// GET /extract?path=/data/movie.mkv
pub async fn extract_get(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExtractQuery>,
) -> Result<Response, HttpError> {
    tracing::debug!("GET /extract query: {:?}", query);
    process_request(&state, query.path).await
}

/// Extraction endpoint (POST)
/// POST /extract with body {"path": "/data/movie.mkv"}
pub async fn extract_post(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, HttpError> {
    tracing::debug!("POST /extract body: {}", String::from_utf8_lossy(&body));

    let data: serde_json::Value =
        serde_json::from_slice(&body).map_err(|_| HttpError::InvalidJson)?;
    // A non-string `path` value is treated the same as an absent field
    let target_path = data
        .get("path")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    process_request(&state, target_path).await
}

/// Shared logic to validate a target path and run the extraction script
async fn process_request(
    state: &AppState,
    target_path: Option<String>,
) -> Result<Response, HttpError> {
    let path = match target_path {
        Some(p) if !p.is_empty() => p,
        _ => return Err(HttpError::MissingPath),
    };

    if !std::path::Path::new(&path).exists() {
        return Err(HttpError::PathNotFound(path));
    }

    let script = state.config.script_path.clone();
    let script_arg = path.clone();

    // Blocking process wait — run on the blocking thread pool
    let result = tokio::task::spawn_blocking(move || run_script(&script, &script_arg))
        .await
        .map_err(|e| HttpError::Unexpected(e.to_string()))?
        .map_err(|e| HttpError::Unexpected(e.to_string()))?;

    if result.success() {
        Ok(success_response(&path, &result))
    } else {
        Err(HttpError::ScriptFailed {
            path,
            stdout: result.stdout,
            stderr: result.stderr,
        })
    }
}

/// Build the 200 response for a successful script run
fn success_response(path: &str, result: &ExtractionResult) -> Response {
    let body = format!(
        "Successfully processed '{}'.\n\n--- SCRIPT OUTPUT ---\n{}",
        path, result.stdout
    );
    (StatusCode::OK, body).into_response()
}

/// Fallback for every path other than /extract
pub async fn unknown_route() -> Response {
    (
        StatusCode::NOT_FOUND,
        "Not Found. Please use the /extract endpoint.",
    )
        .into_response()
}
