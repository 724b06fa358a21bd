//! Error types surfaced to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failures a route handler can hit while building its response.
///
/// The fixture is deliberately tiny, so the taxonomy is too: gzip
/// compression failing (server's fault, 500) and an unparseable delay
/// segment on `/timeout/{ms}` (caller's fault, 400).
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("gzip compression failed: {0}")]
    Compression(#[from] std::io::Error),

    #[error("invalid delay {0:?}: expected base-10 milliseconds")]
    InvalidDelay(String),
}

impl FixtureError {
    fn status_code(&self) -> StatusCode {
        match self {
            FixtureError::Compression(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FixtureError::InvalidDelay(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for FixtureError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(status = %status, error = %self, "request failed");
        (status, self.to_string()).into_response()
    }
}
