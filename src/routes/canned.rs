//! Static canned replies: fixed bodies, headers, and statuses.

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde_json::json;

/// `GET /` — plain greeting, lets a client confirm the fixture is up.
pub async fn home() -> &'static str {
    "home"
}

/// `GET /json` — a one-field JSON object for content-type and parse checks.
pub async fn json() -> impl IntoResponse {
    Json(json!({ "name": "jake" }))
}

/// `GET /login` — a minimal HTML form for scraping tests.
pub async fn login() -> Html<&'static str> {
    Html("<form id=\"login\"></form>")
}

/// `GET /links` — empty body with a paginated `Link` header.
pub async fn links() -> impl IntoResponse {
    (
        [(
            header::LINK,
            "<https://api.github.com/repos/visionmedia/mocha/issues?page=2>; rel=\"next\"",
        )],
        "",
    )
}

/// `GET /error` — a canned 500 simulating an upstream failure.
pub async fn error() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}
