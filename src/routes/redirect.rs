//! Redirect fixtures: a two-hop chain and a deliberate infinite loop.
//!
//! The loop pair (`/loop/1` ↔ `/loop/2`) never terminates; it exists
//! to prove a client's hop limit or cycle detection fires. The server
//! itself is oblivious, it just issues 302s.

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

/// 302 Found. Axum's `Redirect` helpers pick 303/307/308; the fixture
/// wants the classic 302 clients see most in the wild.
fn found(location: &'static str) -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, location)])
}

/// `GET /redirect` — first hop of the terminating chain.
pub async fn entry() -> impl IntoResponse {
    found("/redirect/2")
}

/// `GET /redirect/2` — end of the chain.
pub async fn target() -> &'static str {
    "Oh damn you found me"
}

/// `GET /loop/1` — half of the redirect cycle.
pub async fn loop_first() -> impl IntoResponse {
    found("/loop/2")
}

/// `GET /loop/2` — the other half, pointing back at `/loop/1`.
pub async fn loop_second() -> impl IntoResponse {
    found("/loop/1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::Response;

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn chain_entry_points_at_target() {
        let response = entry().await.into_response();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/redirect/2");
    }

    #[tokio::test]
    async fn loop_halves_point_at_each_other() {
        let first = loop_first().await.into_response();
        let second = loop_second().await.into_response();
        assert_eq!(first.status(), StatusCode::FOUND);
        assert_eq!(second.status(), StatusCode::FOUND);
        assert_eq!(location(&first), "/loop/2");
        assert_eq!(location(&second), "/loop/1");
    }
}
