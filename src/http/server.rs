//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all fixture handlers
//! - Wire up middleware (tracing, access log, panic boundary)
//! - Bind server to listener and serve until shutdown
//!
//! The router is built once at startup and handed to the listener
//! explicitly; there is no ambient route registration anywhere.

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::middleware::log_requests;
use crate::routes::{canned, echo, gzip, redirect, timeout};

/// HTTP server for the fixture routes.
pub struct FixtureServer {
    router: Router,
    config: ServerConfig,
}

impl FixtureServer {
    /// Create a new fixture server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let router = Self::build_router();
        Self { router, config }
    }

    /// Build the Axum router with all routes and middleware layers.
    ///
    /// Middleware, outermost first: trace spans, access log, then the
    /// catch-panic boundary directly around the handlers so that any
    /// panic surfaces as a logged 500 instead of a dropped connection.
    fn build_router() -> Router {
        Router::new()
            .route("/", get(canned::home))
            .route("/gzip", get(gzip::compressed_subject))
            // The echo route streams the body through; lift the default
            // buffered-body limit so arbitrarily large payloads pass.
            .route("/echo", post(echo::echo).layer(DefaultBodyLimit::disable()))
            .route("/json", get(canned::json))
            .route("/login", get(canned::login))
            .route("/redirect", get(redirect::entry))
            .route("/redirect/2", get(redirect::target))
            .route("/loop/1", get(redirect::loop_first))
            .route("/loop/2", get(redirect::loop_second))
            .route("/links", get(canned::links))
            .route("/error", get(canned::error))
            .route("/timeout/{ms}", get(timeout::delayed_hello))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(from_fn(log_requests))
                    .layer(CatchPanicLayer::new()),
            )
    }

    /// Run the server, accepting connections on the given listener.
    /// The caller announces the bound address; this only logs lifecycle.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{self, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn router_dispatches_through_middleware_stack() {
        let router = FixtureServer::build_router();

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&bytes[..], b"home");
    }

    #[tokio::test]
    async fn unroutable_path_falls_through_to_404() {
        let router = FixtureServer::build_router();

        let response = router
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn config_accessor_reflects_bind_address() {
        let server = FixtureServer::new(ServerConfig {
            bind_address: "127.0.0.1:0".to_string(),
        });
        assert_eq!(server.config().bind_address, "127.0.0.1:0");
    }
}
