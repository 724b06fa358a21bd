//! Fixture HTTP Server
//!
//! A small server answering a fixed set of canned routes, used as a
//! deterministic target when exercising an HTTP client's behavior:
//! gzip decoding, redirect following (including a deliberate redirect
//! loop), streaming body echo, artificial delays, custom headers, and
//! error statuses.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request            ┌─────────────────────────────────────┐
//!     ──────────────────────────┼─▶ http/server (Axum setup)          │
//!                               │     → middleware (access log,       │
//!                               │        trace spans, panic boundary) │
//!                               │     → routes (canned handlers)      │
//!     Client Response           │                                     │
//!     ◀─────────────────────────┼── response                          │
//!                               └─────────────────────────────────────┘
//! ```
//!
//! Every handler is stateless; the only suspension point is the
//! `/timeout/{ms}` route, which sleeps on the tokio timer without
//! blocking other connections.

pub mod config;
pub mod error;
pub mod http;
pub mod routes;

pub use config::ServerConfig;
pub use error::FixtureError;
pub use http::FixtureServer;
