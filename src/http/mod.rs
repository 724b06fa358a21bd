//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, router construction)
//!     → middleware.rs (access log)
//!     → [route handler produces canned response]
//!     → Send to client
//! ```

pub mod middleware;
pub mod server;

pub use server::FixtureServer;
