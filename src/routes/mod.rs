//! Fixture route handlers.
//!
//! Each handler produces one deterministic canned response. None of
//! them share state, so they are all free functions registered on the
//! router in [`crate::http::server`].

pub mod canned;
pub mod echo;
pub mod gzip;
pub mod redirect;
pub mod timeout;
