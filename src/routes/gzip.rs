//! Gzip fixture: a constant string compressed on every request.
//!
//! Exists so a client can verify its `Content-Encoding: gzip` decode
//! path against a known plaintext.

use axum::http::header;
use axum::response::IntoResponse;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

use crate::error::FixtureError;

/// The plaintext a client should recover after decompressing the body.
pub const SUBJECT: &str = "some long long long long string";

/// `GET /gzip` — the subject string, gzip-compressed.
///
/// Compression failure propagates as a 500 through [`FixtureError`].
pub async fn compressed_subject() -> Result<impl IntoResponse, FixtureError> {
    let compressed = compress(SUBJECT.as_bytes())?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain"),
            (header::CONTENT_ENCODING, "gzip"),
        ],
        compressed,
    ))
}

fn compress(input: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(input)?;
    encoder.finish()
}
