//! Echo fixture: mirror the request back at the caller.

use axum::extract::Request;
use axum::response::Response;

/// `POST /echo` — reply 200 with the request's headers and body.
///
/// The incoming body is moved straight into the response, so payloads
/// of any size stream through without being buffered. Request headers
/// are copied verbatim; hyper normalizes the framing headers it owns
/// (`Content-Length`, `Transfer-Encoding`) when writing the response.
pub async fn echo(request: Request) -> Response {
    let (parts, body) = request.into_parts();

    let mut response = Response::new(body);
    *response.headers_mut() = parts.headers;
    response
}
