//! Delay fixture: hold a response for a caller-chosen duration.

use axum::extract::Path;
use std::time::Duration;
use tokio::time::sleep;

use crate::error::FixtureError;

/// `GET /timeout/{ms}` — reply `"hello"` after `ms` milliseconds.
///
/// The wait is a timer suspension, not a thread sleep, so slow callers
/// never stall other connections. A segment that does not parse as
/// base-10 milliseconds is rejected with a 400.
pub async fn delayed_hello(Path(ms): Path<String>) -> Result<&'static str, FixtureError> {
    let delay: u64 = ms.parse().map_err(|_| FixtureError::InvalidDelay(ms))?;

    sleep(Duration::from_millis(delay)).await;
    Ok("hello")
}
