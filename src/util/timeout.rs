//! Timeout helper.

use std::future::Future;
use std::time::Duration;

use crate::error::SyllabusError;

/// Wrap a future with a deadline.
pub async fn with_timeout<T>(
    duration: Duration,
    future: impl Future<Output = Result<T, SyllabusError>>,
) -> Result<T, SyllabusError> {
    match tokio::time::timeout(duration, future).await {
        Ok(result) => result,
        Err(_) => Err(SyllabusError::Timeout(duration.as_millis() as u64)),
    }
}
