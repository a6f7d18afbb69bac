//! Retry logic for transient SOAP errors.
//!
//! Provides exponential backoff for SOAP requests that fail with
//! transient faults (701, 714, 716) or timeouts.

use std::time::Duration;

use crate::sonos::soap::SoapResult;

/// Retry delays for transient SOAP errors (exponential backoff).
const RETRY_DELAYS_MS: [u64; 3] = [200, 500, 1000];

/// Executes a SOAP request with retry logic for transient errors.
///
/// # Arguments
/// * `action` - Action name for logging
/// * `operation` - Closure that performs the SOAP request
pub(crate) async fn with_retry<F, Fut>(action: &str, mut operation: F) -> SoapResult<String>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = SoapResult<String>>,
{
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(r) => return Ok(r),
            Err(e) if e.is_transient() && attempt < RETRY_DELAYS_MS.len() => {
                log::warn!("[Sonos] {} transient error: {}", action, e);

                let delay_ms = RETRY_DELAYS_MS[attempt];
                attempt += 1;
                log::info!(
                    "[Sonos] Retrying {} (attempt {}/{}) after {}ms",
                    action,
                    attempt + 1,
                    RETRY_DELAYS_MS.len() + 1,
                    delay_ms
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
            Err(e) => return Err(e),
        }
    }
}
