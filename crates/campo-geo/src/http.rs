//! Shared HTTP response helpers for upstream clients.
//!
//! Centralizes the status-code check (non-success → [`GeoError::Api`]) so the
//! geocoding and satellite modules stay focused on request construction and
//! response mapping. Failures are never retried.

use std::time::Duration;

use crate::error::GeoError;

/// Longest upstream error body kept in [`GeoError::Api`].
const MAX_ERROR_BODY: usize = 512;

/// Build a `reqwest::Client` with a user agent and request timeout.
pub fn build_client(user_agent: &str, timeout_secs: u64) -> Result<reqwest::Client, GeoError> {
    Ok(reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .build()?)
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success; otherwise
/// [`GeoError::Api`] with the status code and a truncated body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GeoError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let mut message = resp.text().await.unwrap_or_default();
        truncate_at_char_boundary(&mut message, MAX_ERROR_BODY);
        tracing::error!(status, %message, "upstream returned an error status");
        return Err(GeoError::Api { status, message });
    }
    Ok(resp)
}

fn truncate_at_char_boundary(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}
