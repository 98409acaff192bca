//! Generic HTTP client tools
//!
//! Sends an already-signed `RequestBuilder`, logs it, classifies transport failures and
//! retries transient ones. Signing stays with the caller.
//!
//! # design principles
//! - **Non-2xx is not a transport failure** - the status and body are returned to the caller,
//!   which owns provider error-code mapping
//! - **Retry lives here only** - nothing above the transport retries
//! - **Throttling is retried** - HTTP 429, and HTTP 400 carrying `Throttling` or
//!   `PriorRequestNotComplete`
//! - **Mutations are not replayed blindly** - POST/DELETE are only re-sent when the
//!   previous attempt never reached the server or was throttled

use reqwest::RequestBuilder;
use std::time::Duration;

use crate::error::ProviderError;
use crate::types::ApiResponse;
use crate::utils::log_sanitizer::truncate_for_log;

/// Error codes Route 53 returns with HTTP 400 when a request should be retried later.
const THROTTLING_CODES: [&str; 2] = [
    "<Code>Throttling</Code>",
    "<Code>PriorRequestNotComplete</Code>",
];

/// How far a failed attempt got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delivery {
    /// The connection was never established; the server saw nothing.
    NotSent,
    /// The server answered with a throttling rejection.
    Rejected,
    /// The request may have been applied (timeout, dropped connection, gateway error).
    MaybeApplied,
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the raw response
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (including URL, headers, body, etc.)
    /// * `provider_name` - Provider name (for logging)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok(ApiResponse)` - any response that was fully read, including 4xx
    /// * `Err(ProviderError::RateLimited)` - HTTP 429
    /// * `Err(ProviderError::NetworkError | Timeout)` - transport failure or 502/503/504
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<ApiResponse, ProviderError> {
        Self::execute_once(request_builder, provider_name, method_name, url)
            .await
            .map_err(|(e, _)| e)
    }

    async fn execute_once(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<ApiResponse, (ProviderError, Delivery)> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            let delivery = if e.is_connect() {
                Delivery::NotSent
            } else {
                Delivery::MaybeApplied
            };
            let error = if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            };
            (error, delivery)
        })?;

        let status = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status}");

        // Extract Retry-After header (before consuming response body)
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err((
                ProviderError::RateLimited {
                    provider: provider_name.to_string(),
                    retry_after,
                    raw_message: Some(body),
                },
                Delivery::Rejected,
            ));
        }

        if matches!(status, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Server error (HTTP {status})");
            return Err((
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: format!("HTTP {status}: {}", truncate_for_log(&body)),
                },
                Delivery::MaybeApplied,
            ));
        }

        let body = response.text().await.map_err(|e| {
            (
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                },
                Delivery::MaybeApplied,
            )
        })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&body)
        );

        Ok(ApiResponse { status, body })
    }

    /// Performs an HTTP request with retries
    ///
    /// # Retry strategy
    /// - Retry `NetworkError`, `Timeout`, `RateLimited` and throttled 400 responses
    /// - Non-`GET` requests are only retried when the failed attempt never reached the
    ///   server or was throttled; a lost response to an applied change is returned as-is
    /// - Exponential backoff: 100ms, 200ms, 400ms, 800ms, ... (maximum 10 seconds)
    /// - `Retry-After` is honoured (capped at 30 seconds)
    /// - A throttled response that survives all retries is returned as-is
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<ApiResponse, ProviderError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, provider_name, method_name, url).await;
        }

        let replay_safe = is_replay_safe(method_name);
        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder can only be used once
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{provider_name}] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, provider_name, method_name, url)
                    .await;
            };

            match Self::execute_once(req, provider_name, method_name, url).await {
                Ok(resp) if attempt < max_retries && is_throttled_response(&resp) => {
                    let delay = backoff_delay(attempt);
                    log::warn!(
                        "[{}] Throttled (attempt {}/{}), retrying in {:.1}s",
                        provider_name,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32()
                    );
                    tokio::time::sleep(delay).await;
                }
                Ok(resp) => return Ok(resp),
                Err((e, delivery))
                    if attempt < max_retries && should_retry(&e, delivery, replay_safe) =>
                {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[{}] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        provider_name,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err((e, _)) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Determine whether the error can be retried
///
/// Network errors, timeouts and throttling are transient; everything else is final.
fn is_retryable(error: &ProviderError) -> bool {
    matches!(
        error,
        ProviderError::NetworkError { .. }
            | ProviderError::Timeout { .. }
            | ProviderError::RateLimited { .. }
    )
}

/// Whether a request can be re-sent after it may already have been applied.
fn is_replay_safe(method_name: &str) -> bool {
    matches!(method_name, "GET" | "HEAD")
}

/// Retry decision for a failed attempt.
///
/// Mutations that may have reached the server are never replayed: a second DELETE of an
/// applied change would come back as a spurious rejection.
fn should_retry(error: &ProviderError, delivery: Delivery, replay_safe: bool) -> bool {
    is_retryable(error) && (replay_safe || delivery != Delivery::MaybeApplied)
}

/// Whether a fully-read response is a throttling rejection.
fn is_throttled_response(response: &ApiResponse) -> bool {
    response.status == 400 && THROTTLING_CODES.iter().any(|c| response.body.contains(c))
}

/// Calculate retry delay
///
/// Use `retry_after` (capped at 30s) for `RateLimited`, exponential backoff otherwise.
fn retry_delay(error: &ProviderError, attempt: u32) -> Duration {
    if let ProviderError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// Calculate exponential backoff delay
///
/// Backoff strategy: 100ms, 200ms, 400ms, 800ms, 1.6s, ...
/// Maximum delay limit is 10 seconds
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // Prevent 2^attempt from overflowing
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    let delay_ms = delay_ms.min(10_000);
    Duration::from_millis(delay_ms)
}
