use serde::{Deserialize, Serialize};

/// Unified error type for all Route 53 operations.
///
/// Each variant includes a `provider` field identifying which endpoint produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Validation Errors
///
/// [`InvalidChangeAction`](Self::InvalidChangeAction), [`EmptyRecordSet`](Self::EmptyRecordSet)
/// and [`InvalidParameter`](Self::InvalidParameter) are raised locally, before any request
/// is sent, and are never retried.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError): network connectivity issues
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`RateLimited`](Self::RateLimited): API throttling
///
/// Only the transport ([`SigV4Executor`](crate::SigV4Executor)) retries them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, 5xx gateway).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The signing credentials are invalid or expired.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The change action is not exactly `CREATE`, `UPSERT` or `DELETE`.
    InvalidChangeAction {
        /// Provider that produced the error.
        provider: String,
        /// The rejected action literal.
        action: String,
    },

    /// A record set with no populated field cannot be serialized.
    EmptyRecordSet {
        /// Provider that produced the error.
        provider: String,
    },

    /// A request parameter is invalid.
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The provider rejected the change batch (`InvalidChangeBatch`, `InvalidInput`).
    InvalidChangeBatch {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The hosted zone does not exist.
    HostedZoneNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Normalized hosted zone identifier.
        zone_id: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The submitted change does not exist (`NoSuchChange`).
    ChangeNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Normalized change identifier.
        change_id: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The reusable delegation set does not exist (`NoSuchDelegationSet`).
    DelegationSetNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Normalized delegation set identifier.
        delegation_set_id: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The hosted zone still contains non-default record sets.
    HostedZoneNotEmpty {
        /// Provider that produced the error.
        provider: String,
        /// Normalized hosted zone identifier.
        zone_id: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The API throttled the request (`Throttling`, `PriorRequestNotComplete`, HTTP 429).
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The authenticated principal lacks permission for the requested operation.
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the provider's XML response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    ///
    /// This is a catch-all for error codes not yet mapped to a specific variant.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::InvalidChangeAction { .. }
                | Self::EmptyRecordSet { .. }
                | Self::InvalidParameter { .. }
                | Self::InvalidChangeBatch { .. }
                | Self::HostedZoneNotFound { .. }
                | Self::ChangeNotFound { .. }
                | Self::DelegationSetNotFound { .. }
                | Self::HostedZoneNotEmpty { .. }
                | Self::PermissionDenied { .. }
        )
    }

    /// Whether the error was raised locally before any request was sent.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidChangeAction { .. }
                | Self::EmptyRecordSet { .. }
                | Self::InvalidParameter { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::InvalidChangeAction { provider, action } => {
                write!(
                    f,
                    "[{provider}] Invalid change action '{action}': expected CREATE, UPSERT or DELETE"
                )
            }
            Self::EmptyRecordSet { provider } => {
                write!(f, "[{provider}] Record set has no populated fields")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::InvalidChangeBatch {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid change batch: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid change batch")
                }
            }
            Self::HostedZoneNotFound {
                provider,
                zone_id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Hosted zone '{zone_id}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] Hosted zone '{zone_id}' not found")
                }
            }
            Self::ChangeNotFound {
                provider,
                change_id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Change '{change_id}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] Change '{change_id}' not found")
                }
            }
            Self::DelegationSetNotFound {
                provider,
                delegation_set_id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(
                        f,
                        "[{provider}] Delegation set '{delegation_set_id}' not found: {msg}"
                    )
                } else {
                    write!(f, "[{provider}] Delegation set '{delegation_set_id}' not found")
                }
            }
            Self::HostedZoneNotEmpty {
                provider, zone_id, ..
            } => {
                write!(f, "[{provider}] Hosted zone '{zone_id}' is not empty")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
