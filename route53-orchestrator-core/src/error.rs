//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use route53_orchestrator_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The caller's cancel signal fired
    #[error("Operation cancelled")]
    Cancelled,

    /// A purge stopped at the first failed deletion
    #[error(
        "Purge of zone {zone_id} interrupted after {processed} record set(s) ({deleted} deleted): {source}"
    )]
    #[serde(rename_all = "camelCase")]
    PurgeInterrupted {
        zone_id: String,
        /// Deletions attempted, including the failed one
        processed: usize,
        /// Deletions that succeeded
        deleted: usize,
        #[source]
        source: ProviderError,
    },

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationError(_) | Self::Cancelled => true,
            Self::PurgeInterrupted { source, .. } | Self::Provider(source) => source.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
