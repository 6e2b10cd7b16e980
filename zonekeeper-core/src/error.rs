//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use zonekeeper_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No valid session / token
    #[error("Unauthorized")]
    Unauthorized,

    /// Role or domain-authorization failure
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Config / domain / record absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// No Cloudflare credential set has been saved yet
    #[error("Cloudflare is not configured")]
    NotConfigured,

    /// Duplicate record, reserved name, duplicate address
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Per-team creation limit reached
    #[error("Quota exceeded (limit {limit})")]
    QuotaExceeded { limit: u64 },

    /// Malformed request data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Cloudflare reported failure; the upstream payload is carried verbatim
    #[error("{0}")]
    Upstream(#[from] ProviderError),

    /// The remote mutation succeeded but the local mirror write failed.
    /// Mirror and remote may now disagree until an explicit refresh.
    #[error("Partially applied: remote change succeeded but mirror update failed: {0}")]
    PartiallyApplied(String),
}

impl CoreError {
    /// Whether this is expected behavior (user input, resource absent, etc.),
    /// used for log level classification.
    ///
    /// Level `warn` should be used when returning `true`, `error` otherwise.
    /// **Please update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Unauthorized
            | Self::Forbidden(_)
            | Self::NotFound(_)
            | Self::NotConfigured
            | Self::Conflict(_)
            | Self::QuotaExceeded { .. }
            | Self::Validation(_) => true,
            Self::Upstream(e) => e.is_expected(),
            Self::Storage(_) | Self::PartiallyApplied(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
