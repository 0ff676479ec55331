//! Error types for privilege resolution

/// Hard failures during a privilege check.
///
/// Only parse failures are errors. Lookup misses (unknown message type,
/// unregistered origin) resolve to [`Verdict`](crate::Verdict) variants
/// instead, and an empty candidate base URL resolves to "not found".
#[derive(Debug, thiserror::Error)]
pub enum PrivilegeError {
    /// The `privileges` query parameter was present but did not parse as a
    /// privilege record. Callers are expected to fail the check closed.
    #[error("malformed privileges query parameter: {0}")]
    MalformedGrants(#[from] serde_json::Error),

    /// A host, candidate, or registered base URL could not be parsed.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl PrivilegeError {
    pub(crate) fn invalid_url(url: &str, source: url::ParseError) -> Self {
        PrivilegeError::InvalidUrl { url: url.to_string(), source }
    }
}

/// Result type alias for privilege-resolution operations
pub type Result<T> = std::result::Result<T, PrivilegeError>;
