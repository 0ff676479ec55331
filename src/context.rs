//! The host browsing context.
//!
//! The original system read `window.location` directly. Here the current
//! context is an explicit value handed to the resolver, so the core logic
//! runs and tests anywhere.

use tracing::debug;
use url::Url;

use crate::error::{PrivilegeError, Result};
use crate::record::PrivilegeRecord;

/// Query parameter carrying the host window's own granted privileges
pub const PRIVILEGES_PARAM: &str = "privileges";

/// The current browsing context: the host window's URL.
///
/// Supplies the host origin (for the same-origin fast path when resolving
/// extensions) and the host's own granted privileges, carried as a
/// JSON-encoded record in the `privileges` query parameter.
#[derive(Debug, Clone)]
pub struct HostContext {
    url: Url,
}

impl HostContext {
    /// Create from an already-parsed URL.
    pub fn new(url: Url) -> Self {
        HostContext { url }
    }

    /// Parse a location string into a context.
    pub fn from_url(url: &str) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|e| PrivilegeError::invalid_url(url, e))?;
        Ok(HostContext::new(parsed))
    }

    /// The context URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The host window's origin
    pub fn origin(&self) -> url::Origin {
        self.url.origin()
    }

    /// The privileges granted to the host window itself.
    ///
    /// Reads the first `privileges` query parameter (percent-decoded, as a
    /// browser's `URLSearchParams.get` would). An absent parameter, or one
    /// with an empty value, grants nothing. A non-empty malformed or
    /// schema-violating value is a hard failure for the whole check, not an
    /// empty grant.
    pub fn grants(&self) -> Result<PrivilegeRecord> {
        let raw = self
            .url
            .query_pairs()
            .find(|(key, _)| key == PRIVILEGES_PARAM)
            .map(|(_, value)| value.into_owned());

        let Some(raw) = raw.filter(|r| !r.is_empty()) else {
            return Ok(PrivilegeRecord::new());
        };

        let record: PrivilegeRecord = serde_json::from_str(&raw)?;
        debug!(origin = %self.url.origin().ascii_serialization(), "parsed location grants");
        Ok(record)
    }
}
