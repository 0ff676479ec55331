//! Extension registry and origin-bound grant extraction.
//!
//! The registry is a read-only handle supplied by the host; this crate
//! only looks extensions up by the hostname of their base URL. Resolution
//! has one fast path: a counterpart sharing the host's own origin gets a
//! synthesized wildcard extension without consulting the registry at all.

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::context::HostContext;
use crate::error::{PrivilegeError, Result};
use crate::record::PrivilegeRecord;

/// One embedded extension: where it is served from and what it may do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    /// Base URL the extension is served from. Lookup compares hostnames
    /// only; scheme, port, and path are ignored.
    pub base_url: String,
    /// Privileges granted to this extension
    pub permissions: PrivilegeRecord,
}

impl Extension {
    /// The synthesized extension standing in for the host window itself.
    ///
    /// Produced for same-origin counterparts, never stored. Its base URL
    /// is the bare hostname, and every category grants the literal `"*"` —
    /// which the comparator matches literally, so concrete required scopes
    /// are still reported missing.
    fn self_extension(hostname: &str) -> Extension {
        Extension {
            base_url: hostname.to_string(),
            permissions: PrivilegeRecord::wildcard(),
        }
    }
}

/// Read-only hostname lookup over the host's extension registry.
///
/// The single capability this crate needs from the registry: the first
/// registered extension whose base URL carries exactly the given hostname.
/// Implementations report a parse failure for registered base URLs that do
/// not parse, rather than skipping them.
pub trait ExtensionRegistry {
    fn find_by_hostname(&self, hostname: &str) -> Result<Option<Extension>>;
}

impl<R: ExtensionRegistry + ?Sized> ExtensionRegistry for &R {
    fn find_by_hostname(&self, hostname: &str) -> Result<Option<Extension>> {
        (**self).find_by_hostname(hostname)
    }
}

/// Ordered in-memory registry.
///
/// Entries are searched in registration order and the first hostname match
/// wins. Serializes transparently as a JSON array so a host can ship the
/// registry as a config document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticRegistry {
    entries: Vec<Extension>,
}

impl StaticRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        StaticRegistry::default()
    }

    /// Append an extension. Later registrations never shadow earlier ones
    /// with the same hostname.
    pub fn register(&mut self, extension: Extension) {
        self.entries.push(extension);
    }

    /// Number of registered extensions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Extension> for StaticRegistry {
    fn from_iter<I: IntoIterator<Item = Extension>>(iter: I) -> Self {
        StaticRegistry { entries: iter.into_iter().collect() }
    }
}

impl ExtensionRegistry for StaticRegistry {
    fn find_by_hostname(&self, hostname: &str) -> Result<Option<Extension>> {
        for extension in &self.entries {
            let parsed = Url::parse(&extension.base_url)
                .map_err(|e| PrivilegeError::invalid_url(&extension.base_url, e))?;
            if parsed.host_str().unwrap_or_default() == hostname {
                return Ok(Some(extension.clone()));
            }
        }
        Ok(None)
    }
}

/// Resolve the extension granting privileges for a candidate base URL.
///
/// - Empty candidate: not found.
/// - Candidate sharing the host context's origin: the synthesized wildcard
///   self-extension, registry not consulted.
/// - Otherwise: first registry entry with exactly the candidate's hostname.
/// - A candidate that does not parse as a URL is a hard failure.
pub fn resolve_extension<R: ExtensionRegistry + ?Sized>(
    context: &HostContext,
    registry: &R,
    base_url: &str,
) -> Result<Option<Extension>> {
    if base_url.is_empty() {
        return Ok(None);
    }

    let compared =
        Url::parse(base_url).map_err(|e| PrivilegeError::invalid_url(base_url, e))?;
    let hostname = compared.host_str().unwrap_or_default();

    if compared.origin() == context.origin() {
        debug!(hostname, "same-origin counterpart, synthesizing wildcard extension");
        return Ok(Some(Extension::self_extension(hostname)));
    }

    registry.find_by_hostname(hostname)
}
