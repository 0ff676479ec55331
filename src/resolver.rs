//! Authorization entry points.
//!
//! The resolver wires the catalog, the host context, and the registry
//! handle into the two checks the host runs per message: outbound (is the
//! host window itself allowed to send this?) and inbound (is the extension
//! behind this origin allowed to have it handled?).
//!
//! Each check is a stateless, synchronous function of its inputs; nothing
//! is cached between calls.

use tracing::debug;

use crate::catalog::PrivilegeCatalog;
use crate::compare::missing_privileges;
use crate::context::HostContext;
use crate::error::Result;
use crate::privilege::PrivilegeString;
use crate::registry::{resolve_extension, ExtensionRegistry};

/// Outcome of a privilege check.
///
/// `Unresolved` means the inbound counterpart could not be identified: no
/// registered extension carries the origin's hostname. The legacy system
/// collapsed that case and `Authorized` into one "proceed" outcome; keeping
/// them apart lets the caller pick fail-open or fail-closed for unknown
/// origins explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every required privilege is granted (or nothing was required)
    Authorized,
    /// No extension is registered for the counterpart origin
    Unresolved,
    /// The counterpart lacks these privileges, in required order
    Missing(Vec<PrivilegeString>),
}

impl Verdict {
    /// True only for [`Verdict::Authorized`].
    ///
    /// `Unresolved` is deliberately not authorized here; use
    /// [`Verdict::into_missing`] for the legacy fail-open reading.
    pub fn is_authorized(&self) -> bool {
        matches!(self, Verdict::Authorized)
    }

    /// The missing privileges, if any.
    pub fn missing(&self) -> Option<&[PrivilegeString]> {
        match self {
            Verdict::Missing(missing) => Some(missing),
            _ => None,
        }
    }

    /// Collapse to the legacy outcome: `None` means proceed.
    ///
    /// This reproduces the original behavior where "nothing missing" and
    /// "no extension found for the origin" were the same sentinel, so an
    /// unregistered origin passes the check even when privileges were
    /// required. Callers wanting fail-closed for unknown origins must match
    /// on [`Verdict::Unresolved`] instead of using this.
    pub fn into_missing(self) -> Option<Vec<PrivilegeString>> {
        match self {
            Verdict::Missing(missing) => Some(missing),
            Verdict::Authorized | Verdict::Unresolved => None,
        }
    }

    fn from_comparison(missing: Option<Vec<PrivilegeString>>) -> Verdict {
        match missing {
            None => Verdict::Authorized,
            Some(missing) => Verdict::Missing(missing),
        }
    }
}

/// Privilege checks for one host window.
///
/// Holds the host-supplied catalog, the current browsing context, and the
/// registry handle. All state is read-only; checks never mutate it.
///
/// # Example
/// ```
/// use privgate::{
///     Category, HostContext, PrivilegeCatalog, PrivilegeRecord, PrivilegeResolver,
///     StaticRegistry, Verdict,
/// };
///
/// let catalog = PrivilegeCatalog::new()
///     .require("article.save", PrivilegeRecord::new().with(Category::Update, ["articles"]));
/// let context = HostContext::from_url("https://admin.example/?privileges=%7B%22update%22%3A%5B%22articles%22%5D%7D").unwrap();
/// let resolver = PrivilegeResolver::new(catalog, context, StaticRegistry::new());
///
/// assert_eq!(resolver.send_privileged("article.save").unwrap(), Verdict::Authorized);
/// ```
#[derive(Debug, Clone)]
pub struct PrivilegeResolver<R> {
    catalog: PrivilegeCatalog,
    context: HostContext,
    registry: R,
}

impl<R: ExtensionRegistry> PrivilegeResolver<R> {
    pub fn new(catalog: PrivilegeCatalog, context: HostContext, registry: R) -> Self {
        PrivilegeResolver { catalog, context, registry }
    }

    pub fn catalog(&self) -> &PrivilegeCatalog {
        &self.catalog
    }

    pub fn context(&self) -> &HostContext {
        &self.context
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Outbound check: may the host window send this message type?
    ///
    /// Message types requiring nothing (including every type unknown to
    /// the catalog) are authorized without reading the context, so a
    /// malformed `privileges` parameter only fails checks that actually
    /// need it. Otherwise the host's own grants are extracted from the
    /// context and compared.
    pub fn send_privileged(&self, message_type: &str) -> Result<Verdict> {
        let required = self.catalog.required_for(message_type);
        if required.is_empty() {
            debug!(message_type, "no privileges required, authorized");
            return Ok(Verdict::Authorized);
        }

        let granted = self.context.grants()?;
        let verdict = Verdict::from_comparison(missing_privileges(required, &granted));
        if let Some(missing) = verdict.missing() {
            debug!(message_type, count = missing.len(), "outbound check found missing privileges");
        }
        Ok(verdict)
    }

    /// Inbound check: may the counterpart at `origin` have this message
    /// type handled?
    ///
    /// The extension is resolved before requirements are considered, so a
    /// malformed origin fails the check even for message types requiring
    /// nothing. An origin with no registered extension yields
    /// [`Verdict::Unresolved`]; the caller decides whether that proceeds.
    pub fn handle_privileged(&self, message_type: &str, origin: &str) -> Result<Verdict> {
        let required = self.catalog.required_for(message_type);

        let Some(extension) = resolve_extension(&self.context, &self.registry, origin)? else {
            debug!(message_type, origin, "no extension resolved for origin");
            return Ok(Verdict::Unresolved);
        };

        let verdict = Verdict::from_comparison(missing_privileges(required, &extension.permissions));
        if let Some(missing) = verdict.missing() {
            debug!(
                message_type,
                base_url = %extension.base_url,
                count = missing.len(),
                "inbound check found missing privileges"
            );
        }
        Ok(verdict)
    }
}
