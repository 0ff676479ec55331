//! Privgate - privilege resolution for embedded admin extensions
//!
//! A host application embedding third-party admin extensions as
//! cross-origin iframes checks, per message type, whether the counterpart
//! holds the privileges that type requires. This crate computes that
//! verdict; enforcement (actually blocking the message) stays with the
//! caller.
//!
//! The moving parts:
//!
//! - [`PrivilegeCatalog`]: host-supplied map from message type to required
//!   privileges; unknown types require nothing.
//! - [`HostContext`]: the host window's URL, carrying its own grants in a
//!   JSON-encoded `privileges` query parameter.
//! - [`ExtensionRegistry`]: read-only hostname lookup over the registered
//!   extensions, with a same-origin fast path that synthesizes a wildcard
//!   grant.
//! - [`missing_privileges`]: the literal-equality diff between required and
//!   granted records.
//! - [`PrivilegeResolver`]: the outbound/inbound entry points producing a
//!   [`Verdict`].
//!
//! ```
//! use privgate::{
//!     Category, Extension, HostContext, PrivilegeCatalog, PrivilegeRecord,
//!     PrivilegeResolver, StaticRegistry, Verdict,
//! };
//!
//! let catalog = PrivilegeCatalog::new()
//!     .require("article.delete", PrivilegeRecord::new().with(Category::Delete, ["articles"]));
//!
//! let mut registry = StaticRegistry::new();
//! registry.register(Extension {
//!     base_url: "https://plugin.example".to_string(),
//!     permissions: PrivilegeRecord::new().with(Category::Read, ["articles"]),
//! });
//!
//! let context = HostContext::from_url("https://admin.example/dashboard").unwrap();
//! let resolver = PrivilegeResolver::new(catalog, context, registry);
//!
//! let verdict = resolver.handle_privileged("article.delete", "https://plugin.example").unwrap();
//! assert_eq!(
//!     verdict,
//!     Verdict::Missing(vec!["delete:articles".parse().unwrap()]),
//! );
//! ```

mod catalog;
mod compare;
mod context;
mod error;
mod privilege;
mod record;
mod registry;
mod resolver;

pub use catalog::PrivilegeCatalog;
pub use compare::missing_privileges;
pub use context::{HostContext, PRIVILEGES_PARAM};
pub use error::{PrivilegeError, Result};
pub use privilege::{Category, ParsePrivilegeError, PrivilegeString};
pub use record::PrivilegeRecord;
pub use registry::{resolve_extension, Extension, ExtensionRegistry, StaticRegistry};
pub use resolver::{PrivilegeResolver, Verdict};
