//! Message-type privilege catalog.
//!
//! The catalog is supplied by the host application and read here. It maps
//! every recognized message-type identifier to the record of privileges
//! that message type requires.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::PrivilegeRecord;

/// Static mapping from message-type identifier to required privileges.
///
/// Unknown message types resolve to the empty record, i.e. they require
/// nothing and are silently authorized. Callers that want default-deny for
/// unrecognized types must pre-validate the message type elsewhere.
///
/// Serializes transparently as a plain JSON object, so a host can ship the
/// catalog as a config document:
///
/// ```
/// use privgate::PrivilegeCatalog;
///
/// let catalog: PrivilegeCatalog = serde_json::from_str(
///     r#"{"article.save": {"update": ["articles"]}}"#,
/// ).unwrap();
/// assert!(!catalog.required_for("article.save").is_empty());
/// assert!(catalog.required_for("article.preview").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrivilegeCatalog {
    entries: HashMap<String, PrivilegeRecord>,
}

impl PrivilegeCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        PrivilegeCatalog::default()
    }

    /// Builder-style: require `record` for `message_type`.
    pub fn require(mut self, message_type: impl Into<String>, record: PrivilegeRecord) -> Self {
        self.entries.insert(message_type.into(), record);
        self
    }

    /// Insert or replace the requirement for a message type.
    pub fn insert(&mut self, message_type: impl Into<String>, record: PrivilegeRecord) {
        self.entries.insert(message_type.into(), record);
    }

    /// The privileges required for a message type.
    ///
    /// Returns the empty record when the type is unknown to the catalog.
    pub fn required_for(&self, message_type: &str) -> &PrivilegeRecord {
        static EMPTY: PrivilegeRecord = PrivilegeRecord::EMPTY;
        self.entries.get(message_type).unwrap_or(&EMPTY)
    }

    /// Number of recognized message types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no message types are recognized
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, PrivilegeRecord)> for PrivilegeCatalog {
    fn from_iter<I: IntoIterator<Item = (K, PrivilegeRecord)>>(iter: I) -> Self {
        PrivilegeCatalog {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
