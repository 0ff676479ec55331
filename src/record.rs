//! The five-key privilege record.
//!
//! A record maps each of the five fixed categories to an ordered sequence
//! of scope strings. An absent category grants (or requires) nothing in
//! that class. Scope order is preserved and duplicates are tolerated but
//! never deduplicated.

use serde::{Deserialize, Serialize};

use crate::privilege::Category;

/// Granted or required privileges, keyed by the five fixed categories.
///
/// The schema is closed: deserializing a document with any other key fails,
/// so grants arriving over the wire are validated rather than trusted.
///
/// A record with no categories present means "nothing granted/required".
/// That is a distinct state from a category that is present but empty,
/// although both satisfy the comparator vacuously.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrivilegeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Vec<String>>,
}

impl PrivilegeRecord {
    /// The record with no categories present
    pub const EMPTY: PrivilegeRecord = PrivilegeRecord {
        additional: None,
        create: None,
        read: None,
        update: None,
        delete: None,
    };

    /// Create an empty record
    pub fn new() -> Self {
        PrivilegeRecord::default()
    }

    /// The record granting the literal scope `"*"` in every category.
    ///
    /// Note that `"*"` is matched literally by the comparator. This record
    /// satisfies a requirement of `"*"` in any category, and nothing else.
    pub fn wildcard() -> Self {
        let all = || Some(vec!["*".to_string()]);
        PrivilegeRecord {
            additional: all(),
            create: all(),
            read: all(),
            update: all(),
            delete: all(),
        }
    }

    /// Builder-style: set one category's scope sequence.
    ///
    /// # Example
    /// ```
    /// use privgate::{Category, PrivilegeRecord};
    ///
    /// let record = PrivilegeRecord::new()
    ///     .with(Category::Read, ["articles"])
    ///     .with(Category::Update, ["articles", "settings"]);
    /// assert!(record.contains(Category::Read, "articles"));
    /// ```
    pub fn with<I, S>(mut self, category: Category, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.slot_mut(category) = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    /// The scope sequence for a category, if the category is present.
    #[inline]
    pub fn scopes(&self, category: Category) -> Option<&[String]> {
        self.slot(category).as_deref()
    }

    /// Literal membership test: is `scope` exactly present under `category`?
    ///
    /// No wildcard expansion happens here; a granted `"*"` only matches a
    /// queried `"*"`.
    pub fn contains(&self, category: Category, scope: &str) -> bool {
        self.scopes(category).is_some_and(|s| s.iter().any(|held| held == scope))
    }

    /// True when no category is present at all.
    ///
    /// A category present with an empty sequence still counts as present.
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.slot(*c).is_none())
    }

    /// Categories present in this record, in canonical order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.slot(*c).is_some())
    }

    #[inline]
    fn slot(&self, category: Category) -> &Option<Vec<String>> {
        match category {
            Category::Additional => &self.additional,
            Category::Create => &self.create,
            Category::Read => &self.read,
            Category::Update => &self.update,
            Category::Delete => &self.delete,
        }
    }

    #[inline]
    fn slot_mut(&mut self, category: Category) -> &mut Option<Vec<String>> {
        match category {
            Category::Additional => &mut self.additional,
            Category::Create => &mut self.create,
            Category::Read => &mut self.read,
            Category::Update => &mut self.update,
            Category::Delete => &mut self.delete,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
