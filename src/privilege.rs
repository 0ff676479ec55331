//! Privilege categories and the `"category:scope"` reporting unit.
//!
//! A privilege names one operation class (category) on one resource
//! (scope). The category set is closed: exactly five classes exist, and
//! nothing else is recognized anywhere in the crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The five fixed operation classes.
///
/// `ALL` lists them in canonical order; comparator output follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Additional,
    Create,
    Read,
    Update,
    Delete,
}

impl Category {
    /// Canonical category order
    pub const ALL: [Category; 5] = [
        Category::Additional,
        Category::Create,
        Category::Read,
        Category::Update,
        Category::Delete,
    ];

    /// The lowercase wire name of this category
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Additional => "additional",
            Category::Create => "create",
            Category::Read => "read",
            Category::Update => "update",
            Category::Delete => "delete",
        }
    }

    /// Look up a category by its wire name
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.iter().find(|c| c.as_str() == name).copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for [`PrivilegeString`] parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePrivilegeError {
    pub message: String,
}

impl fmt::Display for ParsePrivilegeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParsePrivilegeError {}

/// One specific permission in `"category:scope"` form.
///
/// This is the unit returned to callers describing a single missing
/// permission, and the implicit format of entries inside a record's scope
/// sequences.
///
/// # Example
/// ```
/// use privgate::{Category, PrivilegeString};
///
/// let p = PrivilegeString::new(Category::Read, "articles");
/// assert_eq!(p.to_string(), "read:articles");
/// assert_eq!(p.category(), Category::Read);
/// assert_eq!(p.scope(), "articles");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrivilegeString {
    category: Category,
    scope: String,
}

impl PrivilegeString {
    /// Create from category and scope.
    pub fn new(category: Category, scope: impl Into<String>) -> Self {
        PrivilegeString { category, scope: scope.into() }
    }

    /// Parse from `"category:scope"` form.
    ///
    /// The first colon separates category from scope, so scopes may
    /// themselves contain colons. The category must be one of the five
    /// fixed classes.
    pub fn parse(s: &str) -> Result<Self, ParsePrivilegeError> {
        let (category, scope) = s.split_once(':').ok_or_else(|| ParsePrivilegeError {
            message: format!("invalid privilege {:?}: must be 'category:scope' format", s),
        })?;
        let category = Category::from_name(category).ok_or_else(|| ParsePrivilegeError {
            message: format!("unknown privilege category {:?}", category),
        })?;
        Ok(PrivilegeString::new(category, scope))
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub fn scope(&self) -> &str {
        &self.scope
    }
}

impl fmt::Display for PrivilegeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.scope)
    }
}

impl FromStr for PrivilegeString {
    type Err = ParsePrivilegeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrivilegeString::parse(s)
    }
}

impl TryFrom<&str> for PrivilegeString {
    type Error = ParsePrivilegeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        PrivilegeString::parse(s)
    }
}

impl TryFrom<String> for PrivilegeString {
    type Error = ParsePrivilegeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        PrivilegeString::parse(&s)
    }
}

impl Serialize for PrivilegeString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PrivilegeString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PrivilegeString::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
