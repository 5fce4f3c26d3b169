//! Data models for LinkCollector
//!
//! Defines the core data structures: User, Link, and Tag.
//! Identifiers are sequential per table, starting at 1.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a user row
pub type UserId = i64;
/// Identifier of a link row
pub type LinkId = i64;
/// Identifier of a tag row
pub type TagId = i64;

/// A registered account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Login name (unique, case-sensitive)
    pub username: String,
    /// bcrypt hash of the password
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Contact address
    pub email: String,
}

/// A saved link with metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Link {
    /// Unique identifier
    pub id: LinkId,
    /// The URL
    pub url: String,
    /// Display title
    pub title: String,
    /// Free-form description (may be empty)
    pub description: String,
    /// Owning user
    pub user_id: UserId,
    /// When this link was created
    pub created_at: DateTime<Utc>,
    /// Tag names, resolved from the association table on read
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Link {
    /// Create a link row with no tags attached
    pub fn new(
        id: LinkId,
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        user_id: UserId,
    ) -> Self {
        Self {
            id,
            url: url.into(),
            title: title.into(),
            description: description.into(),
            user_id,
            created_at: Utc::now(),
            tags: Vec::new(),
        }
    }

    /// Whether `user_id` owns this link
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// Case-insensitive substring match on title, URL or description
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn fields_match(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.url.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// A global tag, shared by all users
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
}

impl Tag {
    pub fn new(id: TagId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Split a comma-separated tag list into trimmed, non-blank names
///
/// Order is preserved and duplicates are kept; attaching collapses them.
pub fn parse_tag_list(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
