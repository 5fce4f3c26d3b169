//! In-memory store
//!
//! The `Store` owns every table behind one readers-writer lock:
//! - reads (see `query`) take shared access
//! - writes (see `mutation`) take exclusive access
//!
//! The lock is held for exactly one store call. Operations that need several
//! steps (register's check-then-insert, replacing a link's tags) run inside
//! one exclusive acquisition, so no other request can observe the middle.
//!
//! ## Usage
//!
//! ```ignore
//! let store = Store::new();
//!
//! let user = store.register_user("demo", "secret", "demo@example.com")?;
//! let link = store.add_link("https://example.com", "Example", "", user.id)?;
//! store.attach_tag_by_name(link.id, "web")?;
//!
//! let links = store.list_links_by_owner(user.id);
//! ```

mod mutation;
mod query;
mod tables;

use parking_lot::RwLock;

use crate::config::Config;
use crate::models::{Link, Tag, User, UserId};
use crate::password::DEFAULT_COST;

use tables::Tables;

/// Number of links shown on the home page
pub const HOME_PAGE_LIMIT: usize = 5;

/// Thread-safe in-memory store for users, links and tags
#[derive(Debug)]
pub struct Store {
    tables: RwLock<Tables>,
    /// bcrypt cost used when registering users
    password_cost: u32,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_password_cost(DEFAULT_COST)
    }

    /// Create an empty store hashing passwords at `cost`
    pub fn with_password_cost(cost: u32) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            password_cost: cost,
        }
    }

    /// Create an empty store using the configured bcrypt cost
    pub fn from_config(config: &Config) -> Self {
        Self::with_password_cost(config.password_cost)
    }

    // ==================== Entity creation ====================

    /// Insert a user row with the next id
    ///
    /// Performs no uniqueness check; use `register_user` for that.
    pub fn create_user(&self, username: &str, password_hash: &str, email: &str) -> User {
        self.tables.write().create_user(username, password_hash, email)
    }

    /// Insert a tag row with the next id
    ///
    /// Calling twice with the same name creates two distinct tags.
    pub fn create_tag(&self, name: &str) -> Tag {
        self.tables.write().create_tag(name)
    }

    /// Insert a link row with the next id and the current timestamp
    pub fn create_link(&self, url: &str, title: &str, description: &str, owner: UserId) -> Link {
        self.tables.write().create_link(url, title, description, owner)
    }

    // ==================== Stats ====================

    pub fn user_count(&self) -> usize {
        self.tables.read().user_count()
    }

    pub fn link_count(&self) -> usize {
        self.tables.read().link_count()
    }

    pub fn tag_count(&self) -> usize {
        self.tables.read().tag_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = Store::new();
        assert_eq!(store.user_count(), 0);
        assert_eq!(store.link_count(), 0);
        assert_eq!(store.tag_count(), 0);
    }

    #[test]
    fn test_create_entities() {
        let store = Store::new();
        let user = store.create_user("demo", "hash", "demo@example.com");
        let tag = store.create_tag("go");
        let link = store.create_link("https://go.dev", "Go", "", user.id);

        assert_eq!(user.id, 1);
        assert_eq!(tag.id, 1);
        assert_eq!(link.id, 1);
        assert_eq!(link.user_id, user.id);
        assert_eq!(store.user_count(), 1);
        assert_eq!(store.link_count(), 1);
        assert_eq!(store.tag_count(), 1);
    }

    #[test]
    fn test_create_tag_twice_makes_two_tags() {
        let store = Store::new();
        let a = store.create_tag("go");
        let b = store.create_tag("go");
        assert_ne!(a.id, b.id);
        assert_eq!(store.tag_count(), 2);
    }

    #[test]
    fn test_from_config_uses_password_cost() {
        let config = Config {
            password_cost: crate::password::MIN_COST,
            ..Config::default()
        };
        let store = Store::from_config(&config);
        assert_eq!(store.password_cost, crate::password::MIN_COST);
    }
}
