//! LinkCollector Core Library
//!
//! This crate provides the data layer for LinkCollector, a small personal
//! bookmark manager: users register, save links with tags, browse, search,
//! and edit or delete their own links.
//!
//! # Architecture
//!
//! - **Entity store**: in-memory tables for users, links, tags and the
//!   link→tag association, behind a single readers-writer lock
//! - **Query layer**: lookups, listings and substring search
//! - **Mutation layer**: registration, link edits, tag attachment
//!
//! All state is volatile and lost when the process exits.
//!
//! # Quick Start
//!
//! ```text
//! let store = Store::new();
//!
//! let user = store.register_user("demo", "demo", "demo@example.com")?;
//! let link = store.add_link("https://example.com", "Example", "", user.id)?;
//! store.attach_tag_by_name(link.id, "web")?;
//!
//! let results = store.search_by_owner(user.id, "exam");
//! ```
//!
//! # Modules
//!
//! - `store`: In-memory store (main entry point)
//! - `repository`: Trait over the store operations, for injection
//! - `models`: Data structures for users, links, and tags
//! - `password`: bcrypt hashing
//! - `seed`: Demo data
//! - `config`: Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod password;
pub mod repository;
pub mod seed;
pub mod store;

pub use config::Config;
pub use error::{StoreError, StoreResult};
pub use models::{parse_tag_list, Link, LinkId, Tag, TagId, User, UserId};
pub use repository::Repository;
pub use store::{Store, HOME_PAGE_LIMIT};
