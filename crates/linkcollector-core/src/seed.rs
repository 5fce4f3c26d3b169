//! Demo data
//!
//! Populates an empty store with one user and a couple of tagged links so a
//! fresh server has something to show.

use tracing::info;

use crate::error::StoreResult;
use crate::models::User;
use crate::store::Store;

pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_PASSWORD: &str = "demo";
pub const DEMO_EMAIL: &str = "demo@example.com";

/// Create the demo user, three tags and two links
pub fn seed_demo_data(store: &Store) -> StoreResult<User> {
    let user = store.register_user(DEMO_USERNAME, DEMO_PASSWORD, DEMO_EMAIL)?;

    let go = store.add_link(
        "https://golang.org",
        "Go Programming Language",
        "The official Go website",
        user.id,
    )?;
    let github = store.add_link(
        "https://github.com",
        "GitHub",
        "Where the world builds software",
        user.id,
    )?;

    store.attach_tag_by_name(go.id, "programming")?;
    store.attach_tag_by_name(go.id, "golang")?;
    store.attach_tag_by_name(github.id, "web")?;

    info!(
        users = store.user_count(),
        links = store.link_count(),
        tags = store.tag_count(),
        "In-memory store initialized with sample data"
    );
    Ok(user)
}
