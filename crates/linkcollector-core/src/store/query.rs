//! Read operations
//!
//! Every method takes the shared lock once and returns owned copies with
//! tag names resolved from the association table.

use std::cmp::Reverse;

use crate::error::{StoreError, StoreResult};
use crate::models::{Link, LinkId, User, UserId};

use super::Store;

/// Newest first; links created in the same instant fall back to id
fn newest_first(links: &mut [Link]) {
    links.sort_by_key(|l| Reverse((l.created_at, l.id)));
}

impl Store {
    /// Look up a user by exact (case-sensitive) username
    pub fn find_user_by_username(&self, username: &str) -> StoreResult<User> {
        self.tables
            .read()
            .user_by_name(username)
            .cloned()
            .ok_or_else(|| StoreError::user_not_found(username))
    }

    /// Look up a user by id
    pub fn find_user_by_id(&self, id: UserId) -> StoreResult<User> {
        self.tables
            .read()
            .user(id)
            .cloned()
            .ok_or_else(|| StoreError::user_not_found(id))
    }

    /// All links owned by `owner`, in ascending id order
    pub fn list_links_by_owner(&self, owner: UserId) -> Vec<Link> {
        let tables = self.tables.read();
        tables
            .link_rows()
            .filter(|l| l.is_owned_by(owner))
            .map(|l| tables.hydrate(l))
            .collect()
    }

    /// Up to `limit` links from every owner, newest first
    pub fn list_public_links(&self, limit: usize) -> Vec<Link> {
        let tables = self.tables.read();
        let mut links: Vec<Link> = tables.link_rows().map(|l| tables.hydrate(l)).collect();
        newest_first(&mut links);
        links.truncate(limit);
        links
    }

    /// The `limit` most recently created links owned by `owner`
    pub fn list_recent_by_owner(&self, owner: UserId, limit: usize) -> Vec<Link> {
        let mut links = self.list_links_by_owner(owner);
        newest_first(&mut links);
        links.truncate(limit);
        links
    }

    /// Get a link by id, tags included
    pub fn get_link_by_id(&self, id: LinkId) -> StoreResult<Link> {
        let tables = self.tables.read();
        tables
            .link_row(id)
            .map(|l| tables.hydrate(l))
            .ok_or_else(|| StoreError::link_not_found(id))
    }

    /// Tag names attached to a link; empty if the link has none or is gone
    pub fn list_tags_for_link(&self, id: LinkId) -> Vec<String> {
        self.tables.read().tag_names(id)
    }

    /// Search an owner's links
    ///
    /// Case-insensitive substring match on title, URL, description, or any
    /// attached tag name. Each result lists its tags once, in association
    /// order. A query with no matches yields an empty vec.
    pub fn search_by_owner(&self, owner: UserId, query: &str) -> Vec<Link> {
        let needle = query.to_lowercase();
        let tables = self.tables.read();
        tables
            .link_rows()
            .filter(|l| l.is_owned_by(owner))
            .map(|l| tables.hydrate(l))
            .filter(|l| {
                l.fields_match(&needle) || l.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Every tag with the number of links using it
    ///
    /// Sorted by count (descending), then name.
    pub fn list_tags_with_counts(&self) -> Vec<(String, usize)> {
        let mut usage = self.tables.read().tag_usage();
        usage.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        usage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::MIN_COST;

    fn test_store() -> Store {
        Store::with_password_cost(MIN_COST)
    }

    #[test]
    fn test_find_user_by_username_exact_match() {
        let store = test_store();
        store.create_user("demo", "h", "demo@example.com");

        assert_eq!(store.find_user_by_username("demo").unwrap().id, 1);
        assert!(store.find_user_by_username("Demo").unwrap_err().is_not_found());
        assert!(store.find_user_by_username("nobody").is_err());
    }

    #[test]
    fn test_find_user_by_id() {
        let store = test_store();
        let user = store.create_user("demo", "h", "demo@example.com");
        assert_eq!(store.find_user_by_id(user.id).unwrap().username, "demo");
        assert!(store.find_user_by_id(99).unwrap_err().is_not_found());
    }

    #[test]
    fn test_get_link_right_after_creation() {
        let store = test_store();
        let user = store.create_user("demo", "h", "demo@example.com");
        let link = store.create_link("https://go.dev", "Go", "The Go site", user.id);

        let fetched = store.get_link_by_id(link.id).unwrap();
        assert_eq!(fetched.user_id, user.id);
        assert_eq!(fetched.url, "https://go.dev");
        assert_eq!(fetched.title, "Go");
        assert_eq!(fetched.description, "The Go site");
        assert!(fetched.tags.is_empty());
    }

    #[test]
    fn test_get_missing_link() {
        let store = test_store();
        let err = store.get_link_by_id(7).unwrap_err();
        assert!(err.is_not_found());
        assert!(store.list_tags_for_link(7).is_empty());
    }

    #[test]
    fn test_list_links_by_owner_filters_and_resolves_tags() {
        let store = test_store();
        let alice = store.create_user("alice", "h", "a@example.com");
        let bob = store.create_user("bob", "h", "b@example.com");
        let a1 = store.create_link("https://a1", "A1", "", alice.id);
        store.create_link("https://b1", "B1", "", bob.id);
        let a2 = store.create_link("https://a2", "A2", "", alice.id);
        store.attach_tag_by_name(a2.id, "rust").unwrap();

        let links = store.list_links_by_owner(alice.id);
        let ids: Vec<_> = links.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![a1.id, a2.id]);
        assert_eq!(links[1].tags, vec!["rust"]);
        assert!(store.list_links_by_owner(99).is_empty());
    }

    #[test]
    fn test_list_recent_by_owner_is_newest_first() {
        let store = test_store();
        let user = store.create_user("demo", "h", "demo@example.com");
        for i in 0..7 {
            store.create_link(&format!("https://{i}.example"), &format!("L{i}"), "", user.id);
        }

        let recent = store.list_recent_by_owner(user.id, 5);
        let ids: Vec<_> = recent.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_list_recent_by_owner_under_limit() {
        let store = test_store();
        let user = store.create_user("demo", "h", "demo@example.com");
        store.create_link("https://one", "One", "", user.id);
        assert_eq!(store.list_recent_by_owner(user.id, 5).len(), 1);
        assert!(store.list_recent_by_owner(user.id, 0).is_empty());
    }

    #[test]
    fn test_list_public_links_spans_owners() {
        let store = test_store();
        let alice = store.create_user("alice", "h", "a@example.com");
        let bob = store.create_user("bob", "h", "b@example.com");
        store.create_link("https://a", "A", "", alice.id);
        store.create_link("https://b", "B", "", bob.id);
        store.create_link("https://c", "C", "", bob.id);

        let public = store.list_public_links(2);
        assert_eq!(public.len(), 2);
        assert_eq!(public[0].id, 3);
        assert_eq!(store.list_public_links(10).len(), 3);
    }

    #[test]
    fn test_search_by_title_substring() {
        let store = test_store();
        let user = store.create_user("demo", "h", "demo@example.com");
        store.create_link("https://github.com", "GitHub", "Where the world builds software", user.id);
        store.create_link("https://golang.org", "Go", "The Go site", user.id);

        let results = store.search_by_owner(user.id, "git");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "GitHub");

        assert!(store.search_by_owner(user.id, "xyz").is_empty());
    }

    #[test]
    fn test_search_matches_tag_names() {
        let store = test_store();
        let user = store.create_user("demo", "h", "demo@example.com");
        let link = store.create_link("https://golang.org", "Go", "", user.id);
        store.attach_tag_by_name(link.id, "Programming").unwrap();

        let results = store.search_by_owner(user.id, "program");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].tags, vec!["Programming"]);
    }

    #[test]
    fn test_search_does_not_duplicate_matching_tags() {
        let store = test_store();
        let user = store.create_user("demo", "h", "demo@example.com");
        let link = store.create_link("https://golang.org", "Golang", "", user.id);
        store.attach_tag_by_name(link.id, "golang").unwrap();
        store.attach_tag_by_name(link.id, "web").unwrap();

        // matches both the title and a tag name
        let results = store.search_by_owner(user.id, "golang");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].tags, vec!["golang", "web"]);
    }

    #[test]
    fn test_search_only_covers_owner() {
        let store = test_store();
        let alice = store.create_user("alice", "h", "a@example.com");
        let bob = store.create_user("bob", "h", "b@example.com");
        store.create_link("https://github.com", "GitHub", "", bob.id);

        assert!(store.search_by_owner(alice.id, "git").is_empty());
        assert_eq!(store.search_by_owner(bob.id, "GIT").len(), 1);
    }

    #[test]
    fn test_list_tags_with_counts() {
        let store = test_store();
        let user = store.create_user("demo", "h", "demo@example.com");
        let a = store.create_link("https://a", "A", "", user.id);
        let b = store.create_link("https://b", "B", "", user.id);
        store.attach_tag_by_name(a.id, "shared").unwrap();
        store.attach_tag_by_name(b.id, "shared").unwrap();
        store.attach_tag_by_name(b.id, "alone").unwrap();

        let counts = store.list_tags_with_counts();
        assert_eq!(
            counts,
            vec![("shared".to_string(), 2), ("alone".to_string(), 1)]
        );
    }
}
