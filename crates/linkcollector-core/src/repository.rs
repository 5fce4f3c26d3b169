//! Repository abstraction
//!
//! Request handlers depend on this trait rather than on `Store` directly,
//! so the in-memory tables can be swapped for another backend.

use crate::error::StoreResult;
use crate::models::{Link, LinkId, User, UserId};
use crate::store::Store;

/// Query and mutation operations over users, links and tags
pub trait Repository: Send + Sync {
    // Queries
    fn find_user_by_username(&self, username: &str) -> StoreResult<User>;
    fn find_user_by_id(&self, id: UserId) -> StoreResult<User>;
    fn list_links_by_owner(&self, owner: UserId) -> Vec<Link>;
    fn list_public_links(&self, limit: usize) -> Vec<Link>;
    fn list_recent_by_owner(&self, owner: UserId, limit: usize) -> Vec<Link>;
    fn get_link_by_id(&self, id: LinkId) -> StoreResult<Link>;
    fn list_tags_for_link(&self, id: LinkId) -> Vec<String>;
    fn search_by_owner(&self, owner: UserId, query: &str) -> Vec<Link>;
    fn list_tags_with_counts(&self) -> Vec<(String, usize)>;

    // Mutations
    fn register_user(&self, username: &str, password: &str, email: &str) -> StoreResult<User>;
    fn authenticate(&self, username: &str, password: &str) -> StoreResult<User>;
    fn add_link(&self, url: &str, title: &str, description: &str, owner: UserId)
        -> StoreResult<Link>;
    fn add_link_with_tags(
        &self,
        url: &str,
        title: &str,
        description: &str,
        owner: UserId,
        tags_csv: &str,
    ) -> StoreResult<Link>;
    fn attach_tag_by_name(&self, link_id: LinkId, tag_name: &str) -> StoreResult<()>;
    fn replace_tags(&self, link_id: LinkId, tags_csv: &str) -> StoreResult<()>;
    fn update_link(&self, id: LinkId, url: &str, title: &str, description: &str)
        -> StoreResult<()>;
    fn update_link_with_tags(
        &self,
        id: LinkId,
        url: &str,
        title: &str,
        description: &str,
        tags_csv: &str,
    ) -> StoreResult<()>;
    fn delete_link(&self, id: LinkId) -> StoreResult<()>;
    fn authorize_owner(&self, link_id: LinkId, user_id: UserId) -> StoreResult<Link>;
}

impl Repository for Store {
    fn find_user_by_username(&self, username: &str) -> StoreResult<User> {
        Store::find_user_by_username(self, username)
    }

    fn find_user_by_id(&self, id: UserId) -> StoreResult<User> {
        Store::find_user_by_id(self, id)
    }

    fn list_links_by_owner(&self, owner: UserId) -> Vec<Link> {
        Store::list_links_by_owner(self, owner)
    }

    fn list_public_links(&self, limit: usize) -> Vec<Link> {
        Store::list_public_links(self, limit)
    }

    fn list_recent_by_owner(&self, owner: UserId, limit: usize) -> Vec<Link> {
        Store::list_recent_by_owner(self, owner, limit)
    }

    fn get_link_by_id(&self, id: LinkId) -> StoreResult<Link> {
        Store::get_link_by_id(self, id)
    }

    fn list_tags_for_link(&self, id: LinkId) -> Vec<String> {
        Store::list_tags_for_link(self, id)
    }

    fn search_by_owner(&self, owner: UserId, query: &str) -> Vec<Link> {
        Store::search_by_owner(self, owner, query)
    }

    fn list_tags_with_counts(&self) -> Vec<(String, usize)> {
        Store::list_tags_with_counts(self)
    }

    fn register_user(&self, username: &str, password: &str, email: &str) -> StoreResult<User> {
        Store::register_user(self, username, password, email)
    }

    fn authenticate(&self, username: &str, password: &str) -> StoreResult<User> {
        Store::authenticate(self, username, password)
    }

    fn add_link(
        &self,
        url: &str,
        title: &str,
        description: &str,
        owner: UserId,
    ) -> StoreResult<Link> {
        Store::add_link(self, url, title, description, owner)
    }

    fn add_link_with_tags(
        &self,
        url: &str,
        title: &str,
        description: &str,
        owner: UserId,
        tags_csv: &str,
    ) -> StoreResult<Link> {
        Store::add_link_with_tags(self, url, title, description, owner, tags_csv)
    }

    fn attach_tag_by_name(&self, link_id: LinkId, tag_name: &str) -> StoreResult<()> {
        Store::attach_tag_by_name(self, link_id, tag_name)
    }

    fn replace_tags(&self, link_id: LinkId, tags_csv: &str) -> StoreResult<()> {
        Store::replace_tags(self, link_id, tags_csv)
    }

    fn update_link(
        &self,
        id: LinkId,
        url: &str,
        title: &str,
        description: &str,
    ) -> StoreResult<()> {
        Store::update_link(self, id, url, title, description)
    }

    fn update_link_with_tags(
        &self,
        id: LinkId,
        url: &str,
        title: &str,
        description: &str,
        tags_csv: &str,
    ) -> StoreResult<()> {
        Store::update_link_with_tags(self, id, url, title, description, tags_csv)
    }

    fn delete_link(&self, id: LinkId) -> StoreResult<()> {
        Store::delete_link(self, id)
    }

    fn authorize_owner(&self, link_id: LinkId, user_id: UserId) -> StoreResult<Link> {
        Store::authorize_owner(self, link_id, user_id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::password::MIN_COST;

    #[test]
    fn test_store_behind_trait_object() {
        let repo: Arc<dyn Repository> = Arc::new(Store::with_password_cost(MIN_COST));

        let user = repo.register_user("demo", "demo", "demo@example.com").unwrap();
        let link = repo
            .add_link_with_tags("https://github.com", "GitHub", "", user.id, "git")
            .unwrap();

        assert_eq!(repo.get_link_by_id(link.id).unwrap().tags, vec!["git"]);
        assert_eq!(repo.list_links_by_owner(user.id).len(), 1);
        assert_eq!(repo.authenticate("demo", "demo").unwrap().id, user.id);
    }
}
