//! Write operations
//!
//! Each public method takes the exclusive lock at most once. Password
//! hashing and verification happen outside the lock.

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::models::{parse_tag_list, Link, LinkId, User, UserId};
use crate::password::{hash_password, verify_password};

use super::Store;

fn require(value: &str, message: &str) -> StoreResult<()> {
    if value.trim().is_empty() {
        return Err(StoreError::InvalidInput(message.to_string()));
    }
    Ok(())
}

fn require_link_fields(url: &str, title: &str) -> StoreResult<()> {
    if url.is_empty() || title.is_empty() {
        return Err(StoreError::InvalidInput(
            "URL and title are required".to_string(),
        ));
    }
    Ok(())
}

impl Store {
    // ==================== Users ====================

    /// Register a new account
    ///
    /// The uniqueness check and the insert share one critical section, so two
    /// concurrent registrations of the same name cannot both succeed.
    /// Usernames are compared case-sensitively.
    pub fn register_user(&self, username: &str, password: &str, email: &str) -> StoreResult<User> {
        if username.is_empty() || password.is_empty() || email.is_empty() {
            return Err(StoreError::InvalidInput("All fields are required".to_string()));
        }
        let password_hash = hash_password(password, self.password_cost)?;

        let mut tables = self.tables.write();
        if tables.user_by_name(username).is_some() {
            return Err(StoreError::UsernameTaken(username.to_string()));
        }
        let user = tables.create_user(username, &password_hash, email);
        debug!(user_id = user.id, username, "registered user");
        Ok(user)
    }

    /// Check a username/password pair
    ///
    /// An unknown username and a wrong password both yield
    /// `InvalidCredentials`.
    pub fn authenticate(&self, username: &str, password: &str) -> StoreResult<User> {
        let user = self
            .find_user_by_username(username)
            .map_err(|_| StoreError::InvalidCredentials)?;
        if verify_password(password, &user.password_hash)? {
            Ok(user)
        } else {
            Err(StoreError::InvalidCredentials)
        }
    }

    // ==================== Links ====================

    /// Save a new link for `owner`
    pub fn add_link(
        &self,
        url: &str,
        title: &str,
        description: &str,
        owner: UserId,
    ) -> StoreResult<Link> {
        require_link_fields(url, title)?;
        let link = self.tables.write().create_link(url, title, description, owner);
        debug!(link_id = link.id, owner, "added link");
        Ok(link)
    }

    /// Save a new link and attach a comma-separated tag list in one step
    pub fn add_link_with_tags(
        &self,
        url: &str,
        title: &str,
        description: &str,
        owner: UserId,
        tags_csv: &str,
    ) -> StoreResult<Link> {
        require_link_fields(url, title)?;
        let mut tables = self.tables.write();
        let link = tables.create_link(url, title, description, owner);
        for name in parse_tag_list(tags_csv) {
            tables.attach_by_name(link.id, &name);
        }
        debug!(link_id = link.id, owner, "added link with tags");
        Ok(tables.hydrate(&link))
    }

    /// Overwrite a link's URL, title and description
    ///
    /// Ownership is not checked here; see `authorize_owner`.
    pub fn update_link(
        &self,
        id: LinkId,
        url: &str,
        title: &str,
        description: &str,
    ) -> StoreResult<()> {
        require_link_fields(url, title)?;
        let mut tables = self.tables.write();
        let link = tables
            .link_row_mut(id)
            .ok_or_else(|| StoreError::link_not_found(id))?;
        link.url = url.to_string();
        link.title = title.to_string();
        link.description = description.to_string();
        debug!(link_id = id, "updated link");
        Ok(())
    }

    /// Overwrite a link's fields and replace its tags in one step
    ///
    /// Readers see either the old link with its old tags or the new link
    /// with its new tags. Ownership is not checked here.
    pub fn update_link_with_tags(
        &self,
        id: LinkId,
        url: &str,
        title: &str,
        description: &str,
        tags_csv: &str,
    ) -> StoreResult<()> {
        require_link_fields(url, title)?;
        let mut tables = self.tables.write();
        let link = tables
            .link_row_mut(id)
            .ok_or_else(|| StoreError::link_not_found(id))?;
        link.url = url.to_string();
        link.title = title.to_string();
        link.description = description.to_string();
        tables.clear_tags(id);
        for name in parse_tag_list(tags_csv) {
            tables.attach_by_name(id, &name);
        }
        debug!(link_id = id, "updated link and tags");
        Ok(())
    }

    /// Remove a link and all of its tag associations
    ///
    /// Ownership is not checked here; see `authorize_owner`.
    pub fn delete_link(&self, id: LinkId) -> StoreResult<()> {
        self.tables
            .write()
            .remove_link(id)
            .ok_or_else(|| StoreError::link_not_found(id))?;
        debug!(link_id = id, "deleted link");
        Ok(())
    }

    /// Return the link if `user_id` owns it
    pub fn authorize_owner(&self, link_id: LinkId, user_id: UserId) -> StoreResult<Link> {
        let link = self.get_link_by_id(link_id)?;
        if !link.is_owned_by(user_id) {
            return Err(StoreError::Forbidden { link_id, user_id });
        }
        Ok(link)
    }

    // ==================== Tags ====================

    /// Attach a tag to a link by exact name
    ///
    /// Reuses an existing tag with that exact name or creates one. Attaching
    /// a name the link already carries is a no-op.
    pub fn attach_tag_by_name(&self, link_id: LinkId, tag_name: &str) -> StoreResult<()> {
        require(tag_name, "Tag name is required")?;
        let mut tables = self.tables.write();
        if tables.link_row(link_id).is_none() {
            return Err(StoreError::link_not_found(link_id));
        }
        if tables.attach_by_name(link_id, tag_name) {
            debug!(link_id, tag = tag_name, "attached tag");
        }
        Ok(())
    }

    /// Replace all of a link's tags with a comma-separated list
    ///
    /// Names are trimmed, blanks skipped, repeats collapsed, first-seen order
    /// kept. Readers never see the link with an empty intermediate list.
    pub fn replace_tags(&self, link_id: LinkId, tags_csv: &str) -> StoreResult<()> {
        let mut tables = self.tables.write();
        if tables.link_row(link_id).is_none() {
            return Err(StoreError::link_not_found(link_id));
        }
        tables.clear_tags(link_id);
        for name in parse_tag_list(tags_csv) {
            tables.attach_by_name(link_id, &name);
        }
        debug!(link_id, "replaced tags");
        Ok(())
    }
}
