//! In-memory tables
//!
//! Holds the four tables (users, links, tags, link→tag association) and the
//! three identifier counters. Nothing in here locks: `Store` takes the lock
//! once and passes `&Tables` / `&mut Tables` down, so multi-step operations
//! compose inside a single critical section.
//!
//! ## Tables
//!
//! - `users` - User records keyed by id
//! - `links` - Link records keyed by id (tags not populated)
//! - `tags` - Global tag names keyed by id
//! - `link_tags` - Ordered tag ids per link, no duplicates

use std::collections::{BTreeMap, HashMap};

use crate::models::{Link, LinkId, Tag, TagId, User, UserId};

#[derive(Debug)]
pub(crate) struct Tables {
    users: BTreeMap<UserId, User>,
    links: BTreeMap<LinkId, Link>,
    tags: BTreeMap<TagId, Tag>,
    link_tags: HashMap<LinkId, Vec<TagId>>,
    next_user_id: UserId,
    next_link_id: LinkId,
    next_tag_id: TagId,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            links: BTreeMap::new(),
            tags: BTreeMap::new(),
            link_tags: HashMap::new(),
            next_user_id: 1,
            next_link_id: 1,
            next_tag_id: 1,
        }
    }
}

impl Tables {
    // ==================== Row creation ====================

    /// Insert a user with the next id. No uniqueness check.
    pub(crate) fn create_user(&mut self, username: &str, password_hash: &str, email: &str) -> User {
        let user = User {
            id: self.next_user_id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            email: email.to_string(),
        };
        self.next_user_id += 1;
        self.users.insert(user.id, user.clone());
        user
    }

    /// Insert a tag with the next id, even if the name already exists
    pub(crate) fn create_tag(&mut self, name: &str) -> Tag {
        let tag = Tag::new(self.next_tag_id, name);
        self.next_tag_id += 1;
        self.tags.insert(tag.id, tag.clone());
        tag
    }

    /// Insert a link with the next id, stamped with the current time
    pub(crate) fn create_link(
        &mut self,
        url: &str,
        title: &str,
        description: &str,
        owner: UserId,
    ) -> Link {
        let link = Link::new(self.next_link_id, url, title, description, owner);
        self.next_link_id += 1;
        self.links.insert(link.id, link.clone());
        link
    }

    // ==================== Lookups ====================

    pub(crate) fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub(crate) fn user_by_name(&self, username: &str) -> Option<&User> {
        self.users.values().find(|u| u.username == username)
    }

    pub(crate) fn link_row(&self, id: LinkId) -> Option<&Link> {
        self.links.get(&id)
    }

    pub(crate) fn link_row_mut(&mut self, id: LinkId) -> Option<&mut Link> {
        self.links.get_mut(&id)
    }

    /// All link rows in ascending id order
    pub(crate) fn link_rows(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    pub(crate) fn tag_by_name(&self, name: &str) -> Option<&Tag> {
        self.tags.values().find(|t| t.name == name)
    }

    /// Tag names for a link, in association order
    pub(crate) fn tag_names(&self, link_id: LinkId) -> Vec<String> {
        self.link_tags
            .get(&link_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.tags.get(id))
                    .map(|t| t.name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Clone a link row and populate its tags
    pub(crate) fn hydrate(&self, link: &Link) -> Link {
        let mut link = link.clone();
        link.tags = self.tag_names(link.id);
        link
    }

    /// Usage count for every tag, including unused ones
    pub(crate) fn tag_usage(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<TagId, usize> = HashMap::new();
        for ids in self.link_tags.values() {
            for id in ids {
                *counts.entry(*id).or_default() += 1;
            }
        }
        self.tags
            .values()
            .map(|t| (t.name.clone(), counts.get(&t.id).copied().unwrap_or(0)))
            .collect()
    }

    // ==================== Association ====================

    /// Append `tag_id` to the link's list unless already present
    ///
    /// Returns true when the list changed.
    pub(crate) fn associate(&mut self, link_id: LinkId, tag_id: TagId) -> bool {
        let ids = self.link_tags.entry(link_id).or_default();
        if ids.contains(&tag_id) {
            return false;
        }
        ids.push(tag_id);
        true
    }

    /// Find the tag by exact name (creating it if absent) and associate it
    pub(crate) fn attach_by_name(&mut self, link_id: LinkId, name: &str) -> bool {
        let tag_id = match self.tag_by_name(name) {
            Some(tag) => tag.id,
            None => self.create_tag(name).id,
        };
        self.associate(link_id, tag_id)
    }

    pub(crate) fn clear_tags(&mut self, link_id: LinkId) {
        self.link_tags.remove(&link_id);
    }

    // ==================== Deletion ====================

    /// Remove a link row and its association list
    pub(crate) fn remove_link(&mut self, id: LinkId) -> Option<Link> {
        let removed = self.links.remove(&id);
        self.link_tags.remove(&id);
        removed
    }

    // ==================== Stats ====================

    pub(crate) fn user_count(&self) -> usize {
        self.users.len()
    }

    pub(crate) fn link_count(&self) -> usize {
        self.links.len()
    }

    pub(crate) fn tag_count(&self) -> usize {
        self.tags.len()
    }
}
