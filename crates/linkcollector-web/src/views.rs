//! View payloads
//!
//! Handlers return these as JSON; page rendering is left to the client.

use serde::Serialize;

use linkcollector_core::{Link, UserId};

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub title: &'static str,
    pub user_id: Option<UserId>,
    pub username: Option<String>,
    pub recent_links: Vec<Link>,
}

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    pub username: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Serialize)]
pub struct LinkView {
    pub title: String,
    pub link: Link,
}

#[derive(Debug, Serialize)]
pub struct EditLinkView {
    pub title: &'static str,
    pub link: Link,
    /// Current tags joined for the edit form
    pub tags: String,
}

#[derive(Debug, Serialize)]
pub struct SearchView {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub links: Vec<Link>,
}
