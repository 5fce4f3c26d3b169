use axum::{
    extract::{Extension, Path, Query, State},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use serde::Deserialize;
use tracing::info;

use linkcollector_core::{Link, LinkId, StoreError};

use crate::{
    error::AppError,
    session::SessionUser,
    state::AppState,
    views::{DashboardView, EditLinkView, LinkView, SearchView},
};

#[derive(Debug, Deserialize)]
pub struct LinkForm {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Comma-separated tag names
    #[serde(default)]
    pub tags: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

fn parse_link_id(raw: &str) -> Result<LinkId, AppError> {
    raw.parse()
        .map_err(|_| AppError::InvalidInput("Invalid link ID".to_string()))
}

/// Load the link and make sure the session user owns it
fn owned_link(
    state: &AppState,
    id: LinkId,
    user: &SessionUser,
    action: &str,
) -> Result<Link, AppError> {
    state
        .repo
        .authorize_owner(id, user.user_id)
        .map_err(|e| match e {
            StoreError::Forbidden { .. } => AppError::Forbidden(format!(
                "You don't have permission to {action} this link"
            )),
            StoreError::NotFound { .. } => AppError::NotFound("Link not found".to_string()),
            other => other.into(),
        })
}

pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<SessionUser>,
) -> Json<DashboardView> {
    Json(DashboardView {
        title: "Your Dashboard",
        links: state.repo.list_links_by_owner(user.user_id),
        username: user.username,
    })
}

pub async fn add_link(
    State(state): State<AppState>,
    Extension(user): Extension<SessionUser>,
    Form(form): Form<LinkForm>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.repo.add_link_with_tags(
        &form.url,
        &form.title,
        &form.description,
        user.user_id,
        &form.tags,
    )?;
    info!(link_id = link.id, user_id = user.user_id, "link added");
    Ok(Redirect::to("/dashboard"))
}

pub async fn view_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LinkView>, AppError> {
    let id = parse_link_id(&id)?;
    let mut link = state
        .repo
        .get_link_by_id(id)
        .map_err(|_| AppError::NotFound("Link not found".to_string()))?;
    link.tags = state.repo.list_tags_for_link(id);

    Ok(Json(LinkView {
        title: link.title.clone(),
        link,
    }))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Extension(user): Extension<SessionUser>,
    Path(id): Path<String>,
) -> Result<Json<EditLinkView>, AppError> {
    let id = parse_link_id(&id)?;
    let link = owned_link(&state, id, &user, "edit")?;

    Ok(Json(EditLinkView {
        title: "Edit Link",
        tags: link.tags.join(", "),
        link,
    }))
}

pub async fn edit_link(
    State(state): State<AppState>,
    Extension(user): Extension<SessionUser>,
    Path(id): Path<String>,
    Form(form): Form<LinkForm>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_link_id(&id)?;
    owned_link(&state, id, &user, "edit")?;

    state.repo.update_link_with_tags(
        id,
        &form.url,
        &form.title,
        &form.description,
        &form.tags,
    )?;

    info!(link_id = id, user_id = user.user_id, "link updated");
    Ok(Redirect::to(&format!("/links/{id}")))
}

pub async fn delete_link(
    State(state): State<AppState>,
    Extension(user): Extension<SessionUser>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_link_id(&id)?;
    owned_link(&state, id, &user, "delete")?;

    state.repo.delete_link(id)?;

    info!(link_id = id, user_id = user.user_id, "link deleted");
    Ok(Redirect::to("/dashboard"))
}

pub async fn search(
    State(state): State<AppState>,
    Extension(user): Extension<SessionUser>,
    Query(params): Query<SearchParams>,
) -> Json<SearchView> {
    if params.q.is_empty() {
        return Json(SearchView {
            title: "Search Links",
            query: None,
            links: Vec::new(),
        });
    }

    Json(SearchView {
        title: "Search Results",
        links: state.repo.search_by_owner(user.user_id, &params.q),
        query: Some(params.q),
    })
}
