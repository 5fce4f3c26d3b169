use axum::{extract::State, Json};
use axum_extra::extract::cookie::SignedCookieJar;

use linkcollector_core::HOME_PAGE_LIMIT;

use crate::{session::SessionUser, state::AppState, views::HomeView};

/// Home page: the visitor's own recent links, or recent links from everyone
pub async fn home(State(state): State<AppState>, jar: SignedCookieJar) -> Json<HomeView> {
    let session = SessionUser::from_jar(&jar);

    let recent_links = match &session {
        Some(user) => state.repo.list_recent_by_owner(user.user_id, HOME_PAGE_LIMIT),
        None => state.repo.list_public_links(HOME_PAGE_LIMIT),
    };

    Json(HomeView {
        title: "LinkCollector - Save and Share Your Links",
        user_id: session.as_ref().map(|u| u.user_id),
        username: session.map(|u| u.username),
        recent_links,
    })
}
