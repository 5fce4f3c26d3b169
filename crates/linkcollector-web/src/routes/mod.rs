use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{session::require_session, state::AppState};

pub mod auth;
pub mod links;
pub mod pages;

pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/dashboard", get(links::dashboard))
        .route("/links/add", post(links::add_link))
        .route("/links/{id}", get(links::view_link))
        .route(
            "/links/{id}/edit",
            get(links::edit_form).post(links::edit_link),
        )
        .route("/links/{id}/delete", post(links::delete_link))
        .route("/search", get(links::search))
        .route("/logout", get(auth::logout))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .route("/", get(pages::home))
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .merge(protected)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
