use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
    Form,
};
use axum_extra::extract::cookie::SignedCookieJar;
use serde::Deserialize;
use tracing::{info, warn};

use crate::{error::AppError, session, state::AppState};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email: String,
}

pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, AppError> {
    let repo = state.repo.clone();
    let username = form.username.clone();
    // bcrypt runs on the blocking pool
    let result =
        tokio::task::spawn_blocking(move || repo.authenticate(&form.username, &form.password))
            .await?;

    let user = result.map_err(|e| {
        warn!(username = %username, "login failed");
        AppError::from(e)
    })?;

    info!(user_id = user.id, "user logged in");
    Ok((session::start(jar, &user)?, Redirect::to("/dashboard")))
}

pub async fn register(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<RegisterForm>,
) -> Result<impl IntoResponse, AppError> {
    let repo = state.repo.clone();
    let user = tokio::task::spawn_blocking(move || {
        repo.register_user(&form.username, &form.password, &form.email)
    })
    .await??;

    info!(user_id = user.id, username = %user.username, "user registered");
    Ok((session::start(jar, &user)?, Redirect::to("/dashboard")))
}

pub async fn logout(jar: SignedCookieJar) -> impl IntoResponse {
    (session::clear(jar), Redirect::to("/"))
}
