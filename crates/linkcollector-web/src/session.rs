//! Cookie-backed sessions
//!
//! The session is a signed cookie carrying the logged-in user's id and
//! username. Tampered or unsigned cookies are ignored.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use serde::{Deserialize, Serialize};

use linkcollector_core::{User, UserId};

use crate::error::AppError;

pub const SESSION_COOKIE: &str = "linkcollector";

/// The user carried by a valid session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: UserId,
    pub username: String,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
        }
    }
}

impl SessionUser {
    /// Read the session from a request's cookies, if present and valid
    pub fn from_jar(jar: &SignedCookieJar) -> Option<Self> {
        jar.get(SESSION_COOKIE)
            .and_then(|c| serde_json::from_str(c.value()).ok())
    }

    fn to_cookie(&self) -> Result<Cookie<'static>, AppError> {
        let value = serde_json::to_string(self)?;
        Ok(Cookie::build((SESSION_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build())
    }
}

/// Store `user` in the session cookie
pub fn start(jar: SignedCookieJar, user: &User) -> Result<SignedCookieJar, AppError> {
    Ok(jar.add(SessionUser::from(user).to_cookie()?))
}

/// Drop the session cookie
pub fn clear(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}

/// Reject requests without a session by redirecting to the login page
///
/// On success the `SessionUser` is inserted into the request extensions.
pub async fn require_session(jar: SignedCookieJar, mut req: Request, next: Next) -> Response {
    match SessionUser::from_jar(&jar) {
        Some(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        None => Redirect::to("/login").into_response(),
    }
}
