//! Session gate - resolves the current user for each request.
//!
//! Handlers never look at cookies themselves. They ask for a
//! [`RequestContext`] when a visitor may be anonymous, or a [`CurrentUser`]
//! when the route requires a login; the latter turns anonymous requests
//! into a redirect to `/login` before the handler runs.

use super::{
    AppState,
    flash::{FLASH_COOKIE, Notice},
    outcome::Redirect,
};
use crate::{core::session, entities::user, errors::Error};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{HeaderMap, header::COOKIE, request::Parts},
    response::{IntoResponse, Response},
};
use chrono::{TimeDelta, Utc};
use cookie::{Cookie, SameSite, time::Duration as CookieDuration};

/// Name of the cookie holding the session token.
pub const SESSION_COOKIE: &str = "session";

/// Notice shown when an anonymous visitor hits a protected page.
pub const LOGIN_REQUIRED: &str = "Please log in to access this page.";

/// Request-scoped identity and pending notice; never rejects.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub user: Option<user::Model>,
    pub session_token: Option<String>,
    pub flash: Option<Notice>,
}

impl RequestContext {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session_token = read_cookie(&parts.headers, SESSION_COOKIE);
        let user = match &session_token {
            Some(token) => session::get_user_for_token(&state.db, token, Utc::now()).await?,
            None => None,
        };
        let flash = read_cookie(&parts.headers, FLASH_COOKIE)
            .and_then(|value| Notice::from_cookie_value(&value));

        Ok(Self {
            user,
            session_token,
            flash,
        })
    }
}

/// The logged-in user; extracting it from an anonymous request redirects to `/login`.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: user::Model,
    pub flash: Option<Notice>,
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let context = RequestContext::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        match context.user {
            Some(user) => Ok(Self {
                user,
                flash: context.flash,
            }),
            None => {
                tracing::debug!("Anonymous request to {} redirected to login", parts.uri.path());
                Err(Redirect::to("/login")
                    .notice(Notice::info(LOGIN_REQUIRED))
                    .into_response())
            }
        }
    }
}

/// `Set-Cookie` value for a new session.
///
/// `max_age` of `None` makes a browser-session cookie that disappears when
/// the browser closes; "Remember Me" logins pass their lifetime.
#[must_use]
pub fn session_cookie(token: &str, max_age: Option<TimeDelta>, secure: bool) -> String {
    let mut builder = Cookie::build((SESSION_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure);
    if let Some(max_age) = max_age {
        builder = builder.max_age(CookieDuration::seconds(max_age.num_seconds()));
    }
    builder.build().to_string()
}

/// `Set-Cookie` value that removes the session cookie.
#[must_use]
pub fn clear_session_cookie() -> String {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(CookieDuration::ZERO)
        .build()
        .to_string()
}

/// Finds a cookie by name across all `Cookie` headers, percent-decoding its value.
pub(crate) fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|part| Cookie::parse_encoded(part.trim().to_string()).ok())
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}
