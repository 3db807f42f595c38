//! What a handler produces: a rendered page or a redirect.
//!
//! Handlers describe the response instead of writing headers, which keeps
//! notice and cookie plumbing in one place.

use super::{flash, flash::Notice, views};
use crate::entities::user;
use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
};

/// A full HTML page.
#[derive(Debug, Clone)]
pub struct Page {
    html: String,
    consumes_flash: bool,
}

impl Page {
    /// Wraps `body` in the site layout, showing the request's pending `flash`
    /// notice. Showing it consumes the flash cookie.
    #[must_use]
    pub fn new(title: &str, user: Option<&user::Model>, flash: Option<&Notice>, body: &str) -> Self {
        Self {
            html: views::layout(title, user, flash, body),
            consumes_flash: flash.is_some(),
        }
    }

    /// Wraps `body` in the site layout with a notice of the handler's own.
    /// Any pending flash cookie is left for the next page.
    #[must_use]
    pub fn with_notice(title: &str, user: Option<&user::Model>, notice: &Notice, body: &str) -> Self {
        Self {
            html: views::layout(title, user, Some(notice), body),
            consumes_flash: false,
        }
    }

    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        let mut response = Html(self.html).into_response();
        if self.consumes_flash {
            append_cookie(&mut response, &flash::clear_cookie());
        }
        response
    }
}

/// A `303 See Other` to another page, optionally carrying a notice and cookies.
#[derive(Debug, Clone)]
pub struct Redirect {
    to: &'static str,
    notice: Option<Notice>,
    cookies: Vec<String>,
}

impl Redirect {
    #[must_use]
    pub const fn to(to: &'static str) -> Self {
        Self {
            to,
            notice: None,
            cookies: Vec::new(),
        }
    }

    /// Shows `notice` on the page the browser lands on.
    #[must_use]
    pub fn notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    /// Adds a raw `Set-Cookie` value.
    #[must_use]
    pub fn cookie(mut self, cookie: String) -> Self {
        self.cookies.push(cookie);
        self
    }
}

impl IntoResponse for Redirect {
    fn into_response(self) -> Response {
        let mut response = (StatusCode::SEE_OTHER, [(header::LOCATION, self.to)]).into_response();
        for cookie in &self.cookies {
            append_cookie(&mut response, cookie);
        }
        if let Some(notice) = &self.notice {
            append_cookie(&mut response, &notice.to_cookie());
        }
        response
    }
}

/// Either kind of handler result.
#[derive(Debug, Clone)]
pub enum Outcome {
    Page(Page),
    Redirect(Redirect),
}

impl From<Page> for Outcome {
    fn from(page: Page) -> Self {
        Self::Page(page)
    }
}

impl From<Redirect> for Outcome {
    fn from(redirect: Redirect) -> Self {
        Self::Redirect(redirect)
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Self::Page(page) => page.into_response(),
            Self::Redirect(redirect) => redirect.into_response(),
        }
    }
}

fn append_cookie(response: &mut Response, cookie: &str) {
    match HeaderValue::from_str(cookie) {
        Ok(value) => {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
        Err(e) => tracing::error!("Dropping unrepresentable cookie: {}", e),
    }
}
