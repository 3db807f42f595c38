//! One-shot notices carried across a redirect.
//!
//! A redirect that wants to tell the user something ("Guest has been
//! added!") stores the notice in the `flash` cookie. The next page that
//! renders shows it and expires the cookie.

use cookie::{Cookie, SameSite, time::Duration as CookieDuration};

/// Name of the cookie carrying a pending notice.
pub const FLASH_COOKIE: &str = "flash";

/// Severity of a notice, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Danger,
    Info,
}

impl Level {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Info => "info",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(Self::Success),
            "danger" => Some(Self::Danger),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

/// A message shown once at the top of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Level::Success, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(Level::Danger, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    /// `Set-Cookie` value that stores this notice until the next page view.
    #[must_use]
    pub fn to_cookie(&self) -> String {
        Cookie::build((FLASH_COOKIE, format!("{}:{}", self.level.as_str(), self.message)))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build()
            .encoded()
            .to_string()
    }

    /// Decodes the (already percent-decoded) value of the `flash` cookie.
    #[must_use]
    pub fn from_cookie_value(value: &str) -> Option<Self> {
        let (level, message) = value.split_once(':')?;
        Some(Self::new(Level::parse(level)?, message))
    }
}

/// `Set-Cookie` value that discards a pending notice.
#[must_use]
pub fn clear_cookie() -> String {
    Cookie::build((FLASH_COOKIE, ""))
        .path("/")
        .max_age(CookieDuration::ZERO)
        .build()
        .to_string()
}
