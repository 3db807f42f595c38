//! Landing page and account view.

use crate::web::{
    outcome::Page,
    session::{CurrentUser, RequestContext},
    views,
};

/// `GET /` and `GET /home`
pub async fn home(context: RequestContext) -> Page {
    Page::new(
        "Home",
        context.user.as_ref(),
        context.flash.as_ref(),
        &views::home(context.user.as_ref()),
    )
}

/// `GET /account`
pub async fn account(current: CurrentUser) -> Page {
    Page::new(
        "Account",
        Some(&current.user),
        current.flash.as_ref(),
        &views::account(&current.user),
    )
}
