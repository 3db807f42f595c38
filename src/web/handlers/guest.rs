//! Guest listing and creation.

use crate::{
    core::guest,
    errors::{Error, Result},
    forms::{FormErrors, GuestForm},
    web::{
        AppState,
        flash::Notice,
        outcome::{Outcome, Page, Redirect},
        session::CurrentUser,
        views,
    },
};
use axum::{Form, extract::State};

const NEW_GUEST: &str = "New Guest";

/// `GET /guests`
pub async fn list_guests(State(state): State<AppState>, current: CurrentUser) -> Result<Page> {
    let guests = guest::get_guests_for_user(&state.db, current.user.id).await?;
    Ok(Page::new(
        "Guests",
        Some(&current.user),
        current.flash.as_ref(),
        &views::guest_list(&guests),
    ))
}

/// `GET /guest/new`
pub async fn show_new_guest(current: CurrentUser) -> Page {
    Page::new(
        NEW_GUEST,
        Some(&current.user),
        current.flash.as_ref(),
        &views::guest_form(&GuestForm::default(), &FormErrors::default()),
    )
}

/// `POST /guest/new`
pub async fn create_guest(
    State(state): State<AppState>,
    current: CurrentUser,
    Form(form): Form<GuestForm>,
) -> Result<Outcome> {
    match guest::create_guest(&state.db, current.user.id, &form).await {
        Ok(_) => Ok(Redirect::to("/guests")
            .notice(Notice::success("Guest has been added!"))
            .into()),
        Err(Error::Validation { errors }) => Ok(Page::new(
            NEW_GUEST,
            Some(&current.user),
            current.flash.as_ref(),
            &views::guest_form(&form, &errors),
        )
        .into()),
        Err(e) => Err(e),
    }
}
