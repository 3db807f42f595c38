//! Vendor listing and creation.

use crate::{
    core::vendor,
    errors::{Error, Result},
    forms::{FormErrors, VendorForm},
    web::{
        AppState,
        flash::Notice,
        outcome::{Outcome, Page, Redirect},
        session::CurrentUser,
        views,
    },
};
use axum::{Form, extract::State};

const NEW_VENDOR: &str = "New Vendor";

/// `GET /vendors`
pub async fn list_vendors(State(state): State<AppState>, current: CurrentUser) -> Result<Page> {
    let vendors = vendor::get_vendors_for_user(&state.db, current.user.id).await?;
    Ok(Page::new(
        "Vendors",
        Some(&current.user),
        current.flash.as_ref(),
        &views::vendor_list(&vendors),
    ))
}

/// `GET /vendor/new`
pub async fn show_new_vendor(current: CurrentUser) -> Page {
    Page::new(
        NEW_VENDOR,
        Some(&current.user),
        current.flash.as_ref(),
        &views::vendor_form(&VendorForm::default(), &FormErrors::default()),
    )
}

/// `POST /vendor/new`
pub async fn create_vendor(
    State(state): State<AppState>,
    current: CurrentUser,
    Form(form): Form<VendorForm>,
) -> Result<Outcome> {
    match vendor::create_vendor(&state.db, current.user.id, &form).await {
        Ok(_) => Ok(Redirect::to("/vendors")
            .notice(Notice::success("Vendor has been added!"))
            .into()),
        Err(Error::Validation { errors }) => Ok(Page::new(
            NEW_VENDOR,
            Some(&current.user),
            current.flash.as_ref(),
            &views::vendor_form(&form, &errors),
        )
        .into()),
        Err(e) => Err(e),
    }
}
