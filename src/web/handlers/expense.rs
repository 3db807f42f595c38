//! Expense listing and creation.

use crate::{
    core::expense,
    errors::{Error, Result},
    forms::{ExpenseForm, FormErrors},
    web::{
        AppState,
        flash::Notice,
        outcome::{Outcome, Page, Redirect},
        session::CurrentUser,
        views,
    },
};
use axum::{Form, extract::State};

const NEW_EXPENSE: &str = "New Expense";

/// `GET /expenses`
pub async fn list_expenses(State(state): State<AppState>, current: CurrentUser) -> Result<Page> {
    let expenses = expense::get_expenses_for_user(&state.db, current.user.id).await?;
    let total = expense::total(&expenses)?;
    Ok(Page::new(
        "Expenses",
        Some(&current.user),
        current.flash.as_ref(),
        &views::expense_list(&expenses, total),
    ))
}

/// `GET /expense/new`
pub async fn show_new_expense(current: CurrentUser) -> Page {
    Page::new(
        NEW_EXPENSE,
        Some(&current.user),
        current.flash.as_ref(),
        &views::expense_form(&ExpenseForm::default(), &FormErrors::default()),
    )
}

/// `POST /expense/new`
pub async fn create_expense(
    State(state): State<AppState>,
    current: CurrentUser,
    Form(form): Form<ExpenseForm>,
) -> Result<Outcome> {
    match expense::create_expense(&state.db, current.user.id, &form).await {
        Ok(_) => Ok(Redirect::to("/expenses")
            .notice(Notice::success("Expense has been added!"))
            .into()),
        Err(Error::Validation { errors }) => Ok(Page::new(
            NEW_EXPENSE,
            Some(&current.user),
            current.flash.as_ref(),
            &views::expense_form(&form, &errors),
        )
        .into()),
        Err(e) => Err(e),
    }
}
