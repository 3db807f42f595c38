//! Task listing and creation.

use crate::{
    core::task,
    errors::{Error, Result},
    forms::{FormErrors, TaskForm},
    web::{
        AppState,
        flash::Notice,
        outcome::{Outcome, Page, Redirect},
        session::CurrentUser,
        views,
    },
};
use axum::{Form, extract::State};

const NEW_TASK: &str = "New Task";

/// `GET /tasks`
pub async fn list_tasks(State(state): State<AppState>, current: CurrentUser) -> Result<Page> {
    let tasks = task::get_tasks_for_user(&state.db, current.user.id).await?;
    Ok(Page::new(
        "Tasks",
        Some(&current.user),
        current.flash.as_ref(),
        &views::task_list(&tasks),
    ))
}

/// `GET /task/new`
pub async fn show_new_task(current: CurrentUser) -> Page {
    Page::new(
        NEW_TASK,
        Some(&current.user),
        current.flash.as_ref(),
        &views::task_form(&TaskForm::default(), &FormErrors::default()),
    )
}

/// `POST /task/new`
pub async fn create_task(
    State(state): State<AppState>,
    current: CurrentUser,
    Form(form): Form<TaskForm>,
) -> Result<Outcome> {
    match task::create_task(&state.db, current.user.id, &form).await {
        Ok(_) => Ok(Redirect::to("/tasks")
            .notice(Notice::success("Task has been created!"))
            .into()),
        Err(Error::Validation { errors }) => Ok(Page::new(
            NEW_TASK,
            Some(&current.user),
            current.flash.as_ref(),
            &views::task_form(&form, &errors),
        )
        .into()),
        Err(e) => Err(e),
    }
}
