//! Task business logic - listing and adding a user's tasks.

use crate::{
    entities::{Task, task},
    errors::{Error, Result},
    forms::TaskForm,
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves every task owned by `user_id`, oldest first.
pub async fn get_tasks_for_user(db: &DatabaseConnection, user_id: i64) -> Result<Vec<task::Model>> {
    Task::find()
        .filter(task::Column::UserId.eq(user_id))
        .order_by_asc(task::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Validates a task form, parsing its deadline, and stores the task under `user_id`.
pub async fn create_task(
    db: &DatabaseConnection,
    user_id: i64,
    form: &TaskForm,
) -> Result<task::Model> {
    let new_task = form.clean().map_err(|errors| Error::Validation { errors })?;

    let task = task::ActiveModel {
        title: Set(new_task.title),
        description: Set(new_task.description),
        deadline: Set(new_task.deadline),
        user_id: Set(user_id),
        ..Default::default()
    };

    let task = task.insert(db).await?;
    tracing::info!("User {} created task {}", user_id, task.id);
    Ok(task)
}
