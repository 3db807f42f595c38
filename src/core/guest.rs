//! Guest business logic - listing and adding a user's guests.

use crate::{
    entities::{Guest, guest},
    errors::{Error, Result},
    forms::GuestForm,
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves every guest owned by `user_id`, oldest first.
pub async fn get_guests_for_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<guest::Model>> {
    Guest::find()
        .filter(guest::Column::UserId.eq(user_id))
        .order_by_asc(guest::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Validates a guest form and stores the guest under `user_id`.
///
/// # Errors
/// Returns [`Error::Validation`] if any field fails; nothing is stored then.
pub async fn create_guest(
    db: &DatabaseConnection,
    user_id: i64,
    form: &GuestForm,
) -> Result<guest::Model> {
    let new_guest = form.clean().map_err(|errors| Error::Validation { errors })?;

    let guest = guest::ActiveModel {
        name: Set(new_guest.name),
        email: Set(new_guest.email),
        category: Set(new_guest.category),
        user_id: Set(user_id),
        ..Default::default()
    };

    let guest = guest.insert(db).await?;
    tracing::info!("User {} added guest {}", user_id, guest.id);
    Ok(guest)
}
