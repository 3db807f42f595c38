//! Vendor business logic - listing and adding a user's vendors.

use crate::{
    entities::{Vendor, vendor},
    errors::{Error, Result},
    forms::VendorForm,
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves every vendor owned by `user_id`, oldest first.
pub async fn get_vendors_for_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<vendor::Model>> {
    Vendor::find()
        .filter(vendor::Column::UserId.eq(user_id))
        .order_by_asc(vendor::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Validates a vendor form and stores the vendor under `user_id`.
pub async fn create_vendor(
    db: &DatabaseConnection,
    user_id: i64,
    form: &VendorForm,
) -> Result<vendor::Model> {
    let new_vendor = form.clean().map_err(|errors| Error::Validation { errors })?;

    let vendor = vendor::ActiveModel {
        name: Set(new_vendor.name),
        contact_info: Set(new_vendor.contact_info),
        service_type: Set(new_vendor.service_type),
        user_id: Set(user_id),
        ..Default::default()
    };

    let vendor = vendor.insert(db).await?;
    tracing::info!("User {} added vendor {}", user_id, vendor.id);
    Ok(vendor)
}
