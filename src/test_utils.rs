//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test users with sensible defaults.

use crate::{
    config::server::ServerConfig,
    core::password,
    entities::user,
    errors::Result,
    forms::RegistrationForm,
    web::AppState,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Inserts a user directly, skipping form validation.
pub async fn create_test_user(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
    plain_password: &str,
) -> Result<user::Model> {
    let user = user::ActiveModel {
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        password: Set(password::hash_password(plain_password)?),
        ..Default::default()
    };
    user.insert(db).await.map_err(Into::into)
}

/// A registration form whose confirmation matches the password.
#[must_use]
pub fn registration_form(username: &str, email: &str, plain_password: &str) -> RegistrationForm {
    RegistrationForm {
        username: username.to_string(),
        email: email.to_string(),
        password: plain_password.to_string(),
        confirm_password: plain_password.to_string(),
    }
}

/// Sets up a test database with one user, `ana` / `a@x.com` / `p1`.
pub async fn setup_with_user() -> Result<(DatabaseConnection, user::Model)> {
    let db = setup_test_db().await?;
    let user = create_test_user(&db, "ana", "a@x.com", "p1").await?;
    Ok((db, user))
}

/// Application state over a fresh in-memory database with default settings.
pub async fn setup_test_state() -> Result<AppState> {
    let db = setup_test_db().await?;
    Ok(AppState::new(db, Arc::new(ServerConfig::default())))
}
