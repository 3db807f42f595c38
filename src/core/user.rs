//! User business logic - registration, lookups and credential checks.
//!
//! Usernames and emails are unique. Registration checks both with a lookup
//! first so it can name the offending field, and the unique constraints on
//! the `users` table settle any race between two concurrent sign-ups.

use crate::{
    core::password,
    entities::{User, user},
    errors::{Error, Result},
    forms::{Credentials, FormErrors, RegistrationForm},
};
use sea_orm::{Set, SqlErr, prelude::*};

/// Shown when the username already belongs to another account.
pub const USERNAME_TAKEN: &str = "That username is taken. Please choose a different one.";
/// Shown when the email already belongs to another account.
pub const EMAIL_TAKEN: &str = "That email is taken. Please choose a different one.";

/// Finds a user by primary key.
pub async fn get_user_by_id(db: &DatabaseConnection, user_id: i64) -> Result<Option<user::Model>> {
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

/// Finds a user by exact email match.
pub async fn get_user_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<user::Model>> {
    User::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a user by exact username match.
pub async fn get_user_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<user::Model>> {
    User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Validates a sign-up form and creates the account.
///
/// Field constraints and both uniqueness checks are evaluated together so
/// every failing field is reported at once. Either exactly one user row is
/// inserted or none is.
///
/// # Errors
/// - [`Error::Validation`] for any field failure, including a taken username or email
/// - [`Error::PasswordHash`] or [`Error::Database`] on infrastructure failures
pub async fn register(db: &DatabaseConnection, form: &RegistrationForm) -> Result<user::Model> {
    let (cleaned, mut errors) = match form.clean() {
        Ok(new_user) => (Some(new_user), FormErrors::default()),
        Err(errors) => (None, errors),
    };

    if !errors.contains("username") && get_user_by_username(db, &form.username).await?.is_some() {
        errors.add("username", USERNAME_TAKEN);
    }
    if !errors.contains("email") && get_user_by_email(db, &form.email).await?.is_some() {
        errors.add("email", EMAIL_TAKEN);
    }

    let new_user = match cleaned {
        Some(new_user) if errors.is_empty() => new_user,
        _ => return Err(Error::Validation { errors }),
    };

    let user = user::ActiveModel {
        username: Set(new_user.username),
        email: Set(new_user.email),
        password: Set(password::hash_password(&new_user.password)?),
        ..Default::default()
    };

    let user = user.insert(db).await.map_err(insert_error)?;
    tracing::info!("Registered user {} ({})", user.id, user.username);
    Ok(user)
}

/// Maps a failed user insert to the field it collided on.
///
/// Reached when a concurrent registration takes the username or email
/// between the lookup and the insert.
fn insert_error(err: DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) if message.contains("email") => {
            tracing::warn!("Registration lost a race on email: {}", message);
            Error::field("email", EMAIL_TAKEN)
        }
        Some(SqlErr::UniqueConstraintViolation(message)) => {
            tracing::warn!("Registration lost a race on username: {}", message);
            Error::field("username", USERNAME_TAKEN)
        }
        _ => err.into(),
    }
}

/// Checks login credentials.
///
/// Returns `None` both for an unknown email and for a wrong password so
/// callers cannot tell the two apart.
pub async fn authenticate(
    db: &DatabaseConnection,
    credentials: &Credentials,
) -> Result<Option<user::Model>> {
    let Some(user) = get_user_by_email(db, &credentials.email).await? else {
        return Ok(None);
    };

    if password::verify_password(&credentials.password, &user.password)? {
        Ok(Some(user))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::PaginatorTrait;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
            remember: false,
        }
    }

    #[tokio::test]
    async fn test_register_creates_one_user_with_hashed_password() -> Result<()> {
        let db = setup_test_db().await?;

        let user = register(&db, &registration_form("ana", "a@x.com", "p1")).await?;

        assert_eq!(user.username, "ana");
        assert_eq!(user.email, "a@x.com");
        assert_ne!(user.password, "p1");
        assert!(password::verify_password("p1", &user.password)?);
        assert_eq!(User::find().count(&db).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_register_rejects_taken_username() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "ana", "a@x.com", "p1").await?;

        let result = register(&db, &registration_form("ana", "other@x.com", "p1")).await;

        let Err(Error::Validation { errors }) = result else {
            panic!("expected validation error");
        };
        assert_eq!(errors.get("username"), Some(USERNAME_TAKEN));
        assert!(!errors.contains("email"));
        assert_eq!(User::find().count(&db).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_register_rejects_taken_email() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "ana", "a@x.com", "p1").await?;

        let result = register(&db, &registration_form("bea", "a@x.com", "p1")).await;

        let Err(Error::Validation { errors }) = result else {
            panic!("expected validation error");
        };
        assert_eq!(errors.get("email"), Some(EMAIL_TAKEN));
        assert!(!errors.contains("username"));
        assert_eq!(User::find().count(&db).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_register_reports_uniqueness_alongside_field_errors() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "ana", "a@x.com", "p1").await?;

        let mut form = registration_form("ana", "new@x.com", "p1");
        form.confirm_password = "nope".to_string();

        let Err(Error::Validation { errors }) = register(&db, &form).await else {
            panic!("expected validation error");
        };
        assert_eq!(errors.get("username"), Some(USERNAME_TAKEN));
        assert!(errors.contains("confirm_password"));
        assert_eq!(User::find().count(&db).await?, 1);

        Ok(())
    }

    /// Inserts a row straight into `users`, skipping the lookups in `register`.
    async fn raw_insert(db: &DatabaseConnection, username: &str, email: &str) -> DbErr {
        user::ActiveModel {
            username: Set(username.to_string()),
            email: Set(email.to_string()),
            password: Set("x".to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap_err()
    }

    #[tokio::test]
    async fn test_duplicate_email_insert_maps_to_email_field() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "ana", "a@x.com", "p1").await?;

        let err = insert_error(raw_insert(&db, "bea", "a@x.com").await);

        let Error::Validation { errors } = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.get("email"), Some(EMAIL_TAKEN));
        assert!(!errors.contains("username"));
        assert_eq!(User::find().count(&db).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_username_insert_maps_to_username_field() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "ana", "a@x.com", "p1").await?;

        let err = insert_error(raw_insert(&db, "ana", "b@x.com").await);

        let Error::Validation { errors } = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.get("username"), Some(USERNAME_TAKEN));
        assert!(!errors.contains("email"));
        assert_eq!(User::find().count(&db).await?, 1);

        Ok(())
    }

    #[test]
    fn test_other_insert_errors_pass_through() {
        let err = insert_error(DbErr::Custom("disk full".to_string()));
        assert!(matches!(err, Error::Database(DbErr::Custom(_))));
    }

    #[tokio::test]
    async fn test_authenticate() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db, "ana", "a@x.com", "p1").await?;

        let found = authenticate(&db, &credentials("a@x.com", "p1")).await?;
        assert_eq!(found.map(|u| u.id), Some(user.id));

        assert!(authenticate(&db, &credentials("a@x.com", "wrong")).await?.is_none());
        assert!(authenticate(&db, &credentials("nobody@x.com", "p1")).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_lookups() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db, "ana", "a@x.com", "p1").await?;

        assert_eq!(get_user_by_id(&db, user.id).await?, Some(user.clone()));
        assert_eq!(get_user_by_username(&db, "ana").await?, Some(user.clone()));
        assert_eq!(get_user_by_email(&db, "a@x.com").await?, Some(user));
        assert!(get_user_by_email(&db, "A@X.COM").await?.is_none());
        assert!(get_user_by_id(&db, 999).await?.is_none());

        Ok(())
    }
}
