//! Session business logic - creating, resolving and ending login sessions.
//!
//! A session is a random token handed to the browser in a cookie and a row
//! mapping that token to a user until it expires.

use crate::{
    config::server::ServerConfig,
    entities::{Session, User, session, user},
    errors::Result,
};
use chrono::{DateTime, TimeDelta, Utc};
use rand::{Rng, distributions::Alphanumeric};
use sea_orm::{Set, prelude::*};

/// Length of generated session tokens.
pub const TOKEN_LENGTH: usize = 48;

/// Generates an unguessable session token.
#[must_use]
pub fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// How long a new session stays valid.
///
/// An unrepresentable setting falls back to the default for the same kind of session.
#[must_use]
pub fn lifetime(config: &ServerConfig, remember: bool) -> TimeDelta {
    let defaults = ServerConfig::default();
    if remember {
        TimeDelta::try_days(config.remember_days)
            .unwrap_or_else(|| TimeDelta::days(defaults.remember_days))
    } else {
        TimeDelta::try_hours(config.session_hours)
            .unwrap_or_else(|| TimeDelta::hours(defaults.session_hours))
    }
}

/// Starts a session for `user_id` that expires after `lifetime`.
pub async fn create_session(
    db: &DatabaseConnection,
    user_id: i64,
    remember: bool,
    lifetime: TimeDelta,
) -> Result<session::Model> {
    let now = Utc::now();
    let expires_at = now
        .checked_add_signed(lifetime)
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    let session = session::ActiveModel {
        token: Set(generate_token()),
        user_id: Set(user_id),
        remember: Set(remember),
        created_at: Set(now),
        expires_at: Set(expires_at),
        ..Default::default()
    };

    let session = session.insert(db).await?;
    tracing::info!("Started session {} for user {}", session.id, user_id);
    Ok(session)
}

/// Resolves a session token to its user, ignoring expired sessions.
pub async fn get_user_for_token(
    db: &DatabaseConnection,
    token: &str,
    now: DateTime<Utc>,
) -> Result<Option<user::Model>> {
    let found = Session::find()
        .filter(session::Column::Token.eq(token))
        .filter(session::Column::ExpiresAt.gt(now))
        .find_also_related(User)
        .one(db)
        .await?;

    Ok(found.and_then(|(_, user)| user))
}

/// Ends the session identified by `token`. Unknown tokens are ignored.
pub async fn delete_session(db: &DatabaseConnection, token: &str) -> Result<u64> {
    let result = Session::delete_many()
        .filter(session::Column::Token.eq(token))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

/// Removes every session that expired before `now`.
pub async fn delete_expired_sessions(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<u64> {
    let result = Session::delete_many()
        .filter(session::Column::ExpiresAt.lte(now))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_generate_token() {
        let token = generate_token();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(token, generate_token());
    }

    #[test]
    fn test_lifetime_depends_on_remember() {
        let config = ServerConfig {
            session_hours: 2,
            remember_days: 30,
            ..ServerConfig::default()
        };
        assert_eq!(lifetime(&config, false), TimeDelta::hours(2));
        assert_eq!(lifetime(&config, true), TimeDelta::days(30));
    }

    #[test]
    fn test_unrepresentable_lifetime_keeps_session_kind() {
        let config = ServerConfig {
            session_hours: i64::MAX,
            remember_days: i64::MAX,
            ..ServerConfig::default()
        };
        assert_eq!(lifetime(&config, false), TimeDelta::hours(24));
        assert_eq!(lifetime(&config, true), TimeDelta::days(365));
    }

    #[tokio::test]
    async fn test_session_resolves_to_user() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db, "ana", "a@x.com", "p1").await?;

        let session = create_session(&db, user.id, true, TimeDelta::hours(1)).await?;
        assert!(session.remember);
        assert!(session.expires_at > session.created_at);

        let found = get_user_for_token(&db, &session.token, Utc::now()).await?;
        assert_eq!(found.map(|u| u.id), Some(user.id));

        assert!(get_user_for_token(&db, "bogus", Utc::now()).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_expired_session_is_ignored_and_purged() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db, "ana", "a@x.com", "p1").await?;

        let session = create_session(&db, user.id, false, TimeDelta::hours(1)).await?;
        let later = Utc::now() + TimeDelta::hours(2);

        assert!(get_user_for_token(&db, &session.token, later).await?.is_none());

        let live = create_session(&db, user.id, false, TimeDelta::hours(5)).await?;
        assert_eq!(delete_expired_sessions(&db, later).await?, 1);
        assert!(get_user_for_token(&db, &live.token, later).await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_session() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db, "ana", "a@x.com", "p1").await?;
        let session = create_session(&db, user.id, false, TimeDelta::hours(1)).await?;

        assert_eq!(delete_session(&db, &session.token).await?, 1);
        assert_eq!(delete_session(&db, &session.token).await?, 0);
        assert!(get_user_for_token(&db, &session.token, Utc::now()).await?.is_none());

        Ok(())
    }
}
