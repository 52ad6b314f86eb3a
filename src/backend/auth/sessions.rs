/**
 * Session Store
 *
 * This module owns the `sessions` table. A user has at most one session:
 * the table is keyed by `user_id`, and `create` removes the previous row and
 * inserts the new one inside a single transaction. Logging in on a second
 * device therefore ends the first device's session.
 *
 * Expiry is checked when a token is read. An expired row is deleted at that
 * point; nothing sweeps the table in the background.
 */

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::backend::error::AuthError;

/// Bytes of randomness in a session token (hex encoded to twice as many characters)
pub const TOKEN_BYTES: usize = 32;

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Session {
    /// Owning user
    pub user_id: String,
    /// Opaque token carried by the session cookie
    #[sqlx(rename = "session_id")]
    pub token: String,
    /// Address the login came from
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session is past its expiry at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Generate an unguessable session token
pub fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::random();
    hex::encode(bytes)
}

/// Session store backed by SQLite
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: SqlitePool,
    ttl: Duration,
}

impl SessionRepository {
    pub fn new(pool: SqlitePool, ttl: Duration) -> Self {
        Self { pool, ttl }
    }

    /// Lifetime given to new sessions
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a new session for a user, replacing any existing one
    pub async fn create(&self, user_id: &str, ip_address: &str) -> Result<Session, AuthError> {
        let now = Utc::now();
        let session = Session {
            user_id: user_id.to_string(),
            token: generate_token(),
            ip_address: Some(ip_address.to_string()),
            created_at: now,
            expires_at: now + self.ttl,
        };

        let mut tx = self.pool.begin().await?;

        // Delete first so the write lock is taken before the insert
        sqlx::query("DELETE FROM sessions WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO sessions (user_id, session_id, ip_address, created_at, expires_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&session.user_id)
        .bind(&session.token)
        .bind(&session.ip_address)
        .bind(session.created_at)
        .bind(session.expires_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(session)
    }

    /// Retrieve a live session by its token
    ///
    /// # Errors
    ///
    /// * `SessionNotFound` - no row for the token
    /// * `SessionExpired` - the row was past its expiry and has been deleted
    pub async fn get_by_token(&self, token: &str) -> Result<Session, AuthError> {
        let session = sqlx::query_as::<_, Session>(
            "SELECT user_id, session_id, ip_address, created_at, expires_at FROM sessions WHERE session_id = ?",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AuthError::SessionNotFound)?;

        if session.is_expired_at(Utc::now()) {
            if let Err(e) = self.delete(token).await {
                tracing::warn!(error = %e, "failed to delete expired session");
            }
            return Err(AuthError::SessionExpired);
        }

        Ok(session)
    }

    /// Remove a session; unknown tokens are not an error
    pub async fn delete(&self, token: &str) -> Result<(), AuthError> {
        sqlx::query("DELETE FROM sessions WHERE session_id = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Number of session rows held for a user (0 or 1)
    pub async fn count_for_user(&self, user_id: &str) -> Result<i64, AuthError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sessions WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
