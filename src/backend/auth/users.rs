/**
 * User Model and Credential Store
 *
 * This module owns the `user` and `user_auth` tables. A user row and its
 * credential row are always written together in one transaction, and the
 * credential is removed by cascade when the user is deleted.
 *
 * Email uniqueness and lookups are case-insensitive (the column is
 * `COLLATE NOCASE`); usernames compare exactly.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::error::AuthError;

/// A registered forum user
///
/// Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID string)
    #[sqlx(rename = "user_id")]
    pub id: String,
    /// Username (unique, 3-15 chars, alphanumeric + underscore)
    pub username: String,
    /// Email address, stored with the case it was registered with
    pub email: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Password digest row, one per user
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Credential {
    pub user_id: String,
    pub password_hash: String,
}

/// Credential store backed by SQLite
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
    hasher: PasswordHasher,
}

impl UserRepository {
    pub fn new(pool: SqlitePool, hasher: PasswordHasher) -> Self {
        Self { pool, hasher }
    }

    /// Create a new user together with its credential
    ///
    /// # Errors
    ///
    /// * `EmailTaken` - a user with this email exists (any case)
    /// * `UsernameTaken` - a user with this username exists
    /// * `Database` / `Hashing` - infrastructure failure, nothing persisted
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let (email_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        if email_count > 0 {
            return Err(AuthError::EmailTaken);
        }

        let (username_count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM user WHERE username = ?")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;
        if username_count > 0 {
            return Err(AuthError::UsernameTaken);
        }

        let password_hash = self.hasher.hash(password)?;
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            username: username.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        };

        let mut tx = self.pool.begin().await?;

        // A concurrent registration can pass the checks above; the unique
        // constraints decide and the violation maps back to a conflict.
        sqlx::query("INSERT INTO user (user_id, username, email, created_at) VALUES (?, ?, ?, ?)")
            .bind(&user.id)
            .bind(&user.username)
            .bind(&user.email)
            .bind(user.created_at)
            .execute(&mut *tx)
            .await
            .map_err(map_unique_violation)?;

        sqlx::query("INSERT INTO user_auth (user_id, password_hash) VALUES (?, ?)")
            .bind(&user.id)
            .bind(&password_hash)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(user_id = %user.id, "user and credential rows committed");
        Ok(user)
    }

    /// Get user by email (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> Result<User, AuthError> {
        sqlx::query_as::<_, User>(
            "SELECT user_id, username, email, created_at FROM user WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AuthError::UserNotFound)
    }

    /// Get user by ID
    pub async fn find_by_id(&self, id: &str) -> Result<User, AuthError> {
        sqlx::query_as::<_, User>(
            "SELECT user_id, username, email, created_at FROM user WHERE user_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AuthError::UserNotFound)
    }

    /// Get the credential row of a user
    pub async fn find_credential(&self, user_id: &str) -> Result<Credential, AuthError> {
        sqlx::query_as::<_, Credential>(
            "SELECT user_id, password_hash FROM user_auth WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AuthError::UserNotFound)
    }

    /// Validate a user's login credentials
    ///
    /// Unknown email and wrong password both yield `InvalidCredentials`.
    pub async fn verify_credentials(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = match self.find_by_email(email).await {
            Ok(user) => user,
            Err(AuthError::UserNotFound) => {
                self.hasher.verify_decoy(password);
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(e),
        };

        let credential = match self.find_credential(&user.id).await {
            Ok(credential) => credential,
            Err(AuthError::UserNotFound) => {
                tracing::error!(user_id = %user.id, "user has no credential row");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(e),
        };

        if !self.hasher.verify(password, &credential.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Delete a user; credential and session rows go with it
    pub async fn delete_user(&self, id: &str) -> Result<(), AuthError> {
        let result = sqlx::query("DELETE FROM user WHERE user_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AuthError::UserNotFound);
        }
        Ok(())
    }
}

/// Map a unique constraint failure on `user` to the matching conflict
fn map_unique_violation(err: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let message = db_err.message();
            if message.contains("user.email") {
                return AuthError::EmailTaken;
            }
            if message.contains("user.username") {
                return AuthError::UsernameTaken;
            }
        }
    }
    AuthError::Database(err)
}
