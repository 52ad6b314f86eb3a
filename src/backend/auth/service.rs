/**
 * Auth Service
 *
 * Registration, login and logout. The service validates input, then
 * delegates to the credential store and the session store. It owns
 * neither table.
 *
 * # Registration
 *
 * 1. Validate username, email, password (first failure wins, storage untouched)
 * 2. Create user and credential in one transaction
 *
 * # Login
 *
 * 1. Require non-empty email and password
 * 2. Lowercase the email and check its syntax
 * 3. Verify credentials
 * 4. Create a session, replacing any previous one
 *
 * Malformed emails, unknown emails and wrong passwords all produce the same
 * `InvalidCredentials` error.
 */

use crate::backend::auth::sessions::{Session, SessionRepository};
use crate::backend::auth::users::{User, UserRepository};
use crate::backend::error::{AuthError, BackendError};
use crate::shared::validation::{is_valid_email, validate_email, validate_password, validate_username};
use crate::shared::SharedError;

/// Registration and login orchestration
#[derive(Debug, Clone)]
pub struct AuthService {
    users: UserRepository,
    sessions: SessionRepository,
}

impl AuthService {
    pub fn new(users: UserRepository, sessions: SessionRepository) -> Self {
        Self { users, sessions }
    }

    /// Credential store
    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    /// Session store
    pub fn sessions(&self) -> &SessionRepository {
        &self.sessions
    }

    /// Register a new user
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, BackendError> {
        validate_username(username)?;
        validate_email(email)?;
        validate_password(password)?;

        let user = self.users.create_user(username, email, password).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user)
    }

    /// Log a user in and open a session
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        client_ip: &str,
    ) -> Result<(User, Session), BackendError> {
        if email.is_empty() {
            return Err(SharedError::missing("email").into());
        }
        if password.is_empty() {
            return Err(SharedError::missing("password").into());
        }

        let email = email.to_lowercase();
        if !is_valid_email(&email) {
            tracing::warn!("login rejected: malformed email");
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = match self.users.verify_credentials(&email, password).await {
            Ok(user) => user,
            Err(AuthError::InvalidCredentials) => {
                tracing::warn!("login rejected: invalid credentials");
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => return Err(e.into()),
        };

        let session = self.sessions.create(&user.id, client_ip).await?;
        tracing::info!(user_id = %user.id, expires_at = %session.expires_at, "user logged in");

        Ok((user, session))
    }

    /// End a session
    ///
    /// A missing token or a token with no session is a no-op.
    pub async fn logout(&self, token: Option<&str>) -> Result<(), AuthError> {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Ok(());
        };
        self.sessions.delete(token).await?;
        tracing::info!("session ended");
        Ok(())
    }
}
