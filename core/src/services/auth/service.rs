//! Main authentication service implementation.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::value_objects::{AccessToken, NewUser};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// Authentication service for registration, login and token-subject
/// resolution
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for account persistence
    users: Arc<U>,
    /// Token service for issuing bearer tokens
    tokens: Arc<TokenService>,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    pub fn new(users: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Register a new account
    ///
    /// The email is checked for uniqueness before anything is created;
    /// registration is not idempotent. The plaintext password is hashed
    /// with bcrypt and discarded.
    ///
    /// # Errors
    /// * [`AuthError::EmailAlreadyRegistered`] - the email is taken
    pub async fn register(&self, new_user: NewUser) -> DomainResult<User> {
        if self.users.exists_by_email(&new_user.email).await? {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let hashed_password = bcrypt::hash(&new_user.password, bcrypt::DEFAULT_COST)
            .map_err(|error| DomainError::Internal {
                message: format!("Password hashing failed: {}", error),
            })?;

        let user = User::new(
            new_user.email,
            new_user.username,
            hashed_password,
            new_user.first_name,
            new_user.last_name,
            new_user.phone,
        );

        let user = self.users.create(user).await?;
        tracing::info!(user_id = %user.id, "registered new user");
        Ok(user)
    }

    /// Authenticate with email and password and issue a bearer token
    ///
    /// Unknown email and wrong password both map to
    /// [`AuthError::InvalidCredentials`].
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AccessToken> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password_matches = bcrypt::verify(password, &user.hashed_password)
            .map_err(|error| DomainError::Internal {
                message: format!("Password verification failed: {}", error),
            })?;

        if !password_matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.tokens.issue_token(&user.email)
    }

    /// Resolve a verified token subject to an active user
    ///
    /// Called on every bearer-protected request. Fails with
    /// [`AuthError::UserNotFound`] when the email no longer resolves to an
    /// active account; expiry-only invalidation means this is the sole
    /// server-side check after signature verification.
    pub async fn current_user(&self, email: &str) -> DomainResult<User> {
        match self.users.find_by_email(email).await? {
            Some(user) if user.is_active => Ok(user),
            _ => Err(AuthError::UserNotFound.into()),
        }
    }

    /// Fetch an account by id for public display (listing owners)
    pub async fn user_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        self.users.find_by_id(id).await
    }
}
