//! Credential Verifier
//!
//! Checks a submitted email/password pair against the account store.
//! Failure modes are ordered so responses leak nothing about which
//! accounts exist: a malformed email, an unknown email, and a wrong
//! password all surface as the same [`AuthError::InvalidCredentials`].
//! Only an inactive account is reported distinctly, and only after the
//! email resolved to a real account.
//!
//! A failed verification performs no writes at all. A successful one
//! performs exactly one: the last-login timestamp.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::UserIdentity;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Email/password verification against stored accounts
pub struct CredentialVerifier<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> CredentialVerifier<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Verify credentials and return the account identity
    ///
    /// Order of checks:
    /// 1. both fields present
    /// 2. email resolves to an account
    /// 3. account is active
    /// 4. password matches the stored hash
    ///
    /// The active check runs before the hash comparison: an inactive
    /// account gets [`AuthError::AccountInactive`] regardless of whether
    /// the submitted password was correct, and no hash work is spent on it.
    pub async fn authenticate(&self, email: &str, password: &str) -> AuthResult<UserIdentity> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        // A malformed address cannot belong to any account
        let email = Email::new(email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.can_login() {
            tracing::warn!(
                email = %user.email.redacted(),
                "Login attempt on inactive account"
            );
            return Err(AuthError::AccountInactive);
        }

        if !user.password_hash.verify(password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        if user.password_hash.needs_rehash() {
            tracing::warn!(
                user_id = %user.user_id,
                "Stored password hash uses outdated parameters"
            );
        }

        let now = Utc::now();
        self.user_repo.record_login(&user.user_id, now).await?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email.redacted(),
            "Credentials verified"
        );

        Ok(user.identity())
    }
}
