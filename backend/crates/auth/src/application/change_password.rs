//! Change Password Use Case
//!
//! Replaces an account's password after re-verifying the current one.
//! The new password goes through the full policy plus an optional breach
//! check; the current one is only *compared*, so accounts provisioned
//! under an older policy can still rotate their way out of it.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    password::{NewPassword, PasswordHash},
    user_id::UserId,
};
use crate::error::{AuthError, AuthResult};

/// Change password input data
pub struct ChangePasswordInput {
    pub current_password: String,
    pub new_password: String,
}

/// Change password use case
pub struct ChangePasswordUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> ChangePasswordUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Execute the password change for an authenticated account
    pub async fn execute(&self, user_id: &UserId, input: ChangePasswordInput) -> AuthResult<()> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if !user
            .password_hash
            .verify(&input.current_password, self.config.pepper())
        {
            return Err(AuthError::CurrentPasswordMismatch);
        }

        let new_password = NewPassword::new(input.new_password)?;

        if self.config.check_breached_passwords {
            match new_password.is_compromised().await {
                Ok(true) => {
                    return Err(AuthError::PasswordValidation(
                        "This password has appeared in a data breach".to_string(),
                    ));
                }
                Ok(false) => {}
                // The HIBP check is best-effort; an unreachable API must
                // not block password rotation.
                Err(e) => {
                    tracing::warn!(error = %e, "Breach check unavailable, continuing");
                }
            }
        }

        let password_hash = PasswordHash::from_new(&new_password, self.config.pepper())?;

        self.user_repo
            .update_password(user_id, &password_hash, Utc::now())
            .await?;

        tracing::info!(user_id = %user_id, "Password changed");
        Ok(())
    }
}
