//! Admin Provisioning Use Case
//!
//! Creates the panel's admin account from deployment configuration at
//! startup. Idempotent: if an account with the configured email already
//! exists, nothing happens. There is no self-registration; this is the
//! only path that creates accounts.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    password::{NewPassword, PasswordHash},
    user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Provisioning input, typically sourced from environment variables
#[derive(Debug)]
pub struct ProvisionAdminInput {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

/// Admin provisioning use case
pub struct ProvisionAdminUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> ProvisionAdminUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Ensure the admin account exists; returns true if it was created
    pub async fn execute(&self, input: ProvisionAdminInput) -> AuthResult<bool> {
        let email = Email::new(&input.email)
            .map_err(|e| AuthError::Internal(format!("Invalid admin email: {}", e.message())))?;

        if self.user_repo.exists_by_email(&email).await? {
            tracing::debug!(email = %email.redacted(), "Admin account already provisioned");
            return Ok(false);
        }

        let password = NewPassword::new(input.password)?;
        let password_hash = PasswordHash::from_new(&password, self.config.pepper())?;

        let user = User::new(email, password_hash, input.display_name, UserRole::Admin);
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email.redacted(),
            "Provisioned admin account"
        );
        Ok(true)
    }
}
