//! Sign Out Use Case
//!
//! Invalidates the session behind a token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Sign out from the current session
    ///
    /// Only a validly signed token reaches the store; deleting a session
    /// that is already gone is not an error.
    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        let session_id = token::verify_session_token(&self.config.session_secret, session_token)
            .ok_or(AuthError::SessionInvalid)?;

        self.session_repo.delete(session_id).await?;

        tracing::info!(session_id = %session_id, "User signed out");
        Ok(())
    }
}
