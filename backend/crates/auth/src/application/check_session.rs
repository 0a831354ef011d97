//! Check Session Use Case
//!
//! Verifies a session token against the session store. Token signature,
//! store lookup, fingerprint binding, and expiry all have to pass; the
//! failure reason is collapsed into [`AuthError::SessionInvalid`] so
//! callers cannot be probed for which check failed.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::session::AdminSession;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Just check if session is valid (returns bool)
    pub async fn is_valid(&self, session_token: &str, fingerprint_hash: &[u8]) -> bool {
        self.get_session(session_token, fingerprint_hash)
            .await
            .is_ok()
    }

    /// Get the live session behind a token and mark it as used
    ///
    /// Expired sessions are deleted on sight. Remember-me sessions get
    /// their expiry slid forward when it comes close; the store update
    /// happens in the background so session checks stay read-fast.
    pub async fn get_session(
        &self,
        session_token: &str,
        fingerprint_hash: &[u8],
    ) -> AuthResult<AdminSession> {
        let session_id = token::verify_session_token(&self.config.session_secret, session_token)
            .ok_or(AuthError::SessionInvalid)?;

        let session = self
            .session_repo
            .find_by_id(session_id, fingerprint_hash)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        let mut session = session;
        session.touch();

        if session.remember_me {
            let ttl_long = chrono::Duration::from_std(self.config.session_ttl_long)
                .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {e}")))?;
            session.extend_if_needed(ttl_long);
        }

        // Update in background
        let session_clone = session.clone();
        let repo = self.session_repo.clone();
        tokio::spawn(async move {
            if let Err(e) = repo.update(&session_clone).await {
                tracing::warn!(error = %e, "Failed to update session activity");
            }
        });

        Ok(session)
    }
}
