//! Sign In Use Case
//!
//! Orchestrates a login: rate limit gate, credential verification, then
//! session creation. The gate runs first and counts the attempt, so a
//! locked-out client is denied before credentials are even parsed; the
//! correct password does not bypass an active lockout.

use std::sync::Arc;

use platform::client::{ClientFingerprint, rate_limit_identifier};

use crate::application::config::AuthConfig;
use crate::application::credentials::CredentialVerifier;
use crate::application::rate_limit::LoginRateLimiter;
use crate::application::token;
use crate::domain::entity::{session::AdminSession, user::UserIdentity};
use crate::domain::repository::{RateLimitRepository, SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Sign in input data
#[derive(Debug)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Sign in result
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed token for the session cookie
    pub session_token: String,
    /// Session expiry in epoch milliseconds
    pub expires_at_ms: i64,
    /// The authenticated account
    pub identity: UserIdentity,
}

/// Sign in use case
pub struct SignInUseCase<U, L, S>
where
    U: UserRepository,
    L: RateLimitRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    rate_limit_repo: Arc<L>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, L, S> SignInUseCase<U, L, S>
where
    U: UserRepository,
    L: RateLimitRepository,
    S: SessionRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        rate_limit_repo: Arc<L>,
        session_repo: Arc<S>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            rate_limit_repo,
            session_repo,
            config,
        }
    }

    /// Execute sign in
    ///
    /// On a failed login the registered attempt is the only trace left
    /// behind; nothing account-side is written. On success the attempt
    /// state for this client is cleared and a fresh session is created.
    pub async fn execute(
        &self,
        input: SignInInput,
        fingerprint: ClientFingerprint,
    ) -> AuthResult<SignInOutput> {
        let identifier = rate_limit_identifier(fingerprint.ip);
        let limiter = LoginRateLimiter::new(
            self.rate_limit_repo.clone(),
            self.config.rate_limit_policy(),
        );

        if !limiter.check(&identifier).await? {
            return Err(AuthError::RateLimited);
        }

        let verifier = CredentialVerifier::new(self.user_repo.clone(), self.config.clone());
        let identity = verifier.authenticate(&input.email, &input.password).await?;

        limiter.reset(&identifier).await?;

        let ttl = if input.remember_me {
            self.config.session_ttl_long
        } else {
            self.config.session_ttl_short
        };
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {}", e)))?;

        let session = AdminSession::new(
            identity.user_id.clone(),
            identity.role,
            input.remember_me,
            fingerprint.hash_vec(),
            fingerprint
                .ip_string()
                .unwrap_or_else(|| "unknown".to_string()),
            fingerprint.user_agent.clone().unwrap_or_default(),
            ttl,
        );

        self.session_repo.create(&session).await?;

        let session_token = token::sign_session_id(&self.config.session_secret, session.session_id);

        tracing::info!(
            user_id = %identity.user_id,
            session_id = %session.session_id,
            remember_me = input.remember_me,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            expires_at_ms: session.expires_at_ms,
            identity,
        })
    }
}
