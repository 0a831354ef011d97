//! Login Rate Limiter
//!
//! Application-level gate in front of credential verification. Every call
//! to [`LoginRateLimiter::check`] registers an attempt for the client
//! identifier and reports whether the login may proceed; the attempt is
//! counted *before* credentials are looked at, so a locked-out client is
//! denied even with the correct password.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entity::rate_limit::{RateLimitDecision, RateLimitPolicy};
use crate::domain::repository::RateLimitRepository;
use crate::error::AuthResult;

/// Per-client login throttle
pub struct LoginRateLimiter<L>
where
    L: RateLimitRepository,
{
    repo: Arc<L>,
    policy: RateLimitPolicy,
}

impl<L> LoginRateLimiter<L>
where
    L: RateLimitRepository,
{
    pub fn new(repo: Arc<L>, policy: RateLimitPolicy) -> Self {
        Self { repo, policy }
    }

    /// Register an attempt for `identifier`; `true` means proceed
    pub async fn check(&self, identifier: &str) -> AuthResult<bool> {
        let decision = self.repo.check(identifier, Utc::now(), &self.policy).await?;

        match decision {
            RateLimitDecision::Allowed => Ok(true),
            RateLimitDecision::Locked { until } => {
                tracing::warn!(
                    identifier = %identifier,
                    locked_until = %until,
                    "Login attempt denied by rate limiter"
                );
                Ok(false)
            }
        }
    }

    /// Forget all attempt state for `identifier`
    pub async fn reset(&self, identifier: &str) -> AuthResult<()> {
        self.repo.reset(identifier).await
    }
}
