//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entity::{
    rate_limit::{RateLimitDecision, RateLimitPolicy},
    session::AdminSession,
    user::User,
};
use crate::domain::value_object::{email::Email, password::PasswordHash, user_id::UserId};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new account
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find account by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find account by email (the login identifier)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if an account with this email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Record a successful login
    ///
    /// This is the only write a successful login performs.
    async fn record_login(&self, user_id: &UserId, at: DateTime<Utc>) -> AuthResult<()>;

    /// Replace the stored password hash
    async fn update_password(
        &self,
        user_id: &UserId,
        password_hash: &PasswordHash,
        at: DateTime<Utc>,
    ) -> AuthResult<()>;
}

/// Login rate limit repository trait
///
/// Implementations must apply the [`AttemptRecord`] transition atomically:
/// concurrent attempts from one identifier may never observe a half-applied
/// state or lose an increment.
///
/// [`AttemptRecord`]: crate::domain::entity::rate_limit::AttemptRecord
#[trait_variant::make(RateLimitRepository: Send)]
pub trait LocalRateLimitRepository {
    /// Register an attempt for `identifier` and report the decision
    ///
    /// Creates the record at attempt one when none exists. Failed logins
    /// leave their trace here and nowhere else.
    async fn check(
        &self,
        identifier: &str,
        now: DateTime<Utc>,
        policy: &RateLimitPolicy,
    ) -> AuthResult<RateLimitDecision>;

    /// Clear all attempt state for `identifier`
    ///
    /// Called after a successful login; the identifier starts over as if
    /// never seen.
    async fn reset(&self, identifier: &str) -> AuthResult<()>;
}

/// Admin session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: &AdminSession) -> AuthResult<()>;

    /// Find session by ID and verify fingerprint
    async fn find_by_id(
        &self,
        session_id: Uuid,
        fingerprint_hash: &[u8],
    ) -> AuthResult<Option<AdminSession>>;

    /// Update session (e.g., last activity, extended expiry)
    async fn update(&self, session: &AdminSession) -> AuthResult<()>;

    /// Delete a session
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;
}
